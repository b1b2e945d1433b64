use anyhow::Context;

use crate::base;
use crate::cli;

/// View or set the daily intake goal
#[derive(clap::Parser)]
pub struct Goal {
    /// New daily goal, in milliliters. Omit to view the current goal
    amount: Option<base::Milliliters>,
}

impl Goal {
    pub fn run(
        &self,
        history: base::History,
        config: base::Config,
        store: &base::Store,
    ) -> anyhow::Result<cli::Output> {
        let Some(amount) = self.amount else {
            return Ok(cli::Output::Str(format!("Daily goal: {} ml", config.goal_ml)));
        };

        let state = base::app::State::new(history, config.goal_ml, base::Date::today());
        let state = state.update(base::app::Event::GoalChanged(amount));
        if state.goal != amount {
            anyhow::bail!("goal must be a positive amount")
        }

        let config = base::Config {
            goal_ml: state.goal,
            ..config
        };
        store.write(&config).with_context(|| {
            format!("failed to write '{}'", store.path::<base::Config>().display())
        })?;
        Ok(cli::Output::Str(format!("Daily goal set to {} ml", state.goal)))
    }
}
