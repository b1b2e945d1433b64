use crate::base;
use crate::cli;

/// Record water intake for today
#[derive(clap::Parser)]
pub struct Drink {
    /// Amount drunk, in milliliters
    amount: base::Milliliters,

    /// Interpret AMOUNT as glasses instead of milliliters
    ///
    /// The volume of one glass is taken from the config ('glassMl', 200 ml by
    /// default).
    #[arg(short, long)]
    glasses: bool,
}

impl Drink {
    pub fn run(
        &self,
        history: base::History,
        config: &base::Config,
        store: &base::Store,
    ) -> anyhow::Result<cli::Output> {
        let amount = match self.glasses {
            true => self
                .amount
                .checked_mul(config.glass_ml.0)
                .ok_or_else(|| anyhow::anyhow!("amount is too large"))?,
            false => self.amount,
        };

        let state = base::app::State::new(history, config.goal_ml, base::Date::today());
        if state.goal_reached() {
            return Ok(cli::Output::Str(format!(
                "Goal already reached today ({} / {} ml). Nothing recorded.",
                state.today_total, state.goal
            )));
        }
        if amount == base::Milliliters(0) {
            return Ok(cli::Output::Str("Nothing recorded.".to_string()));
        }
        if state.today_total.checked_add(amount).is_none() {
            anyhow::bail!("amount is too large")
        }

        let state = state.update(base::app::Event::IntakeAdded(amount));
        cli::util::persist_history(store, &state.history);

        let percent = base::stats::daily_progress(&state.history, state.goal, state.today) * 100.0;
        let mut msg = format!(
            "Recorded {} ml. Today: {} / {} ml ({:.2}%).",
            amount, state.today_total, state.goal, percent
        );
        if state.goal_reached() {
            msg.push_str(" Goal reached!");
        }
        Ok(cli::Output::Str(msg))
    }
}
