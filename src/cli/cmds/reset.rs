use crate::base;
use crate::cli;

/// Reset today's recorded intake to zero
#[derive(clap::Parser)]
pub struct Reset {}

impl Reset {
    pub fn run(
        &self,
        history: base::History,
        config: &base::Config,
        store: &base::Store,
    ) -> anyhow::Result<cli::Output> {
        let state = base::app::State::new(history, config.goal_ml, base::Date::today());
        if state.history.get(state.today).is_none() {
            return Ok(cli::Output::Str("Nothing recorded today.".to_string()));
        }

        let previous = state.today_total;
        let state = state.update(base::app::Event::TodayReset);
        if state.history.is_empty() {
            if let Err(e) = store.remove::<base::History>() {
                eprintln!(
                    "warning: failed to remove '{}': {}",
                    store.path::<base::History>().display(),
                    e
                );
            }
        } else {
            cli::util::persist_history(store, &state.history);
        }

        Ok(cli::Output::Str(format!(
            "Today's intake reset ({} ml discarded).",
            previous
        )))
    }
}
