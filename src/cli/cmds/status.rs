use crate::base;
use crate::cli;

const BAR_WIDTH: usize = 20;

/// View today's progress and trailing averages
#[derive(clap::Parser)]
pub struct Status {}

impl Status {
    pub fn run(&self, history: base::History, config: &base::Config) -> anyhow::Result<cli::Output> {
        let state = base::app::State::new(history, config.goal_ml, base::Date::today());

        let daily = base::stats::daily_progress(&state.history, state.goal, state.today);
        let mut heading = format!(
            "Today: {} / {} ml ({:.2}%)",
            state.today_total,
            state.goal,
            daily * 100.0
        );
        if state.goal_reached() {
            heading.push_str(" (goal reached)");
        }

        let rows = vec![
            base::gauge::Row {
                label: "Weekly average".to_string(),
                ratio: base::stats::weekly_progress(&state.history, state.goal, state.today),
            },
            base::gauge::Row {
                label: "Monthly average".to_string(),
                ratio: base::stats::monthly_progress(&state.history, state.goal, state.today),
            },
            base::gauge::Row {
                label: "Goal completion".to_string(),
                ratio: base::stats::goal_completion_rate(&state.history, state.goal),
            },
        ];

        Ok(cli::Output::Gauge(base::gauge::Config {
            charset: cli::util::charset_from_config(config),
            heading,
            rows,
            bar_width: BAR_WIDTH,
        }))
    }
}
