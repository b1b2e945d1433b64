use crate::base;
use crate::cli;

/// View per-day intake history
#[derive(clap::Parser)]
pub struct History {
    #[arg(
        default_value = ":",
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: base::Interval,
}

impl History {
    pub fn run(self, history: base::History, config: &base::Config) -> anyhow::Result<cli::Output> {
        let history = history
            .slice_spanning_interval(self.interval)
            .iter()
            .collect::<base::History>();
        Ok(cli::Output::Daylist(base::daylist::Config {
            charset: cli::util::charset_from_config(config),
            goal: config.goal_ml,
            history,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    cli::testing::generate_testcases![
        (
            full_history,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "history"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Daylist(
                        base::daylist::Config {
                            charset: base::Charset::default(),
                            goal: base::Milliliters(1500),
                            history: r#"[
                                {"date":"2015-03-28","intake":700},
                                {"date":"2015-03-30","intake":1500}
                            ]"#
                            .parse()
                            .unwrap(),
                        }
                    )),
                }],
                initial_state: cli::testing::StrState::new().with_config("{}").with_history(
                    r#"[
                        {"date":"2015-03-28","intake":700},
                        {"date":"2015-03-30","intake":1500}
                    ]"#
                ),
            }
        ),
        (
            interval_slices,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "history", "2015-03-29:"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Daylist(
                        base::daylist::Config {
                            charset: base::Charset::default(),
                            goal: base::Milliliters(1500),
                            history: r#"[{"date":"2015-03-30","intake":1500}]"#.parse().unwrap(),
                        }
                    )),
                }],
                initial_state: cli::testing::StrState::new().with_config("{}").with_history(
                    r#"[
                        {"date":"2015-03-28","intake":700},
                        {"date":"2015-03-30","intake":1500}
                    ]"#
                ),
            }
        ),
        (
            goal_from_config,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "history"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Daylist(
                        base::daylist::Config {
                            charset: base::Charset::default(),
                            goal: base::Milliliters(2000),
                            history: r#"[{"date":"2015-03-30","intake":1500}]"#.parse().unwrap(),
                        }
                    )),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"goalMl":2000}"#)
                    .with_history(r#"[{"date":"2015-03-30","intake":1500}]"#),
            }
        ),
    ];
}
