use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq)]
pub enum Output {
    Str(String),
    Gauge(base::gauge::Config),
    Daylist(base::daylist::Config),
    Barchart(base::barchart::Config),
}

impl std::fmt::Display for Output {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Gauge(config) => write!(f, "{}", config.to_gauge()),
            Output::Daylist(config) => {
                if config.history.is_empty() {
                    writeln!(f, "No entries.")
                } else {
                    write!(f, "{}", config.to_daylist())
                }
            }
            Output::Barchart(config) => {
                if config.history.is_empty() {
                    writeln!(f, "No entries.")
                } else {
                    write!(f, "{}", config.to_barchart())
                }
            }
        }
    }
}
