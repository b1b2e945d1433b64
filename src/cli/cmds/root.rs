use anyhow::Context;

use crate::base;
use crate::cli;

/// Daily water intake tracker
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Drink(cli::cmds::drink::Drink),
    Reset(cli::cmds::reset::Reset),
    Status(cli::cmds::status::Status),
    History(cli::cmds::history::History),
    Plot(cli::cmds::plot::Plot),
    Goal(cli::cmds::goal::Goal),
}

impl Root {
    pub fn run(self, store: &base::Store) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(store);
        }

        if !store.is_initialized() {
            anyhow::bail!("not an aqualog directory")
        }
        let config = store.read::<base::Config>().with_context(|| {
            format!("failed to read '{}'", store.path::<base::Config>().display())
        })?;
        // A corrupt or unreadable history never takes the tracker down. Warn
        // and start over from an empty one.
        let history = match store.read::<base::History>() {
            Ok(history) => history,
            Err(e) => {
                eprintln!(
                    "warning: failed to read '{}', starting with an empty history: {}",
                    store.path::<base::History>().display(),
                    e
                );
                base::History::new()
            }
        };

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Drink(cmd) => cmd.run(history, &config, store),
            Commands::Reset(cmd) => cmd.run(history, &config, store),
            Commands::Status(cmd) => cmd.run(history, &config),
            Commands::History(cmd) => cmd.run(history, &config),
            Commands::Plot(cmd) => cmd.run(history, &config),
            Commands::Goal(cmd) => cmd.run(history, config, store),
        }
    }
}
