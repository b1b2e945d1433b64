use anyhow::Context;

use crate::base;
use crate::cli;

/// Initialize a water log in the current directory
#[derive(clap::Parser)]
pub struct Init {
    /// Restore an existing water log's config to defaults
    #[arg(long)]
    reset_config: bool,
}

fn initial_config() -> base::Config {
    base::Config {
        use_colored_output: true,
        use_unicode_symbols: true,
        ..Default::default()
    }
}

impl Init {
    pub fn run(&self, store: &base::Store) -> anyhow::Result<cli::Output> {
        let already_initialized = store.is_initialized();

        let path = store.path::<base::Config>();
        let config = if self.reset_config || !path.exists() {
            initial_config()
        } else {
            store
                .read::<base::Config>()
                .with_context(|| format!("failed to read '{}'", path.display()))?
        };
        store
            .write(&config)
            .with_context(|| format!("failed to write '{}'", path.display()))?;

        Ok(if !already_initialized {
            cli::Output::Str(format!(
                "Water log initialized in '{}'",
                store.dir().display()
            ))
        } else if self.reset_config {
            cli::Output::Str("Water log configuration reset to defaults.".to_string())
        } else {
            cli::Output::Str(format!(
                "Water log reinitialized in '{}'",
                store.dir().display()
            ))
        })
    }
}
