use crate::base;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Persists the history, downgrading a write failure to a warning. The
/// in-memory history stays authoritative for the rest of the invocation.
pub fn persist_history(store: &base::Store, history: &base::History) {
    if let Err(e) = store.write(history) {
        eprintln!(
            "warning: failed to write '{}': {}",
            store.path::<base::History>().display(),
            e
        );
    }
}
