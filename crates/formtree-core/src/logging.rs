//! Logging integration for formtree.
//!
//! Provides a helper for configuring [`tracing`]-based logging in embedding
//! applications. The library itself only emits `debug!`/`trace!` events
//! (form construction, validation passes); installing a subscriber is the
//! application's choice.

/// Sets up the global tracing subscriber.
///
/// `level` is an env-filter directive (e.g. "debug", "info",
/// "formtree_forms=trace"). When `pretty` is true a human-readable format is
/// used; otherwise a structured JSON format suited to production log
/// pipelines.
///
/// Installing a second subscriber is a no-op rather than a panic, so tests
/// and embedding frameworks can call this freely.
pub fn setup_logging(level: &str, pretty: bool) {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"));

    if pretty {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .with_file(true)
            .with_line_number(true)
            .pretty()
            .try_init()
            .ok();
    } else {
        fmt::Subscriber::builder()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .try_init()
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_logging_is_reentrant() {
        setup_logging("debug", true);
        setup_logging("info", false);
        tracing::debug!("still alive");
    }

    #[test]
    fn test_setup_logging_bad_filter_falls_back() {
        setup_logging("not a ==== filter", true);
    }
}
