use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Map a CLI log-level name to a tracing directive (tracing uses lowercase).
///
/// Unrecognised names are passed through unchanged and left for
/// [`EnvFilter`] to reject.
fn map_log_level(log_level: &str) -> String {
    match log_level.to_uppercase().as_str() {
        "DEBUG" => "debug".to_string(),
        "INFO" => "info".to_string(),
        "WARNING" => "warn".to_string(),
        "ERROR" => "error".to_string(),
        other => other.to_lowercase(),
    }
}

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// The `log_file` parameter is accepted for forward-compatibility but file
/// logging is not yet wired – all output currently goes to stderr.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let directive = map_log_level(log_level);
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_log_level_known_names() {
        assert_eq!(map_log_level("DEBUG"), "debug");
        assert_eq!(map_log_level("INFO"), "info");
        assert_eq!(map_log_level("WARNING"), "warn");
        assert_eq!(map_log_level("ERROR"), "error");
    }

    #[test]
    fn test_map_log_level_case_insensitive() {
        assert_eq!(map_log_level("warning"), "warn");
        assert_eq!(map_log_level("Info"), "info");
    }

    #[test]
    fn test_map_log_level_unknown_passes_through() {
        assert_eq!(map_log_level("trace"), "trace");
    }
}
