//! Logging setup for the binary.

use tracing_subscriber::EnvFilter;

/// Level selected by the `--verbose`/`--debug` flags.
pub fn level_for(verbose: bool, debug: bool) -> &'static str {
    match (verbose, debug) {
        (_, true) => "debug",
        (true, false) => "info",
        (false, false) => "warn",
    }
}

/// Install the global subscriber. Logs go to stderr; `RUST_LOG` wins over flags.
pub fn init(verbose: bool, debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level_for(verbose, debug)));

    // A second init (e.g. from tests) is harmless; keep the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_beats_verbose() {
        assert_eq!(level_for(false, false), "warn");
        assert_eq!(level_for(true, false), "info");
        assert_eq!(level_for(true, true), "debug");
        assert_eq!(level_for(false, true), "debug");
    }
}
