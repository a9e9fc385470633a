use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is not set
pub fn default_filter(verbose: bool) -> &'static str {
    if verbose { "edgekit=debug" } else { "warn" }
}

/// Install the stderr log subscriber for the command-line front end
///
/// `RUST_LOG` takes precedence over `verbose`. Returns `false` when a
/// subscriber was already installed.
pub fn init_logging(verbose: bool) -> bool {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(true), "edgekit=debug");
        assert_eq!(default_filter(false), "warn");
    }

    #[test]
    fn test_init_logging_twice_is_harmless() {
        let _first = init_logging(false);
        assert!(!init_logging(true));
    }
}
