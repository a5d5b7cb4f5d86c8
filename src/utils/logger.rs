use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset; `--verbose` wins over a configured level.
pub fn default_directive(verbose: bool, level: Option<&str>) -> String {
    match (verbose, level) {
        (true, _) => "prime_axioms=debug,info".to_string(),
        (false, Some(level)) => format!("prime_axioms={}", level),
        (false, None) => "prime_axioms=info".to_string(),
    }
}

fn env_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, level)))
}

pub fn init_cli_logger(verbose: bool) {
    init_cli_logger_with_level(verbose, None);
}

/// Compact stderr logger honouring a level taken from configuration.
pub fn init_cli_logger_with_level(verbose: bool, level: Option<&str>) {
    tracing_subscriber::registry()
        .with(env_filter(verbose, level))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

/// Structured logs for piping the run into log collectors.
pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(env_filter(verbose, None))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(true)
                .with_writer(std::io::stderr)
                .json(),
        )
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_uses_configured_level() {
        assert_eq!(default_directive(false, None), "prime_axioms=info");
        assert_eq!(default_directive(false, Some("warn")), "prime_axioms=warn");
        assert_eq!(default_directive(false, Some("trace")), "prime_axioms=trace");
        assert_eq!(default_directive(true, Some("error")), "prime_axioms=debug,info");
    }

    #[test]
    fn test_default_directive_parses() {
        for level in crate::utils::validation::LOG_LEVELS {
            let directive = default_directive(false, Some(level));
            assert!(EnvFilter::try_new(&directive).is_ok(), "{}", directive);
        }
    }
}
