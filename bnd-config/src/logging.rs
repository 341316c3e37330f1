//! Logging initialization
//!
//! Library code only emits `tracing` events; binaries call [initialize] once at startup.

use crate::{LogFormat, LoggingConfig};
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the global tracing subscriber.
///
/// A non-empty `RUST_LOG` replaces the configured level. Output always goes to stderr so that
/// command output on stdout stays clean.
pub fn initialize(config: &LoggingConfig) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let env_filter = build_filter(&config.level, rust_log.as_deref());

    let result = match config.format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().pretty().with_writer(std::io::stderr))
            .try_init(),
    };

    // A subscriber installed earlier (tests, embedding applications) wins.
    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Filter from `RUST_LOG` directives when present, else from the configured level
fn build_filter(level: &str, rust_log: Option<&str>) -> EnvFilter {
    match rust_log.map(str::trim).filter(|directives| !directives.is_empty()) {
        Some(directives) => EnvFilter::new(directives),
        None => {
            let level = level.parse().unwrap_or(LevelFilter::WARN);
            EnvFilter::default().add_directive(level.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initialize_twice_is_harmless() {
        let config = LoggingConfig {
            level: "not-a-level".to_string(),
            format: LogFormat::Pretty,
        };
        initialize(&config);
        initialize(&config);
    }

    #[test]
    fn rust_log_takes_precedence_over_configured_level() {
        assert_eq!(build_filter("warn", Some("debug")).to_string(), "debug");
        assert_eq!(
            build_filter("warn", Some("bnd_manifest=trace")).to_string(),
            "bnd_manifest=trace"
        );
    }

    #[test]
    fn configured_level_applies_without_rust_log() {
        assert_eq!(build_filter("info", None).to_string(), "info");
        assert_eq!(build_filter("info", Some("  ")).to_string(), "info");
        assert_eq!(build_filter("not-a-level", None).to_string(), "warn");
    }
}
