//! Logging setup.
//!
//! Logs go to stderr so they never mix with the report on stdout. `RUST_LOG`
//! overrides the verbosity flags entirely.

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::prelude::*;

/// Library modules that are far too chatty below `warn`.
pub(crate) const NOISY_MODULES: &[&str] = &[
    "hyper",
    "hyper_util",
    "reqwest",
    "h2",
    "rustls",
    "cookie_store",
];

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON object per event
    Json,
}

/// Base level for a `-v` count.
pub(crate) const fn level_for(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Filter directives: the base level plus `warn` caps for noisy modules.
pub(crate) fn directives(verbosity: u8) -> String {
    let mut directives = String::from(level_for(verbosity));
    for module in NOISY_MODULES {
        directives.push(',');
        directives.push_str(module);
        directives.push_str("=warn");
    }
    directives
}

fn build_filter(verbosity: u8) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(directives(verbosity)))
}

/// Install the global subscriber. Calling it twice is harmless.
pub(crate) fn init(verbosity: u8, format: LogFormat) {
    let registry = tracing_subscriber::registry().with(build_filter(verbosity));

    match format {
        LogFormat::Json => {
            let layer = tracing_subscriber::fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true);
            let _ = registry.with(layer).try_init();
        }
        LogFormat::Text => {
            let layer = tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(true)
                .with_target(false);
            let _ = registry.with(layer).try_init();
        }
    }

    tracing::debug!(verbosity, ?format, "logging initialized");
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "warn")]
    #[case(1, "info")]
    #[case(2, "debug")]
    #[case(5, "trace")]
    fn test_level_for(#[case] verbosity: u8, #[case] expected: &str) {
        assert_eq!(level_for(verbosity), expected);
    }

    #[test]
    fn test_noisy_modules_capped() {
        let d = directives(2);
        assert!(d.starts_with("debug,"));
        assert!(d.contains("reqwest=warn"));
        assert!(d.contains("hyper=warn"));
    }
}
