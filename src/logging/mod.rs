//! Tracing setup shared by `swingwatch-bot` and `swingwatch-backtest`.
//!
//! The bot logs JSON lines in production and coloured text elsewhere. The
//! backtest CLI prints its report on stdout, so it sends logs to stderr.

use crate::config::get_environment;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Used when `RUST_LOG` is unset. Transport and dispatcher internals log
/// every poll and request at info, so they only surface warnings.
pub const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper=warn,teloxide=warn,teloxide_core=warn";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogOutput {
    Stdout,
    Stderr,
}

impl LogOutput {
    fn writer(self) -> BoxMakeWriter {
        match self {
            LogOutput::Stdout => BoxMakeWriter::new(std::io::stdout),
            LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        }
    }
}

/// `ENVIRONMENT` values that switch on JSON output
pub fn is_production(environment: &str) -> bool {
    matches!(
        environment.trim().to_ascii_lowercase().as_str(),
        "production" | "prod"
    )
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(output: LogOutput) -> Result<(), TryInitError> {
    let registry = tracing_subscriber::registry().with(env_filter());

    if is_production(&get_environment()) {
        registry
            .with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_target(true)
                    .with_writer(output.writer()),
            )
            .try_init()
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(output == LogOutput::Stdout)
                    .with_writer(output.writer()),
            )
            .try_init()
    }
}
