use tracing::Subscriber;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::logger::{
    config::LoggerConfig,
    error::{LoggerError, LoggerResult},
    object::UtcRfc3339,
};

/// Human-readable multi-field lines.
pub fn logger_text(cfg: &LoggerConfig) -> LoggerResult<()> {
    let layer = fmt::layer()
        .with_ansi(cfg.should_use_color())
        .with_target(cfg.with_targets)
        .with_timer(UtcRfc3339);

    let registry = tracing_subscriber::registry().with(filter(cfg));
    if cfg.test_writer {
        init_subscriber(registry.with(layer.with_test_writer()))
    } else {
        init_subscriber(registry.with(layer))
    }
}

/// Single-line output, handy in test logs.
pub fn logger_compact(cfg: &LoggerConfig) -> LoggerResult<()> {
    let layer = fmt::layer()
        .compact()
        .with_ansi(cfg.should_use_color())
        .with_target(cfg.with_targets)
        .with_timer(UtcRfc3339);

    let registry = tracing_subscriber::registry().with(filter(cfg));
    if cfg.test_writer {
        init_subscriber(registry.with(layer.with_test_writer()))
    } else {
        init_subscriber(registry.with(layer))
    }
}

/// Structured JSON lines for log collectors.
pub fn logger_json(cfg: &LoggerConfig) -> LoggerResult<()> {
    let layer = fmt::layer()
        .json()
        .with_ansi(false)
        .with_target(cfg.with_targets)
        .with_timer(UtcRfc3339);

    let registry = tracing_subscriber::registry().with(filter(cfg));
    if cfg.test_writer {
        init_subscriber(registry.with(layer.with_test_writer()))
    } else {
        init_subscriber(registry.with(layer))
    }
}

fn filter(cfg: &LoggerConfig) -> EnvFilter {
    cfg.level.to_env_filter()
}

fn init_subscriber<S>(subscriber: S) -> LoggerResult<()>
where
    S: Subscriber + Send + Sync + 'static,
{
    subscriber
        .try_init()
        .map_err(|_| LoggerError::AlreadyInitialized)
}
