mod config;
mod error;
mod install;
mod object;

pub use config::LoggerConfig;
pub use error::{LoggerError, LoggerResult};
pub use object::{LoggerFormat, LoggerLevel};

/// Installs the global tracing subscriber described by `cfg`.
///
/// Afterwards every `tracing` event emitted by the selector (chosen target,
/// fallback warnings, chosen deployment method) goes through this subscriber.
/// Fails with [`LoggerError::AlreadyInitialized`] on a second call.
///
/// # Examples
/// ```rust
/// use berth_observe::{LoggerConfig, init_logger};
///
/// let cfg = LoggerConfig::default();
/// init_logger(&cfg).expect("logger must initialize once");
///
/// tracing::info!("logger ready");
/// ```
pub fn init_logger(cfg: &LoggerConfig) -> LoggerResult<()> {
    match cfg.format {
        LoggerFormat::Text => install::logger_text(cfg),
        LoggerFormat::Compact => install::logger_compact(cfg),
        LoggerFormat::Json => install::logger_json(cfg),
    }
}
