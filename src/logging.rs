use crate::config::LogConfig;
use std::sync::Mutex;
use thiserror::Error;
use tracing_subscriber::filter::EnvFilter;

/// Environment variable that overrides the configured log filter
pub(crate) const LOG_ENV_VAR: &str = "SNAKEGRID_LOG";

/// Start writing log messages to the file named in `cfg`.  Nothing is set up
/// if no file is configured, as the terminal belongs to the game.  Returns
/// `true` if logging was enabled.
pub(crate) fn init(cfg: &LogConfig) -> Result<bool, LogError> {
    let Some(path) = cfg.file.as_deref() else {
        return Ok(false);
    };
    let filter = match EnvFilter::try_from_env(LOG_ENV_VAR) {
        Ok(filter) => filter,
        Err(_) => build_filter(&cfg.level)?,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs_err::create_dir_all(parent).map_err(LogError::open)?;
    }
    let file = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(LogError::open)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| LogError(LogErrorSource::Install(e)))?;
    Ok(true)
}

fn build_filter(level: &str) -> Result<EnvFilter, LogError> {
    EnvFilter::try_new(level).map_err(|e| LogError(LogErrorSource::Filter(e)))
}

#[derive(Debug, Error)]
#[error("Failed to set up logging")]
pub(crate) struct LogError(#[source] LogErrorSource);

impl LogError {
    fn open(e: std::io::Error) -> Self {
        LogError(LogErrorSource::Open(e))
    }
}

#[derive(Debug, Error)]
enum LogErrorSource {
    #[error("invalid log level")]
    Filter(#[source] tracing_subscriber::filter::ParseError),
    #[error("failed to open log file")]
    Open(#[source] std::io::Error),
    #[error("failed to install log subscriber")]
    Install(#[source] Box<dyn std::error::Error + Send + Sync + 'static>),
}
