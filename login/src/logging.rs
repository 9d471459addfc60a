use crate::config::Config;
use std::{fs, io};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the log directory
const LOG_FILE: &str = "login.log";

/// Problems setting up logging
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// We couldn't create the log directory.
    #[error("could not create log directory: {0}")]
    Io(#[from] io::Error),

    /// The log filter didn't parse.
    #[error("invalid log filter: {0}")]
    Filter(#[from] tracing_subscriber::filter::ParseError),

    /// Someone already installed a global subscriber.
    #[error("could not install logger: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Send `tracing` output to a file, since the terminal belongs to the UI.
/// Keep the returned guard alive until exit or buffered lines are lost.
pub fn init(config: &Config) -> Result<WorkerGuard, Error> {
    let dir = config.log_dir();
    fs::create_dir_all(&dir)?;

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(
        &dir, LOG_FILE,
    ));

    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level)?)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer),
        )
        .try_init()?;

    tracing::info!(dir = %dir.display(), "logging initialized");

    Ok(guard)
}
