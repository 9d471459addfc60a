use clap::Parser;
use std::path::PathBuf;

/// Log into a server from the terminal
#[derive(Debug, Parser)]
#[clap(version)]
pub struct Config {
    /// Which server to log into. Only the protocol and domain matter.
    #[clap(long, env = "LOGIN_SERVER", default_value = "http://localhost:5000")]
    pub server: String,

    /// Where should we write logs?
    #[clap(long, env = "LOGIN_LOG_DIR")]
    log_dir: Option<PathBuf>,

    /// Log filter, in `tracing_subscriber::EnvFilter` syntax
    #[clap(long, env = "LOGIN_LOG", default_value = "info")]
    pub log_level: String,
}

impl Config {
    /// Get either the configured or a default log directory. If no data
    /// directory can be found (e.g. because `$HOME` is unset) we will use the
    /// current directory.
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| {
                directories::ProjectDirs::from("dev", "login", "login")
                    .map(|dirs| dirs.data_local_dir().join("logs"))
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
