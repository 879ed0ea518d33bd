//! Process configuration from command line flags and environment.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use workboard_core::default_log_level;

#[derive(Debug, Clone, Parser)]
#[command(name = "workboard")]
#[command(about = "Workboard - people, work orders and bids over HTTP", long_about = None)]
#[command(version)]
pub struct ServerConfig {
    /// SQLite database file; created when missing
    #[arg(long, env = "WORKBOARD_DB_PATH", default_value = "workboard.db")]
    pub db_path: PathBuf,

    /// Directory holding people.json, work_orders.json and bids.json
    #[arg(long, env = "WORKBOARD_DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Address the HTTP listener binds to
    #[arg(long, env = "WORKBOARD_LISTEN", default_value = "127.0.0.1:5000")]
    pub listen: SocketAddr,

    /// trace|debug|info|warn|error; defaults by build mode
    #[arg(long, env = "WORKBOARD_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Absolute directory for rolling log files (stderr only when unset)
    #[arg(long, env = "WORKBOARD_LOG_DIR")]
    pub log_dir: Option<String>,
}

impl ServerConfig {
    /// Effective log level.
    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or_else(|| default_log_level())
    }
}
