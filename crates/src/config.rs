use clap::Parser;
use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;

/// lazypm - browse, install, update and remove xbps packages
#[derive(Debug, Parser)]
#[command(name = "lazypm", version, about)]
pub struct Args {
    /// Log filter directive, e.g. `info` or `lazypm=debug`
    #[arg(long, env = "LAZYPM_LOG", default_value = "info")]
    pub log_level: String,

    /// Directory for the rolling log files [default: $XDG_STATE_HOME/lazypm/logs]
    #[arg(long, env = "LAZYPM_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    /// Skip the repository index sync performed at start-up
    #[arg(long)]
    pub no_sync: bool,
}

impl Args {
    pub fn resolved_log_dir(&self) -> PathBuf {
        self.log_dir.clone().unwrap_or_else(default_log_dir)
    }
}

pub fn default_log_dir() -> PathBuf {
    match ProjectDirs::from("", "", "lazypm") {
        Some(dirs) => dirs
            .state_dir()
            .unwrap_or_else(|| dirs.data_local_dir())
            .join("logs"),
        None => std::env::temp_dir().join("lazypm").join("logs"),
    }
}

/// Fixed interaction constants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TuiConfig {
    pub status_timeout: Duration,
    pub frame_interval: Duration,
    pub min_width: usize,
    pub min_height: usize,
    pub filter_capacity: usize,
    // frames per blink cycle; the cursor shows for the first half
    pub blink_period: usize,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            status_timeout: Duration::from_millis(5000),
            frame_interval: Duration::from_millis(50),
            min_width: 80,
            min_height: 15,
            filter_capacity: 64,
            blink_period: 20,
        }
    }
}
