//! Opt-in logging for dirview.
//!
//! The core and the app emit `tracing` events. With no tracing subscriber installed, the
//! `log` feature of `tracing` forwards them to the `log` facade, and `env_logger` writes them.
//!
//! Logging stays off unless `DIRVIEW_LOG` is set (same syntax as `RUST_LOG`, e.g.
//! `DIRVIEW_LOG=debug`). Output goes to `dirview.log` in the cache directory, because the
//! terminal belongs to the UI. If that file cannot be opened, stderr is used.

use env_logger::{Builder, Env, Target};
use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;

pub const LOG_ENV: &str = "DIRVIEW_LOG";

/// Installs the logger if `DIRVIEW_LOG` is set. Safe to call more than once.
pub fn init_logging() {
    if std::env::var_os(LOG_ENV).is_none() {
        return;
    }

    let mut builder = Builder::from_env(Env::default().filter(LOG_ENV));
    if let Some(file) = open_log_file() {
        builder.target(Target::Pipe(Box::new(file)));
    }
    let _ = builder.try_init();
}

/// Location of the log file: `<cache dir>/dirview/dirview.log`.
pub fn log_file_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|dir| dir.join("dirview").join("dirview.log"))
}

fn open_log_file() -> Option<File> {
    let path = log_file_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
