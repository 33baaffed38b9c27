use std::fs::{self, File, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Where log lines go.
pub(crate) enum LogTarget {
    /// One-shot subcommands: standard error
    Stderr,
    /// Interactive mode: a file in the cache directory, the screen is in use
    File,
}

pub(crate) fn log_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("com", "tessera", "tessera")
        .map(|dirs| dirs.cache_dir().join("tessera.log"))
}

fn open_log_file() -> Option<File> {
    let path = log_path()?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}

pub(crate) fn init_tracing(target: LogTarget) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter).compact();

    match target {
        LogTarget::Stderr => builder.with_writer(std::io::stderr).init(),
        LogTarget::File => match open_log_file() {
            Some(file) => builder
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init(),
            None => builder.with_writer(std::io::sink).init(),
        },
    }
}
