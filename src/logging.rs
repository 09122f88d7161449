//! Tracing setup. The terminal belongs to the UI, so events go to a file.

use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// `dirs::cache_dir()/cotizador/cotizador.log`.
pub fn default_log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cotizador")
        .join("cotizador.log")
}

/// Open `path` for appending, creating parent directories.
fn open_log_file(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. `RUST_LOG` overrides the `info` default.
///
/// Returns the path actually used.
pub fn init_tracing(path: Option<&Path>) -> io::Result<PathBuf> {
    let path = path.map(Path::to_path_buf).unwrap_or_else(default_log_path);
    let file = open_log_file(&path)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let file_layer = fmt::layer()
        .with_writer(file)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_timer(fmt::time::UtcTime::rfc_3339());

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()
        .map_err(|err| io::Error::other(err.to_string()))?;

    Ok(path)
}
