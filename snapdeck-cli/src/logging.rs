use std::fs::{self, OpenOptions};
use std::path::PathBuf;
use std::sync::Mutex;

use color_eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter
pub const LOG_ENV: &str = "SNAPDECK_LOG";

/// Default log file location
pub fn default_log_path() -> Option<PathBuf> {
    dirs::data_local_dir().map(|d| d.join("snapdeck").join("snapdeck.log"))
}

/// Install the tracing subscriber.
///
/// Logs go to a file since the terminal belongs to the UI. Without a
/// writable location only the error layer is installed.
pub fn init(path: Option<PathBuf>) -> Result<()> {
    let Some(path) = path else {
        tracing_subscriber::registry()
            .with(ErrorLayer::default())
            .try_init()?;
        return Ok(());
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .with(ErrorLayer::default())
        .try_init()?;

    Ok(())
}
