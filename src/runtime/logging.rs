use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LogSettings;

/// Install the global subscriber writing to `settings.file`.
///
/// Returns `Ok(false)` when no file is configured: the terminal belongs to
/// the UI, so there is nowhere else to write.
pub fn init(settings: &LogSettings) -> Result<bool, Box<dyn std::error::Error>> {
    let Some(path) = settings.file.as_deref() else {
        return Ok(false);
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.filter))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_ansi(false).with_writer(Mutex::new(file)))
        .try_init()?;

    Ok(true)
}
