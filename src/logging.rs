//! File logging
//!
//! The terminal belongs to the UI, so tracing output goes to a log file.
//! `RUST_LOG` takes precedence over the configured level.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Directive used when `RUST_LOG` is unset
pub fn default_directive(level: &str) -> String {
    format!("listmerge={}", level.to_ascii_lowercase())
}

/// Build the filter: `RUST_LOG` if set, otherwise [`default_directive`]
pub fn build_filter(level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(level)))
}

/// Initialize logging to append to `log_path`
///
/// Creates the parent directory when needed. Fails if a global subscriber
/// is already installed.
pub fn init_logging(log_path: &Path, level: &str) -> color_eyre::Result<()> {
    if let Some(parent) = log_path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    tracing_subscriber::registry()
        .with(build_filter(level))
        .with(
            fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(log_path = %log_path.display(), "listmerge logging initialized");
    Ok(())
}
