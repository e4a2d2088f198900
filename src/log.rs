// src/log.rs
//
// File logging for both front-ends. The `logf!`/`logd!`/`loge!` macros emit
// `tracing` events; `init` installs the subscriber that writes them to the
// store directory. Without `init` the events are dropped.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::consts::{LOG_ENV, LOG_FILE, STORE_DIR};
use crate::error::{Error, Result};

#[doc(hidden)]
pub use tracing as __tracing;

/// Install the file subscriber at `<STORE_DIR>/<LOG_FILE>`.
pub fn init() -> Result<()> {
    init_at(&Path::new(STORE_DIR).join(LOG_FILE))
}

/// Install the file subscriber writing (appending) to `path`.
///
/// The filter comes from `GALLERY_LOG` (EnvFilter syntax) and defaults to `info`.
/// Fails if a global subscriber is already set.
pub fn init_at(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::Logging(e.to_string()))
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        $crate::log::__tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        $crate::log::__tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        $crate::log::__tracing::error!($($arg)*)
    };
}
