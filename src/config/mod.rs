pub mod culture;
pub mod options;

pub use culture::*;
pub use options::*;

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::ConfigError;

/// `<config dir>/valdump/config.json`, when the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("valdump").join("config.json"))
}

/// Resolve options for an application.
///
/// An explicit path must exist. Without one, the default location is used
/// when a file is there and built-in defaults otherwise.
pub fn load_options(explicit: Option<&Path>) -> Result<DumpOptions, ConfigError> {
    if let Some(path) = explicit {
        debug!(path = %path.display(), "loading dump options");
        return DumpOptions::load(path);
    }

    match default_config_path() {
        Some(path) if path.is_file() => {
            debug!(path = %path.display(), "loading dump options from default location");
            DumpOptions::load(&path)
        }
        _ => Ok(DumpOptions::default()),
    }
}
