//! Session configuration: storage keys, store location and log filter.
//!
//! Values come from a TOML file, then `CHROMATONE_*` environment variables,
//! then built-in defaults. See [`ConfigLoader`].

mod loader;
mod sources;

pub use loader::{ConfigLoadError, ConfigLoader, ConfigLoaderOptions};
pub use sources::{EnvConfig, FileConfig};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::presets::DEFAULT_PRESET_PREFIX;

/// Key the current state is saved under when no name is given.
pub const DEFAULT_STATE_KEY: &str = "_STATE_";
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChromatoneConfig {
    pub state_key: String,
    pub preset_prefix: String,
    /// JSON document backing a [`crate::storage::FileStore`]. Sessions keep
    /// everything in memory when unset.
    pub store_path: Option<PathBuf>,
    pub log_filter: String,
}

impl Default for ChromatoneConfig {
    fn default() -> Self {
        Self {
            state_key: DEFAULT_STATE_KEY.to_string(),
            preset_prefix: DEFAULT_PRESET_PREFIX.to_string(),
            store_path: None,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}
