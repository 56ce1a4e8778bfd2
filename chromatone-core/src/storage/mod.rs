//! [`KeyValueStore`] backends.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use chromatone_contracts::KeyValueStore;
use tracing::debug;

use crate::config::ChromatoneConfig;

/// The store a configuration asks for: a [`FileStore`] at `store_path`, or a
/// fresh [`MemoryStore`] when no path is configured.
pub fn open(config: &ChromatoneConfig) -> Box<dyn KeyValueStore> {
    match &config.store_path {
        Some(path) => {
            debug!(path = ?path, "Using file store");
            Box::new(FileStore::new(path))
        }
        None => Box::new(MemoryStore::new()),
    }
}
