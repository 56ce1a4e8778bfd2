//! Capability surfaces the Chromatone engine is written against.
//!
//! The engine never talks to a color library or a storage medium directly.
//! It goes through [`ColorAdapter`] and [`KeyValueStore`], and projects
//! values for display through [`Representable`].

pub mod adapter;
pub mod repr;
pub mod storage;

pub use adapter::ColorAdapter;
pub use repr::Representable;
pub use storage::{KeyValueStore, StorageError};

/// Frequently used traits for engine and session code.
pub mod prelude {
    pub use super::adapter::ColorAdapter;
    pub use super::repr::Representable;
    pub use super::storage::KeyValueStore;
}
