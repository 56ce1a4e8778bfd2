//! # Chromatone Core
//!
//! Derives a working palette from one base color: luminance-matched
//! variants of a set of reference grays, tones mixed toward those grays, a
//! tonal palette on a 50 to 1000 darkness scale, shades and tints. The
//! parameters behind the derivation can be snapshotted, shared as base64,
//! stored, and saved as named presets.
//!
//! ## Architecture
//!
//! - [`state`]: [`DerivationState`] and its parameter lists
//! - [`engine`]: [`DerivationEngine`], pure functions from state to colors
//! - [`codec`]: serialization, legacy migration, load/patch, base64, export
//! - [`presets`]: [`PresetStore`], named snapshots without the base color
//! - [`adapter`]: [`PaletteAdapter`], color math on the `palette` crate
//! - [`storage`]: in-memory and JSON-file key-value stores
//! - [`session`]: [`PaletteSession`], all of the above for one user
//!
//! ## Examples
//!
//! ```
//! use chromatone_core::{
//!     ChromatoneConfig, DerivationState, PaletteAdapter, PaletteSession,
//!     storage::MemoryStore,
//! };
//!
//! let base = "#336699".parse().unwrap();
//! let mut session = PaletteSession::with_state(
//!     PaletteAdapter,
//!     MemoryStore::new(),
//!     ChromatoneConfig::default(),
//!     DerivationState::new(base),
//! );
//!
//! let tones = session.tones();
//! assert_eq!(tones.len(), session.state().grays().len());
//!
//! let shared = session.base64().unwrap();
//! session.state_mut().set_gray_ratio(0.2).unwrap();
//! assert!(session.load_from_base64(&shared));
//! assert_eq!(session.state().gray_ratio(), 0.9);
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

pub mod adapter;
pub mod codec;
pub mod config;
pub mod engine;
pub mod error;
pub mod logging;
pub mod presets;
pub mod session;
pub mod state;
pub mod storage;

pub use adapter::PaletteAdapter;
pub use config::{ChromatoneConfig, ConfigLoader};
pub use engine::{DerivationEngine, DerivedPalette};
pub use error::{ChromatoneError, ConfigError, ParseError, Result};
pub use presets::PresetStore;
pub use session::PaletteSession;
pub use state::{DerivationState, GrayList, StepKind, StepList};

pub use chromatone_contracts::prelude::*;
pub use chromatone_contracts::StorageError;
pub use chromatone_model::{
    ActiveColorSpaces, Color, ColorSpace, ColorTarget, GrayEntry, Section,
    StepColor, Visibility,
};
