//! Core data model definitions shared across Chromatone crates.
#![allow(missing_docs)]

pub mod color;
pub mod color_space;
pub mod defaults;
pub mod error;
pub mod swatch;
pub mod visibility;

pub use color::Color;
pub use color_space::{
    ActiveColorSpaces, ColorSpace, ColorTarget, UnknownColorSpace,
};
pub use error::ColorParseError;
pub use swatch::{GrayEntry, StepColor};
pub use visibility::{Section, Visibility};
