//! Values a fresh palette session starts from.

use crate::color::Color;
use crate::swatch::GrayEntry;

/// Schema tag written into every current transport record.
pub const SCHEMA_VERSION: &str = "2.0";

pub const DEFAULT_PALETTE: [i32; 5] = [800, 500, 400, 200, 50];
pub const DEFAULT_SHADES: [i32; 5] = [10, 30, 50, 70, 90];
pub const DEFAULT_TINTS: [i32; 5] = [10, 30, 50, 70, 90];

pub const DEFAULT_GRAY_RATIO: f64 = 0.9;

/// Step appended by an argument-less `add` on the tonal palette.
pub const DEFAULT_PALETTE_STEP: i32 = 500;
/// Step appended by an argument-less `add` on shades or tints.
pub const DEFAULT_MIX_STEP: i32 = 50;

/// Palette steps use a 0..=1000 "darkness weight" scale (50 light, 900 dark).
pub const MAX_PALETTE_STEP: i32 = 1000;
/// Shade and tint steps are mix percentages.
pub const MAX_MIX_STEP: i32 = 100;

const DEFAULT_GRAY_SWATCHES: [([u8; 3], f64); 5] = [
    ([0x26, 0x26, 0x26], 1.0),
    ([0x77, 0x77, 0x77], 1.0),
    ([0xb5, 0xb5, 0xb5], 0.95),
    ([0xe3, 0xe3, 0xe3], 0.8),
    ([0xf6, 0xf6, 0xf6], 0.3),
];

pub fn default_grays() -> Vec<GrayEntry> {
    DEFAULT_GRAY_SWATCHES
        .iter()
        .map(|([r, g, b], factor)| {
            GrayEntry::new(Color::from_u8(*r, *g, *b), *factor)
        })
        .collect()
}

/// Gray appended by an argument-less `add` on the gray list.
pub fn default_gray() -> GrayEntry {
    GrayEntry::new(Color::WHITE, 1.0)
}
