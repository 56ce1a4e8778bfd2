use crate::color::Color;

/// A reference gray and the weight it carries when tones are mixed.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct GrayEntry {
    pub color: Color,
    /// Weight in `[0, 1]`; clamped whenever it is written.
    pub ratio_factor: f64,
}

impl GrayEntry {
    pub fn new(color: Color, ratio_factor: f64) -> Self {
        Self {
            color,
            ratio_factor,
        }
    }
}

/// A derived color tagged with the step value that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepColor {
    pub value: i32,
    pub color: Color,
}

impl StepColor {
    pub fn new(value: i32, color: Color) -> Self {
        Self { value, color }
    }
}
