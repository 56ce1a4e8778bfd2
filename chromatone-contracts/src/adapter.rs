use chromatone_model::{Color, ColorParseError, ColorSpace};

/// Color primitives the derivation engine relies on.
///
/// Implementations must be pure: every method returns a new [`Color`] and
/// leaves its inputs untouched.
pub trait ColorAdapter {
    /// Parse hex notation or a color keyword.
    fn parse(&self, text: &str) -> Result<Color, ColorParseError>;

    fn to_hex(&self, color: &Color) -> String {
        color.to_hex()
    }

    /// Interpolate from `a` toward `b` in `space`.
    ///
    /// A `ratio` of 0 yields `a` and a ratio of 1 yields `b`. Callers keep
    /// the ratio inside `[0, 1]`.
    fn mix(&self, a: &Color, b: &Color, ratio: f64, space: ColorSpace)
    -> Color;

    /// Relative luminance (WCAG definition), 0 for black and 1 for white.
    fn luminance(&self, color: &Color) -> f64;

    /// Keep the hue and chroma character of `color` but move it to the
    /// requested relative luminance.
    fn with_luminance(&self, color: &Color, target: f64) -> Color;

    /// Perceptual tone (CIE L*) on a 0 (black) to 100 (white) scale.
    fn perceptual_tone(&self, color: &Color) -> f64;

    /// Move `color` to the given perceptual tone, keeping its hue.
    fn set_perceptual_tone(&self, color: &Color, tone: f64) -> Color;

    fn random(&self) -> Color;
}
