//! [`ColorAdapter`] implementation backed by the `palette` crate.
//!
//! Mixing interpolates channel-wise in the requested space. Hue-based spaces
//! (hsl, lch) travel the short way around the hue circle, and an achromatic
//! endpoint (gray, black, white) borrows the other endpoint's hue so that
//! mixing toward black or white never drifts through unrelated hues.

use chromatone_contracts::ColorAdapter;
use chromatone_model::{Color, ColorParseError, ColorSpace};
use palette::convert::FromColorUnclamped;
use palette::{FromColor, Hsl, Lab, Lch, LinSrgb, Srgb};
use rand::Rng;

/// Stop the luminance search once this close to the target.
const LUMINANCE_EPSILON: f64 = 1e-7;
const LUMINANCE_MAX_ITERATIONS: usize = 20;
/// Saturation (hsl) or chroma (lch) below this has no meaningful hue.
const ACHROMATIC_THRESHOLD: f32 = 1e-4;
const GAMUT_SEARCH_ITERATIONS: usize = 24;
const GAMUT_TOLERANCE: f32 = 1e-4;

#[derive(Debug, Clone, Copy, Default)]
pub struct PaletteAdapter;

impl PaletteAdapter {
    pub fn new() -> Self {
        Self
    }
}

fn to_srgb(color: &Color) -> Srgb {
    Srgb::new(color.red(), color.green(), color.blue())
}

fn from_srgb(srgb: Srgb, alpha: f32) -> Color {
    Color::new_with_alpha(srgb.red, srgb.green, srgb.blue, alpha)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolate two hues (degrees) along the shorter arc.
fn mix_hue(h0: f32, h1: f32, t: f32) -> f32 {
    let diff = (h1 - h0 + 180.0).rem_euclid(360.0) - 180.0;
    (h0 + diff * t).rem_euclid(360.0)
}

fn resolve_hues(h0: Option<f32>, h1: Option<f32>) -> (f32, f32) {
    match (h0, h1) {
        (Some(a), Some(b)) => (a, b),
        (Some(a), None) => (a, a),
        (None, Some(b)) => (b, b),
        (None, None) => (0.0, 0.0),
    }
}

fn chromatic_hue(colorfulness: f32, degrees: f32) -> Option<f32> {
    (colorfulness > ACHROMATIC_THRESHOLD).then_some(degrees)
}

fn in_gamut(srgb: &Srgb) -> bool {
    [srgb.red, srgb.green, srgb.blue].iter().all(|c| {
        (-GAMUT_TOLERANCE..=1.0 + GAMUT_TOLERANCE).contains(c)
    })
}

fn mix_srgb(a: Srgb, b: Srgb, t: f32, space: ColorSpace) -> Srgb {
    match space {
        ColorSpace::Rgb => Srgb::new(
            lerp(a.red, b.red, t),
            lerp(a.green, b.green, t),
            lerp(a.blue, b.blue, t),
        ),
        ColorSpace::Lrgb => {
            let la: LinSrgb = a.into_linear();
            let lb: LinSrgb = b.into_linear();
            let mixed = LinSrgb::new(
                lerp(la.red, lb.red, t),
                lerp(la.green, lb.green, t),
                lerp(la.blue, lb.blue, t),
            );
            Srgb::from_linear(mixed)
        }
        ColorSpace::Hsl => {
            let ha: Hsl = Hsl::from_color(a);
            let hb: Hsl = Hsl::from_color(b);
            let (h0, h1) = resolve_hues(
                chromatic_hue(ha.saturation, ha.hue.into_positive_degrees()),
                chromatic_hue(hb.saturation, hb.hue.into_positive_degrees()),
            );
            let mixed: Hsl = Hsl::new(
                mix_hue(h0, h1, t),
                lerp(ha.saturation, hb.saturation, t),
                lerp(ha.lightness, hb.lightness, t),
            );
            Srgb::from_color(mixed)
        }
        ColorSpace::Lab => {
            let la: Lab = Lab::from_color(a);
            let lb: Lab = Lab::from_color(b);
            let mixed: Lab = Lab::new(
                lerp(la.l, lb.l, t),
                lerp(la.a, lb.a, t),
                lerp(la.b, lb.b, t),
            );
            Srgb::from_color(mixed)
        }
        ColorSpace::Lch => {
            let ca: Lch = Lch::from_color(a);
            let cb: Lch = Lch::from_color(b);
            let (h0, h1) = resolve_hues(
                chromatic_hue(ca.chroma, ca.hue.into_positive_degrees()),
                chromatic_hue(cb.chroma, cb.hue.into_positive_degrees()),
            );
            let mixed: Lch = Lch::new(
                lerp(ca.l, cb.l, t),
                lerp(ca.chroma, cb.chroma, t),
                mix_hue(h0, h1, t),
            );
            Srgb::from_color(mixed)
        }
    }
}

impl ColorAdapter for PaletteAdapter {
    fn parse(&self, text: &str) -> Result<Color, ColorParseError> {
        text.parse()
    }

    fn mix(
        &self,
        a: &Color,
        b: &Color,
        ratio: f64,
        space: ColorSpace,
    ) -> Color {
        if ratio <= 0.0 {
            return *a;
        }
        if ratio >= 1.0 {
            return *b;
        }

        let t = ratio as f32;
        let alpha = lerp(a.alpha(), b.alpha(), t);
        from_srgb(mix_srgb(to_srgb(a), to_srgb(b), t, space), alpha)
    }

    fn luminance(&self, color: &Color) -> f64 {
        let linear: LinSrgb = to_srgb(color).into_linear();
        0.2126 * linear.red as f64
            + 0.7152 * linear.green as f64
            + 0.0722 * linear.blue as f64
    }

    fn with_luminance(&self, color: &Color, target: f64) -> Color {
        let alpha = color.alpha();
        if target <= 0.0 {
            return Color::BLACK.with_alpha(alpha);
        }
        if target >= 1.0 {
            return Color::WHITE.with_alpha(alpha);
        }

        // Bisect between the color and black (to darken) or white (to
        // lighten), interpolating in plain RGB.
        let (mut low, mut high) = if self.luminance(color) > target {
            (Color::BLACK, *color)
        } else {
            (*color, Color::WHITE)
        };
        let mut mid = self.mix(&low, &high, 0.5, ColorSpace::Rgb);
        for _ in 0..LUMINANCE_MAX_ITERATIONS {
            let lum = self.luminance(&mid);
            if (target - lum).abs() < LUMINANCE_EPSILON {
                break;
            }
            if lum > target {
                high = mid;
            } else {
                low = mid;
            }
            mid = self.mix(&low, &high, 0.5, ColorSpace::Rgb);
        }

        mid.with_alpha(alpha)
    }

    fn perceptual_tone(&self, color: &Color) -> f64 {
        let lab: Lab = Lab::from_color(to_srgb(color));
        lab.l as f64
    }

    fn set_perceptual_tone(&self, color: &Color, tone: f64) -> Color {
        let alpha = color.alpha();
        if tone.is_nan() || tone <= 0.0 {
            return Color::BLACK.with_alpha(alpha);
        }
        if tone >= 100.0 {
            return Color::WHITE.with_alpha(alpha);
        }

        let tone = tone as f32;
        let source: Lch = Lch::from_color(to_srgb(color));
        let at_chroma = |chroma: f32| -> Srgb {
            let target: Lch = Lch::new(tone, chroma, source.hue);
            Srgb::from_color_unclamped(target)
        };

        // Keep the hue and as much of the chroma as sRGB can hold at the
        // requested tone.
        let candidate = at_chroma(source.chroma);
        if in_gamut(&candidate) {
            return from_srgb(candidate, alpha);
        }

        let (mut low, mut high) = (0.0_f32, source.chroma);
        for _ in 0..GAMUT_SEARCH_ITERATIONS {
            let mid = (low + high) / 2.0;
            if in_gamut(&at_chroma(mid)) {
                low = mid;
            } else {
                high = mid;
            }
        }
        from_srgb(at_chroma(low), alpha)
    }

    fn random(&self) -> Color {
        let mut rng = rand::rng();
        Color::from_u8(rng.random(), rng.random(), rng.random())
    }
}
