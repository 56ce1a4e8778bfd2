use std::fmt;
use std::str::FromStr;

/// Interpolation space used when two colors are mixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ColorSpace {
    Rgb,
    #[default]
    Hsl,
    Lab,
    Lch,
    /// Linear-light RGB
    Lrgb,
}

impl ColorSpace {
    pub const ALL: [ColorSpace; 5] = [
        ColorSpace::Rgb,
        ColorSpace::Hsl,
        ColorSpace::Lab,
        ColorSpace::Lch,
        ColorSpace::Lrgb,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ColorSpace::Rgb => "rgb",
            ColorSpace::Hsl => "hsl",
            ColorSpace::Lab => "lab",
            ColorSpace::Lch => "lch",
            ColorSpace::Lrgb => "lrgb",
        }
    }
}

impl fmt::Display for ColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a color-space identifier is not one of the five known ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColorSpace(pub String);

impl fmt::Display for UnknownColorSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown color space '{}' (expected rgb, hsl, lab, lch or lrgb)",
            self.0
        )
    }
}

impl std::error::Error for UnknownColorSpace {}

impl FromStr for ColorSpace {
    type Err = UnknownColorSpace;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorSpace::ALL
            .into_iter()
            .find(|space| space.as_str() == s)
            .ok_or_else(|| UnknownColorSpace(s.to_string()))
    }
}

/// The three derivations that mix colors, each with its own space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorTarget {
    Tones,
    Shades,
    Tints,
}

impl ColorTarget {
    pub const ALL: [ColorTarget; 3] =
        [ColorTarget::Tones, ColorTarget::Shades, ColorTarget::Tints];

    /// Dotted path naming this target in error messages.
    pub fn field(&self) -> &'static str {
        match self {
            ColorTarget::Tones => "activeColorSpaces.tones",
            ColorTarget::Shades => "activeColorSpaces.shades",
            ColorTarget::Tints => "activeColorSpaces.tints",
        }
    }
}

/// The color space selected for each mixing derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveColorSpaces {
    pub tones: ColorSpace,
    pub shades: ColorSpace,
    pub tints: ColorSpace,
}

impl ActiveColorSpaces {
    pub fn get(&self, target: ColorTarget) -> ColorSpace {
        match target {
            ColorTarget::Tones => self.tones,
            ColorTarget::Shades => self.shades,
            ColorTarget::Tints => self.tints,
        }
    }

    pub fn set(&mut self, target: ColorTarget, space: ColorSpace) {
        match target {
            ColorTarget::Tones => self.tones = space,
            ColorTarget::Shades => self.shades = space,
            ColorTarget::Tints => self.tints = space,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for space in ColorSpace::ALL {
            assert_eq!(space.as_str().parse::<ColorSpace>(), Ok(space));
        }
    }

    #[test]
    fn unknown_identifiers_are_rejected() {
        assert_eq!(
            "xyz".parse::<ColorSpace>(),
            Err(UnknownColorSpace("xyz".into()))
        );
        // identifiers are case-sensitive on the wire
        assert!("HSL".parse::<ColorSpace>().is_err());
    }

    #[test]
    fn defaults_to_hsl_everywhere() {
        let active = ActiveColorSpaces::default();
        for target in ColorTarget::ALL {
            assert_eq!(active.get(target), ColorSpace::Hsl);
        }
    }

    #[test]
    fn set_only_touches_one_target() {
        let mut active = ActiveColorSpaces::default();
        active.set(ColorTarget::Shades, ColorSpace::Lab);
        assert_eq!(active.shades, ColorSpace::Lab);
        assert_eq!(active.tones, ColorSpace::Hsl);
        assert_eq!(active.tints, ColorSpace::Hsl);
    }
}
