use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::ColorParseError;

/// An sRGB color with straight alpha, every channel in `[0.0, 1.0]`.
///
/// Colors compare by their 8-bit encoding, so two values that print to the
/// same hex string are equal even if their float channels differ slightly.
#[derive(Clone, Copy)]
pub struct Color {
    red: f32,
    green: f32,
    blue: f32,
    alpha: f32,
}

/// CSS level 1 keywords plus the `grey` spelling.
const NAMED_COLORS: &[(&str, [u8; 3])] = &[
    ("black", [0x00, 0x00, 0x00]),
    ("silver", [0xc0, 0xc0, 0xc0]),
    ("gray", [0x80, 0x80, 0x80]),
    ("grey", [0x80, 0x80, 0x80]),
    ("white", [0xff, 0xff, 0xff]),
    ("maroon", [0x80, 0x00, 0x00]),
    ("red", [0xff, 0x00, 0x00]),
    ("purple", [0x80, 0x00, 0x80]),
    ("fuchsia", [0xff, 0x00, 0xff]),
    ("green", [0x00, 0x80, 0x00]),
    ("lime", [0x00, 0xff, 0x00]),
    ("olive", [0x80, 0x80, 0x00]),
    ("yellow", [0xff, 0xff, 0x00]),
    ("navy", [0x00, 0x00, 0x80]),
    ("blue", [0x00, 0x00, 0xff]),
    ("teal", [0x00, 0x80, 0x80]),
    ("aqua", [0x00, 0xff, 0xff]),
];

impl Color {
    pub const BLACK: Color = Color::from_rgba(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Color = Color::from_rgba(1.0, 1.0, 1.0, 1.0);

    const fn from_rgba(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Build an opaque color from float channels, clamping each to `[0, 1]`.
    pub fn new(red: f32, green: f32, blue: f32) -> Self {
        Self::new_with_alpha(red, green, blue, 1.0)
    }

    pub fn new_with_alpha(red: f32, green: f32, blue: f32, alpha: f32) -> Self {
        Self {
            red: unit(red),
            green: unit(green),
            blue: unit(blue),
            alpha: unit(alpha),
        }
    }

    pub fn from_u8(red: u8, green: u8, blue: u8) -> Self {
        Self::from_rgba8(red, green, blue, u8::MAX)
    }

    pub fn from_rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::from_rgba(
            red as f32 / 255.0,
            green as f32 / 255.0,
            blue as f32 / 255.0,
            alpha as f32 / 255.0,
        )
    }

    /// Look up one of the CSS basic color keywords.
    pub fn named(name: &str) -> Option<Self> {
        NAMED_COLORS
            .iter()
            .find(|(candidate, _)| candidate.eq_ignore_ascii_case(name))
            .map(|(_, [r, g, b])| Self::from_u8(*r, *g, *b))
    }

    pub fn red(&self) -> f32 {
        self.red
    }

    pub fn green(&self) -> f32 {
        self.green
    }

    pub fn blue(&self) -> f32 {
        self.blue
    }

    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = unit(alpha);
        self
    }

    pub fn components(&self) -> [f32; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    pub fn to_rgba8(&self) -> [u8; 4] {
        self.components().map(|c| (unit(c) * 255.0).round() as u8)
    }

    /// `#rrggbb`, or `#rrggbbaa` when the color is not fully opaque.
    pub fn to_hex(&self) -> String {
        let [r, g, b, a] = self.to_rgba8();
        if a == u8::MAX {
            format!("#{r:02x}{g:02x}{b:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }
}

fn unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

impl PartialEq for Color {
    fn eq(&self, other: &Self) -> bool {
        self.to_rgba8() == other.to_rgba8()
    }
}

impl Eq for Color {}

impl Hash for Color {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_rgba8().hash(state);
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({})", self.to_hex())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    /// Accepts `#aef`, `#aefc`, `7a03c2`, `#abcdefff` and the CSS basic
    /// keywords (`white`, `black`, `teal`, ...). Case does not matter.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ColorParseError::Empty);
        }

        if let Some(named) = Color::named(text) {
            return Ok(named);
        }

        let hex = text.strip_prefix('#').unwrap_or(text);
        if hex.chars().any(|c| !c.is_ascii_hexdigit()) {
            return Err(if text.starts_with('#') {
                ColorParseError::NonHexDigit(text.to_string())
            } else {
                ColorParseError::UnknownName(text.to_string())
            });
        }

        let len = hex.len();
        let long = len == 6 || len == 8;
        let short = len == 3 || len == 4;
        if !long && !short {
            return Err(ColorParseError::WrongLength {
                input: text.to_string(),
                len,
            });
        }
        let with_alpha = len == 4 || len == 8;
        let item_len = if long { 2 } else { 1 };

        let mut values = [u8::MAX; 4];
        let channels = if with_alpha { 4 } else { 3 };
        for (index, value) in values.iter_mut().take(channels).enumerate() {
            let pos = index * item_len;
            let item = &hex[pos..pos + item_len];
            let parsed = u8::from_str_radix(item, 16).map_err(|_| {
                ColorParseError::NonHexDigit(text.to_string())
            })?;
            // `a` -> `aa` for shorthand notation
            *value = if short { parsed * 17 } else { parsed };
        }

        let [r, g, b, a] = values;
        Ok(Color::from_rgba8(r, g, b, a))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Color {
    fn serialize<S: serde::Serializer>(
        &self,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Color {
    fn deserialize<D: serde::Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
