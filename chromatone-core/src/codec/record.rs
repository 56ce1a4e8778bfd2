//! Wire records for the state transport.
//!
//! Every field is optional: a record may be a full snapshot, a preset with
//! `baseColor` left out, or a partial patch.

use chromatone_model::{
    Color, ColorParseError, ColorSpace, ColorTarget, GrayEntry,
};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ParseError};

/// A color as it appears in a record.
///
/// Written as a hex string. Read from a hex string, a color keyword, or the
/// `{"_rgb": [r, g, b, a]}` object older snapshots carry (channels 0-255,
/// alpha 0-1).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorRecord {
    Text(String),
    Channels {
        #[serde(rename = "_rgb")]
        rgb: Vec<f64>,
    },
}

impl ColorRecord {
    pub fn from_color(color: &Color) -> Self {
        ColorRecord::Text(color.to_hex())
    }

    pub fn to_color(&self) -> Result<Color, ParseError> {
        match self {
            ColorRecord::Text(text) => Ok(text.parse()?),
            ColorRecord::Channels { rgb } => {
                let (r, g, b, a) = match rgb.as_slice() {
                    [r, g, b] => (*r, *g, *b, 1.0),
                    [r, g, b, a] => (*r, *g, *b, *a),
                    other => {
                        return Err(ParseError::Color(
                            ColorParseError::WrongLength {
                                input: "_rgb".to_string(),
                                len: other.len(),
                            },
                        ));
                    }
                };
                Ok(Color::new_with_alpha(
                    (r / 255.0) as f32,
                    (g / 255.0) as f32,
                    (b / 255.0) as f32,
                    a as f32,
                ))
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GrayRecord {
    pub color: ColorRecord,
    pub ratio_factor: f64,
}

impl GrayRecord {
    pub fn from_entry(entry: &GrayEntry) -> Self {
        Self {
            color: ColorRecord::from_color(&entry.color),
            ratio_factor: entry.ratio_factor,
        }
    }

    pub fn to_entry(&self) -> Result<GrayEntry, ParseError> {
        Ok(GrayEntry::new(self.color.to_color()?, self.ratio_factor))
    }
}

/// Raw color-space identifiers, validated when applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColorSpacesRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tones: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shades: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tints: Option<String>,
}

impl ColorSpacesRecord {
    pub fn get(&self, target: ColorTarget) -> Option<&str> {
        match target {
            ColorTarget::Tones => self.tones.as_deref(),
            ColorTarget::Shades => self.shades.as_deref(),
            ColorTarget::Tints => self.tints.as_deref(),
        }
    }

    /// Parse one identifier, naming the offending field on failure.
    pub fn resolve(
        &self,
        target: ColorTarget,
    ) -> Result<Option<ColorSpace>, ConfigError> {
        self.get(target)
            .map(|identifier| {
                identifier.parse::<ColorSpace>().map_err(|err| {
                    ConfigError::InvalidColorSpace {
                        field: target.field().to_string(),
                        value: err.0,
                    }
                })
            })
            .transpose()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisibilityRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grays: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shades: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tints: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lum_adjusted: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tones: Option<bool>,
}

/// Current-schema record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateRecord {
    #[serde(
        default,
        alias = "version",
        skip_serializing_if = "Option::is_none"
    )]
    pub schema_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_color: Option<ColorRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grays_values: Option<Vec<GrayRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub palette_values: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shades_values: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tints_values: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_color_spaces: Option<ColorSpacesRecord>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gray_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<VisibilityRecord>,
}

/// Pre-versioned record with flat field names and `showX` flags.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LegacyStateRecord {
    #[serde(default)]
    pub base_color: Option<ColorRecord>,
    #[serde(default)]
    pub grays: Option<Vec<GrayRecord>>,
    #[serde(default)]
    pub palette: Option<Vec<i64>>,
    #[serde(default)]
    pub shades: Option<Vec<i64>>,
    #[serde(default)]
    pub tints: Option<Vec<i64>>,
    #[serde(default)]
    pub active_color_spaces: Option<ColorSpacesRecord>,
    #[serde(default)]
    pub gray_ratio: Option<f64>,
    #[serde(default)]
    pub show_grays: Option<bool>,
    #[serde(default)]
    pub show_shades: Option<bool>,
    #[serde(default)]
    pub show_tints: Option<bool>,
    #[serde(default)]
    pub show_lum_adjusted: Option<bool>,
    #[serde(default)]
    pub show_palette: Option<bool>,
    #[serde(default)]
    pub show_tones: Option<bool>,
}

/// Top-level record fields, used to leave some out of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateField {
    SchemaVersion,
    BaseColor,
    GraysValues,
    PaletteValues,
    ShadesValues,
    TintsValues,
    ActiveColorSpaces,
    GrayRatio,
    Visibility,
}

impl StateField {
    pub fn key(&self) -> &'static str {
        match self {
            StateField::SchemaVersion => "schemaVersion",
            StateField::BaseColor => "baseColor",
            StateField::GraysValues => "graysValues",
            StateField::PaletteValues => "paletteValues",
            StateField::ShadesValues => "shadesValues",
            StateField::TintsValues => "tintsValues",
            StateField::ActiveColorSpaces => "activeColorSpaces",
            StateField::GrayRatio => "grayRatio",
            StateField::Visibility => "visibility",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn colors_read_from_hex_names_and_channels() {
        let from_hex: ColorRecord = serde_json::from_value(json!("#336699"))
            .unwrap();
        let from_channels: ColorRecord =
            serde_json::from_value(json!({"_rgb": [51, 102, 153, 1]}))
                .unwrap();
        let from_name: ColorRecord =
            serde_json::from_value(json!("white")).unwrap();

        assert_eq!(
            from_hex.to_color().unwrap(),
            from_channels.to_color().unwrap()
        );
        assert_eq!(from_name.to_color().unwrap(), Color::WHITE);
    }

    #[test]
    fn channel_object_needs_three_or_four_values() {
        let record = ColorRecord::Channels { rgb: vec![1.0, 2.0] };
        assert!(matches!(
            record.to_color(),
            Err(ParseError::Color(ColorParseError::WrongLength {
                len: 2,
                ..
            }))
        ));
    }

    #[test]
    fn version_is_an_alias_of_schema_version() {
        let record: StateRecord =
            serde_json::from_value(json!({"version": "2.0"})).unwrap();
        assert_eq!(record.schema_version.as_deref(), Some("2.0"));

        let written = serde_json::to_value(&record).unwrap();
        assert_eq!(written, json!({"schemaVersion": "2.0"}));
    }

    #[test]
    fn unknown_color_space_names_its_field() {
        let spaces = ColorSpacesRecord {
            shades: Some("cmyk".into()),
            ..Default::default()
        };
        assert_eq!(spaces.resolve(ColorTarget::Tones), Ok(None));
        assert_eq!(
            spaces.resolve(ColorTarget::Shades),
            Err(ConfigError::InvalidColorSpace {
                field: "activeColorSpaces.shades".into(),
                value: "cmyk".into(),
            })
        );
    }

    #[test]
    fn gray_entry_serializes_with_hex_color() {
        let entry = GrayEntry::new(Color::from_u8(0x26, 0x26, 0x26), 1.0);
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(json, json!({"color": "#262626", "ratioFactor": 1.0}));

        let back: GrayEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }
}
