//! Upgrading stored records to the current schema.

use chromatone_model::defaults::SCHEMA_VERSION;
use serde_json::Value;
use tracing::warn;

use super::record::{LegacyStateRecord, StateRecord, VisibilityRecord};
use super::serialize;
use crate::error::ParseError;
use crate::state::DerivationState;

/// Keys whose presence marks a versioned record.
const VERSION_KEYS: [&str; 2] = ["schemaVersion", "version"];

/// True when `value` carries no schema tag and must be upgraded.
pub fn is_legacy(value: &Value) -> bool {
    value.as_object().is_some_and(|map| {
        !VERSION_KEYS.iter().any(|key| map.contains_key(*key))
    })
}

/// Bring `value` into the current record shape.
///
/// Versioned records pass through as they are, including versions this
/// build does not know. Untagged records are read with the legacy field
/// names, and any field they lack is taken from `current`.
pub fn migrate(
    value: Value,
    current: &DerivationState,
) -> Result<StateRecord, ParseError> {
    if !is_legacy(&value) {
        let record: StateRecord = serde_json::from_value(value)?;
        if let Some(version) = record.schema_version.as_deref()
            && version != SCHEMA_VERSION
        {
            warn!(
                version,
                expected = SCHEMA_VERSION,
                "Loading record with unrecognized schema version"
            );
        }
        return Ok(record);
    }

    let legacy: LegacyStateRecord = serde_json::from_value(value)?;
    Ok(upgrade_legacy(legacy, current))
}

fn upgrade_legacy(
    legacy: LegacyStateRecord,
    current: &DerivationState,
) -> StateRecord {
    let fallback = serialize(current, &[]);
    let shown = current.visibility();

    StateRecord {
        // the upgraded record keeps whatever version the state already has
        schema_version: None,
        base_color: legacy.base_color.or(fallback.base_color),
        grays_values: legacy.grays.or(fallback.grays_values),
        palette_values: legacy.palette.or(fallback.palette_values),
        shades_values: legacy.shades.or(fallback.shades_values),
        tints_values: legacy.tints.or(fallback.tints_values),
        active_color_spaces: legacy
            .active_color_spaces
            .or(fallback.active_color_spaces),
        gray_ratio: legacy.gray_ratio.or(fallback.gray_ratio),
        visibility: Some(VisibilityRecord {
            grays: Some(legacy.show_grays.unwrap_or(shown.grays)),
            shades: Some(legacy.show_shades.unwrap_or(shown.shades)),
            tints: Some(legacy.show_tints.unwrap_or(shown.tints)),
            lum_adjusted: Some(
                legacy.show_lum_adjusted.unwrap_or(shown.lum_adjusted),
            ),
            palette: Some(legacy.show_palette.unwrap_or(shown.palette)),
            tones: Some(legacy.show_tones.unwrap_or(shown.tones)),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromatone_model::Color;
    use serde_json::json;

    fn current() -> DerivationState {
        DerivationState::new(Color::from_u8(0x33, 0x66, 0x99))
    }

    #[test]
    fn legacy_fields_are_renamed() {
        let legacy = json!({
            "grays": [{"color": "#000000", "ratioFactor": 1}],
            "palette": [900],
            "showTones": false,
            "showPalette": true,
        });

        let record = migrate(legacy, &current()).unwrap();
        assert_eq!(record.palette_values, Some(vec![900]));
        let grays = record.grays_values.unwrap();
        assert_eq!(grays.len(), 1);
        assert_eq!(grays[0].ratio_factor, 1.0);

        let visibility = record.visibility.unwrap();
        assert_eq!(visibility.tones, Some(false));
        assert_eq!(visibility.palette, Some(true));
        assert_eq!(visibility.grays, Some(false));
    }

    #[test]
    fn legacy_gaps_fall_back_to_current_state() {
        let state = current();
        let record = migrate(json!({"palette": [100]}), &state).unwrap();
        assert_eq!(record.shades_values, Some(vec![10, 30, 50, 70, 90]));
        assert_eq!(record.gray_ratio, Some(0.9));
        assert_eq!(
            record.base_color.unwrap().to_color().unwrap(),
            state.base_color()
        );
    }

    #[test]
    fn versioned_records_pass_through() {
        let record = migrate(
            json!({"schemaVersion": "3.1", "paletteValues": [50]}),
            &current(),
        )
        .unwrap();
        assert_eq!(record.schema_version.as_deref(), Some("3.1"));
        assert_eq!(record.palette_values, Some(vec![50]));
        assert_eq!(record.shades_values, None);
    }

    #[test]
    fn non_object_payloads_fail() {
        assert!(migrate(json!([1, 2, 3]), &current()).is_err());
        assert!(migrate(json!("state"), &current()).is_err());
    }
}
