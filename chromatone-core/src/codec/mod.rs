//! Snapshot, transport and restore of a [`DerivationState`].
//!
//! A snapshot is a [`StateRecord`]. It travels as JSON text, as base64 of
//! that text, or through a [`KeyValueStore`]. Loading always goes through
//! [`migrate`] and then patches a copy of the current state, so a record
//! that fails validation part way leaves the state exactly as it was.

mod migrate;
mod record;
mod repr;

pub use migrate::{is_legacy, migrate};
pub use record::{
    ColorRecord, ColorSpacesRecord, GrayRecord, LegacyStateRecord,
    StateField, StateRecord, VisibilityRecord,
};
pub use repr::{ReprNode, export, to_representation};

use base64::{Engine as _, engine::general_purpose::STANDARD as BASE64};
use chromatone_contracts::KeyValueStore;
use chromatone_model::{ColorTarget, Section, Visibility};
use serde_json::Value;
use tracing::{debug, error};

use crate::error::{ParseError, Result};
use crate::state::{DerivationState, GrayList, StepKind, StepList};

/// Snapshot every field of `state` except those in `exclude`.
pub fn serialize(
    state: &DerivationState,
    exclude: &[StateField],
) -> StateRecord {
    let keep = |field: StateField| !exclude.contains(&field);
    let spaces = state.active_color_spaces();
    let visibility = state.visibility();
    let steps =
        |list: &StepList| -> Vec<i64> { list.iter().map(i64::from).collect() };

    StateRecord {
        schema_version: keep(StateField::SchemaVersion)
            .then(|| state.schema_version().to_string()),
        base_color: keep(StateField::BaseColor)
            .then(|| ColorRecord::from_color(&state.base_color())),
        grays_values: keep(StateField::GraysValues).then(|| {
            state.grays().iter().map(GrayRecord::from_entry).collect()
        }),
        palette_values: keep(StateField::PaletteValues)
            .then(|| steps(state.palette())),
        shades_values: keep(StateField::ShadesValues)
            .then(|| steps(state.shades())),
        tints_values: keep(StateField::TintsValues)
            .then(|| steps(state.tints())),
        active_color_spaces: keep(StateField::ActiveColorSpaces).then(|| {
            ColorSpacesRecord {
                tones: Some(spaces.tones.to_string()),
                shades: Some(spaces.shades.to_string()),
                tints: Some(spaces.tints.to_string()),
            }
        }),
        gray_ratio: keep(StateField::GrayRatio).then(|| state.gray_ratio()),
        visibility: keep(StateField::Visibility).then(|| VisibilityRecord {
            grays: Some(visibility.grays),
            shades: Some(visibility.shades),
            tints: Some(visibility.tints),
            lum_adjusted: Some(visibility.lum_adjusted),
            palette: Some(visibility.palette),
            tones: Some(visibility.tones),
        }),
    }
}

/// Patch `record` onto a copy of `current`.
///
/// Absent fields keep their current values. Nested maps are patched key by
/// key. Ratios are clamped and steps are range-checked as they are written.
pub fn apply(
    record: &StateRecord,
    current: &DerivationState,
) -> Result<DerivationState> {
    let mut next = current.clone();

    if let Some(version) = &record.schema_version {
        next.set_schema_version(version.clone());
    }
    if let Some(color) = &record.base_color {
        next.set_base_color(color.to_color()?);
    }
    if let Some(grays) = &record.grays_values {
        let entries = grays
            .iter()
            .map(GrayRecord::to_entry)
            .collect::<std::result::Result<Vec<_>, ParseError>>()?;
        next.replace_grays(GrayList::with_entries(entries)?);
    }

    let step_fields = [
        (StepKind::Palette, &record.palette_values),
        (StepKind::Shades, &record.shades_values),
        (StepKind::Tints, &record.tints_values),
    ];
    for (kind, values) in step_fields {
        if let Some(values) = values {
            let list = StepList::with_values(kind, values.iter().copied())?;
            next.replace_steps(list);
        }
    }

    if let Some(spaces) = &record.active_color_spaces {
        for target in ColorTarget::ALL {
            if let Some(space) = spaces.resolve(target)? {
                next.set_color_space(target, space);
            }
        }
    }
    if let Some(ratio) = record.gray_ratio {
        next.set_gray_ratio(ratio)?;
    }
    if let Some(visibility) = &record.visibility {
        next.replace_visibility(patch_visibility(
            next.visibility(),
            visibility,
        ));
    }

    Ok(next)
}

fn patch_visibility(
    mut current: Visibility,
    patch: &VisibilityRecord,
) -> Visibility {
    let flags = [
        (Section::Grays, patch.grays),
        (Section::Shades, patch.shades),
        (Section::Tints, patch.tints),
        (Section::LumAdjusted, patch.lum_adjusted),
        (Section::Palette, patch.palette),
        (Section::Tones, patch.tones),
    ];
    for (section, flag) in flags {
        if let Some(visible) = flag {
            current.set(section, visible);
        }
    }
    current
}

/// Migrate `value` and commit it to `state`, or change nothing.
pub fn try_load(value: Value, state: &mut DerivationState) -> Result<()> {
    let record = migrate(value, state)?;
    *state = apply(&record, state)?;
    Ok(())
}

/// Like [`try_load`], but a failure is logged and reported as `false`.
pub fn load(value: Value, state: &mut DerivationState) -> bool {
    match try_load(value, state) {
        Ok(()) => {
            debug!("Loaded derivation state");
            true
        }
        Err(err) => {
            error!(error = %err, "Failed to load state");
            false
        }
    }
}

/// The full record as compact JSON text.
pub fn state_json(state: &DerivationState) -> Result<String> {
    Ok(serde_json::to_string(&serialize(state, &[]))?)
}

pub fn parse_json(text: &str) -> std::result::Result<Value, ParseError> {
    Ok(serde_json::from_str(text)?)
}

/// Standard base64 of [`state_json`].
pub fn encode_base64(state: &DerivationState) -> Result<String> {
    Ok(BASE64.encode(state_json(state)?))
}

pub fn decode_base64(text: &str) -> std::result::Result<Value, ParseError> {
    let bytes = BASE64.decode(text.trim())?;
    let json = String::from_utf8(bytes)?;
    parse_json(&json)
}

pub fn load_from_base64(text: &str, state: &mut DerivationState) -> bool {
    match decode_base64(text) {
        Ok(value) => load(value, state),
        Err(err) => {
            error!(error = %err, "Failed to load state");
            false
        }
    }
}

/// Write the full record under `key`.
pub fn save_to_storage<S: KeyValueStore + ?Sized>(
    store: &mut S,
    key: &str,
    state: &DerivationState,
) -> Result<()> {
    store.set(key, &state_json(state)?)?;
    debug!(key, "Saved derivation state");
    Ok(())
}

/// Read the record under `key` into `state`.
///
/// A missing key is not an error and leaves the state alone. Storage,
/// parse and validation failures are logged and reported as `false`.
pub fn load_from_storage<S: KeyValueStore + ?Sized>(
    store: &S,
    key: &str,
    state: &mut DerivationState,
) -> bool {
    let text = match store.get(key) {
        Ok(Some(text)) => text,
        Ok(None) => {
            debug!(key, "No stored state");
            return false;
        }
        Err(err) => {
            error!(key, error = %err, "Failed to load state");
            return false;
        }
    };

    match parse_json(&text) {
        Ok(value) => load(value, state),
        Err(err) => {
            error!(key, error = %err, "Failed to load state");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromatone_model::{Color, ColorSpace};
    use serde_json::json;

    fn state() -> DerivationState {
        DerivationState::new(Color::from_u8(0x33, 0x66, 0x99))
    }

    #[test]
    fn serialize_honors_exclusions() {
        let record = serialize(&state(), &[StateField::BaseColor]);
        assert!(record.base_color.is_none());
        assert!(record.palette_values.is_some());

        let value = serde_json::to_value(&record).unwrap();
        assert!(value.get("baseColor").is_none());
        assert_eq!(value["schemaVersion"], json!("2.0"));
        assert_eq!(value["activeColorSpaces"]["tones"], json!("hsl"));
        assert_eq!(value["visibility"]["lumAdjusted"], json!(false));
    }

    #[test]
    fn nested_maps_patch_key_by_key() {
        let mut state = state();
        state.set_color_space(ColorTarget::Tints, ColorSpace::Lab);

        let patch = json!({
            "schemaVersion": "2.0",
            "activeColorSpaces": {"shades": "lch"},
            "visibility": {"palette": true},
        });
        assert!(load(patch, &mut state));

        assert_eq!(state.color_space(ColorTarget::Shades), ColorSpace::Lch);
        assert_eq!(state.color_space(ColorTarget::Tints), ColorSpace::Lab);
        assert!(state.visibility().palette);
        assert!(state.visibility().tones);
    }

    #[test]
    fn failed_load_leaves_state_untouched() {
        let mut state = state();
        let before = state.clone();

        let bad_space = json!({
            "schemaVersion": "2.0",
            "paletteValues": [100],
            "activeColorSpaces": {"tones": "xyz"},
        });
        assert!(!load(bad_space, &mut state));
        assert_eq!(state, before);

        let bad_step = json!({"schemaVersion": "2.0", "shadesValues": [500]});
        assert!(!load(bad_step, &mut state));
        assert_eq!(state, before);
    }

    #[test]
    fn load_clamps_ratios() {
        let mut state = state();
        let record = json!({
            "schemaVersion": "2.0",
            "grayRatio": 4.0,
            "graysValues": [{"color": "#000000", "ratioFactor": -1.0}],
        });
        assert!(load(record, &mut state));
        assert_eq!(state.gray_ratio(), 1.0);
        assert_eq!(state.grays().entries()[0].ratio_factor, 0.0);
    }

    #[test]
    fn base64_round_trip() {
        let mut source = state();
        source.set_gray_ratio(0.4).unwrap();
        source.palette_mut().add(900).unwrap();
        let encoded = encode_base64(&source).unwrap();

        let mut target = DerivationState::new(Color::WHITE);
        assert!(load_from_base64(&encoded, &mut target));
        assert_eq!(target, source);
    }

    #[test]
    fn garbage_base64_is_rejected_quietly() {
        let mut state = state();
        let before = state.clone();
        assert!(!load_from_base64("%%%not base64%%%", &mut state));
        assert!(!load_from_base64(&BASE64.encode("not json"), &mut state));
        assert_eq!(state, before);
    }
}
