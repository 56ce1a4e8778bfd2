//! Index-addressed parameter lists that drive the derivations.
//!
//! Each list owns its validation: steps are range-checked on the way in,
//! ratio factors are clamped on the way in, and deletions keep the remaining
//! elements in order.

use chromatone_model::defaults::{
    DEFAULT_MIX_STEP, DEFAULT_PALETTE, DEFAULT_PALETTE_STEP, DEFAULT_SHADES,
    DEFAULT_TINTS, MAX_MIX_STEP, MAX_PALETTE_STEP, default_gray,
    default_grays,
};
use chromatone_model::{Color, GrayEntry};

use super::input::{clamp_unit, parse_ratio_input};
use crate::error::ConfigError;

/// Which step sequence a [`StepList`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Tonal palette steps, `0..=1000`, higher is darker.
    Palette,
    /// Shade mix percentages toward black.
    Shades,
    /// Tint mix percentages toward white.
    Tints,
}

impl StepKind {
    /// Transport field holding this list.
    pub fn field(&self) -> &'static str {
        match self {
            StepKind::Palette => "paletteValues",
            StepKind::Shades => "shadesValues",
            StepKind::Tints => "tintsValues",
        }
    }

    pub fn max(&self) -> i32 {
        match self {
            StepKind::Palette => MAX_PALETTE_STEP,
            StepKind::Shades | StepKind::Tints => MAX_MIX_STEP,
        }
    }

    pub fn default_step(&self) -> i32 {
        match self {
            StepKind::Palette => DEFAULT_PALETTE_STEP,
            StepKind::Shades | StepKind::Tints => DEFAULT_MIX_STEP,
        }
    }

    /// Check that `value` fits this kind's range.
    pub fn validate(&self, value: i64) -> Result<i32, ConfigError> {
        let max = self.max();
        if (0..=i64::from(max)).contains(&value) {
            Ok(value as i32)
        } else {
            Err(ConfigError::StepOutOfRange {
                field: self.field().to_string(),
                value,
                min: 0,
                max,
            })
        }
    }
}

fn out_of_bounds(field: &str, index: usize, len: usize) -> ConfigError {
    ConfigError::IndexOutOfBounds {
        field: field.to_string(),
        index,
        len,
    }
}

/// Ordered integer steps for the palette, shades or tints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepList {
    kind: StepKind,
    values: Vec<i32>,
}

impl StepList {
    pub fn new(kind: StepKind) -> Self {
        Self {
            kind,
            values: Vec::new(),
        }
    }

    /// The stock steps a new session starts with.
    pub fn stock(kind: StepKind) -> Self {
        let values = match kind {
            StepKind::Palette => DEFAULT_PALETTE,
            StepKind::Shades => DEFAULT_SHADES,
            StepKind::Tints => DEFAULT_TINTS,
        };
        Self {
            kind,
            values: values.to_vec(),
        }
    }

    /// Build a list, rejecting the first out-of-range value.
    pub fn with_values(
        kind: StepKind,
        values: impl IntoIterator<Item = i64>,
    ) -> Result<Self, ConfigError> {
        let values = values
            .into_iter()
            .map(|value| kind.validate(value))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { kind, values })
    }

    pub fn kind(&self) -> StepKind {
        self.kind
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + '_ {
        self.values.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<i32> {
        self.values.get(index).copied()
    }

    /// Append a step.
    pub fn add(&mut self, value: i32) -> Result<(), ConfigError> {
        let value = self.kind.validate(i64::from(value))?;
        self.values.push(value);
        Ok(())
    }

    /// Append the kind's default step (500 for the palette, 50 otherwise).
    pub fn add_default(&mut self) {
        self.values.push(self.kind.default_step());
    }

    /// Overwrite the step at `index`.
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), ConfigError> {
        let len = self.values.len();
        let value = self.kind.validate(i64::from(value))?;
        let slot = self
            .values
            .get_mut(index)
            .ok_or_else(|| out_of_bounds(self.kind.field(), index, len))?;
        *slot = value;
        Ok(())
    }

    /// Remove the step at `index`, shifting later steps down.
    pub fn delete(&mut self, index: usize) -> Result<i32, ConfigError> {
        if index >= self.values.len() {
            return Err(out_of_bounds(
                self.kind.field(),
                index,
                self.values.len(),
            ));
        }
        Ok(self.values.remove(index))
    }
}

/// The reference grays, each with its ratio factor.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GrayList {
    entries: Vec<GrayEntry>,
}

impl GrayList {
    const FIELD: &'static str = "graysValues";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn stock() -> Self {
        Self {
            entries: default_grays(),
        }
    }

    /// Build a list, clamping each ratio factor.
    pub fn with_entries(
        entries: impl IntoIterator<Item = GrayEntry>,
    ) -> Result<Self, ConfigError> {
        let mut list = Self::new();
        for entry in entries {
            list.add(entry.color, entry.ratio_factor)?;
        }
        Ok(list)
    }

    pub fn entries(&self) -> &[GrayEntry] {
        &self.entries
    }

    pub fn iter(&self) -> impl Iterator<Item = &GrayEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&GrayEntry> {
        self.entries.get(index)
    }

    /// Append a gray. The ratio factor is clamped to `[0, 1]`.
    pub fn add(
        &mut self,
        color: Color,
        ratio_factor: f64,
    ) -> Result<(), ConfigError> {
        let field = format!("{}[{}].ratioFactor", Self::FIELD, self.len());
        let ratio_factor = clamp_unit(&field, ratio_factor)?;
        self.entries.push(GrayEntry::new(color, ratio_factor));
        Ok(())
    }

    /// Append white with a factor of 1.
    pub fn add_default(&mut self) {
        self.entries.push(default_gray());
    }

    /// Remove the gray at `index`, shifting later grays down.
    pub fn delete(&mut self, index: usize) -> Result<GrayEntry, ConfigError> {
        if index >= self.entries.len() {
            return Err(out_of_bounds(Self::FIELD, index, self.entries.len()));
        }
        Ok(self.entries.remove(index))
    }

    pub fn set_color(
        &mut self,
        index: usize,
        color: Color,
    ) -> Result<(), ConfigError> {
        self.entry_mut(index)?.color = color;
        Ok(())
    }

    /// Store a clamped ratio factor at `index`.
    pub fn set_ratio_factor_value(
        &mut self,
        index: usize,
        ratio_factor: f64,
    ) -> Result<(), ConfigError> {
        let field = format!("{}[{index}].ratioFactor", Self::FIELD);
        let ratio_factor = clamp_unit(&field, ratio_factor)?;
        self.entry_mut(index)?.ratio_factor = ratio_factor;
        Ok(())
    }

    /// Apply text typed into a ratio field.
    ///
    /// Returns `Ok(false)` and changes nothing when `raw` is not a decimal
    /// number yet. An unknown `index` is still an error.
    pub fn set_ratio_factor(
        &mut self,
        index: usize,
        raw: &str,
    ) -> Result<bool, ConfigError> {
        let entry = self.entry_mut(index)?;
        match parse_ratio_input(raw) {
            Some(value) => {
                entry.ratio_factor = value.clamp(0.0, 1.0);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn entry_mut(&mut self, index: usize) -> Result<&mut GrayEntry, ConfigError> {
        let len = self.entries.len();
        self.entries
            .get_mut(index)
            .ok_or_else(|| out_of_bounds(Self::FIELD, index, len))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gray(hex: &str) -> Color {
        hex.parse().unwrap()
    }

    #[test]
    fn delete_keeps_remaining_order() {
        let mut grays = GrayList::new();
        for hex in ["#111111", "#222222", "#333333"] {
            grays.add(gray(hex), 1.0).unwrap();
        }

        let removed = grays.delete(1).unwrap();
        assert_eq!(removed.color, gray("#222222"));
        let left: Vec<_> = grays.iter().map(|e| e.color).collect();
        assert_eq!(left, vec![gray("#111111"), gray("#333333")]);
    }

    #[test]
    fn delete_out_of_range_leaves_list_alone() {
        let mut steps =
            StepList::with_values(StepKind::Shades, [10, 30]).unwrap();
        let err = steps.delete(2).unwrap_err();
        assert_eq!(
            err,
            ConfigError::IndexOutOfBounds {
                field: "shadesValues".into(),
                index: 2,
                len: 2,
            }
        );
        assert_eq!(steps.values(), &[10, 30]);
    }

    #[test]
    fn add_default_uses_kind_default() {
        let mut palette = StepList::new(StepKind::Palette);
        palette.add_default();
        let mut tints = StepList::new(StepKind::Tints);
        tints.add_default();
        assert_eq!(palette.values(), &[500]);
        assert_eq!(tints.values(), &[50]);

        let mut grays = GrayList::new();
        grays.add_default();
        assert_eq!(grays.get(0), Some(&GrayEntry::new(Color::WHITE, 1.0)));
    }

    #[test]
    fn steps_outside_range_are_rejected() {
        let mut shades = StepList::new(StepKind::Shades);
        assert!(matches!(
            shades.add(101),
            Err(ConfigError::StepOutOfRange { max: 100, .. })
        ));
        assert!(shades.add(-1).is_err());
        assert!(shades.add(100).is_ok());

        let mut palette = StepList::new(StepKind::Palette);
        assert!(palette.add(1000).is_ok());
        assert!(palette.add(1001).is_err());
        assert_eq!(palette.values(), &[1000]);
    }

    #[test]
    fn gray_add_clamps_ratio_factor() {
        let mut grays = GrayList::new();
        grays.add(Color::BLACK, 1.7).unwrap();
        grays.add(Color::BLACK, -3.0).unwrap();
        let factors: Vec<_> = grays.iter().map(|e| e.ratio_factor).collect();
        assert_eq!(factors, vec![1.0, 0.0]);
        assert!(grays.add(Color::BLACK, f64::NAN).is_err());
        assert_eq!(grays.len(), 2);
    }

    #[test]
    fn ratio_factor_input_follows_live_typing_rules() {
        let mut grays = GrayList::new();
        grays.add(Color::BLACK, 0.5).unwrap();

        assert_eq!(grays.set_ratio_factor(0, "abc"), Ok(false));
        assert_eq!(grays.entries()[0].ratio_factor, 0.5);

        assert_eq!(grays.set_ratio_factor(0, "1.5"), Ok(true));
        assert_eq!(grays.entries()[0].ratio_factor, 1.0);

        assert_eq!(grays.set_ratio_factor(0, "-0.2"), Ok(true));
        assert_eq!(grays.entries()[0].ratio_factor, 0.0);

        assert!(grays.set_ratio_factor(3, "0.5").is_err());
    }
}
