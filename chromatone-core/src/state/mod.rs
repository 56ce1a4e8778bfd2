//! The canonical, mutable derivation record.
//!
//! [`DerivationState`] holds only inputs. Everything shown to a user is
//! recomputed from it by [`crate::engine::DerivationEngine`] on each read.

mod input;
mod params;

pub use input::{clamp_unit, parse_ratio_input};
pub use params::{GrayList, StepKind, StepList};

use chromatone_model::defaults::{DEFAULT_GRAY_RATIO, SCHEMA_VERSION};
use chromatone_model::{
    ActiveColorSpaces, Color, ColorSpace, ColorTarget, Section, Visibility,
};

use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq)]
pub struct DerivationState {
    base_color: Color,
    grays: GrayList,
    palette: StepList,
    shades: StepList,
    tints: StepList,
    active_color_spaces: ActiveColorSpaces,
    gray_ratio: f64,
    visibility: Visibility,
    schema_version: String,
}

impl DerivationState {
    /// A state with the stock grays, steps and color spaces.
    pub fn new(base_color: Color) -> Self {
        Self {
            base_color,
            grays: GrayList::stock(),
            palette: StepList::stock(StepKind::Palette),
            shades: StepList::stock(StepKind::Shades),
            tints: StepList::stock(StepKind::Tints),
            active_color_spaces: ActiveColorSpaces::default(),
            gray_ratio: DEFAULT_GRAY_RATIO,
            visibility: Visibility::default(),
            schema_version: SCHEMA_VERSION.to_string(),
        }
    }

    pub fn base_color(&self) -> Color {
        self.base_color
    }

    pub fn grays(&self) -> &GrayList {
        &self.grays
    }

    pub fn palette(&self) -> &StepList {
        &self.palette
    }

    pub fn shades(&self) -> &StepList {
        &self.shades
    }

    pub fn tints(&self) -> &StepList {
        &self.tints
    }

    pub fn active_color_spaces(&self) -> ActiveColorSpaces {
        self.active_color_spaces
    }

    pub fn color_space(&self, target: ColorTarget) -> ColorSpace {
        self.active_color_spaces.get(target)
    }

    pub fn gray_ratio(&self) -> f64 {
        self.gray_ratio
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn schema_version(&self) -> &str {
        &self.schema_version
    }

    pub fn set_base_color(&mut self, color: Color) {
        self.base_color = color;
    }

    pub fn grays_mut(&mut self) -> &mut GrayList {
        &mut self.grays
    }

    pub fn palette_mut(&mut self) -> &mut StepList {
        &mut self.palette
    }

    pub fn shades_mut(&mut self) -> &mut StepList {
        &mut self.shades
    }

    pub fn tints_mut(&mut self) -> &mut StepList {
        &mut self.tints
    }

    pub fn step_list_mut(&mut self, kind: StepKind) -> &mut StepList {
        match kind {
            StepKind::Palette => &mut self.palette,
            StepKind::Shades => &mut self.shades,
            StepKind::Tints => &mut self.tints,
        }
    }

    pub fn set_color_space(&mut self, target: ColorTarget, space: ColorSpace) {
        self.active_color_spaces.set(target, space);
    }

    /// Select a color space by its wire identifier (`"lab"`, `"lrgb"`, ...).
    pub fn set_color_space_str(
        &mut self,
        target: ColorTarget,
        identifier: &str,
    ) -> Result<(), ConfigError> {
        let space = identifier.parse::<ColorSpace>().map_err(|err| {
            ConfigError::InvalidColorSpace {
                field: target.field().to_string(),
                value: err.0,
            }
        })?;
        self.set_color_space(target, space);
        Ok(())
    }

    pub fn set_active_color_spaces(&mut self, spaces: ActiveColorSpaces) {
        self.active_color_spaces = spaces;
    }

    /// Store the gray ratio clamped to `[0, 1]`.
    pub fn set_gray_ratio(&mut self, ratio: f64) -> Result<(), ConfigError> {
        self.gray_ratio = clamp_unit("grayRatio", ratio)?;
        Ok(())
    }

    /// Apply text typed into the gray ratio field. Non-numeric text is
    /// ignored and `false` is returned.
    pub fn set_gray_ratio_input(&mut self, raw: &str) -> bool {
        match parse_ratio_input(raw) {
            Some(value) => {
                self.gray_ratio = value.clamp(0.0, 1.0);
                true
            }
            None => false,
        }
    }

    pub fn set_gray_ratio_factor(
        &mut self,
        index: usize,
        raw: &str,
    ) -> Result<bool, ConfigError> {
        self.grays.set_ratio_factor(index, raw)
    }

    pub fn set_visibility(&mut self, section: Section, visible: bool) {
        self.visibility.set(section, visible);
    }

    pub fn replace_visibility(&mut self, visibility: Visibility) {
        self.visibility = visibility;
    }

    /// Flip one section and return whether it is now shown.
    pub fn toggle_visibility(&mut self, section: Section) -> bool {
        self.visibility.toggle(section)
    }

    pub(crate) fn replace_grays(&mut self, grays: GrayList) {
        self.grays = grays;
    }

    pub(crate) fn replace_steps(&mut self, steps: StepList) {
        let kind = steps.kind();
        *self.step_list_mut(kind) = steps;
    }

    pub(crate) fn set_schema_version(&mut self, version: String) {
        self.schema_version = version;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chromatone_model::defaults::{
        DEFAULT_PALETTE, DEFAULT_SHADES, DEFAULT_TINTS,
    };

    fn state() -> DerivationState {
        DerivationState::new(Color::from_u8(0x33, 0x66, 0x99))
    }

    #[test]
    fn starts_from_stock_parameters() {
        let state = state();
        assert_eq!(state.palette().values(), &DEFAULT_PALETTE);
        assert_eq!(state.shades().values(), &DEFAULT_SHADES);
        assert_eq!(state.tints().values(), &DEFAULT_TINTS);
        assert_eq!(state.grays().len(), 5);
        assert_eq!(state.grays().entries()[2].ratio_factor, 0.95);
        assert_eq!(state.gray_ratio(), 0.9);
        assert_eq!(state.schema_version(), "2.0");
        assert!(state.visibility().tones);
        assert!(!state.visibility().palette);
    }

    #[test]
    fn color_space_text_is_validated() {
        let mut state = state();
        state.set_color_space_str(ColorTarget::Tints, "lab").unwrap();
        assert_eq!(state.color_space(ColorTarget::Tints), ColorSpace::Lab);

        let err = state
            .set_color_space_str(ColorTarget::Tones, "xyz")
            .unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidColorSpace {
                field: "activeColorSpaces.tones".into(),
                value: "xyz".into(),
            }
        );
        assert_eq!(state.color_space(ColorTarget::Tones), ColorSpace::Hsl);
    }

    #[test]
    fn gray_ratio_is_clamped_when_written() {
        let mut state = state();
        state.set_gray_ratio(1.5).unwrap();
        assert_eq!(state.gray_ratio(), 1.0);
        assert!(state.set_gray_ratio(f64::NAN).is_err());
        assert_eq!(state.gray_ratio(), 1.0);

        assert!(!state.set_gray_ratio_input("abc"));
        assert!(state.set_gray_ratio_input("-0.2"));
        assert_eq!(state.gray_ratio(), 0.0);
    }

    #[test]
    fn toggle_visibility_reports_new_value() {
        let mut state = state();
        assert!(state.toggle_visibility(Section::Shades));
        assert!(state.visibility().shades);
        state.set_visibility(Section::Shades, false);
        assert!(!state.visibility().shades);
    }
}
