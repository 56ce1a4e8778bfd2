//! Pure derivations from a [`DerivationState`].
//!
//! Every output is index-aligned with the list that drives it: one luminance
//! adjusted color and one tone per gray, one [`StepColor`] per palette, shade
//! or tint step. Nothing here writes to the state.

use chromatone_contracts::ColorAdapter;
use chromatone_model::{Color, ColorTarget, GrayEntry, StepColor};
use serde::Serialize;

use crate::state::{DerivationState, StepList};

/// Every derived output of one state, computed in a single pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedPalette {
    pub grays: Vec<GrayEntry>,
    pub lum_adjusted: Vec<Color>,
    pub tones: Vec<Color>,
    pub palette: Vec<StepColor>,
    pub shades: Vec<StepColor>,
    pub tints: Vec<StepColor>,
}

#[derive(Debug, Clone, Copy)]
pub struct DerivationEngine<'a, A: ColorAdapter + ?Sized> {
    adapter: &'a A,
}

impl<'a, A: ColorAdapter + ?Sized> DerivationEngine<'a, A> {
    pub fn new(adapter: &'a A) -> Self {
        Self { adapter }
    }

    pub fn adapter(&self) -> &'a A {
        self.adapter
    }

    pub fn grays(&self, state: &DerivationState) -> Vec<GrayEntry> {
        state.grays().entries().to_vec()
    }

    /// The base color moved to each gray's relative luminance.
    pub fn luminance_adjusted(&self, state: &DerivationState) -> Vec<Color> {
        let base = state.base_color();
        state
            .grays()
            .iter()
            .map(|gray| {
                let target = self.adapter.luminance(&gray.color);
                self.adapter.with_luminance(&base, target)
            })
            .collect()
    }

    /// `gray_ratio * ratio_factor` for each gray.
    ///
    /// Both factors are kept in `[0, 1]` when written, so the product is not
    /// clamped again here.
    pub fn tone_ratios(&self, state: &DerivationState) -> Vec<f64> {
        let gray_ratio = state.gray_ratio();
        state
            .grays()
            .iter()
            .map(|gray| gray_ratio * gray.ratio_factor)
            .collect()
    }

    /// Each luminance-adjusted color pulled toward its gray.
    pub fn tones(&self, state: &DerivationState) -> Vec<Color> {
        let space = state.color_space(ColorTarget::Tones);
        self.luminance_adjusted(state)
            .iter()
            .zip(state.grays().iter())
            .zip(self.tone_ratios(state))
            .map(|((adjusted, gray), ratio)| {
                self.adapter.mix(adjusted, &gray.color, ratio, space)
            })
            .collect()
    }

    /// Palette steps mapped to perceptual tone `100 - step / 10`, so 50 is
    /// nearly white and 900 is dark.
    pub fn tonal_palette(&self, state: &DerivationState) -> Vec<StepColor> {
        let base = state.base_color();
        state
            .palette()
            .iter()
            .map(|step| {
                let tone = 100.0 - f64::from(step) / 10.0;
                let color = self.adapter.set_perceptual_tone(&base, tone);
                StepColor::new(step, color)
            })
            .collect()
    }

    pub fn shades(&self, state: &DerivationState) -> Vec<StepColor> {
        self.mix_steps(state, state.shades(), ColorTarget::Shades, Color::BLACK)
    }

    pub fn tints(&self, state: &DerivationState) -> Vec<StepColor> {
        self.mix_steps(state, state.tints(), ColorTarget::Tints, Color::WHITE)
    }

    pub fn derive(&self, state: &DerivationState) -> DerivedPalette {
        DerivedPalette {
            grays: self.grays(state),
            lum_adjusted: self.luminance_adjusted(state),
            tones: self.tones(state),
            palette: self.tonal_palette(state),
            shades: self.shades(state),
            tints: self.tints(state),
        }
    }

    fn mix_steps(
        &self,
        state: &DerivationState,
        steps: &StepList,
        target: ColorTarget,
        toward: Color,
    ) -> Vec<StepColor> {
        let base = state.base_color();
        let space = state.color_space(target);
        steps
            .iter()
            .map(|step| {
                let ratio = f64::from(step) / 100.0;
                let color = self.adapter.mix(&base, &toward, ratio, space);
                StepColor::new(step, color)
            })
            .collect()
    }
}
