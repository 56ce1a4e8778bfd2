//! One user's working palette: an adapter, the state and its presets.

use chromatone_contracts::{ColorAdapter, KeyValueStore};
use chromatone_model::{Color, GrayEntry, StepColor};
use serde_json::Value;

use crate::codec;
use crate::config::ChromatoneConfig;
use crate::engine::{DerivationEngine, DerivedPalette};
use crate::error::Result;
use crate::presets::PresetStore;
use crate::state::DerivationState;

/// Owns the state and routes persistence through a single store.
///
/// The state snapshot and the presets share the store; they are told apart
/// by key (`state_key` versus `preset_prefix` from the config).
#[derive(Debug)]
pub struct PaletteSession<A: ColorAdapter, S: KeyValueStore> {
    adapter: A,
    state: DerivationState,
    presets: PresetStore<S>,
    config: ChromatoneConfig,
}

impl<A: ColorAdapter, S: KeyValueStore> PaletteSession<A, S> {
    /// Start from the stock parameters and a random base color.
    pub fn new(adapter: A, store: S, config: ChromatoneConfig) -> Self {
        let state = DerivationState::new(adapter.random());
        Self::with_state(adapter, store, config, state)
    }

    pub fn with_state(
        adapter: A,
        store: S,
        config: ChromatoneConfig,
        state: DerivationState,
    ) -> Self {
        let presets =
            PresetStore::with_prefix(store, config.preset_prefix.clone());
        Self {
            adapter,
            state,
            presets,
            config,
        }
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    pub fn config(&self) -> &ChromatoneConfig {
        &self.config
    }

    pub fn state(&self) -> &DerivationState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut DerivationState {
        &mut self.state
    }

    pub fn engine(&self) -> DerivationEngine<'_, A> {
        DerivationEngine::new(&self.adapter)
    }

    pub fn presets(&self) -> &PresetStore<S> {
        &self.presets
    }

    pub fn presets_mut(&mut self) -> &mut PresetStore<S> {
        &mut self.presets
    }

    /// Parse `text` with the session's adapter and make it the base color.
    pub fn set_base_color_str(&mut self, text: &str) -> Result<Color> {
        let color = self.adapter.parse(text)?;
        self.state.set_base_color(color);
        Ok(color)
    }

    pub fn grays(&self) -> Vec<GrayEntry> {
        self.engine().grays(&self.state)
    }

    pub fn luminance_adjusted(&self) -> Vec<Color> {
        self.engine().luminance_adjusted(&self.state)
    }

    pub fn tones(&self) -> Vec<Color> {
        self.engine().tones(&self.state)
    }

    pub fn tonal_palette(&self) -> Vec<StepColor> {
        self.engine().tonal_palette(&self.state)
    }

    pub fn shades(&self) -> Vec<StepColor> {
        self.engine().shades(&self.state)
    }

    pub fn tints(&self) -> Vec<StepColor> {
        self.engine().tints(&self.state)
    }

    pub fn derive(&self) -> DerivedPalette {
        self.engine().derive(&self.state)
    }

    pub fn state_json(&self) -> Result<String> {
        codec::state_json(&self.state)
    }

    /// Shareable base64 form of the full state.
    pub fn base64(&self) -> Result<String> {
        codec::encode_base64(&self.state)
    }

    /// State and derived outputs projected for display, as JSON text.
    pub fn export(&self) -> Result<String> {
        codec::export(&self.state, &self.engine())
    }

    fn storage_key<'a>(&'a self, name: Option<&'a str>) -> &'a str {
        name.unwrap_or(&self.config.state_key)
    }

    pub fn save_to_storage(&mut self, name: Option<&str>) -> Result<()> {
        let key = self.storage_key(name).to_string();
        codec::save_to_storage(self.presets.storage_mut(), &key, &self.state)
    }

    pub fn load_from_storage(&mut self, name: Option<&str>) -> bool {
        let key = self.storage_key(name).to_string();
        codec::load_from_storage(self.presets.storage(), &key, &mut self.state)
    }

    pub fn load_from_base64(&mut self, text: &str) -> bool {
        codec::load_from_base64(text, &mut self.state)
    }

    pub fn load_value(&mut self, value: Value) -> bool {
        codec::load(value, &mut self.state)
    }

    pub fn save_preset(&mut self, name: Option<&str>) -> Result<bool> {
        self.presets.save_as(name, &self.state)
    }

    /// Save under the preset form's typed name.
    pub fn save_new_preset(&mut self) -> Result<bool> {
        self.presets.save(&self.state)
    }

    pub fn load_preset(&mut self, name: &str) -> bool {
        self.presets.load(name, &mut self.state)
    }

    /// Apply whichever preset the form currently selects.
    pub fn load_selected_preset(&mut self) -> bool {
        let name = self.presets.selected_preset_name.clone();
        self.load_preset(&name)
    }
}
