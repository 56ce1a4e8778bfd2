//! Named parameter snapshots.
//!
//! A preset is a state record with `baseColor` left out, stored under
//! `<prefix><name>`. Loading a preset changes every parameter it carries but
//! never the base color.

use std::collections::BTreeSet;

use chromatone_contracts::KeyValueStore;
use tracing::{debug, error, info, warn};

use crate::codec::{self, StateField};
use crate::error::Result;
use crate::state::DerivationState;

pub const DEFAULT_PRESET_PREFIX: &str = "PRESET_";
/// Always listed, whether or not it has been saved.
pub const DEFAULT_PRESET_NAME: &str = "default";

#[derive(Debug)]
pub struct PresetStore<S: KeyValueStore> {
    storage: S,
    prefix: String,
    /// Name typed for the next [`PresetStore::save`].
    pub new_preset_name: String,
    pub selected_preset_name: String,
    all_names: BTreeSet<String>,
}

impl<S: KeyValueStore> PresetStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_prefix(storage, DEFAULT_PRESET_PREFIX)
    }

    pub fn with_prefix(storage: S, prefix: impl Into<String>) -> Self {
        Self {
            storage,
            prefix: prefix.into(),
            new_preset_name: String::new(),
            selected_preset_name: DEFAULT_PRESET_NAME.to_string(),
            all_names: BTreeSet::from([DEFAULT_PRESET_NAME.to_string()]),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn key(&self, name: &str) -> String {
        format!("{}{}", self.prefix, name)
    }

    /// Save under `new_preset_name`, select it, then clear the input.
    ///
    /// The typed name is kept when the write fails.
    pub fn save(&mut self, state: &DerivationState) -> Result<bool> {
        let name = self.new_preset_name.clone();
        let saved = self.save_as(Some(name.as_str()), state)?;
        self.new_preset_name.clear();
        if saved {
            self.selected_preset_name = name;
        }
        Ok(saved)
    }

    /// Store every parameter except the base color under `name`.
    ///
    /// A missing or empty name writes nothing and returns `Ok(false)`. An
    /// existing preset of the same name is overwritten. Once the write has
    /// succeeded the result is `Ok(true)`, even if re-listing the names
    /// afterwards fails.
    pub fn save_as(
        &mut self,
        name: Option<&str>,
        state: &DerivationState,
    ) -> Result<bool> {
        let Some(name) = name.filter(|name| !name.is_empty()) else {
            warn!("Ignoring preset save without a name");
            return Ok(false);
        };

        let record = codec::serialize(state, &[StateField::BaseColor]);
        let text = serde_json::to_string(&record)?;
        let key = self.key(name);
        self.storage.set(&key, &text)?;
        info!(preset = name, "Saved preset");

        if let Err(err) = self.refresh_names() {
            warn!(
                preset = name,
                error = %err,
                "Saved preset but could not refresh names"
            );
        }
        Ok(true)
    }

    /// Apply the preset `name` to `state`.
    ///
    /// Returns `false` when no such preset is stored or when the stored
    /// record cannot be read. Either way the state is unchanged.
    pub fn load(&self, name: &str, state: &mut DerivationState) -> bool {
        let key = self.key(name);
        let text = match self.storage.get(&key) {
            Ok(Some(text)) => text,
            Ok(None) => {
                debug!(preset = name, "No such preset");
                return false;
            }
            Err(err) => {
                error!(preset = name, error = %err, "Failed to load preset");
                return false;
            }
        };

        let value = match codec::parse_json(&text) {
            Ok(value) => value,
            Err(err) => {
                error!(preset = name, error = %err, "Failed to load preset");
                return false;
            }
        };

        // presets never carry a base color; drop one written by hand
        let value = match value {
            serde_json::Value::Object(mut map) => {
                map.remove(StateField::BaseColor.key());
                serde_json::Value::Object(map)
            }
            other => other,
        };
        codec::load(value, state)
    }

    /// Names of stored presets plus `"default"`.
    pub fn list_names(&self) -> Result<BTreeSet<String>> {
        let mut names: BTreeSet<String> = self
            .storage
            .keys()?
            .into_iter()
            .filter_map(|key| {
                key.strip_prefix(&self.prefix).map(str::to_owned)
            })
            .collect();
        names.insert(DEFAULT_PRESET_NAME.to_string());
        Ok(names)
    }

    /// Re-read the stored names into [`PresetStore::all_names`].
    pub fn refresh_names(&mut self) -> Result<&BTreeSet<String>> {
        self.all_names = self.list_names()?;
        Ok(&self.all_names)
    }

    /// Names as of the last save or [`PresetStore::refresh_names`].
    pub fn all_names(&self) -> &BTreeSet<String> {
        &self.all_names
    }
}
