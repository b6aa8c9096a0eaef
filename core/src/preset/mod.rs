use alloc::string::{String, ToString};
use alloc::vec::Vec;
use serde::{Deserialize, Serialize};

use crate::*;
pub use storage::*;

mod storage;

/// Storage key holding the JSON-encoded preset list.
pub const PRESETS_KEY: &str = "difficulty_presets";

/// A named board configuration with the fastest recorded win on it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyPreset {
    pub name: String,
    pub width: Coord,
    pub height: Coord,
    pub mines: CellCount,
    #[serde(default)]
    pub best_time_seconds: Option<u32>,
}

impl DifficultyPreset {
    pub fn config(&self) -> Result<GameConfig> {
        GameConfig::new((self.width, self.height), self.mines)
    }
}

/// Reads the stored preset list. A missing entry is an empty list, a malformed one is an error.
pub fn read_presets<S: BlobStore>(storage: &S) -> core::result::Result<Vec<DifficultyPreset>, PresetError> {
    match storage.load_blob(PRESETS_KEY) {
        Some(json) => serde_json::from_str(&json).map_err(PresetError::Deserialize),
        None => Ok(Vec::new()),
    }
}

/// Ordered list of presets, written through to a [`BlobStore`] on every change.
#[derive(Debug)]
pub struct PresetStore<S> {
    storage: S,
    presets: Vec<DifficultyPreset>,
}

impl<S: BlobStore> PresetStore<S> {
    /// Loads the stored presets, starting empty if they cannot be read.
    pub fn load(storage: S) -> Self {
        let presets = read_presets(&storage).unwrap_or_else(|err| {
            log::warn!("Ignoring stored presets: {}", err);
            Vec::new()
        });
        log::debug!("Loaded {} presets", presets.len());
        Self { storage, presets }
    }

    pub fn list(&self) -> &[DifficultyPreset] {
        &self.presets
    }

    pub fn get(&self, name: &str) -> Option<&DifficultyPreset> {
        self.presets.iter().find(|preset| preset.name == name)
    }

    /// Inserts or replaces the preset called `name`. Replacing keeps the recorded best time and list position.
    pub fn save(
        &mut self,
        name: &str,
        width: Coord,
        height: Coord,
        mines: CellCount,
    ) -> core::result::Result<(), PresetError> {
        if name.trim().is_empty() {
            return Err(PresetError::EmptyName);
        }
        GameConfig::new((width, height), mines)?;

        let preset = DifficultyPreset {
            name: name.to_string(),
            width,
            height,
            mines,
            best_time_seconds: None,
        };
        match self.presets.iter_mut().find(|existing| existing.name == name) {
            Some(existing) => {
                *existing = DifficultyPreset {
                    best_time_seconds: existing.best_time_seconds,
                    ..preset
                };
            }
            None => self.presets.push(preset),
        }
        log::info!("Saved preset {:?} ({}x{}, {} mines)", name, width, height, mines);
        self.persist();
        Ok(())
    }

    /// Removes the preset called `name`, returning whether there was one.
    pub fn delete(&mut self, name: &str) -> bool {
        let before = self.presets.len();
        self.presets.retain(|preset| preset.name != name);
        let removed = self.presets.len() != before;
        if removed {
            log::info!("Deleted preset {:?}", name);
            self.persist();
        }
        removed
    }

    /// Records a winning time, keeping only the lowest. Returns whether the stored best changed.
    pub fn record_best_time(&mut self, name: &str, seconds: u32) -> bool {
        let Some(preset) = self.presets.iter_mut().find(|preset| preset.name == name) else {
            log::debug!("No preset {:?} to record a time for", name);
            return false;
        };

        if preset.best_time_seconds.is_some_and(|best| best <= seconds) {
            return false;
        }

        log::info!(
            "New best time on {:?}: {}s (was {:?})",
            name,
            seconds,
            preset.best_time_seconds
        );
        preset.best_time_seconds = Some(seconds);
        self.persist();
        true
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    fn persist(&mut self) {
        let json = match serde_json::to_string(&self.presets) {
            Ok(json) => json,
            Err(err) => {
                log::error!("{}", PresetError::Serialize(err));
                return;
            }
        };
        if let Err(err) = self.storage.save_blob(PRESETS_KEY, &json) {
            log::error!("Could not save presets: {}", err);
        }
    }
}
