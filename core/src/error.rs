use thiserror::Error;

use crate::Phase;
use crate::preset::StorageError;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(&'static str),
    #[error("Action not allowed while {0:?}")]
    UnexpectedPhase(Phase),
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
    #[error("No preset with that name")]
    UnknownPreset,
    #[error("Unknown phase code {0}")]
    UnknownPhaseCode(i8),
}

pub type Result<T> = core::result::Result<T, GameError>;

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("Preset name must not be blank")]
    EmptyName,
    #[error(transparent)]
    InvalidConfiguration(#[from] GameError),
    #[error("Stored presets are corrupt: {0}")]
    Deserialize(#[source] serde_json::Error),
    #[error("Could not encode presets: {0}")]
    Serialize(#[source] serde_json::Error),
    #[error(transparent)]
    Storage(#[from] StorageError),
}
