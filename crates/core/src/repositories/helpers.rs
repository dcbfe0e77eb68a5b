//! Storage-related utilities shared by the settings services.

use crate::{SettingsError, SettingsResult};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Reads and deserializes a JSON settings file.
pub(crate) fn read_json<T: DeserializeOwned>(path: &Path) -> SettingsResult<T> {
    let raw = fs::read_to_string(path).map_err(SettingsError::FileRead)?;
    serde_json::from_str(&raw).map_err(SettingsError::Deserialization)
}

/// Serializes and writes a JSON settings file.
pub(crate) fn write_json<T: Serialize>(path: &Path, value: &T) -> SettingsResult<()> {
    let raw = serde_json::to_string_pretty(value).map_err(SettingsError::Serialization)?;
    fs::write(path, raw).map_err(SettingsError::FileWrite)
}
