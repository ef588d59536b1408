//! Stock catalog presets.
//!
//! A preset is a JSON array of stock sheets:
//!
//! ```json
//! [
//!   { "name": "MDF", "length": 2800, "width": 2070, "thickness": 19,
//!     "comment": "", "orientation": "LONG" }
//! ]
//! ```

use std::fs;
use std::path::Path;
use thiserror::Error;

use cutlist_core::StockSheet;

/// Errors that can occur while reading or writing a preset.
#[derive(Debug, Error)]
pub enum PresetError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("invalid preset: {0}")]
    InvalidPreset(#[from] cutlist_core::Error),
}

/// Loads and validates a stock catalog.
pub fn load_preset(path: impl AsRef<Path>) -> Result<Vec<StockSheet>, PresetError> {
    let content = fs::read_to_string(path)?;
    let catalog: Vec<StockSheet> = serde_json::from_str(&content)?;
    for sheet in &catalog {
        sheet.validate()?;
    }
    Ok(catalog)
}

/// Writes a stock catalog as pretty-printed JSON.
pub fn save_preset(path: impl AsRef<Path>, catalog: &[StockSheet]) -> Result<(), PresetError> {
    for sheet in catalog {
        sheet.validate()?;
    }
    let json = serde_json::to_string_pretty(catalog)?;
    fs::write(path, json)?;
    Ok(())
}
