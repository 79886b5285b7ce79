use std::path::Path;

use imfridge_shared::{ItemRecord, PerishableItem};
use serde_json::Value;

use crate::error::AppError;

/// Load an item snapshot (a JSON array of item records) from disk
pub fn load_items(path: impl AsRef<Path>) -> Result<Vec<PerishableItem>, AppError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| AppError::ItemSourceError {
        path: path.display().to_string(),
        source,
    })?;

    let items = parse_items(&raw)?;

    tracing::info!(path = %path.display(), items = items.len(), "Item snapshot loaded");

    Ok(items)
}

/// Parse an item snapshot.
///
/// The snapshot itself must be a JSON array; records inside it that do not
/// look like items are skipped so one bad row cannot blank the calendar.
pub fn parse_items(raw: &str) -> Result<Vec<PerishableItem>, AppError> {
    let values: Vec<Value> = serde_json::from_str(raw)?;

    let items = values
        .into_iter()
        .enumerate()
        .filter_map(
            |(index, value)| match serde_json::from_value::<ItemRecord>(value) {
                Ok(record) => Some(PerishableItem::from(record)),
                Err(err) => {
                    tracing::warn!(index, err = %err, "Skipping malformed item record");

                    None
                }
            },
        )
        .collect();

    Ok(items)
}
