//! Snapshot wire format: a JSON array of items in collection order.
//!
//! Decoding is strict — the closed category enum and all required
//! fields are validated, and any failure maps to `MalformedSnapshot`
//! so the store can fall back to the seed set explicitly.

use crate::errors::{Result, VaultKeepError};

use super::item::VaultItem;

/// Serialize the full collection for the slot.
pub fn encode(items: &[VaultItem]) -> Result<String> {
    serde_json::to_string(items)
        .map_err(|e| VaultKeepError::SerializationError(format!("snapshot: {e}")))
}

/// Strictly decode a slot payload back into items.
pub fn decode(payload: &str) -> Result<Vec<VaultItem>> {
    serde_json::from_str(payload).map_err(|e| VaultKeepError::MalformedSnapshot(e.to_string()))
}
