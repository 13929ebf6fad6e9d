//! Store module — the vault item collection and its persistence.
//!
//! This module provides:
//! - `VaultItem`, `Category`, and the patch/new-item types (`item`)
//! - The default seed set (`seed`)
//! - The snapshot slot abstraction and its file/memory backends (`slot`)
//! - The JSON snapshot wire format (`snapshot`)
//! - Item identifier generation (`ids`)
//! - The high-level `VaultStore` (`store`)

pub mod ids;
pub mod item;
pub mod seed;
pub mod slot;
pub mod snapshot;
pub mod store;

// Re-export the most commonly used items.
pub use ids::{IdGenerator, SequentialIds, UuidIds};
pub use item::{Category, CategoryFilter, ItemPatch, NewItem, VaultItem};
pub use slot::{FileSlot, MemorySlot, SnapshotSlot};
pub use store::VaultStore;
