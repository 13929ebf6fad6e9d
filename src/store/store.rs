//! High-level vault operations used by CLI commands.
//!
//! `VaultStore` owns the in-memory item collection and mirrors it to an
//! injected `SnapshotSlot` after every mutation.  Item identifiers come
//! from an injected `IdGenerator`, so tests can run deterministically.

use chrono::Utc;

use crate::errors::Result;

use super::ids::IdGenerator;
use super::item::{CategoryFilter, ItemPatch, NewItem, VaultItem};
use super::seed::seed_items;
use super::slot::SnapshotSlot;
use super::snapshot;

/// The main vault handle.  Create one with `VaultStore::open`, then use
/// its methods to manage items.  Every mutating method persists the
/// full collection synchronously before returning.
pub struct VaultStore {
    /// Where the snapshot lives.
    slot: Box<dyn SnapshotSlot>,

    /// Source of fresh item identifiers.
    ids: Box<dyn IdGenerator>,

    /// In-memory collection, in insertion order.
    items: Vec<VaultItem>,

    /// True once the initial load/seed sequence has completed.
    ready: bool,

    /// Why the last open had to fall back to the seed set, if it did.
    recovered_from: Option<String>,
}

impl VaultStore {
    // ------------------------------------------------------------------
    // Construction
    // ------------------------------------------------------------------

    /// Open the vault backed by `slot`.
    ///
    /// An existing payload is strictly decoded; a malformed or
    /// unreadable payload falls back to the default seed set (recorded
    /// in `recovered_from`, never surfaced as an error).  An absent
    /// payload seeds the default set and persists it immediately.
    pub fn open(slot: Box<dyn SnapshotSlot>, ids: Box<dyn IdGenerator>) -> Result<Self> {
        let mut store = Self {
            slot,
            ids,
            items: Vec::new(),
            ready: false,
            recovered_from: None,
        };

        match store.slot.load() {
            Ok(Some(payload)) => match snapshot::decode(&payload) {
                Ok(items) => store.items = items,
                Err(e) => store.seed_after_failure(e.to_string())?,
            },
            Ok(None) => {
                store.items = seed_items();
                store.slot.store(&snapshot::encode(&store.items)?)?;
            }
            Err(e) => store.seed_after_failure(e.to_string())?,
        }

        store.ready = true;
        Ok(store)
    }

    /// Fall back to the seed set, remembering why, and overwrite the
    /// slot so the next open sees a well-formed snapshot.
    fn seed_after_failure(&mut self, reason: String) -> Result<()> {
        self.recovered_from = Some(reason);
        self.items = seed_items();
        self.slot.store(&snapshot::encode(&self.items)?)
    }

    // ------------------------------------------------------------------
    // Mutations
    // ------------------------------------------------------------------

    /// Add a new item: fresh id, both timestamps set to now, appended
    /// at the end of the collection.  Returns the stored item.
    pub fn add_item(&mut self, new: NewItem) -> Result<VaultItem> {
        let now = Utc::now();
        let item = VaultItem {
            id: self.ids.next_id(),
            title: new.title,
            value: new.value,
            category: new.category,
            service: new.service,
            created_at: now,
            updated_at: now,
            favorite: new.favorite,
            note: new.note,
        };

        self.items.push(item.clone());
        self.persist()?;
        Ok(item)
    }

    /// Merge `patch` over the item with `id` and refresh `updated_at`.
    ///
    /// Returns `Ok(false)` without touching anything when the id is
    /// unknown — an absent id is a no-op, not an error.
    pub fn update_item(&mut self, id: &str, patch: ItemPatch) -> Result<bool> {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return Ok(false);
        };

        if let Some(title) = patch.title {
            item.title = title;
        }
        if let Some(value) = patch.value {
            item.value = value;
        }
        if let Some(category) = patch.category {
            item.category = category;
        }
        if let Some(service) = patch.service {
            item.service = service;
        }
        if let Some(favorite) = patch.favorite {
            item.favorite = favorite;
        }
        if let Some(note) = patch.note {
            item.note = Some(note);
        }
        if patch.clear_note {
            item.note = None;
        }
        item.updated_at = Utc::now();

        self.persist()?;
        Ok(true)
    }

    /// Remove the item with `id`.  Survivors keep their order.
    /// Returns `Ok(false)` when the id is unknown.
    pub fn delete_item(&mut self, id: &str) -> Result<bool> {
        let before = self.items.len();
        self.items.retain(|i| i.id != id);
        if self.items.len() == before {
            return Ok(false);
        }

        self.persist()?;
        Ok(true)
    }

    /// Flip the favorite flag on the item with `id` and refresh
    /// `updated_at`.  Returns `Ok(false)` when the id is unknown.
    pub fn toggle_favorite(&mut self, id: &str) -> Result<bool> {
        let Some(item) = self.items.iter_mut().find(|i| i.id == id) else {
            return Ok(false);
        };

        item.favorite = !item.favorite;
        item.updated_at = Utc::now();

        self.persist()?;
        Ok(true)
    }

    // ------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------

    /// All items in insertion order.
    pub fn items(&self) -> &[VaultItem] {
        &self.items
    }

    /// Look up one item by id.
    pub fn get(&self, id: &str) -> Option<&VaultItem> {
        self.items.iter().find(|i| i.id == id)
    }

    /// Items matching the category filter, in original order.
    pub fn items_by_category(&self, filter: CategoryFilter) -> Vec<&VaultItem> {
        match filter {
            CategoryFilter::All => self.items.iter().collect(),
            CategoryFilter::Only(category) => self
                .items
                .iter()
                .filter(|i| i.category == category)
                .collect(),
        }
    }

    /// Items with the favorite flag set, in original order.
    pub fn favorites(&self) -> Vec<&VaultItem> {
        self.items.iter().filter(|i| i.favorite).collect()
    }

    /// Case-insensitive substring search over title, service, and note.
    ///
    /// An empty or whitespace-only query returns the full collection.
    /// Any other query matches as-is, surrounding whitespace included —
    /// trimming applies only to the emptiness check.
    pub fn search(&self, query: &str) -> Vec<&VaultItem> {
        if query.trim().is_empty() {
            return self.items.iter().collect();
        }
        let needle = query.to_lowercase();
        self.items.iter().filter(|i| i.matches(&needle)).collect()
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Number of items in the vault.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// True once the initial load/seed sequence has completed.
    pub fn is_ready(&self) -> bool {
        self.ready
    }

    /// The failure message from the last open, when the snapshot had to
    /// be replaced with the seed set.  This is the diagnostic channel
    /// for the swallowed load failure.
    pub fn recovered_from(&self) -> Option<&str> {
        self.recovered_from.as_deref()
    }

    /// Name of the backing slot (e.g. the snapshot file path).
    pub fn slot_name(&self) -> String {
        self.slot.name()
    }

    // ------------------------------------------------------------------
    // Persistence
    // ------------------------------------------------------------------

    /// Serialize the full collection and overwrite the slot.
    ///
    /// Skipped until `ready`, so the load/seed sequence controls its own
    /// single initial write and an empty not-yet-loaded collection can
    /// never clobber a stored snapshot.
    fn persist(&self) -> Result<()> {
        if !self.ready {
            return Ok(());
        }
        self.slot.store(&snapshot::encode(&self.items)?)
    }
}
