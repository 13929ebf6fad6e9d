//! Vault item types stored in a snapshot.
//!
//! Each item holds a display title, the secret value itself (plaintext),
//! a closed category, a service label used for logo lookup and search,
//! and creation/update timestamps.  Timestamps serialize as ISO-8601
//! strings and the two timestamp fields keep the snapshot's camelCase
//! key names (`createdAt` / `updatedAt`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::VaultKeepError;

/// The closed set of item categories.
///
/// Serialized as the lowercase name; anything else in a snapshot is a
/// malformed-snapshot condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Password,
    Api,
    Code,
    Note,
}

impl Category {
    /// The lowercase name used in snapshots and CLI arguments.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Password => "password",
            Category::Api => "api",
            Category::Code => "code",
            Category::Note => "note",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = VaultKeepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "password" => Ok(Category::Password),
            "api" => Ok(Category::Api),
            "code" => Ok(Category::Code),
            "note" => Ok(Category::Note),
            other => Err(VaultKeepError::CommandFailed(format!(
                "unknown category '{other}' — supported: password, api, code, note"
            ))),
        }
    }
}

/// Category selector for list-style reads: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryFilter {
    All,
    Only(Category),
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(c) => f.write_str(c.as_str()),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = VaultKeepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Ok(CategoryFilter::Only(s.parse()?))
    }
}

/// A single vault item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultItem {
    /// Unique stable identifier, assigned at creation, never reassigned.
    pub id: String,

    /// Display name (e.g. "Personal GitHub").
    pub title: String,

    /// The secret payload itself.  Stored in plaintext.
    pub value: String,

    /// One of the closed category set.
    pub category: Category,

    /// Free-text service label, used for logo lookup and search.
    pub service: String,

    /// When this item was created.  Immutable after creation.
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,

    /// When this item was last changed.  Refreshed on every mutation.
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,

    /// User-toggleable favorite flag.
    pub favorite: bool,

    /// Optional free-text annotation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl VaultItem {
    /// Case-insensitive substring match over title, service, and note.
    ///
    /// `needle` must already be lowercased by the caller.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.service.to_lowercase().contains(needle)
            || self
                .note
                .as_ref()
                .is_some_and(|n| n.to_lowercase().contains(needle))
    }
}

/// Fields for a new item — everything except the id and timestamps,
/// which the store assigns.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub title: String,
    pub value: String,
    pub category: Category,
    pub service: String,
    pub favorite: bool,
    pub note: Option<String>,
}

/// A partial update.  `None` fields leave the item untouched; the id
/// and creation timestamp can never change.
#[derive(Debug, Clone, Default)]
pub struct ItemPatch {
    pub title: Option<String>,
    pub value: Option<String>,
    pub category: Option<Category>,
    pub service: Option<String>,
    pub favorite: Option<bool>,
    pub note: Option<String>,
    /// Remove the note entirely.  Wins over `note` when both are set.
    pub clear_note: bool,
}

impl ItemPatch {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.value.is_none()
            && self.category.is_none()
            && self.service.is_none()
            && self.favorite.is_none()
            && self.note.is_none()
            && !self.clear_note
    }
}
