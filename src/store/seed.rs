//! The default seed set written to a fresh (or unreadable) slot.

use chrono::Utc;

use super::item::{Category, VaultItem};

/// Three example records spanning the password and api categories.
///
/// Ids are the literal `"1"`/`"2"`/`"3"`; both timestamps are set to
/// the moment of seeding.
pub fn seed_items() -> Vec<VaultItem> {
    let now = Utc::now();
    vec![
        VaultItem {
            id: "1".to_string(),
            title: "Personal GitHub".to_string(),
            value: "gh_sample_password123".to_string(),
            category: Category::Password,
            service: "github".to_string(),
            created_at: now,
            updated_at: now,
            favorite: true,
            note: None,
        },
        VaultItem {
            id: "2".to_string(),
            title: "Instagram Account".to_string(),
            value: "insta_sample_password456".to_string(),
            category: Category::Password,
            service: "instagram".to_string(),
            created_at: now,
            updated_at: now,
            favorite: false,
            note: None,
        },
        VaultItem {
            id: "3".to_string(),
            title: "Firebase API Key".to_string(),
            value: "AIzaSyBxxxxxxxxxxxxxxxxxxxxxxxxxxx".to_string(),
            category: Category::Api,
            service: "firebase".to_string(),
            created_at: now,
            updated_at: now,
            favorite: true,
            note: Some("Development project key".to_string()),
        },
    ]
}
