//! Integration tests for the VaultKeep store module.

use vaultkeep::store::{
    Category, CategoryFilter, ItemPatch, MemorySlot, NewItem, SequentialIds, VaultStore,
};

/// Helper: open a store over a fresh in-memory slot with deterministic
/// ids, returning a peek handle to the slot alongside the store.
fn open_store() -> (MemorySlot, VaultStore) {
    let slot = MemorySlot::new();
    let store = VaultStore::open(Box::new(slot.clone()), Box::new(SequentialIds::new()))
        .expect("open store");
    (slot, store)
}

/// Helper: a minimal new item with the given title/service.
fn new_item(title: &str, service: &str) -> NewItem {
    NewItem {
        title: title.to_string(),
        value: format!("{title}-value"),
        category: Category::Password,
        service: service.to_string(),
        favorite: false,
        note: None,
    }
}

// ---------------------------------------------------------------------------
// First open seeds the default set
// ---------------------------------------------------------------------------

#[test]
fn empty_slot_seeds_three_default_items() {
    let (slot, store) = open_store();

    assert!(store.is_ready());
    assert_eq!(store.len(), 3);

    // Ids are pairwise distinct.
    let ids: std::collections::HashSet<&str> =
        store.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids.len(), 3);

    // Favorites come out as [true, false, true].
    let favs: Vec<bool> = store.items().iter().map(|i| i.favorite).collect();
    assert_eq!(favs, vec![true, false, true]);

    // The seed was persisted immediately.
    let payload = slot.snapshot().expect("seed persisted");
    assert!(payload.contains("Personal GitHub"));
}

#[test]
fn seed_is_not_treated_as_recovery() {
    let (_slot, store) = open_store();
    assert!(store.recovered_from().is_none());
}

// ---------------------------------------------------------------------------
// Add
// ---------------------------------------------------------------------------

#[test]
fn adds_grow_collection_with_distinct_ids() {
    let (_slot, mut store) = open_store();
    let before = store.len();

    for n in 0..5 {
        store.add_item(new_item(&format!("Item {n}"), "svc")).unwrap();
    }

    assert_eq!(store.len(), before + 5);

    let ids: std::collections::HashSet<&str> =
        store.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids.len(), store.len(), "ids must be pairwise distinct");
}

#[test]
fn add_sets_both_timestamps_and_appends() {
    let (slot, mut store) = open_store();

    let item = store.add_item(new_item("Workspace Login", "notion")).unwrap();
    assert_eq!(item.created_at, item.updated_at);

    // Appended at the end, and written back to the slot.
    assert_eq!(store.items().last().unwrap().id, item.id);
    assert!(slot.snapshot().unwrap().contains("Workspace Login"));
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[test]
fn update_merges_patch_and_refreshes_updated_at() {
    let (_slot, mut store) = open_store();
    let item = store.add_item(new_item("Old Title", "github")).unwrap();

    let changed = store
        .update_item(
            &item.id,
            ItemPatch {
                title: Some("New Title".to_string()),
                note: Some("rotated".to_string()),
                ..ItemPatch::default()
            },
        )
        .unwrap();
    assert!(changed);

    let updated = store.get(&item.id).unwrap();
    assert_eq!(updated.title, "New Title");
    assert_eq!(updated.note.as_deref(), Some("rotated"));
    // Untouched fields survive, created_at never moves.
    assert_eq!(updated.value, item.value);
    assert_eq!(updated.created_at, item.created_at);
    assert!(updated.updated_at >= updated.created_at);
}

#[test]
fn clear_note_removes_annotation() {
    let (_slot, mut store) = open_store();
    let item = store
        .add_item(NewItem {
            note: Some("temporary".to_string()),
            ..new_item("Annotated", "svc")
        })
        .unwrap();
    assert!(store.get(&item.id).unwrap().note.is_some());

    let changed = store
        .update_item(
            &item.id,
            ItemPatch {
                clear_note: true,
                ..ItemPatch::default()
            },
        )
        .unwrap();

    assert!(changed);
    assert_eq!(store.get(&item.id).unwrap().note, None);
}

#[test]
fn update_unknown_id_is_a_silent_noop() {
    let (slot, mut store) = open_store();
    let payload_before = slot.snapshot();

    let changed = store
        .update_item(
            "no-such-id",
            ItemPatch {
                title: Some("x".to_string()),
                ..ItemPatch::default()
            },
        )
        .unwrap();

    assert!(!changed);
    assert_eq!(store.len(), 3);
    // No write-back happened either.
    assert_eq!(slot.snapshot(), payload_before);
}

#[test]
fn favoriting_via_update_is_idempotent() {
    let (_slot, mut store) = open_store();
    let a = store.add_item(new_item("A", "svc")).unwrap();

    let favorite_patch = || ItemPatch {
        favorite: Some(true),
        ..ItemPatch::default()
    };

    store.update_item(&a.id, favorite_patch()).unwrap();
    store.update_item(&a.id, favorite_patch()).unwrap();

    // Seed already contributes two favorites; A appears exactly once.
    let favorites = store.favorites();
    assert_eq!(favorites.iter().filter(|i| i.id == a.id).count(), 1);
    assert!(favorites.iter().all(|i| i.favorite));
}

// ---------------------------------------------------------------------------
// Delete
// ---------------------------------------------------------------------------

#[test]
fn delete_twice_second_is_a_noop() {
    let (_slot, mut store) = open_store();
    let item = store.add_item(new_item("Doomed", "svc")).unwrap();
    let len_with_item = store.len();

    assert!(store.delete_item(&item.id).unwrap());
    assert_eq!(store.len(), len_with_item - 1);

    assert!(!store.delete_item(&item.id).unwrap());
    assert_eq!(store.len(), len_with_item - 1);
}

#[test]
fn delete_preserves_order_of_survivors() {
    let (_slot, mut store) = open_store();
    let a = store.add_item(new_item("A", "svc")).unwrap();
    let b = store.add_item(new_item("B", "svc")).unwrap();
    let c = store.add_item(new_item("C", "svc")).unwrap();

    store.delete_item(&b.id).unwrap();

    let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
    let pos_a = ids.iter().position(|id| *id == a.id).unwrap();
    let pos_c = ids.iter().position(|id| *id == c.id).unwrap();
    assert!(pos_a < pos_c);
    assert!(!ids.contains(&b.id.as_str()));
}

// ---------------------------------------------------------------------------
// Toggle favorite
// ---------------------------------------------------------------------------

#[test]
fn toggle_favorite_flips_flag_both_ways() {
    let (_slot, mut store) = open_store();
    let item = store.add_item(new_item("Togglable", "svc")).unwrap();
    assert!(!item.favorite);

    assert!(store.toggle_favorite(&item.id).unwrap());
    assert!(store.get(&item.id).unwrap().favorite);

    assert!(store.toggle_favorite(&item.id).unwrap());
    assert!(!store.get(&item.id).unwrap().favorite);
}

#[test]
fn toggle_favorite_unknown_id_is_a_noop() {
    let (_slot, mut store) = open_store();
    assert!(!store.toggle_favorite("ghost").unwrap());
}

// ---------------------------------------------------------------------------
// Category and favorite reads
// ---------------------------------------------------------------------------

#[test]
fn category_all_returns_everything_in_order() {
    let (_slot, store) = open_store();

    let all = store.items_by_category(CategoryFilter::All);
    let ids: Vec<&str> = all.iter().map(|i| i.id.as_str()).collect();
    let direct: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
    assert_eq!(ids, direct);
}

#[test]
fn category_filter_returns_only_matching_items() {
    let (_slot, mut store) = open_store();
    store
        .add_item(NewItem {
            category: Category::Api,
            ..new_item("Stripe Key", "stripe")
        })
        .unwrap();

    let api_items = store.items_by_category(CategoryFilter::Only(Category::Api));
    assert!(api_items.iter().all(|i| i.category == Category::Api));
    // Seed contributes one api item (Firebase), plus the one just added.
    assert_eq!(api_items.len(), 2);
}

#[test]
fn favorites_returns_exactly_flagged_items() {
    let (_slot, store) = open_store();
    let favorites = store.favorites();
    assert_eq!(favorites.len(), 2);
    assert!(favorites.iter().all(|i| i.favorite));
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

#[test]
fn empty_or_whitespace_query_returns_full_collection() {
    let (_slot, store) = open_store();
    assert_eq!(store.search("").len(), store.len());
    assert_eq!(store.search("   ").len(), store.len());
}

#[test]
fn search_is_case_insensitive_over_title_service_and_note() {
    let (_slot, store) = open_store();

    // Service match, query uppercased.
    let by_service = store.search("GITHUB");
    assert_eq!(by_service.len(), 1);
    assert_eq!(by_service[0].service, "github");

    // Title substring.
    assert_eq!(store.search("instagram acc").len(), 1);

    // Note substring (only the Firebase seed item has a note).
    let by_note = store.search("development project");
    assert_eq!(by_note.len(), 1);
    assert_eq!(by_note[0].service, "firebase");
}

#[test]
fn whitespace_padded_query_is_matched_verbatim() {
    let (_slot, store) = open_store();

    // "hub" alone matches the github seed item...
    assert_eq!(store.search("hub").len(), 1);

    // ...but padding is part of the query, and no field contains " hub ".
    assert!(store.search(" hub ").is_empty());
    assert!(store.search("github ").is_empty());
}

#[test]
fn search_with_no_match_returns_empty() {
    let (_slot, store) = open_store();
    assert!(store.search("zzz-nothing").is_empty());
}

// ---------------------------------------------------------------------------
// Persistence round-trip
// ---------------------------------------------------------------------------

#[test]
fn reopen_preserves_content_and_order() {
    let slot = MemorySlot::new();

    let mut store = VaultStore::open(Box::new(slot.clone()), Box::new(SequentialIds::new()))
        .expect("first open");
    store.add_item(new_item("Extra", "vercel")).unwrap();
    let items_before = store.items().to_vec();
    drop(store);

    let store2 = VaultStore::open(Box::new(slot.clone()), Box::new(SequentialIds::new()))
        .expect("second open");

    assert!(store2.recovered_from().is_none());
    assert_eq!(store2.items(), items_before.as_slice());
}

// ---------------------------------------------------------------------------
// Malformed snapshot fallback
// ---------------------------------------------------------------------------

#[test]
fn garbage_snapshot_falls_back_to_seed() {
    let slot = MemorySlot::with_payload("definitely not json");

    let store = VaultStore::open(Box::new(slot.clone()), Box::new(SequentialIds::new()))
        .expect("open recovers");

    assert_eq!(store.len(), 3);
    assert!(store.recovered_from().is_some());

    // The slot was rewritten with a well-formed snapshot.
    let store2 =
        VaultStore::open(Box::new(slot), Box::new(SequentialIds::new())).expect("reopen");
    assert!(store2.recovered_from().is_none());
    assert_eq!(store2.len(), 3);
}

#[test]
fn unknown_category_in_snapshot_falls_back_to_seed() {
    let payload = r#"[{
        "id": "x", "title": "t", "value": "v",
        "category": "wallet", "service": "s",
        "createdAt": "2024-01-01T00:00:00Z",
        "updatedAt": "2024-01-01T00:00:00Z",
        "favorite": false
    }]"#;
    let slot = MemorySlot::with_payload(payload);

    let store =
        VaultStore::open(Box::new(slot), Box::new(SequentialIds::new())).expect("open recovers");

    assert!(store.recovered_from().is_some());
    assert_eq!(store.len(), 3);
    assert!(store.get("x").is_none());
}
