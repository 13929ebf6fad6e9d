//! Identifier generation for vault items.

use uuid::Uuid;

/// Produces one globally-unique string identifier per call.
pub trait IdGenerator {
    fn next_id(&mut self) -> String;
}

/// Random v4 UUID identifiers — the production generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIds;

impl IdGenerator for UuidIds {
    fn next_id(&mut self) -> String {
        Uuid::new_v4().to_string()
    }
}

/// Deterministic `id-1`, `id-2`, ... identifiers for tests.
///
/// The `id-` prefix keeps generated ids clear of the literal seed ids.
#[derive(Debug, Default)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> String {
        self.next += 1;
        format!("id-{}", self.next)
    }
}
