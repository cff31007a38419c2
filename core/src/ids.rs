//! Fixture ID allocation.
//!
//! `IdFactory` is the monotonic allocator, seeded from the highest ID
//! already present in any loaded replica. `OnceId` memoizes a single
//! fresh ID across an operation that touches many replicas, so every
//! replica that needs a new ID for the same logical entity gets the
//! same one.

use crate::{replica::ReplicaSet, types::FixtureId};

#[derive(Debug, Clone, Default)]
pub struct IdFactory {
    next: FixtureId,
}

impl IdFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start allocating above every ID present in the set.
    pub fn seeded_from(set: &ReplicaSet) -> Self {
        let next = set.max_id().map_or(0, |max| max + 1);
        log::debug!("ids: seeded allocator at {next}");
        Self { next }
    }

    pub fn create_id(&mut self) -> FixtureId {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Record an ID that entered the world from elsewhere.
    pub fn register(&mut self, id: FixtureId) {
        if id >= self.next {
            self.next = id + 1;
        }
    }
}

/// Wraps a zero-argument ID source. The first `get` calls the source;
/// every later `get` returns that same value.
pub struct OnceId<F> {
    source: F,
    value:  Option<FixtureId>,
}

impl<F: FnMut() -> FixtureId> OnceId<F> {
    pub fn new(source: F) -> Self {
        Self { source, value: None }
    }

    pub fn get(&mut self) -> FixtureId {
        if let Some(id) = self.value {
            return id;
        }
        let id = (self.source)();
        self.value = Some(id);
        id
    }

    /// Whether the source has been consulted yet.
    pub fn is_generated(&self) -> bool {
        self.value.is_some()
    }
}
