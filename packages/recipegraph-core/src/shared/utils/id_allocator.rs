//! ID allocation
//!
//! Issues globally unique, monotonically increasing identifiers for concepts
//! and relationships. Plain sequential counters, run-scoped: one allocator
//! pair per batch, single writer (see the concurrency notes in DESIGN.md).
//! IDs are never reused, even when processing of a document fails after
//! allocation.

use crate::shared::models::ConceptId;

/// Base of the concept ID range; the first issued ID is `base + 1`
pub const CONCEPT_ID_BASE: u64 = 201_000_000;

/// Issues concept IDs as decimal strings, starting at a fixed base
///
/// Deterministic given call count: the k-th call after construction
/// (1-indexed) returns `base + k`.
#[derive(Debug)]
pub struct ConceptIdAllocator {
    current: u64,
}

impl ConceptIdAllocator {
    pub fn new() -> Self {
        Self::with_base(CONCEPT_ID_BASE)
    }

    /// Start from a custom base; used to assign disjoint ranges when
    /// several stores are merged after parallel processing
    pub fn with_base(base: u64) -> Self {
        Self { current: base }
    }

    /// Issue the next concept ID; never returns the same value twice
    pub fn next(&mut self) -> ConceptId {
        self.current += 1;
        self.current.to_string()
    }
}

impl Default for ConceptIdAllocator {
    fn default() -> Self {
        Self::new()
    }
}

/// Issues relationship IDs `R_000001`, `R_000002`, …
///
/// The counter is batch-global: it keeps increasing across recipes, never
/// resetting per recipe.
#[derive(Debug, Default)]
pub struct RelationshipIdAllocator {
    count: u64,
}

impl RelationshipIdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next relationship ID, zero-padded to six digits
    pub fn next(&mut self) -> String {
        self.count += 1;
        format!("R_{:06}", self.count)
    }
}
