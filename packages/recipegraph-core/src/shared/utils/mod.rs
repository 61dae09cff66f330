//! Shared utilities

mod id_allocator;

pub use id_allocator::{ConceptIdAllocator, RelationshipIdAllocator, CONCEPT_ID_BASE};
