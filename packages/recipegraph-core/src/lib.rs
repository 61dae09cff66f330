/*
 * Recipegraph Core - Recipe Knowledge Graph Assembly Engine
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Common models (Concept, Relationship, StructuredRecipe)
 * - features/    : Vertical slices (ontology → synonyms → graph_builder)
 *
 * The engine turns structured recipe records (produced by an external
 * extraction service) into a typed knowledge graph: concepts with globally
 * unique IDs, typed relationships with referential integrity against the
 * store, and deterministic linkage into a fixed predefined ontology.
 */

/// Shared models and utilities
pub mod shared;

/// Feature modules (ontology, synonym generation, graph assembly)
pub mod features;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use shared::models::{
    Attributes, Concept, ConceptId, ConceptType, ErrorKind, IngredientRecord, RecipeGraphError,
    Relationship, RelationshipType, Result, StepRecord, StructuredRecipe, SynonymRecord,
};
pub use shared::utils::{ConceptIdAllocator, RelationshipIdAllocator, CONCEPT_ID_BASE};

pub use features::graph_builder::{GraphStore, RecipeGraphBuilder};
pub use features::ontology::PredefinedOntology;
pub use features::synonyms::SynonymGenerator;
