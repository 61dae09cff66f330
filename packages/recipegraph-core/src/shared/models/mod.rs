//! Shared models

mod concept;
mod error;
mod recipe;
mod relationship;

pub use concept::{Concept, ConceptType, SynonymRecord};
pub use error::{ErrorKind, RecipeGraphError, Result};
pub use recipe::{IngredientRecord, StepRecord, StructuredRecipe};
pub use relationship::{Relationship, RelationshipType};

/// Concept identifier type alias
pub type ConceptId = String;

/// Attribute payload attached to concepts and relationships
pub type Attributes = ahash::AHashMap<String, serde_json::Value>;
