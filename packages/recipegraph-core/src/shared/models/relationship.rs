// Relationship - directed, typed edge between two concepts
//
// Relationship IDs are run-local and batch-global: `R_000001`, `R_000002`, …
// in creation order across the whole batch, never per-recipe.

use serde::{Deserialize, Serialize};

use super::{Attributes, ConceptId};

/// Fixed set of relationship types
///
/// The numeric-string codes are a wire format shared with downstream
/// consumers of the exported graph; they must never change.
///
/// `RequiresTool` and `UsesMethod` are declared but not emitted by the
/// current builder: tool/method names are flattened into the cooking-step
/// concept's text attributes instead (see DESIGN.md).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipType {
    HasIngredient,
    RequiresTool,
    HasStep,
    BelongsToCategory,
    HasDifficulty,
    UsesMethod,
    HasAmount,
    StepFollows,
    ServesPeople,
    CookingTime,
    PrepTime,
}

impl RelationshipType {
    /// Stable numeric-string wire code
    pub fn code(&self) -> &'static str {
        match self {
            RelationshipType::HasIngredient => "810000001",
            RelationshipType::RequiresTool => "810000002",
            RelationshipType::HasStep => "810000003",
            RelationshipType::BelongsToCategory => "810000004",
            RelationshipType::HasDifficulty => "810000005",
            RelationshipType::UsesMethod => "810000006",
            RelationshipType::HasAmount => "810000007",
            RelationshipType::StepFollows => "810000008",
            RelationshipType::ServesPeople => "810000009",
            RelationshipType::CookingTime => "810000010",
            RelationshipType::PrepTime => "810000011",
        }
    }

    /// snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            RelationshipType::HasIngredient => "has_ingredient",
            RelationshipType::RequiresTool => "requires_tool",
            RelationshipType::HasStep => "has_step",
            RelationshipType::BelongsToCategory => "belongs_to_category",
            RelationshipType::HasDifficulty => "has_difficulty",
            RelationshipType::UsesMethod => "uses_method",
            RelationshipType::HasAmount => "has_amount",
            RelationshipType::StepFollows => "step_follows",
            RelationshipType::ServesPeople => "serves_people",
            RelationshipType::CookingTime => "cooking_time",
            RelationshipType::PrepTime => "prep_time",
        }
    }

    /// Upper-case relationship type for graph-import exports
    pub fn import_name(&self) -> &'static str {
        match self {
            RelationshipType::HasIngredient => "HAS_INGREDIENT",
            RelationshipType::RequiresTool => "REQUIRES_TOOL",
            RelationshipType::HasStep => "HAS_STEP",
            RelationshipType::BelongsToCategory => "BELONGS_TO_CATEGORY",
            RelationshipType::HasDifficulty => "HAS_DIFFICULTY",
            RelationshipType::UsesMethod => "USES_METHOD",
            RelationshipType::HasAmount => "HAS_AMOUNT",
            RelationshipType::StepFollows => "STEP_FOLLOWS",
            RelationshipType::ServesPeople => "SERVES_PEOPLE",
            RelationshipType::CookingTime => "COOKING_TIME",
            RelationshipType::PrepTime => "PREP_TIME",
        }
    }

    /// All relationship types, in declaration order
    pub fn all() -> &'static [RelationshipType] {
        &[
            RelationshipType::HasIngredient,
            RelationshipType::RequiresTool,
            RelationshipType::HasStep,
            RelationshipType::BelongsToCategory,
            RelationshipType::HasDifficulty,
            RelationshipType::UsesMethod,
            RelationshipType::HasAmount,
            RelationshipType::StepFollows,
            RelationshipType::ServesPeople,
            RelationshipType::CookingTime,
            RelationshipType::PrepTime,
        ]
    }
}

impl std::fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Directed, typed edge carrying an optional attribute payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Relationship {
    /// Run-local sequential ID, zero-padded (`R_000001`, …)
    pub relationship_id: String,
    /// Edge type
    pub relationship_type: RelationshipType,
    /// Source concept ID (must exist in the store at creation time)
    pub source_id: ConceptId,
    /// Target concept ID (must exist in the store at creation time)
    pub target_id: ConceptId,
    /// Edge-specific payload (amount/unit for has_ingredient, step_order for has_step)
    #[serde(default)]
    pub attributes: Attributes,
}

impl Relationship {
    pub fn new(
        relationship_id: impl Into<String>,
        relationship_type: RelationshipType,
        source_id: impl Into<ConceptId>,
        target_id: impl Into<ConceptId>,
    ) -> Self {
        Self {
            relationship_id: relationship_id.into(),
            relationship_type,
            source_id: source_id.into(),
            target_id: target_id.into(),
            attributes: Attributes::new(),
        }
    }

    /// Attach an attribute payload (builder style)
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}
