// Predefined ontology - the fixed, hand-authored concept set
//
// One root, five difficulty levels, nine recipe categories. The IDs and
// names below are a wire format shared with every downstream consumer of
// the exported graph: they are never derived, never reallocated, and must
// match exactly across runs. Builder logic only ever uses these concepts
// as relationship targets (belongs_to_category, has_difficulty), never as
// sources.

use serde_json::json;

use crate::shared::models::{Concept, ConceptId, ConceptType};

/// Concept ID of the single root concept
pub const ROOT_CONCEPT_ID: &str = "100000000";

/// Difficulty levels 1..=5 with fixed concept IDs and display names
const DIFFICULTY_LEVELS: [(i64, &str, &str); 5] = [
    (1, "610000000", "非常简单"),
    (2, "620000000", "简单"),
    (3, "630000000", "中等"),
    (4, "640000000", "困难"),
    (5, "650000000", "非常困难"),
];

/// The nine canonical recipe categories with fixed concept IDs
const CATEGORIES: [(&str, &str); 9] = [
    ("素菜", "710000000"),
    ("荤菜", "720000000"),
    ("水产", "730000000"),
    ("早餐", "740000000"),
    ("主食", "750000000"),
    ("汤类", "760000000"),
    ("甜品", "770000000"),
    ("饮料", "780000000"),
    ("调料", "790000000"),
];

/// Closed, immutable set of predefined concepts, loaded once at construction
#[derive(Debug, Clone)]
pub struct PredefinedOntology {
    concepts: Vec<Concept>,
}

impl PredefinedOntology {
    /// Build the fixed concept set (stable order: root, difficulties, categories)
    pub fn new() -> Self {
        let mut concepts = Vec::with_capacity(1 + DIFFICULTY_LEVELS.len() + CATEGORIES.len());

        concepts.push(Concept::new(
            ROOT_CONCEPT_ID,
            ConceptType::Root,
            "菜谱知识图谱",
        ));

        for (level, id, name) in DIFFICULTY_LEVELS {
            let mut concept = Concept::new(id, ConceptType::DifficultyLevel, name);
            concept.attributes.insert("level".to_string(), json!(level));
            concepts.push(concept);
        }

        for (name, id) in CATEGORIES {
            concepts.push(Concept::new(id, ConceptType::RecipeCategory, name));
        }

        Self { concepts }
    }

    /// Map a canonical category name to its fixed concept ID
    ///
    /// Unrecognized names yield `None`; the caller must skip the linkage,
    /// never fabricate a relationship.
    pub fn category_id(&self, name: &str) -> Option<&'static str> {
        CATEGORIES
            .iter()
            .find(|(category, _)| *category == name)
            .map(|(_, id)| *id)
    }

    /// Map a difficulty level (1..=5) to its fixed concept ID
    pub fn difficulty_id(&self, level: i64) -> Option<&'static str> {
        DIFFICULTY_LEVELS
            .iter()
            .find(|(l, _, _)| *l == level)
            .map(|(_, id, _)| *id)
    }

    /// All predefined concepts, in stable order
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    /// Whether `concept_id` is one of the predefined concepts
    pub fn contains(&self, concept_id: &ConceptId) -> bool {
        self.concepts.iter().any(|c| &c.concept_id == concept_id)
    }
}

impl Default for PredefinedOntology {
    fn default() -> Self {
        Self::new()
    }
}
