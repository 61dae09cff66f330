// Concept - typed node of the recipe knowledge graph
//
// A concept is created exactly once during graph assembly and never mutated
// afterwards. Identity lives in `concept_id`; everything else is display
// material (name, FSN, synonyms) or a type-specific attribute payload.

use serde::{Deserialize, Serialize};

use super::{Attributes, ConceptId};

/// Concept kind tags
///
/// `CookingMethod` and `CookingTool` are part of the declared ontology even
/// though the current builder keeps methods/tools as text attributes on the
/// cooking-step concept instead of materializing them as nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConceptType {
    Root,
    Recipe,
    Ingredient,
    CookingMethod,
    CookingTool,
    CookingStep,
    DifficultyLevel,
    RecipeCategory,
}

impl ConceptType {
    /// Stable label, used as node label in graph-import exports
    pub fn as_str(&self) -> &'static str {
        match self {
            ConceptType::Root => "Root",
            ConceptType::Recipe => "Recipe",
            ConceptType::Ingredient => "Ingredient",
            ConceptType::CookingMethod => "CookingMethod",
            ConceptType::CookingTool => "CookingTool",
            ConceptType::CookingStep => "CookingStep",
            ConceptType::DifficultyLevel => "DifficultyLevel",
            ConceptType::RecipeCategory => "RecipeCategory",
        }
    }

    /// English gloss appended to the native name to form the FSN
    pub fn gloss(&self) -> &'static str {
        match self {
            ConceptType::Root => "root",
            ConceptType::Recipe => "recipe",
            ConceptType::Ingredient => "ingredient",
            ConceptType::CookingMethod => "cooking method",
            ConceptType::CookingTool => "cooking tool",
            ConceptType::CookingStep => "cooking step",
            ConceptType::DifficultyLevel => "difficulty level",
            ConceptType::RecipeCategory => "recipe category",
        }
    }

    /// snake_case tag, used in export file names
    pub fn file_tag(&self) -> &'static str {
        match self {
            ConceptType::Root => "root",
            ConceptType::Recipe => "recipe",
            ConceptType::Ingredient => "ingredient",
            ConceptType::CookingMethod => "cooking_method",
            ConceptType::CookingTool => "cooking_tool",
            ConceptType::CookingStep => "cooking_step",
            ConceptType::DifficultyLevel => "difficulty_level",
            ConceptType::RecipeCategory => "recipe_category",
        }
    }

    /// All concept types, in declaration order
    pub fn all() -> &'static [ConceptType] {
        &[
            ConceptType::Root,
            ConceptType::Recipe,
            ConceptType::Ingredient,
            ConceptType::CookingMethod,
            ConceptType::CookingTool,
            ConceptType::CookingStep,
            ConceptType::DifficultyLevel,
            ConceptType::RecipeCategory,
        ]
    }
}

impl std::fmt::Display for ConceptType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Alternate name for a concept, tagged with detected language
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymRecord {
    pub term: String,
    /// "zh" or "en"
    pub language: String,
    /// "zh-CN" or "en-US"
    pub language_code: String,
}

impl SynonymRecord {
    pub fn zh(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            language: "zh".to_string(),
            language_code: "zh-CN".to_string(),
        }
    }

    pub fn en(term: impl Into<String>) -> Self {
        Self {
            term: term.into(),
            language: "en".to_string(),
            language_code: "en-US".to_string(),
        }
    }
}

/// Typed, uniquely identified node of the knowledge graph
///
/// # Identity
///
/// - `concept_id` is globally unique within a run and never reassigned,
///   even when processing of a later recipe fails
/// - allocation order reflects processing order, not semantic grouping
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Concept {
    /// Unique identifier (allocator-issued, or fixed for predefined concepts)
    pub concept_id: ConceptId,
    /// Concept kind
    pub concept_type: ConceptType,
    /// Display name (source-language string)
    pub name: String,
    /// Fully specified name: "name (english gloss)"
    pub fsn: String,
    /// Canonical display term (currently equals `name`)
    pub preferred_term: String,
    /// Alternate names, ordered; may be empty
    #[serde(default)]
    pub synonyms: Vec<SynonymRecord>,
    /// Type-specific key/value payload
    #[serde(default)]
    pub attributes: Attributes,
}

impl Concept {
    /// Create a concept with no synonyms and no attributes
    pub fn new(
        concept_id: impl Into<ConceptId>,
        concept_type: ConceptType,
        name: impl Into<String>,
    ) -> Self {
        let name = name.into();
        Self {
            concept_id: concept_id.into(),
            concept_type,
            fsn: format!("{} ({})", name, concept_type.gloss()),
            preferred_term: name.clone(),
            name,
            synonyms: Vec::new(),
            attributes: Attributes::new(),
        }
    }

    /// Attach synonyms (builder style)
    pub fn with_synonyms(mut self, synonyms: Vec<SynonymRecord>) -> Self {
        self.synonyms = synonyms;
        self
    }

    /// Attach an attribute payload (builder style)
    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Look up a string attribute, empty string when absent or non-string
    pub fn attr_str(&self, key: &str) -> &str {
        self.attributes
            .get(key)
            .and_then(|v| v.as_str())
            .unwrap_or("")
    }
}
