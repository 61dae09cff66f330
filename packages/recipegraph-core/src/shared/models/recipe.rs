// Structured recipe record - the extraction-service contract
//
// The extraction service returns loosely-typed JSON; this schema is the
// strict boundary. Every field defaults (empty string, empty vec, zero) so
// a partially filled response never fails the core. Validation happens here,
// at deserialization time, not inside the builder.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One ingredient of a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IngredientRecord {
    pub name: String,
    pub amount: String,
    pub unit: String,
    pub category: String,
    pub is_main: bool,
}

/// One cooking step of a recipe
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StepRecord {
    pub step_number: i64,
    pub description: String,
    /// Cooking methods used in this step
    pub methods: Vec<String>,
    /// Tools required for this step
    pub tools: Vec<String>,
    pub time_estimate: String,
}

/// Structured recipe record produced by the extraction service
///
/// `difficulty` is nominally 1..=5; out-of-range values are tolerated and
/// simply produce no difficulty linkage. `category` is a comma-separated
/// list of canonical category names.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StructuredRecipe {
    pub name: String,
    pub difficulty: i64,
    pub category: String,
    pub cuisine_type: String,
    pub prep_time: String,
    pub cook_time: String,
    pub servings: String,
    pub ingredients: Vec<IngredientRecord>,
    pub steps: Vec<StepRecord>,
    pub tags: Vec<String>,
    /// Accepted at the boundary, not copied onto the recipe concept
    pub nutrition_info: BTreeMap<String, serde_json::Value>,
}

impl StructuredRecipe {
    /// Deserialize from the extraction service's JSON payload,
    /// default-filling every missing field
    pub fn from_json(value: serde_json::Value) -> serde_json::Result<Self> {
        serde_json::from_value(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default() {
        let record = StructuredRecipe::from_json(serde_json::json!({
            "name": "红烧茄子",
            "difficulty": 3
        }))
        .unwrap();

        assert_eq!(record.name, "红烧茄子");
        assert_eq!(record.difficulty, 3);
        assert_eq!(record.category, "");
        assert!(record.ingredients.is_empty());
        assert!(record.steps.is_empty());
        assert!(record.tags.is_empty());
    }

    #[test]
    fn test_missing_name_becomes_empty_string() {
        let record = StructuredRecipe::from_json(serde_json::json!({
            "difficulty": 2
        }))
        .unwrap();
        assert_eq!(record.name, "");
    }

    #[test]
    fn test_full_record() {
        let record = StructuredRecipe::from_json(serde_json::json!({
            "name": "西红柿炒鸡蛋",
            "difficulty": 1,
            "category": "素菜",
            "cuisine_type": "家常菜",
            "servings": "2人份",
            "ingredients": [
                {"name": "西红柿", "amount": "2", "unit": "个", "is_main": true},
                {"name": "鸡蛋", "amount": "3", "unit": "个", "is_main": true}
            ],
            "steps": [
                {"step_number": 1, "description": "打散鸡蛋", "methods": ["搅拌"], "tools": ["筷子"]}
            ],
            "tags": ["快手菜"]
        }))
        .unwrap();

        assert_eq!(record.ingredients.len(), 2);
        assert_eq!(record.ingredients[0].unit, "个");
        assert!(record.ingredients[1].is_main);
        assert_eq!(record.steps[0].step_number, 1);
        assert_eq!(record.tags, vec!["快手菜"]);
    }
}
