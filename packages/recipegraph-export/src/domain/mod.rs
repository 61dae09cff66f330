//! Row and column contracts for tabular export
//!
//! Pure row building: no I/O here. Column orders per concept type and for
//! relationships are fixed; changing them breaks downstream importers.

use recipegraph_core::{Concept, ConceptType, Relationship, SynonymRecord};

/// Delimiter for flattened multi-valued cells (synonyms, tags, methods, tools)
pub const MULTI_VALUE_DELIMITER: &str = ";";

/// Columns shared by every concept row, in order
pub const CONCEPT_BASE_COLUMNS: [&str; 6] = [
    "concept_id",
    "concept_type",
    "name",
    "fsn",
    "preferred_term",
    "synonyms",
];

/// Flattened relationship attribute columns, in order
pub const RELATIONSHIP_ATTR_COLUMNS: [&str; 3] = ["amount", "unit", "step_order"];

/// Type-specific attribute columns appended after the base columns
pub fn attr_columns(concept_type: ConceptType) -> &'static [&'static str] {
    match concept_type {
        ConceptType::Recipe => &[
            "category",
            "difficulty",
            "cuisine_type",
            "prep_time",
            "cook_time",
            "servings",
            "tags",
            "source_path",
        ],
        ConceptType::Ingredient => &["amount", "unit", "category", "is_main"],
        ConceptType::CookingStep => &[
            "description",
            "step_number",
            "methods",
            "tools",
            "time_estimate",
        ],
        ConceptType::DifficultyLevel => &["level"],
        ConceptType::Root
        | ConceptType::CookingMethod
        | ConceptType::CookingTool
        | ConceptType::RecipeCategory => &[],
    }
}

/// Render one attribute value as a flat cell
///
/// Strings pass through, numbers and booleans use their canonical display,
/// arrays of strings are joined with the multi-value delimiter, absent or
/// null values become the empty string.
pub fn attr_cell(concept_attrs: &recipegraph_core::Attributes, key: &str) -> String {
    match concept_attrs.get(key) {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Bool(b)) => b.to_string(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(MULTI_VALUE_DELIMITER),
        Some(other) => other.to_string(),
    }
}

/// Flatten synonyms to a single delimited cell (terms only)
pub fn join_synonyms(synonyms: &[SynonymRecord]) -> String {
    synonyms
        .iter()
        .map(|s| s.term.as_str())
        .collect::<Vec<_>>()
        .join(MULTI_VALUE_DELIMITER)
}

/// Base cells of a concept row (matches `CONCEPT_BASE_COLUMNS`)
pub fn concept_base_cells(concept: &Concept) -> Vec<String> {
    vec![
        concept.concept_id.clone(),
        concept.concept_type.as_str().to_string(),
        concept.name.clone(),
        concept.fsn.clone(),
        concept.preferred_term.clone(),
        join_synonyms(&concept.synonyms),
    ]
}

/// Full concept row: base cells plus the type-specific attribute cells
pub fn concept_row(concept: &Concept) -> Vec<String> {
    let mut cells = concept_base_cells(concept);
    for column in attr_columns(concept.concept_type) {
        cells.push(attr_cell(&concept.attributes, column));
    }
    cells
}

/// Flattened relationship attribute cells (matches `RELATIONSHIP_ATTR_COLUMNS`)
pub fn relationship_attr_cells(relationship: &Relationship) -> Vec<String> {
    RELATIONSHIP_ATTR_COLUMNS
        .iter()
        .map(|column| attr_cell(&relationship.attributes, column))
        .collect()
}

/// Quote a cell for CSV output when it contains the delimiter, a quote,
/// or a line break; embedded quotes are doubled
pub fn csv_field(value: &str) -> String {
    if value.contains(',') || value.contains('"') || value.contains('\n') || value.contains('\r') {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

/// Join cells into one CSV line (no trailing newline)
pub fn csv_line<S: AsRef<str>>(cells: &[S]) -> String {
    cells
        .iter()
        .map(|cell| csv_field(cell.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_csv_field_quoting() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("早餐,素菜"), "\"早餐,素菜\"");
        assert_eq!(csv_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(csv_field("two\nlines"), "\"two\nlines\"");
        assert_eq!(csv_field(""), "");
    }

    #[test]
    fn test_attr_cell_rendering() {
        let mut attrs = recipegraph_core::Attributes::new();
        attrs.insert("amount".to_string(), json!("2"));
        attrs.insert("is_main".to_string(), json!(true));
        attrs.insert("step_number".to_string(), json!(3));
        attrs.insert("tags".to_string(), json!(["下饭菜", "快手菜"]));

        assert_eq!(attr_cell(&attrs, "amount"), "2");
        assert_eq!(attr_cell(&attrs, "is_main"), "true");
        assert_eq!(attr_cell(&attrs, "step_number"), "3");
        assert_eq!(attr_cell(&attrs, "tags"), "下饭菜;快手菜");
        assert_eq!(attr_cell(&attrs, "missing"), "");
    }

    #[test]
    fn test_concept_row_shape() {
        let concept = Concept::new("201000001", ConceptType::Ingredient, "茄子");
        let row = concept_row(&concept);
        assert_eq!(
            row.len(),
            CONCEPT_BASE_COLUMNS.len() + attr_columns(ConceptType::Ingredient).len()
        );
        assert_eq!(row[0], "201000001");
        assert_eq!(row[1], "Ingredient");
        assert_eq!(row[3], "茄子 (ingredient)");
    }

    #[test]
    fn test_join_synonyms() {
        let synonyms = vec![SynonymRecord::en("eggplant"), SynonymRecord::zh("矮瓜")];
        assert_eq!(join_synonyms(&synonyms), "eggplant;矮瓜");
        assert_eq!(join_synonyms(&[]), "");
    }

    #[test]
    fn test_csv_line() {
        let line = csv_line(&["a", "b,c", "d"]);
        assert_eq!(line, "a,\"b,c\",d");
    }
}
