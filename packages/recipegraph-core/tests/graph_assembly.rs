//! End-to-end graph assembly over a small batch of records
//!
//! Exercises the invariants that hold across `process` calls: global ID
//! uniqueness, referential integrity against the store, deterministic
//! ontology linkage.

use pretty_assertions::assert_eq;
use recipegraph_core::{
    ConceptType, IngredientRecord, PredefinedOntology, RecipeGraphBuilder, RelationshipType,
    StepRecord, StructuredRecipe,
};
use std::collections::HashSet;

fn batch() -> Vec<StructuredRecipe> {
    vec![
        StructuredRecipe {
            name: "红烧茄子的做法".to_string(),
            difficulty: 3,
            category: "素菜".to_string(),
            ingredients: vec![
                IngredientRecord {
                    name: "茄子".to_string(),
                    amount: "2".to_string(),
                    unit: "根".to_string(),
                    is_main: true,
                    ..Default::default()
                },
                IngredientRecord {
                    name: "生抽".to_string(),
                    amount: "1".to_string(),
                    unit: "勺".to_string(),
                    ..Default::default()
                },
            ],
            steps: vec![StepRecord {
                step_number: 1,
                description: "茄子切滚刀块".to_string(),
                tools: vec!["刀".to_string()],
                ..Default::default()
            }],
            ..Default::default()
        },
        StructuredRecipe {
            name: "豆浆".to_string(),
            difficulty: 1,
            category: "早餐, 饮料".to_string(),
            ingredients: vec![IngredientRecord {
                name: "黄豆".to_string(),
                amount: "100".to_string(),
                unit: "克".to_string(),
                ..Default::default()
            }],
            steps: vec![],
            ..Default::default()
        },
        // Malformed-but-present data: unknown category, difficulty out of range
        StructuredRecipe {
            name: "神秘料理".to_string(),
            difficulty: 9,
            category: "半成品".to_string(),
            ..Default::default()
        },
    ]
}

#[test]
fn concept_ids_unique_across_batch() {
    let mut builder = RecipeGraphBuilder::new();
    for (i, record) in batch().iter().enumerate() {
        builder.process(record, &format!("doc_{}.md", i)).unwrap();
    }
    let store = builder.finish();

    let ids: Vec<&str> = store
        .concepts()
        .iter()
        .map(|c| c.concept_id.as_str())
        .collect();
    let unique: HashSet<&str> = ids.iter().copied().collect();
    assert_eq!(unique.len(), ids.len());
}

#[test]
fn every_relationship_endpoint_exists() {
    let mut builder = RecipeGraphBuilder::new();
    for (i, record) in batch().iter().enumerate() {
        builder.process(record, &format!("doc_{}.md", i)).unwrap();
    }
    let store = builder.finish();

    let ontology = PredefinedOntology::new();
    for relationship in store.relationships() {
        assert!(
            store.contains_concept(&relationship.source_id)
                || ontology.contains(&relationship.source_id),
            "dangling source in {}",
            relationship.relationship_id
        );
        assert!(
            store.contains_concept(&relationship.target_id)
                || ontology.contains(&relationship.target_id),
            "dangling target in {}",
            relationship.relationship_id
        );
    }
}

#[test]
fn ontology_linkage_per_record() {
    let mut builder = RecipeGraphBuilder::new();
    let records = batch();
    let first = builder.process(&records[0], "doc_0.md").unwrap();
    let second = builder.process(&records[1], "doc_1.md").unwrap();
    let third = builder.process(&records[2], "doc_2.md").unwrap();
    let store = builder.finish();

    let categories: Vec<(&str, &str)> = store
        .relationships()
        .iter()
        .filter(|r| r.relationship_type == RelationshipType::BelongsToCategory)
        .map(|r| (r.source_id.as_str(), r.target_id.as_str()))
        .collect();
    assert_eq!(
        categories,
        vec![
            (first.as_str(), "710000000"),
            (second.as_str(), "740000000"),
            (second.as_str(), "780000000"),
        ]
    );

    let difficulties: Vec<(&str, &str)> = store
        .relationships()
        .iter()
        .filter(|r| r.relationship_type == RelationshipType::HasDifficulty)
        .map(|r| (r.source_id.as_str(), r.target_id.as_str()))
        .collect();
    // The third record's difficulty 9 maps to nothing
    assert_eq!(
        difficulties,
        vec![(first.as_str(), "630000000"), (second.as_str(), "610000000")]
    );
    assert!(!difficulties.iter().any(|(s, _)| *s == third));
}

#[test]
fn failed_document_does_not_disturb_allocation() {
    // The driver skips `process` for failed documents; IDs keep increasing
    // over the documents that do get processed
    let mut builder = RecipeGraphBuilder::new();
    let records = batch();

    let first = builder.process(&records[0], "doc_0.md").unwrap();
    // doc_1 "fails extraction" and is never passed in
    let third = builder.process(&records[2], "doc_2.md").unwrap();

    assert_eq!(first, "201000001");
    // first record allocated recipe + 2 ingredients + 1 step = 4 IDs
    assert_eq!(third, "201000005");
}

#[test]
fn recipe_synonyms_attached_to_recipe_concept() {
    let mut builder = RecipeGraphBuilder::new();
    let recipe_id = builder.process(&batch()[0], "doc_0.md").unwrap();
    let store = builder.finish();

    let recipe = store
        .concepts()
        .iter()
        .find(|c| c.concept_id == recipe_id)
        .unwrap();
    assert_eq!(recipe.concept_type, ConceptType::Recipe);

    let terms: Vec<&str> = recipe.synonyms.iter().map(|s| s.term.as_str()).collect();
    assert!(terms.contains(&"红烧茄子"));
    assert!(terms.contains(&"braised茄子的做法"));
}
