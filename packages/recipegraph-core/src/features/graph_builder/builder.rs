// RecipeGraphBuilder - per-recipe concept/relationship synthesis
//
// Consumes one structured recipe record at a time. For each record, in
// order: recipe concept, ingredient concepts + has_ingredient edges, step
// concepts + has_step edges, category linkage, difficulty linkage.
//
// Failure semantics: the record is assumed to satisfy the boundary
// contract; unknown category segments and out-of-range difficulty values
// are silently dropped (logged at debug), never errors. Concept IDs
// allocated before a failure are never reclaimed.

use serde_json::json;
use tracing::debug;

use super::store::GraphStore;
use crate::features::ontology::PredefinedOntology;
use crate::features::synonyms::SynonymGenerator;
use crate::shared::models::{
    Attributes, Concept, ConceptId, ConceptType, Relationship, RelationshipType, Result,
    StructuredRecipe,
};
use crate::shared::utils::{ConceptIdAllocator, RelationshipIdAllocator};

/// Builds the knowledge graph from structured recipe records
///
/// Owns the ID allocators and the run store; one builder processes the
/// whole batch sequentially (single writer, see DESIGN.md).
pub struct RecipeGraphBuilder {
    ontology: PredefinedOntology,
    synonyms: SynonymGenerator,
    concept_ids: ConceptIdAllocator,
    relationship_ids: RelationshipIdAllocator,
    store: GraphStore,
}

impl RecipeGraphBuilder {
    pub fn new() -> Self {
        let ontology = PredefinedOntology::new();
        let store = GraphStore::new(&ontology);
        Self {
            ontology,
            synonyms: SynonymGenerator::new(),
            concept_ids: ConceptIdAllocator::new(),
            relationship_ids: RelationshipIdAllocator::new(),
            store,
        }
    }

    /// Process one recipe record; returns the new recipe's concept ID
    ///
    /// Appends the recipe/ingredient/step concepts and their relationships
    /// to the store, then links the recipe into the fixed ontology.
    pub fn process(&mut self, record: &StructuredRecipe, source_path: &str) -> Result<ConceptId> {
        let recipe_id = self.push_recipe_concept(record, source_path);

        for ingredient in &record.ingredients {
            let ingredient_id = self.push_ingredient_concept(ingredient);
            let mut attrs = Attributes::new();
            attrs.insert("amount".to_string(), json!(ingredient.amount));
            attrs.insert("unit".to_string(), json!(ingredient.unit));
            self.push_relationship(
                RelationshipType::HasIngredient,
                &recipe_id,
                &ingredient_id,
                attrs,
            )?;
        }

        for step in &record.steps {
            let step_id = self.push_step_concept(step);
            let mut attrs = Attributes::new();
            attrs.insert("step_order".to_string(), json!(step.step_number));
            self.push_relationship(RelationshipType::HasStep, &recipe_id, &step_id, attrs)?;
        }

        self.link_categories(&recipe_id, &record.category)?;
        self.link_difficulty(&recipe_id, record.difficulty)?;

        debug!(
            recipe = %record.name,
            concept_id = %recipe_id,
            ingredients = record.ingredients.len(),
            steps = record.steps.len(),
            "recipe processed"
        );
        Ok(recipe_id)
    }

    /// Consume the builder and hand over the accumulated store
    pub fn finish(self) -> GraphStore {
        self.store
    }

    pub fn store(&self) -> &GraphStore {
        &self.store
    }

    fn push_recipe_concept(&mut self, record: &StructuredRecipe, source_path: &str) -> ConceptId {
        let recipe_id = self.concept_ids.next();

        let mut attrs = Attributes::new();
        attrs.insert("category".to_string(), json!(record.category));
        attrs.insert("difficulty".to_string(), json!(record.difficulty));
        attrs.insert("cuisine_type".to_string(), json!(record.cuisine_type));
        attrs.insert("prep_time".to_string(), json!(record.prep_time));
        attrs.insert("cook_time".to_string(), json!(record.cook_time));
        attrs.insert("servings".to_string(), json!(record.servings));
        attrs.insert("tags".to_string(), json!(record.tags));
        attrs.insert("source_path".to_string(), json!(source_path));

        let concept = Concept::new(recipe_id.clone(), ConceptType::Recipe, &record.name)
            .with_synonyms(self.synonyms.for_recipe_name(&record.name))
            .with_attributes(attrs);
        self.store.push_concept(concept);
        recipe_id
    }

    fn push_ingredient_concept(
        &mut self,
        ingredient: &crate::shared::models::IngredientRecord,
    ) -> ConceptId {
        let ingredient_id = self.concept_ids.next();

        let mut attrs = Attributes::new();
        attrs.insert("amount".to_string(), json!(ingredient.amount));
        attrs.insert("unit".to_string(), json!(ingredient.unit));
        attrs.insert("category".to_string(), json!(ingredient.category));
        attrs.insert("is_main".to_string(), json!(ingredient.is_main));

        let concept = Concept::new(
            ingredient_id.clone(),
            ConceptType::Ingredient,
            &ingredient.name,
        )
        .with_synonyms(self.synonyms.for_ingredient_name(&ingredient.name))
        .with_attributes(attrs);
        self.store.push_concept(concept);
        ingredient_id
    }

    fn push_step_concept(&mut self, step: &crate::shared::models::StepRecord) -> ConceptId {
        let step_id = self.concept_ids.next();

        // Methods and tools stay comma-joined text on the step concept;
        // requires_tool/uses_method edges are intentionally not emitted
        // (declared-but-unused types, see DESIGN.md)
        let mut attrs = Attributes::new();
        attrs.insert("description".to_string(), json!(step.description));
        attrs.insert("step_number".to_string(), json!(step.step_number));
        attrs.insert("methods".to_string(), json!(step.methods.join(",")));
        attrs.insert("tools".to_string(), json!(step.tools.join(",")));
        attrs.insert("time_estimate".to_string(), json!(step.time_estimate));

        let name = format!("步骤{}", step.step_number);
        let concept = Concept::new(step_id.clone(), ConceptType::CookingStep, name)
            .with_attributes(attrs);
        self.store.push_concept(concept);
        step_id
    }

    /// Split the category field on commas, trim, drop empties, link each
    /// recognized canonical name; unrecognized segments are dropped silently
    fn link_categories(&mut self, recipe_id: &str, category: &str) -> Result<()> {
        for segment in category.split(',') {
            let segment = segment.trim();
            if segment.is_empty() {
                continue;
            }
            match self.ontology.category_id(segment) {
                Some(category_id) => {
                    let category_id = category_id.to_string();
                    self.push_relationship(
                        RelationshipType::BelongsToCategory,
                        recipe_id,
                        &category_id,
                        Attributes::new(),
                    )?;
                }
                None => {
                    debug!(segment, "unrecognized category segment, skipping");
                }
            }
        }
        Ok(())
    }

    /// Link the recipe to its difficulty concept; out-of-range values
    /// produce no relationship
    fn link_difficulty(&mut self, recipe_id: &str, difficulty: i64) -> Result<()> {
        match self.ontology.difficulty_id(difficulty) {
            Some(difficulty_id) => {
                let difficulty_id = difficulty_id.to_string();
                self.push_relationship(
                    RelationshipType::HasDifficulty,
                    recipe_id,
                    &difficulty_id,
                    Attributes::new(),
                )?;
            }
            None => {
                debug!(difficulty, "unmapped difficulty value, skipping");
            }
        }
        Ok(())
    }

    fn push_relationship(
        &mut self,
        relationship_type: RelationshipType,
        source_id: &str,
        target_id: &str,
        attributes: Attributes,
    ) -> Result<()> {
        let relationship = Relationship::new(
            self.relationship_ids.next(),
            relationship_type,
            source_id,
            target_id,
        )
        .with_attributes(attributes);
        self.store.push_relationship(relationship)
    }
}

impl Default for RecipeGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
