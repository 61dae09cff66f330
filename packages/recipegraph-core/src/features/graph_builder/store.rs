// GraphStore - in-memory accumulation of a batch run
//
// Append-only within a run: concepts and relationships are pushed during
// `RecipeGraphBuilder::process` and never mutated or removed. The store is
// seeded with the predefined ontology concepts so that category/difficulty
// linkage targets exist before the first recipe is processed, and so that
// exports contain the complete graph. Not safe for concurrent writers; one
// store per batch (see DESIGN.md for the merge strategy when parallelizing).

use ahash::AHashSet;

use crate::features::ontology::PredefinedOntology;
use crate::shared::models::{Concept, ConceptId, RecipeGraphError, Relationship, Result};

/// Append-only concept/relationship accumulator for one batch run
#[derive(Debug)]
pub struct GraphStore {
    concepts: Vec<Concept>,
    relationships: Vec<Relationship>,
    known_ids: AHashSet<ConceptId>,
}

impl GraphStore {
    /// Create a store seeded with the predefined ontology concepts
    pub fn new(ontology: &PredefinedOntology) -> Self {
        let mut store = Self {
            concepts: Vec::new(),
            relationships: Vec::new(),
            known_ids: AHashSet::new(),
        };
        for concept in ontology.concepts() {
            store.push_concept(concept.clone());
        }
        store
    }

    /// Append a concept; its ID becomes a valid relationship endpoint
    pub fn push_concept(&mut self, concept: Concept) {
        self.known_ids.insert(concept.concept_id.clone());
        self.concepts.push(concept);
    }

    /// Append a relationship after checking referential integrity
    ///
    /// Both endpoints must already exist in the store. The builder satisfies
    /// this by construction; the check guards against miswired callers.
    pub fn push_relationship(&mut self, relationship: Relationship) -> Result<()> {
        if !self.known_ids.contains(&relationship.source_id) {
            return Err(RecipeGraphError::integrity(format!(
                "relationship {} has unknown source concept {}",
                relationship.relationship_id, relationship.source_id
            )));
        }
        if !self.known_ids.contains(&relationship.target_id) {
            return Err(RecipeGraphError::integrity(format!(
                "relationship {} has unknown target concept {}",
                relationship.relationship_id, relationship.target_id
            )));
        }
        self.relationships.push(relationship);
        Ok(())
    }

    /// All concepts in insertion order (predefined first)
    pub fn concepts(&self) -> &[Concept] {
        &self.concepts
    }

    /// All relationships in creation order
    pub fn relationships(&self) -> &[Relationship] {
        &self.relationships
    }

    pub fn contains_concept(&self, concept_id: &str) -> bool {
        self.known_ids.contains(concept_id)
    }

    pub fn concept_count(&self) -> usize {
        self.concepts.len()
    }

    pub fn relationship_count(&self) -> usize {
        self.relationships.len()
    }
}
