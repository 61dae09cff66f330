//! Feature modules

pub mod graph_builder;
pub mod ontology;
pub mod synonyms;
