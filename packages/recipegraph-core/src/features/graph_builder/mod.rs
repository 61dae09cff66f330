//! Graph assembly: per-recipe concept/relationship synthesis and the
//! append-only run store

mod builder;
mod store;

pub use builder::RecipeGraphBuilder;
pub use store::GraphStore;
