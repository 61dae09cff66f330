//! Batch orchestration for recipe graph runs
//!
//! Owns everything outside the single-threaded core: the async extraction
//! port, the retry policy for transient extraction failures, the batch
//! driver that tallies per-document outcomes, and the run configuration.
//!
//! One run = one `BatchDriver` = one builder/store pair. Documents are
//! processed strictly in order; a failed document is skipped without
//! disturbing identifier allocation for the documents after it.

pub mod config;
pub mod driver;
pub mod error;
pub mod extraction;
pub mod retry;

pub use config::{OutputFormat, RunConfig};
pub use driver::{export_store, BatchDriver, BatchReport};
pub use error::{ErrorCategory, OrchestratorError, Result};
pub use extraction::{ExtractionError, RecipeDocument, RecipeExtractor};
pub use retry::RetryPolicy;
