//! Extraction port
//!
//! The structured-recipe extractor sits behind an async trait so the batch
//! driver can run against an LLM-backed service in production and a
//! deterministic stub in tests. Extraction internals (prompting, transport)
//! live behind this boundary.

use async_trait::async_trait;
use recipegraph_core::StructuredRecipe;
use thiserror::Error;

use crate::error::ErrorCategory;

/// One discovered input document
#[derive(Debug, Clone)]
pub struct RecipeDocument {
    /// Repository-relative path, recorded on the recipe concept
    pub path: String,
    pub content: String,
}

impl RecipeDocument {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// Extraction failure, categorized for the retry policy
#[derive(Error, Debug, Clone)]
#[error("[{category}] {message}")]
pub struct ExtractionError {
    pub message: String,
    pub category: ErrorCategory,
}

impl ExtractionError {
    pub fn transient(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: ErrorCategory::Transient,
        }
    }

    pub fn permanent(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            category: ErrorCategory::Permanent,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        self.category
    }
}

/// Port to the structured-recipe extraction service
#[async_trait]
pub trait RecipeExtractor: Send + Sync {
    async fn extract(
        &self,
        document: &RecipeDocument,
    ) -> std::result::Result<StructuredRecipe, ExtractionError>;
}
