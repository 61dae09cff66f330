//! Batch driver
//!
//! Runs the one-shot pipeline: for each document, extract with retry, then
//! feed the structured record to the graph builder. A document that still
//! fails after retries is tallied and skipped; it never reaches the builder,
//! so the store stays consistent whatever the failure pattern.

use std::path::{Path, PathBuf};

use recipegraph_core::{GraphStore, RecipeGraphBuilder};
use recipegraph_export::{CsvExporter, Neo4jExporter};
use tracing::{info, warn};

use crate::config::{OutputFormat, RunConfig};
use crate::error::Result;
use crate::extraction::{RecipeDocument, RecipeExtractor};
use crate::retry::RetryPolicy;

/// Per-run tally
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub processed: usize,
    pub failed: usize,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.processed + self.failed
    }
}

/// Drives one batch against a single builder/store pair
pub struct BatchDriver<E: RecipeExtractor> {
    extractor: E,
    retry: RetryPolicy,
    builder: RecipeGraphBuilder,
}

impl<E: RecipeExtractor> BatchDriver<E> {
    pub fn new(extractor: E) -> Self {
        Self {
            extractor,
            retry: RetryPolicy::default(),
            builder: RecipeGraphBuilder::new(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Process every document in order; returns the tally
    pub async fn run(&mut self, documents: &[RecipeDocument]) -> BatchReport {
        let mut report = BatchReport::default();
        for document in documents {
            match self
                .retry
                .run(|| self.extractor.extract(document))
                .await
            {
                Ok(record) => match self.builder.process(&record, &document.path) {
                    Ok(concept_id) => {
                        info!(path = %document.path, %concept_id, "document processed");
                        report.processed += 1;
                    }
                    Err(err) => {
                        warn!(path = %document.path, error = %err, "graph build failed, skipping document");
                        report.failed += 1;
                    }
                },
                Err(err) => {
                    warn!(path = %document.path, error = %err, "extraction failed, skipping document");
                    report.failed += 1;
                }
            }
        }
        info!(
            processed = report.processed,
            failed = report.failed,
            "batch complete"
        );
        report
    }

    /// Consume the driver and hand back the assembled store
    pub fn finish(self) -> GraphStore {
        self.builder.finish()
    }
}

/// Write the store in the configured layout; returns the files written
pub fn export_store(store: &GraphStore, config: &RunConfig) -> Result<Vec<PathBuf>> {
    let dir = Path::new(&config.output_dir);
    let files = match config.output_format {
        OutputFormat::Csv => CsvExporter::write(store, dir)?,
        OutputFormat::Neo4j => Neo4jExporter::write(store, dir)?,
    };
    Ok(files)
}
