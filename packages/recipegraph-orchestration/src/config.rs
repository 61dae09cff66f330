//! Run configuration for a batch export run
//!
//! Deserializable from JSON so a run can be driven by a config file; every
//! field has a default matching the standard deployment.

use serde::{Deserialize, Serialize};

/// Which tabular layout the run writes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Generic per-type concept files plus a relationships file
    Csv,
    /// Bulk-import node/relationship files with `:ID`/`:LABEL`/`:TYPE` columns
    Neo4j,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Neo4j
    }
}

/// Batch run settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Directory the export files land in
    pub output_dir: String,
    pub output_format: OutputFormat,
    /// Documents per progress-report chunk
    pub batch_size: usize,
    /// Extraction model identifier, passed through to the extractor
    pub model: String,
    /// Extraction service endpoint
    pub base_url: String,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: "./ai_output".to_string(),
            output_format: OutputFormat::default(),
            batch_size: 20,
            model: "kimi-k2-0711-preview".to_string(),
            base_url: "https://api.moonshot.cn/v1".to_string(),
            temperature: 0.6,
            max_tokens: 2048,
        }
    }
}
