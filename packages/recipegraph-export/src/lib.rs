//! Tabular export of an accumulated GraphStore
//!
//! Two interchange variants over the same store:
//!
//! 1. **Generic CSV** (`CsvExporter`): one file per concept type present
//!    plus a combined relationships file; columns are the concept and
//!    relationship attributes, multi-valued fields flattened to
//!    semicolon-delimited strings.
//! 2. **Graph-import CSV** (`Neo4jExporter`): per-label node files and a
//!    combined relationship file with explicit `:ID`/`:LABEL` and
//!    `:START_ID`/`:END_ID`/`:TYPE` columns, ready for bulk import into a
//!    labeled-property-graph store.
//!
//! Both variants write rows in store insertion order and are byte-identical
//! across runs for the same store.

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ErrorKind, ExportError, Result};
pub use infrastructure::csv::CsvExporter;
pub use infrastructure::neo4j::Neo4jExporter;
