// Generic CSV export
//
// One file per concept type present in the store (`concepts_<type>.csv`)
// plus a combined `relationships.csv`. Row order is store insertion order,
// so output is byte-identical across runs for the same store.

use std::path::{Path, PathBuf};

use recipegraph_core::{ConceptType, GraphStore};
use tracing::info;

use crate::domain::{
    attr_columns, concept_row, relationship_attr_cells, CONCEPT_BASE_COLUMNS,
    RELATIONSHIP_ATTR_COLUMNS,
};
use crate::infrastructure::write_csv_file;
use crate::Result;

/// Generic tabular exporter
pub struct CsvExporter;

impl CsvExporter {
    /// Serialize the store into `dir`; returns the files written
    pub fn write(store: &GraphStore, dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;
        let mut written = Vec::new();

        for &concept_type in ConceptType::all() {
            let rows: Vec<Vec<String>> = store
                .concepts()
                .iter()
                .filter(|c| c.concept_type == concept_type)
                .map(concept_row)
                .collect();
            if rows.is_empty() {
                continue;
            }

            let mut header: Vec<&str> = CONCEPT_BASE_COLUMNS.to_vec();
            header.extend_from_slice(attr_columns(concept_type));

            let path = dir.join(format!("concepts_{}.csv", concept_type.file_tag()));
            write_csv_file(&path, &header, &rows)?;
            written.push(path);
        }

        let relationship_rows: Vec<Vec<String>> = store
            .relationships()
            .iter()
            .map(|relationship| {
                let mut row = vec![
                    relationship.relationship_id.clone(),
                    relationship.relationship_type.code().to_string(),
                    relationship.source_id.clone(),
                    relationship.target_id.clone(),
                ];
                row.extend(relationship_attr_cells(relationship));
                row
            })
            .collect();

        let mut header = vec!["relationship_id", "relationship_type", "source_id", "target_id"];
        header.extend_from_slice(&RELATIONSHIP_ATTR_COLUMNS);

        let path = dir.join("relationships.csv");
        write_csv_file(&path, &header, &relationship_rows)?;
        written.push(path);

        info!(
            concepts = store.concept_count(),
            relationships = store.relationship_count(),
            files = written.len(),
            dir = %dir.display(),
            "generic CSV export complete"
        );
        Ok(written)
    }
}
