// Graph-import CSV export (Neo4j bulk import layout)
//
// Per-label node files (`nodes_<label>.csv`) carrying `:ID` and `:LABEL`
// columns, plus one combined `relationships.csv` with `:START_ID`,
// `:END_ID` and `:TYPE`. Multi-valued fields are flattened exactly as in
// the generic variant; row order is store insertion order.

use std::path::{Path, PathBuf};

use recipegraph_core::{ConceptType, GraphStore};
use tracing::info;

use crate::domain::{
    attr_cell, attr_columns, concept_base_cells, relationship_attr_cells,
    RELATIONSHIP_ATTR_COLUMNS,
};
use crate::infrastructure::write_csv_file;
use crate::Result;

/// Bulk-import exporter for labeled-property-graph stores
pub struct Neo4jExporter;

impl Neo4jExporter {
    /// Serialize the store into `dir`; returns the files written
    pub fn write(store: &GraphStore, dir: &Path) -> Result<Vec<PathBuf>> {
        std::fs::create_dir_all(dir)?;
        let mut written = Vec::new();

        for &concept_type in ConceptType::all() {
            let rows: Vec<Vec<String>> = store
                .concepts()
                .iter()
                .filter(|c| c.concept_type == concept_type)
                .map(|concept| {
                    let mut row = concept_base_cells(concept);
                    // The base cells start with concept_id (the :ID column)
                    // and include concept_type; the :LABEL column closes
                    // the row, as the bulk importer expects
                    for column in attr_columns(concept_type) {
                        row.push(attr_cell(&concept.attributes, column));
                    }
                    row.push(concept.concept_type.as_str().to_string());
                    row
                })
                .collect();
            if rows.is_empty() {
                continue;
            }

            let mut header: Vec<String> = vec![
                "concept_id:ID".to_string(),
                "concept_type".to_string(),
                "name".to_string(),
                "fsn".to_string(),
                "preferred_term".to_string(),
                "synonyms".to_string(),
            ];
            header.extend(attr_columns(concept_type).iter().map(|c| c.to_string()));
            header.push(":LABEL".to_string());

            let path = dir.join(format!("nodes_{}.csv", concept_type.file_tag()));
            write_csv_file(&path, &header, &rows)?;
            written.push(path);
        }

        let relationship_rows: Vec<Vec<String>> = store
            .relationships()
            .iter()
            .map(|relationship| {
                let mut row = vec![
                    relationship.source_id.clone(),
                    relationship.target_id.clone(),
                    relationship.relationship_type.import_name().to_string(),
                    relationship.relationship_id.clone(),
                ];
                row.extend(relationship_attr_cells(relationship));
                row
            })
            .collect();

        let mut header = vec![":START_ID", ":END_ID", ":TYPE", "relationship_id"];
        header.extend_from_slice(&RELATIONSHIP_ATTR_COLUMNS);

        let path = dir.join("relationships.csv");
        write_csv_file(&path, &header, &relationship_rows)?;
        written.push(path);

        info!(
            concepts = store.concept_count(),
            relationships = store.relationship_count(),
            files = written.len(),
            dir = %dir.display(),
            "graph-import CSV export complete"
        );
        Ok(written)
    }
}
