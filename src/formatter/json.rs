use indexmap::IndexMap;
use serde::Serialize;

use crate::error::DdlPressResult;
use crate::model::{Column, IndexType, Schema, Table};

/// Serialized view of one table in the JSON encoding.
#[derive(Serialize)]
struct TableEntry {
    comment: String,
    columns: IndexMap<String, String>,
    relations: Vec<String>,
    referenced_by: Vec<String>,
}

/// Machine-readable JSON map, two-space indented, declaration order
/// preserved, non-ASCII text kept readable.
pub(crate) fn render(schema: &Schema) -> DdlPressResult<String> {
    let mut entries: IndexMap<&str, TableEntry> = IndexMap::new();

    for (name, table) in schema.iter() {
        let mut columns = IndexMap::new();
        for column in &table.columns {
            let summary = format!(
                "{}/{}/{}",
                constraint_marks(column, table),
                column.sql_type(),
                column.comment.as_deref().unwrap_or("")
            );
            columns.insert(column.name.clone(), summary);
        }

        // one entry per local column, always naming the first referenced
        // column
        let mut relations = Vec::new();
        for fk in &table.foreign_keys {
            if let Some(first_ref) = fk.ref_columns.first() {
                for _ in &fk.columns {
                    relations.push(format!("{}.{}", fk.ref_table, first_ref));
                }
            }
        }

        let mut referenced_by = Vec::new();
        for (other_name, other) in schema.iter() {
            if other_name == name {
                continue;
            }
            for fk in &other.foreign_keys {
                if fk.ref_table == name {
                    if let Some(first_col) = fk.columns.first() {
                        referenced_by.push(format!("{other_name}.{first_col}"));
                    }
                }
            }
        }

        entries.insert(
            name,
            TableEntry {
                comment: table.comment.clone().unwrap_or_default(),
                columns,
                relations,
                referenced_by,
            },
        );
    }

    Ok(serde_json::to_string_pretty(&entries)?)
}

/// `PK`, `UK`, `IDX` and `AI` joined by slashes; nullability is omitted in
/// this encoding.
fn constraint_marks(column: &Column, table: &Table) -> String {
    let mut marks: Vec<&str> = Vec::new();

    if table.primary_keys.contains(&column.name) {
        marks.push("PK");
    }
    if table
        .indexes
        .iter()
        .any(|idx| idx.index_type == IndexType::Unique && idx.columns.contains(&column.name))
    {
        marks.push("UK");
    }
    if table
        .indexes
        .iter()
        .any(|idx| idx.index_type == IndexType::Index && idx.columns.contains(&column.name))
    {
        marks.push("IDX");
    }
    if column.auto_increment {
        marks.push("AI");
    }

    marks.join("/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;

    #[test]
    fn test_referenced_by_skips_self_reference() {
        let ddl = "CREATE TABLE nodes (\n  id bigint NOT NULL,\n  parent_id bigint,\n  PRIMARY KEY (id),\n  CONSTRAINT fk_parent FOREIGN KEY (parent_id) REFERENCES nodes (id)\n);";
        let rendered = render(&parse(ddl)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["nodes"]["relations"][0], "nodes.id");
        assert!(value["nodes"]["referenced_by"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_column_summary_shape() {
        let ddl = "CREATE TABLE t (\n  id bigint NOT NULL AUTO_INCREMENT COMMENT 'key',\n  note varchar(50),\n  PRIMARY KEY (id)\n);";
        let rendered = render(&parse(ddl)).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["t"]["columns"]["id"], "PK/AI/bigint/key");
        assert_eq!(value["t"]["columns"]["note"], "/varchar(50)/");
    }
}
