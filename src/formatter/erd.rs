use crate::model::{Index, IndexType, Schema};

/// Entity list with key and business columns, a relationship map, and the
/// plain-index inventory.
pub(crate) fn render(schema: &Schema) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=== Entity-Relationship Description (ERD) ===".to_string());
    lines.push(String::new());

    lines.push("## Core Entities:".to_string());
    lines.push(String::new());

    for (name, table) in schema.iter() {
        let keys = table
            .columns
            .iter()
            .filter(|column| table.primary_keys.contains(&column.name))
            .map(|column| format!("{}:{}", column.name, column.data_type))
            .collect::<Vec<_>>()
            .join(", ");

        // up to three commented non-key columns stand in for the
        // business fields
        let business = table
            .columns
            .iter()
            .filter(|column| column.comment.is_some() && !table.primary_keys.contains(&column.name))
            .take(3)
            .map(|column| column.name.as_str())
            .collect::<Vec<_>>()
            .join(", ");

        let comment = match &table.comment {
            Some(comment) => format!(" - {comment}"),
            None => String::new(),
        };
        lines.push(format!("- **{name}**({keys}) [{business}]{comment}"));
    }

    lines.push(String::new());
    lines.push("## Relationship Map:".to_string());
    lines.push(String::new());

    for (name, table) in schema.iter() {
        for fk in &table.foreign_keys {
            if let (Some(column), Some(ref_column)) = (fk.columns.first(), fk.ref_columns.first()) {
                // cardinality is not inferred; every edge reads one-to-many
                lines.push(format!(
                    "- {}.{} → {}.{} (1:N)",
                    name, column, fk.ref_table, ref_column
                ));
            }
        }
    }

    lines.push(String::new());
    lines.push("## Index Hints:".to_string());
    lines.push(String::new());

    for (name, table) in schema.iter() {
        let plain: Vec<&Index> = table
            .indexes
            .iter()
            .filter(|idx| idx.index_type == IndexType::Index)
            .collect();
        if plain.is_empty() {
            continue;
        }
        lines.push(format!("{name}:"));
        for idx in plain {
            lines.push(format!("  - {}: ({})", idx.name, idx.columns.join(", ")));
        }
    }

    lines.join("\n")
}
