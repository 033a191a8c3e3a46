use crate::model::{Column, IndexType, Schema, Table};

/// Three sections of increasing detail: a table inventory, the core
/// columns (keyed, indexed or referencing) of each table, and the foreign
/// key fan-out.
pub(crate) fn render(schema: &Schema) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("=== Layer 1: Table Overview ===".to_string());
    lines.push(String::new());
    let names = schema.table_names();
    lines.push(format!("{} tables: {}", names.len(), names.join(", ")));
    lines.push(String::new());

    lines.push("=== Layer 2: Core Table Structure ===".to_string());
    lines.push(String::new());

    for (name, table) in schema.iter() {
        let core_columns: Vec<&Column> = table
            .columns
            .iter()
            .filter(|column| is_core(column, table))
            .collect();
        if core_columns.is_empty() {
            continue;
        }

        let comment = match &table.comment {
            Some(comment) => format!(" -- {comment}"),
            None => String::new(),
        };
        lines.push(format!("{name} {{{comment}"));
        for column in core_columns {
            lines.push(format!(
                "  {}: {} {}",
                column.name,
                column.sql_type(),
                constraint_marks(column, table)
            ));
        }
        lines.push("}".to_string());
        lines.push(String::new());
    }

    lines.push("=== Layer 3: Relationship Details ===".to_string());
    lines.push(String::new());

    for (name, table) in schema.iter() {
        if table.foreign_keys.is_empty() {
            continue;
        }
        lines.push(format!("{name}:"));
        for fk in &table.foreign_keys {
            lines.push(format!(
                "  → {} ({} → {})",
                fk.ref_table,
                fk.columns.join(", "),
                fk.ref_columns.join(", ")
            ));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// A column is core when it is part of the primary key, any index, or any
/// foreign key.
fn is_core(column: &Column, table: &Table) -> bool {
    table.primary_keys.contains(&column.name)
        || table
            .indexes
            .iter()
            .any(|idx| idx.columns.contains(&column.name))
        || table
            .foreign_keys
            .iter()
            .any(|fk| fk.columns.contains(&column.name))
}

/// `PK`, `UK`, `IDX` plus one `FK→target` per matching foreign key; this
/// layer carries no nullability or auto-increment marks.
fn constraint_marks(column: &Column, table: &Table) -> String {
    let mut marks: Vec<String> = Vec::new();

    if table.primary_keys.contains(&column.name) {
        marks.push("PK".to_string());
    }
    if table
        .indexes
        .iter()
        .any(|idx| idx.index_type == IndexType::Unique && idx.columns.contains(&column.name))
    {
        marks.push("UK".to_string());
    }
    if table
        .indexes
        .iter()
        .any(|idx| idx.index_type == IndexType::Index && idx.columns.contains(&column.name))
    {
        marks.push("IDX".to_string());
    }
    for fk in &table.foreign_keys {
        if fk.columns.contains(&column.name) {
            marks.push(format!("FK→{}", fk.ref_table));
        }
    }

    marks.join(" ")
}
