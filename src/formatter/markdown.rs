use crate::model::{Column, IndexType, Schema, Table};

/// One Markdown table over all columns, with the table name only on each
/// table's first row, followed by a relationship list.
pub(crate) fn render(schema: &Schema) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("| Table | Column | Type | Constraints | Comment |".to_string());
    lines.push("|------|------|------|------|------|".to_string());

    for (name, table) in schema.iter() {
        for (n, column) in table.columns.iter().enumerate() {
            let table_cell = if n == 0 { name } else { "" };
            lines.push(format!(
                "| {} | {} | {} | {} | {} |",
                table_cell,
                column.name,
                column.sql_type(),
                constraint_marks(column, table),
                column.comment.as_deref().unwrap_or("")
            ));
        }
    }

    lines.push(String::new());
    lines.push("## Relationships".to_string());
    lines.push(String::new());

    for (name, table) in schema.iter() {
        for fk in &table.foreign_keys {
            lines.push(format!(
                "- `{}.{}` → `{}.{}`",
                name,
                fk.columns.join(", "),
                fk.ref_table,
                fk.ref_columns.join(", ")
            ));
        }
    }

    lines.join("\n")
}

fn constraint_marks(column: &Column, table: &Table) -> String {
    let mut marks: Vec<&str> = Vec::new();

    let is_primary = table.primary_keys.contains(&column.name);
    if is_primary {
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
    if !column.nullable && !is_primary {
        marks.push("NN");
    }

    marks.join(", ")
}
