use crate::model::{Column, IndexType, Schema, Table};

/// Struct-like blocks, one per table: every column with its constraint
/// marks and comment, then the foreign keys as arrows.
pub(crate) fn render(schema: &Schema) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (name, table) in schema.iter() {
        let comment = match &table.comment {
            Some(comment) => format!(" -- {comment}"),
            None => String::new(),
        };
        lines.push(format!("{name} {{{comment}"));

        for column in &table.columns {
            let mut line = format!("  {}: {}", column.name, column.sql_type());
            let marks = constraint_marks(column, table);
            if !marks.is_empty() {
                line.push(' ');
                line.push_str(&marks);
            }
            if let Some(comment) = &column.comment {
                line.push(' ');
                line.push_str(comment);
            }
            lines.push(line);
        }

        if !table.foreign_keys.is_empty() {
            lines.push(String::new());
            for fk in &table.foreign_keys {
                lines.push(format!(
                    "  FK: {} → {}({})",
                    fk.columns.join(", "),
                    fk.ref_table,
                    fk.ref_columns.join(", ")
                ));
            }
        }

        lines.push("}".to_string());
        lines.push(String::new());
    }

    lines.join("\n")
}

/// Marks for one column: `PK`, `UK`, `IDX`, `AI` and `NN`, each derived
/// independently except that a primary key column never shows `NN`.
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

    marks.join(" ")
}
