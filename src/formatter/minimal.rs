use crate::model::{IndexType, Schema};

/// One line per table behind a legend: `*` primary key, `!` unique,
/// `>target` foreign key, `←` incoming references, `#` table comment.
pub(crate) fn render(schema: &Schema) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push("# Legend: * = PK, ! = UK, >table = FK, ← = referenced by".to_string());
    lines.push(String::new());

    for (name, table) in schema.iter() {
        let mut columns: Vec<String> = Vec::new();
        for column in &table.columns {
            let mut part = column.name.clone();
            if table.primary_keys.contains(&column.name) {
                part.push('*');
            } else if table
                .indexes
                .iter()
                .any(|idx| idx.index_type == IndexType::Unique && idx.columns.contains(&column.name))
            {
                part.push('!');
            }
            if let Some(fk) = table
                .foreign_keys
                .iter()
                .find(|fk| fk.columns.contains(&column.name))
            {
                part.push('>');
                part.push_str(&fk.ref_table);
            }
            columns.push(part);
        }

        let mut referencing: Vec<&str> = Vec::new();
        for (other_name, other) in schema.iter() {
            if other_name == name {
                continue;
            }
            if other.foreign_keys.iter().any(|fk| fk.ref_table == name) {
                referencing.push(other_name);
            }
        }

        let mut line = format!("{}({})", name, columns.join(","));
        if !referencing.is_empty() {
            line.push_str(&format!(" ← {}", referencing.join(",")));
        }
        if let Some(comment) = &table.comment {
            line.push_str(&format!(" # {comment}"));
        }
        lines.push(line);
    }

    lines.join("\n")
}
