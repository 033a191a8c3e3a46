// MySQL DDL parser: carves CREATE TABLE statements out of dump text and
// assembles the schema model
mod clause;
mod extractor;
mod scan;
mod statement;

#[cfg(test)]
mod tests;

use crate::model::Schema;

/// Parse DDL text into a schema.
///
/// The parser is lenient: statements and clauses it cannot understand are
/// skipped rather than failing the whole input, so a full mysqldump with
/// `SET` statements, `DROP TABLE`s and comments parses down to just its
/// tables. Tables arrive in declaration order; a repeated table name keeps
/// its original position but takes the newest definition.
pub fn parse(ddl: &str) -> Schema {
    let cleaned = extractor::strip_comments(ddl);
    let mut schema = Schema::new();
    for stmt in extractor::statements(&cleaned) {
        if let Some(table) = statement::parse_create_table(stmt) {
            schema.add_table(table);
        }
    }
    schema
}
