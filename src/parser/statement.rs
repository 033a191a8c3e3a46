use super::clause::{self, ClauseKind};
use super::extractor::match_statement_head;
use super::scan::{matching_paren, word_starts, Scanner};
use crate::model::{Index, IndexType, Table};

/// Parse one extracted `CREATE TABLE` statement into a table.
///
/// Returns nothing when the body parens never balance. Clauses that fail
/// to parse are dropped individually; the rest of the table survives.
pub(crate) fn parse_create_table(stmt: &str) -> Option<Table> {
    let head = match_statement_head(stmt, 0)?;
    let close = matching_paren(stmt, head.open_paren)?;
    let body = &stmt[head.open_paren + 1..close];
    let tail = &stmt[close + 1..];

    let mut table = Table::new(head.name);
    table.engine = scan_option_word(tail, "ENGINE");
    table.charset = scan_charset(tail);
    table.comment = scan_table_comment(tail);

    for piece in clause::split_top_level(body) {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        apply_clause(piece, &mut table);
    }

    Some(table)
}

fn apply_clause(piece: &str, table: &mut Table) {
    match clause::classify(piece) {
        ClauseKind::PrimaryKey => {
            if let Some(columns) = clause::parse_primary_key(piece) {
                table.primary_keys = columns.clone();
                table
                    .indexes
                    .push(Index::new("PRIMARY", columns, IndexType::Primary));
            }
        }
        ClauseKind::UniqueKey => {
            if let Some(index) = clause::parse_unique_key(piece) {
                table.indexes.push(index);
            }
        }
        ClauseKind::Index => {
            if let Some(index) = clause::parse_index(piece) {
                table.indexes.push(index);
            }
        }
        ClauseKind::ForeignKey => {
            if let Some(fk) = clause::parse_foreign_key(piece, &table.name) {
                table.foreign_keys.push(fk);
            }
        }
        ClauseKind::Column => {
            if let Some(column) = clause::parse_column(piece) {
                table.columns.push(column);
            }
        }
    }
}

/// Scan the statement tail for `<keyword> [=] <word>`, e.g. `ENGINE=InnoDB`.
/// First occurrence wins.
fn scan_option_word(tail: &str, keyword: &str) -> Option<String> {
    for at in word_starts(tail) {
        let mut s = Scanner::at(tail, at);
        if !s.eat_keyword(keyword) {
            continue;
        }
        s.skip_whitespace();
        s.eat_char('=');
        s.skip_whitespace();
        if let Some(word) = s.eat_word() {
            return Some(word.to_string());
        }
    }
    None
}

/// Scan for `CHARSET [=] <word>` or `CHARACTER SET [=] <word>`.
fn scan_charset(tail: &str) -> Option<String> {
    for at in word_starts(tail) {
        let mut s = Scanner::at(tail, at);
        let matched = s.eat_keyword("CHARSET")
            || (s.eat_keyword("CHARACTER") && s.expect_whitespace() && s.eat_keyword("SET"));
        if !matched {
            continue;
        }
        s.skip_whitespace();
        s.eat_char('=');
        s.skip_whitespace();
        if let Some(word) = s.eat_word() {
            return Some(word.to_string());
        }
    }
    None
}

/// Scan for the table-level `COMMENT [=] '<text>'`. Only the tail is
/// searched, so column comments inside the body are never mistaken for
/// the table comment.
fn scan_table_comment(tail: &str) -> Option<String> {
    for at in word_starts(tail) {
        let mut s = Scanner::at(tail, at);
        if !s.eat_keyword("COMMENT") {
            continue;
        }
        s.skip_whitespace();
        s.eat_char('=');
        s.skip_whitespace();
        if let Some(text) = s.eat_quoted() {
            return Some(text.to_string());
        }
    }
    None
}
