use super::scan::{word_starts, Scanner};
use crate::model::{Column, ForeignKey, Index, IndexType};

/// What a top-level clause in a table body declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ClauseKind {
    PrimaryKey,
    UniqueKey,
    Index,
    ForeignKey,
    Column,
}

/// Classify a trimmed clause, most specific prefix first. `CONSTRAINT ...`
/// and anything containing `FOREIGN KEY` both land on foreign keys; what
/// matches nothing else is treated as a column definition.
pub(crate) fn classify(clause: &str) -> ClauseKind {
    if starts_with_keywords(clause, &["PRIMARY", "KEY"]) {
        ClauseKind::PrimaryKey
    } else if starts_with_keywords(clause, &["UNIQUE", "KEY"])
        || starts_with_keywords(clause, &["UNIQUE", "INDEX"])
    {
        ClauseKind::UniqueKey
    } else if starts_with_keywords(clause, &["KEY"]) || starts_with_keywords(clause, &["INDEX"]) {
        ClauseKind::Index
    } else if starts_with_keywords(clause, &["CONSTRAINT"])
        || contains_keywords(clause, &["FOREIGN", "KEY"])
    {
        ClauseKind::ForeignKey
    } else {
        ClauseKind::Column
    }
}

/// Split a table body into top-level clauses. Commas nested inside parens
/// or quoted strings stay within their clause.
pub(crate) fn split_top_level(body: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut start = 0;

    for (i, c) in body.char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' => depth += 1,
                ')' => depth = depth.saturating_sub(1),
                ',' if depth == 0 => {
                    pieces.push(&body[start..i]);
                    start = i + 1;
                }
                _ => {}
            },
        }
    }
    if start < body.len() {
        pieces.push(&body[start..]);
    }
    pieces
}

/// Parse a column definition clause.
///
/// The shape is `name type[(spec)] [attributes...]`: the name may be
/// back-tick quoted, the type spec must follow the type word with no
/// space, and the attribute tail is scanned for `NOT NULL`,
/// `AUTO_INCREMENT`, `DEFAULT <token>` and `COMMENT '<text>'`.
pub(crate) fn parse_column(clause: &str) -> Option<Column> {
    let mut s = Scanner::new(clause);
    let name = s.eat_identifier()?;
    let rest = &clause[s.pos()..];
    if !s.expect_whitespace() {
        return None;
    }
    let data_type = s.eat_word()?;
    let length = s
        .eat_parenthesized()
        .filter(|spec| !spec.is_empty())
        .map(str::to_string);

    let rest_upper = rest.to_uppercase();

    let mut column = Column::new(name, data_type);
    column.length = length;
    column.nullable = !rest_upper.contains("NOT NULL");
    column.auto_increment = rest_upper.contains("AUTO_INCREMENT");
    column.default = scan_default(rest);
    column.comment = scan_column_comment(rest);
    Some(column)
}

/// Parse `PRIMARY KEY (a, b)`, returning the key columns.
pub(crate) fn parse_primary_key(clause: &str) -> Option<Vec<String>> {
    let mut s = Scanner::new(clause);
    if !(s.eat_keyword("PRIMARY") && s.expect_whitespace() && s.eat_keyword("KEY")) {
        return None;
    }
    s.skip_whitespace();
    let columns = split_column_names(s.eat_parenthesized()?);
    if columns.is_empty() {
        return None;
    }
    Some(columns)
}

/// Parse `UNIQUE KEY [name] (a, b)` or `UNIQUE INDEX [name] (a, b)`.
/// A missing name falls back to the first column.
pub(crate) fn parse_unique_key(clause: &str) -> Option<Index> {
    let mut s = Scanner::new(clause);
    if !s.eat_keyword("UNIQUE") || !s.expect_whitespace() {
        return None;
    }
    if !s.eat_keyword("KEY") && !s.eat_keyword("INDEX") {
        return None;
    }
    s.skip_whitespace();
    let name = s.eat_identifier();
    s.skip_whitespace();
    let columns = split_column_names(s.eat_parenthesized()?);
    if columns.is_empty() {
        return None;
    }
    let name = match name {
        Some(name) => name.to_string(),
        None => columns[0].clone(),
    };
    Some(Index::new(name, columns, IndexType::Unique))
}

/// Parse `KEY name (a, b)` or `INDEX name (a, b)`. Plain indexes must be
/// named; an anonymous one yields nothing.
pub(crate) fn parse_index(clause: &str) -> Option<Index> {
    let mut s = Scanner::new(clause);
    if !s.eat_keyword("KEY") && !s.eat_keyword("INDEX") {
        return None;
    }
    if !s.expect_whitespace() {
        return None;
    }
    let name = s.eat_identifier()?;
    s.skip_whitespace();
    let columns = split_column_names(s.eat_parenthesized()?);
    if columns.is_empty() {
        return None;
    }
    Some(Index::new(name, columns, IndexType::Index))
}

/// Parse `[CONSTRAINT name] FOREIGN KEY (a) REFERENCES t (b)` anywhere in
/// the clause. An unnamed constraint gets `fk_<table>`.
pub(crate) fn parse_foreign_key(clause: &str, table_name: &str) -> Option<ForeignKey> {
    for at in word_starts(clause) {
        let mut s = Scanner::at(clause, at);

        let mut name: Option<&str> = None;
        if s.eat_keyword("CONSTRAINT") {
            if !s.expect_whitespace() {
                continue;
            }
            name = s.eat_identifier();
            if name.is_none() || !s.expect_whitespace() {
                continue;
            }
        }

        if !(s.eat_keyword("FOREIGN") && s.expect_whitespace() && s.eat_keyword("KEY")) {
            continue;
        }
        s.skip_whitespace();
        let raw_columns = match s.eat_parenthesized() {
            Some(raw) => raw,
            None => continue,
        };
        s.skip_whitespace();
        if !s.eat_keyword("REFERENCES") || !s.expect_whitespace() {
            continue;
        }
        let ref_table = match s.eat_identifier() {
            Some(name) => name,
            None => continue,
        };
        s.skip_whitespace();
        let raw_ref_columns = match s.eat_parenthesized() {
            Some(raw) => raw,
            None => continue,
        };

        let columns = split_column_names(raw_columns);
        let ref_columns = split_column_names(raw_ref_columns);
        if columns.is_empty() || ref_columns.is_empty() {
            continue;
        }

        let name = match name {
            Some(name) => name.to_string(),
            None => format!("fk_{table_name}"),
        };
        return Some(ForeignKey::new(name, columns, ref_table, ref_columns));
    }
    None
}

/// Split a column list on commas, trimming whitespace and back-ticks and
/// dropping empty entries.
pub(crate) fn split_column_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(|part| part.trim().trim_matches('`'))
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Scan for `DEFAULT <token>`, the token running to the next whitespace or
/// comma, with surrounding quotes stripped.
fn scan_default(text: &str) -> Option<String> {
    for at in word_starts(text) {
        let mut s = Scanner::at(text, at);
        if !s.eat_keyword("DEFAULT") || !s.expect_whitespace() {
            continue;
        }
        let start = s.pos();
        while s.peek().map_or(false, |c| !c.is_whitespace() && c != ',') {
            s.bump();
        }
        if s.pos() > start {
            let token = &text[start..s.pos()];
            return Some(token.trim_matches(|c| c == '\'' || c == '"').to_string());
        }
    }
    None
}

/// Scan for `COMMENT '<text>'`. The quotes are required; whitespace after
/// the keyword is required too, so `COMMENT=` on a column is ignored.
fn scan_column_comment(text: &str) -> Option<String> {
    for at in word_starts(text) {
        let mut s = Scanner::at(text, at);
        if !s.eat_keyword("COMMENT") || !s.expect_whitespace() {
            continue;
        }
        if let Some(comment) = s.eat_quoted() {
            return Some(comment.to_string());
        }
    }
    None
}

/// True when the clause begins with the keyword sequence, separated by
/// whitespace.
fn starts_with_keywords(text: &str, keywords: &[&str]) -> bool {
    let mut s = Scanner::new(text);
    for (n, keyword) in keywords.iter().enumerate() {
        if n > 0 && !s.expect_whitespace() {
            return false;
        }
        if !s.eat_keyword(keyword) {
            return false;
        }
    }
    true
}

/// True when the keyword sequence appears anywhere in the clause at a word
/// boundary.
fn contains_keywords(text: &str, keywords: &[&str]) -> bool {
    word_starts(text).any(|at| {
        let mut s = Scanner::at(text, at);
        keywords
            .iter()
            .enumerate()
            .all(|(n, keyword)| (n == 0 || s.expect_whitespace()) && s.eat_keyword(keyword))
    })
}
