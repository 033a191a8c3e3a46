use super::scan::{word_starts, Scanner};

/// A matched `CREATE TABLE` head: the table name and the byte offset of the
/// opening paren of its column body.
pub(crate) struct StatementHead<'a> {
    pub name: &'a str,
    pub open_paren: usize,
}

/// Remove `--` line comments and `/* */` block comments.
///
/// Comment markers inside single- or double-quoted strings are preserved,
/// so a default value like `'--'` survives. Line comments keep their
/// trailing newline; an unterminated block comment is left as-is.
pub(crate) fn strip_comments(text: &str) -> String {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    let mut quote: Option<char> = None;
    let mut iter = text.char_indices().peekable();

    while let Some((i, c)) = iter.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == q {
                quote = None;
            }
            continue;
        }
        match c {
            '\'' | '"' => {
                quote = Some(c);
                out.push(c);
            }
            '-' if bytes.get(i + 1) == Some(&b'-') => {
                while let Some(&(_, next)) = iter.peek() {
                    if next == '\n' {
                        break;
                    }
                    iter.next();
                }
            }
            '/' if bytes.get(i + 1) == Some(&b'*') => {
                match text[i + 2..].find("*/") {
                    Some(end) => {
                        let resume = i + 2 + end + 2;
                        while iter.peek().map_or(false, |&(j, _)| j < resume) {
                            iter.next();
                        }
                    }
                    None => out.push(c),
                }
            }
            _ => out.push(c),
        }
    }

    out
}

/// Match `CREATE TABLE [IF NOT EXISTS] <name> (` at `pos`, where `name` may
/// be back-tick quoted. Keywords match in any case.
pub(crate) fn match_statement_head(text: &str, pos: usize) -> Option<StatementHead<'_>> {
    let mut s = Scanner::at(text, pos);
    if !s.eat_keyword("CREATE") || !s.expect_whitespace() {
        return None;
    }
    if !s.eat_keyword("TABLE") || !s.expect_whitespace() {
        return None;
    }

    let checkpoint = s.pos();
    let matched_if_not_exists = s.eat_keyword("IF")
        && s.expect_whitespace()
        && s.eat_keyword("NOT")
        && s.expect_whitespace()
        && s.eat_keyword("EXISTS")
        && s.expect_whitespace();
    if !matched_if_not_exists {
        s.set_pos(checkpoint);
    }

    let name = s.eat_identifier()?;
    s.skip_whitespace();
    if s.peek() != Some('(') {
        return None;
    }

    Some(StatementHead {
        name,
        open_paren: s.pos(),
    })
}

/// Offsets where a `CREATE TABLE` head begins.
fn head_starts(text: &str) -> Vec<usize> {
    let mut starts = Vec::new();
    let mut resume = 0;
    for at in word_starts(text) {
        if at < resume {
            continue;
        }
        if let Some(head) = match_statement_head(text, at) {
            starts.push(at);
            resume = head.open_paren;
        }
    }
    starts
}

/// Carve cleaned DDL text into one substring per `CREATE TABLE` statement.
///
/// A statement runs from its head to the last semicolon before the next
/// head (or the end of input). A head with no semicolon after it yields
/// nothing; text between statements is ignored.
pub(crate) fn statements(text: &str) -> Vec<&str> {
    let starts = head_starts(text);
    let mut out = Vec::new();
    for (n, &start) in starts.iter().enumerate() {
        let end = starts.get(n + 1).copied().unwrap_or(text.len());
        let segment = &text[start..end];
        if let Some(semi) = segment.rfind(';') {
            out.push(&segment[..=semi]);
        }
    }
    out
}
