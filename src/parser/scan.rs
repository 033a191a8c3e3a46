/// Characters that can continue an identifier or keyword.
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Cursor over a statement or clause body.
///
/// Keyword matching is case-insensitive and token-based: a keyword only
/// matches when the character that follows cannot continue a word, so
/// `KEY` never matches inside `keyboard`.
#[derive(Debug)]
pub(crate) struct Scanner<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }

    /// Start scanning at a byte offset (must be a char boundary).
    pub fn at(text: &'a str, pos: usize) -> Self {
        Self { text, pos }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub fn peek(&self) -> Option<char> {
        self.text[self.pos..].chars().next()
    }

    pub fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Skip any run of whitespace, including none.
    pub fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() {
                break;
            }
            self.bump();
        }
    }

    /// Require at least one whitespace character, then skip the whole run.
    pub fn expect_whitespace(&mut self) -> bool {
        match self.peek() {
            Some(c) if c.is_whitespace() => {
                self.skip_whitespace();
                true
            }
            _ => false,
        }
    }

    /// Consume `expected` if it is the next character.
    pub fn eat_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Consume an ASCII keyword, case-insensitively, ending at a word
    /// boundary. The cursor does not move on failure.
    pub fn eat_keyword(&mut self, keyword: &str) -> bool {
        let mut end = self.pos;
        let mut rest = self.text[self.pos..].chars();
        for expected in keyword.chars() {
            match rest.next() {
                Some(c) if c.eq_ignore_ascii_case(&expected) => end += c.len_utf8(),
                _ => return false,
            }
        }
        if self.text[end..].chars().next().map_or(false, is_word_char) {
            return false;
        }
        self.pos = end;
        true
    }

    /// Read a bare run of word characters.
    pub fn eat_word(&mut self) -> Option<&'a str> {
        let start = self.pos;
        while self.peek().map_or(false, is_word_char) {
            self.bump();
        }
        if self.pos == start {
            None
        } else {
            Some(&self.text[start..self.pos])
        }
    }

    /// Read an identifier with optional back-tick quoting on either side,
    /// returning the bare name.
    pub fn eat_identifier(&mut self) -> Option<&'a str> {
        let checkpoint = self.pos;
        self.eat_char('`');
        match self.eat_word() {
            Some(word) => {
                self.eat_char('`');
                Some(word)
            }
            None => {
                self.pos = checkpoint;
                None
            }
        }
    }

    /// Read a quoted span: an opening `'` or `"`, text up to the next quote
    /// character of either kind, and that closing quote.
    pub fn eat_quoted(&mut self) -> Option<&'a str> {
        let checkpoint = self.pos;
        match self.peek() {
            Some('\'') | Some('"') => {
                self.bump();
            }
            _ => return None,
        }
        let start = self.pos;
        while let Some(c) = self.peek() {
            if c == '\'' || c == '"' {
                let span = &self.text[start..self.pos];
                self.bump();
                return Some(span);
            }
            self.bump();
        }
        self.pos = checkpoint;
        None
    }

    /// Consume a parenthesized group at the cursor, depth- and quote-aware,
    /// returning the inner text.
    pub fn eat_parenthesized(&mut self) -> Option<&'a str> {
        if self.peek() != Some('(') {
            return None;
        }
        let close = matching_paren(self.text, self.pos)?;
        let inner = &self.text[self.pos + 1..close];
        self.pos = close + 1;
        Some(inner)
    }
}

/// Find the close paren matching the `(` at `open`, skipping parens inside
/// quoted strings. Returns the byte index of the close paren.
pub(crate) fn matching_paren(text: &str, open: usize) -> Option<usize> {
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    for (offset, c) in text[open..].char_indices() {
        match quote {
            Some(q) => {
                if c == q {
                    quote = None;
                }
            }
            None => match c {
                '\'' | '"' => quote = Some(c),
                '(' => depth += 1,
                ')' => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return Some(open + offset);
                    }
                }
                _ => {}
            },
        }
    }
    None
}

/// Byte offsets where a word begins, i.e. word characters not preceded by
/// another word character.
pub(crate) fn word_starts(text: &str) -> impl Iterator<Item = usize> + '_ {
    let mut prev_is_word = false;
    text.char_indices().filter_map(move |(i, c)| {
        let starts_here = is_word_char(c) && !prev_is_word;
        prev_is_word = is_word_char(c);
        if starts_here {
            Some(i)
        } else {
            None
        }
    })
}
