use super::PhpError;

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// Text outside `<?php ... ?>`.
    InlineHtml(String),
    /// `?>`, which also terminates the current statement.
    CloseTag,
    Variable(String),
    Ident(String),
    Str(String),
    Int(i64),
    Float(f64),
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Semicolon,
    Comma,
    Assign,
    DoubleArrow,
    Dot,
    Bang,
    Minus,
    AndAnd,
    OrOr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

/// Split a data file into tokens.
///
/// Starts in inline-text mode like the host language and switches to code
/// at `<?php`.
pub struct Lexer<'a> {
    src: &'a str,
    pos: usize,
    line: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    #[must_use]
    pub const fn new(src: &'a str) -> Self {
        Self {
            src,
            pos: 0,
            line: 1,
            tokens: Vec::new(),
        }
    }

    /// Tokenize the whole source.
    ///
    /// # Errors
    /// Returns an error for characters outside the supported grammar,
    /// unterminated strings or comments, and interpolating string literals.
    pub fn tokenize(mut self) -> Result<Vec<Token>, PhpError> {
        while self.pos < self.src.len() {
            self.lex_inline_html();
            if self.pos < self.src.len() {
                self.lex_code()?;
            }
        }
        Ok(self.tokens)
    }

    fn rest(&self) -> &'a str {
        &self.src[self.pos..]
    }

    fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    fn peek_at(&self, offset: usize) -> Option<char> {
        self.rest().chars().nth(offset)
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        if c == '\n' {
            self.line += 1;
        }
        Some(c)
    }

    fn advance(&mut self, text: &str) {
        self.line += text.matches('\n').count();
        self.pos += text.len();
    }

    fn emit(&mut self, kind: TokenKind, line: usize) {
        self.tokens.push(Token { kind, line });
    }

    fn error(&self, message: impl Into<String>) -> PhpError {
        PhpError::new(self.line, message)
    }

    fn lex_inline_html(&mut self) {
        let rest = self.rest();
        let open = find_open_tag(rest);
        let text = &rest[..open.unwrap_or(rest.len())];
        if !text.is_empty() {
            let line = self.line;
            self.emit(TokenKind::InlineHtml(text.to_string()), line);
            self.advance(text);
        }
        if open.is_some() {
            self.advance("<?php");
        }
    }

    /// Lex code until `?>` or end of input.
    fn lex_code(&mut self) -> Result<(), PhpError> {
        while let Some(c) = self.peek() {
            let line = self.line;
            match c {
                c if c.is_whitespace() => {
                    self.bump();
                }
                '?' if self.peek_at(1) == Some('>') => {
                    self.advance("?>");
                    self.emit(TokenKind::CloseTag, line);
                    // A single newline right after the close tag is swallowed
                    if self.rest().starts_with("\r\n") {
                        self.advance("\r\n");
                    } else if self.rest().starts_with('\n') {
                        self.advance("\n");
                    }
                    return Ok(());
                }
                '#' => self.skip_line_comment(),
                '/' if self.peek_at(1) == Some('/') => self.skip_line_comment(),
                '/' if self.peek_at(1) == Some('*') => self.skip_block_comment()?,
                '$' => self.lex_variable()?,
                '\'' => self.lex_single_quoted()?,
                '"' => self.lex_double_quoted()?,
                c if c.is_ascii_digit() => self.lex_number()?,
                c if is_ident_start(c) => {
                    let ident = self.take_ident();
                    self.emit(TokenKind::Ident(ident), line);
                }
                _ => self.lex_punct(c)?,
            }
        }
        Ok(())
    }

    fn lex_punct(&mut self, c: char) -> Result<(), PhpError> {
        let line = self.line;
        let two: String = self.rest().chars().take(2).collect();
        let (kind, len) = match two.as_str() {
            "=>" => (TokenKind::DoubleArrow, 2),
            "&&" => (TokenKind::AndAnd, 2),
            "||" => (TokenKind::OrOr, 2),
            _ => match c {
                '(' => (TokenKind::LParen, 1),
                ')' => (TokenKind::RParen, 1),
                '[' => (TokenKind::LBracket, 1),
                ']' => (TokenKind::RBracket, 1),
                '{' => (TokenKind::LBrace, 1),
                '}' => (TokenKind::RBrace, 1),
                ';' => (TokenKind::Semicolon, 1),
                ',' => (TokenKind::Comma, 1),
                '=' => (TokenKind::Assign, 1),
                '.' => (TokenKind::Dot, 1),
                '!' => (TokenKind::Bang, 1),
                '-' => (TokenKind::Minus, 1),
                _ => return Err(self.error(format!("unexpected character '{c}'"))),
            },
        };
        self.pos += len;
        self.emit(kind, line);
        Ok(())
    }

    fn skip_line_comment(&mut self) {
        while let Some(c) = self.peek() {
            // A close tag ends a line comment
            if c == '\n' || self.rest().starts_with("?>") {
                break;
            }
            self.bump();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), PhpError> {
        let start = self.line;
        match self.rest()[2..].find("*/") {
            Some(end) => {
                let comment = &self.rest()[..end + 4];
                self.advance(comment);
                Ok(())
            }
            None => Err(PhpError::new(start, "unterminated comment")),
        }
    }

    fn take_ident(&mut self) -> String {
        let len = self
            .rest()
            .char_indices()
            .find(|&(_, c)| !is_ident_char(c))
            .map_or(self.rest().len(), |(i, _)| i);
        let ident = self.rest()[..len].to_string();
        self.pos += len;
        ident
    }

    fn lex_variable(&mut self) -> Result<(), PhpError> {
        let line = self.line;
        self.bump();
        match self.peek() {
            Some(c) if is_ident_start(c) => {
                let name = self.take_ident();
                self.emit(TokenKind::Variable(name), line);
                Ok(())
            }
            _ => Err(self.error("variable variables are not supported")),
        }
    }

    fn lex_number(&mut self) -> Result<(), PhpError> {
        let line = self.line;
        let rest = self.rest();

        if let Some(hex) = rest.strip_prefix("0x").or_else(|| rest.strip_prefix("0X")) {
            let len = hex
                .find(|c: char| !c.is_ascii_hexdigit())
                .unwrap_or(hex.len());
            let value = i64::from_str_radix(&hex[..len], 16)
                .map_err(|_| self.error("invalid hexadecimal literal"))?;
            self.pos += 2 + len;
            self.emit(TokenKind::Int(value), line);
            return Ok(());
        }

        let int_len = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        let after = &rest[int_len..];
        let is_float = after.starts_with('.')
            && after[1..].chars().next().is_some_and(|c| c.is_ascii_digit());

        if is_float {
            let frac_len = after[1..]
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(after.len() - 1);
            let text = &rest[..int_len + 1 + frac_len];
            let value = text
                .parse::<f64>()
                .map_err(|_| self.error("invalid float literal"))?;
            self.pos += text.len();
            self.emit(TokenKind::Float(value), line);
        } else {
            let text = &rest[..int_len];
            let kind = text.parse::<i64>().map_or_else(
                |_| text.parse::<f64>().map(TokenKind::Float),
                |n| Ok(TokenKind::Int(n)),
            );
            let kind = kind.map_err(|_| self.error("invalid integer literal"))?;
            self.pos += int_len;
            self.emit(kind, line);
        }
        Ok(())
    }

    fn lex_single_quoted(&mut self) -> Result<(), PhpError> {
        let line = self.line;
        self.bump();
        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(PhpError::new(line, "unterminated string")),
                Some('\'') => break,
                Some('\\') => match self.peek() {
                    Some(c @ ('\'' | '\\')) => {
                        self.bump();
                        value.push(c);
                    }
                    _ => value.push('\\'),
                },
                Some(c) => value.push(c),
            }
        }
        self.emit(TokenKind::Str(value), line);
        Ok(())
    }

    fn lex_double_quoted(&mut self) -> Result<(), PhpError> {
        let line = self.line;
        self.bump();
        let mut value = String::new();
        loop {
            match self.bump() {
                None => return Err(PhpError::new(line, "unterminated string")),
                Some('"') => break,
                Some('\\') => self.lex_escape(&mut value),
                Some('$') if self.peek().is_some_and(|c| is_ident_start(c) || c == '{') => {
                    return Err(self.error("variable interpolation in strings is not supported"));
                }
                Some('{') if self.peek() == Some('$') => {
                    return Err(self.error("variable interpolation in strings is not supported"));
                }
                Some(c) => value.push(c),
            }
        }
        self.emit(TokenKind::Str(value), line);
        Ok(())
    }

    fn lex_escape(&mut self, value: &mut String) {
        let simple = match self.peek() {
            Some('n') => Some('\n'),
            Some('t') => Some('\t'),
            Some('r') => Some('\r'),
            Some('v') => Some('\x0b'),
            Some('e') => Some('\x1b'),
            Some('f') => Some('\x0c'),
            Some('\\') => Some('\\'),
            Some('$') => Some('$'),
            Some('"') => Some('"'),
            _ => None,
        };
        if let Some(c) = simple {
            self.bump();
            value.push(c);
            return;
        }

        let rest = self.rest();
        if let Some(hex) = rest.strip_prefix('x') {
            let len = hex
                .char_indices()
                .take(2)
                .take_while(|(_, c)| c.is_ascii_hexdigit())
                .count();
            if len > 0
                && let Ok(byte) = u8::from_str_radix(&hex[..len], 16)
            {
                self.pos += 1 + len;
                value.push(char::from(byte));
                return;
            }
        }

        let octal_len = rest
            .chars()
            .take(3)
            .take_while(|c| ('0'..='7').contains(c))
            .count();
        if octal_len > 0
            && let Ok(code) = u32::from_str_radix(&rest[..octal_len], 8)
            && let Some(c) = char::from_u32(code & 0xff)
        {
            self.pos += octal_len;
            value.push(c);
            return;
        }

        // Unknown escapes keep the backslash
        value.push('\\');
    }
}

fn find_open_tag(text: &str) -> Option<usize> {
    let mut from = 0;
    while let Some(i) = text[from..].find("<?php") {
        let at = from + i;
        let next = text[at + 5..].chars().next();
        if next.is_none_or(char::is_whitespace) {
            return Some(at);
        }
        from = at + 5;
    }
    None
}

const fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

const fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[cfg(test)]
#[path = "lexer_tests.rs"]
mod tests;
