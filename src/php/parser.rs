use super::PhpError;
use super::lexer::{Token, TokenKind};
use super::value::PhpValue;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Literal(PhpValue),
    Array(Vec<ArrayItem>),
    Variable(String),
    Index(Box<Expr>, Box<Expr>),
    Constant(String),
    Call(String, Vec<Expr>),
    Not(Box<Expr>),
    Neg(Box<Expr>),
    And(Box<Expr>, Box<Expr>),
    Or(Box<Expr>, Box<Expr>),
    Concat(Box<Expr>, Box<Expr>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ArrayItem {
    pub key: Option<Expr>,
    pub value: Expr,
}

/// Assignment target: `$name`, `$name['a']`, `$name[]`…
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub name: String,
    /// `None` is an append (`[]`).
    pub path: Vec<Option<Expr>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StmtKind {
    Assign(Target, Expr),
    If {
        branches: Vec<(Expr, Vec<Stmt>)>,
        otherwise: Option<Vec<Stmt>>,
    },
    Echo(Vec<Expr>),
    InlineHtml(String),
    Unset(Vec<Target>),
    Exit,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stmt {
    pub kind: StmtKind,
    pub line: usize,
}

/// Deepest syntax tree the parser builds. Bracket, parenthesis and block
/// nesting, unary operators and operator chains all count.
pub const MAX_NESTING: usize = 128;

/// Recursive descent parser over the token stream.
pub struct Parser {
    tokens: Vec<Token>,
    pos: usize,
    depth: usize,
}

impl Parser {
    #[must_use]
    pub const fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    /// Parse the whole token stream into statements.
    ///
    /// # Errors
    /// Returns an error at the first construct outside the supported grammar.
    pub fn parse_program(mut self) -> Result<Vec<Stmt>, PhpError> {
        let mut stmts = Vec::new();
        while !self.at_end() {
            if let Some(stmt) = self.parse_statement()? {
                stmts.push(stmt);
            }
        }
        Ok(stmts)
    }

    fn at_end(&self) -> bool {
        self.pos >= self.tokens.len()
    }

    fn peek(&self) -> Option<&TokenKind> {
        self.tokens.get(self.pos).map(|t| &t.kind)
    }

    fn line(&self) -> usize {
        self.tokens
            .get(self.pos)
            .or_else(|| self.tokens.last())
            .map_or(1, |t| t.line)
    }

    fn next(&mut self) -> Option<TokenKind> {
        let token = self.tokens.get(self.pos).map(|t| t.kind.clone());
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn check(&self, kind: &TokenKind) -> bool {
        self.peek() == Some(kind)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.check(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn check_keyword(&self, keyword: &str) -> bool {
        matches!(self.peek(), Some(TokenKind::Ident(id)) if id.eq_ignore_ascii_case(keyword))
    }

    fn eat_keyword(&mut self, keyword: &str) -> bool {
        if self.check_keyword(keyword) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, kind: &TokenKind, what: &str) -> Result<(), PhpError> {
        if self.eat(kind) {
            Ok(())
        } else {
            Err(self.unexpected(what))
        }
    }

    /// Go one level deeper, failing past [`MAX_NESTING`].
    fn descend(&mut self) -> Result<(), PhpError> {
        self.depth += 1;
        if self.depth > MAX_NESTING {
            return Err(PhpError::new(self.line(), "nesting too deep"));
        }
        Ok(())
    }

    /// Run `parse` one level deeper.
    fn nested<T>(
        &mut self,
        parse: impl FnOnce(&mut Self) -> Result<T, PhpError>,
    ) -> Result<T, PhpError> {
        self.descend()?;
        let result = parse(self);
        self.depth -= 1;
        result
    }

    fn unexpected(&self, expected: &str) -> PhpError {
        let found = self
            .peek()
            .map_or_else(|| "end of file".to_string(), describe);
        PhpError::new(self.line(), format!("expected {expected}, found {found}"))
    }

    /// `;`, a close tag, or end of input.
    fn expect_terminator(&mut self) -> Result<(), PhpError> {
        if self.eat(&TokenKind::Semicolon) || self.check(&TokenKind::CloseTag) || self.at_end() {
            Ok(())
        } else {
            Err(self.unexpected("';'"))
        }
    }

    fn parse_statement(&mut self) -> Result<Option<Stmt>, PhpError> {
        let line = self.line();
        let Some(token) = self.peek().cloned() else {
            return Ok(None);
        };

        let kind = match token {
            TokenKind::Semicolon | TokenKind::CloseTag => {
                self.pos += 1;
                return Ok(None);
            }
            TokenKind::InlineHtml(text) => {
                self.pos += 1;
                StmtKind::InlineHtml(text)
            }
            TokenKind::LBrace => {
                // A bare block behaves like its statements inlined
                let body = self.parse_block()?;
                StmtKind::If {
                    branches: vec![(Expr::Literal(PhpValue::Bool(true)), body)],
                    otherwise: None,
                }
            }
            TokenKind::Variable(_) => self.parse_assignment()?,
            TokenKind::Ident(ref id) => self.parse_keyword_statement(&id.to_ascii_lowercase())?,
            _ => return Err(self.unexpected("a statement")),
        };
        Ok(Some(Stmt { kind, line }))
    }

    fn parse_keyword_statement(&mut self, keyword: &str) -> Result<StmtKind, PhpError> {
        match keyword {
            "if" => {
                self.pos += 1;
                self.parse_if()
            }
            "exit" | "die" => {
                self.pos += 1;
                if self.eat(&TokenKind::LParen) && !self.eat(&TokenKind::RParen) {
                    self.parse_expr()?;
                    self.expect(&TokenKind::RParen, "')'")?;
                }
                self.expect_terminator()?;
                Ok(StmtKind::Exit)
            }
            "echo" => {
                self.pos += 1;
                let mut exprs = vec![self.parse_expr()?];
                while self.eat(&TokenKind::Comma) {
                    exprs.push(self.parse_expr()?);
                }
                self.expect_terminator()?;
                Ok(StmtKind::Echo(exprs))
            }
            "print" => {
                self.pos += 1;
                let expr = self.parse_expr()?;
                self.expect_terminator()?;
                Ok(StmtKind::Echo(vec![expr]))
            }
            "unset" => {
                self.pos += 1;
                self.expect(&TokenKind::LParen, "'('")?;
                let mut targets = vec![self.parse_target()?];
                while self.eat(&TokenKind::Comma) {
                    if self.check(&TokenKind::RParen) {
                        break;
                    }
                    targets.push(self.parse_target()?);
                }
                self.expect(&TokenKind::RParen, "')'")?;
                self.expect_terminator()?;
                Ok(StmtKind::Unset(targets))
            }
            _ => Err(PhpError::new(
                self.line(),
                format!("unsupported statement '{keyword}'"),
            )),
        }
    }

    fn parse_if(&mut self) -> Result<StmtKind, PhpError> {
        let mut branches = Vec::new();
        let mut otherwise = None;

        let condition = self.parse_condition()?;
        let body = self.parse_body()?;
        branches.push((condition, body));

        loop {
            if self.eat_keyword("elseif") {
                let condition = self.parse_condition()?;
                let body = self.parse_body()?;
                branches.push((condition, body));
            } else if self.eat_keyword("else") {
                if self.eat_keyword("if") {
                    let condition = self.parse_condition()?;
                    let body = self.parse_body()?;
                    branches.push((condition, body));
                } else {
                    otherwise = Some(self.parse_body()?);
                    break;
                }
            } else {
                break;
            }
        }

        Ok(StmtKind::If {
            branches,
            otherwise,
        })
    }

    fn parse_condition(&mut self) -> Result<Expr, PhpError> {
        self.expect(&TokenKind::LParen, "'('")?;
        let condition = self.parse_expr()?;
        self.expect(&TokenKind::RParen, "')'")?;
        Ok(condition)
    }

    /// A braced block or a single statement.
    fn parse_body(&mut self) -> Result<Vec<Stmt>, PhpError> {
        if self.check(&TokenKind::LBrace) {
            return self.parse_block();
        }
        self.nested(|p| Ok(p.parse_statement()?.into_iter().collect()))
    }

    fn parse_block(&mut self) -> Result<Vec<Stmt>, PhpError> {
        self.nested(Self::parse_block_body)
    }

    fn parse_block_body(&mut self) -> Result<Vec<Stmt>, PhpError> {
        self.expect(&TokenKind::LBrace, "'{'")?;
        let mut stmts = Vec::new();
        while !self.eat(&TokenKind::RBrace) {
            if self.at_end() {
                return Err(self.unexpected("'}'"));
            }
            if let Some(stmt) = self.parse_statement()? {
                stmts.push(stmt);
            }
        }
        Ok(stmts)
    }

    fn parse_assignment(&mut self) -> Result<StmtKind, PhpError> {
        let target = self.parse_target()?;
        self.expect(&TokenKind::Assign, "'='")?;
        let value = self.parse_expr()?;
        self.expect_terminator()?;
        Ok(StmtKind::Assign(target, value))
    }

    fn parse_target(&mut self) -> Result<Target, PhpError> {
        let Some(TokenKind::Variable(name)) = self.peek().cloned() else {
            return Err(self.unexpected("a variable"));
        };
        self.pos += 1;
        let base = self.depth;
        let mut path = Vec::new();
        while self.eat(&TokenKind::LBracket) {
            self.descend()?;
            if self.eat(&TokenKind::RBracket) {
                path.push(None);
            } else {
                path.push(Some(self.parse_expr()?));
                self.expect(&TokenKind::RBracket, "']'")?;
            }
        }
        self.depth = base;
        Ok(Target { name, path })
    }

    // Expressions, lowest precedence first

    pub(crate) fn parse_expr(&mut self) -> Result<Expr, PhpError> {
        self.nested(Self::parse_keyword_or)
    }

    fn parse_keyword_or(&mut self) -> Result<Expr, PhpError> {
        let base = self.depth;
        let mut left = self.parse_keyword_and()?;
        while self.eat_keyword("or") {
            self.descend()?;
            let right = self.parse_keyword_and()?;
            left = Expr::Or(Box::new(left), Box::new(right));
        }
        self.depth = base;
        Ok(left)
    }

    fn parse_keyword_and(&mut self) -> Result<Expr, PhpError> {
        let base = self.depth;
        let mut left = self.parse_or()?;
        while self.eat_keyword("and") {
            self.descend()?;
            let right = self.parse_or()?;
            left = Expr::And(Box::new(left), Box::new(right));
        }
        self.depth = base;
        Ok(left)
    }

    fn parse_or(&mut self) -> Result<Expr, PhpError> {
        let base = self.depth;
        let mut left = self.parse_and()?;
        while self.eat(&TokenKind::OrOr) {
            self.descend()?;
            let right = self.parse_and()?;
            left = Expr::Or(Box::new(left), Box::new(right));
        }
        self.depth = base;
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<Expr, PhpError> {
        let base = self.depth;
        let mut left = self.parse_concat()?;
        while self.eat(&TokenKind::AndAnd) {
            self.descend()?;
            let right = self.parse_concat()?;
            left = Expr::And(Box::new(left), Box::new(right));
        }
        self.depth = base;
        Ok(left)
    }

    fn parse_concat(&mut self) -> Result<Expr, PhpError> {
        let base = self.depth;
        let mut left = self.parse_unary()?;
        while self.eat(&TokenKind::Dot) {
            self.descend()?;
            let right = self.parse_unary()?;
            left = Expr::Concat(Box::new(left), Box::new(right));
        }
        self.depth = base;
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, PhpError> {
        if self.eat(&TokenKind::Bang) {
            return Ok(Expr::Not(Box::new(self.nested(Self::parse_unary)?)));
        }
        if self.eat(&TokenKind::Minus) {
            return Ok(Expr::Neg(Box::new(self.nested(Self::parse_unary)?)));
        }
        self.parse_postfix()
    }

    fn parse_postfix(&mut self) -> Result<Expr, PhpError> {
        let base = self.depth;
        let mut expr = self.parse_primary()?;
        while self.eat(&TokenKind::LBracket) {
            self.descend()?;
            let index = self.parse_expr()?;
            self.expect(&TokenKind::RBracket, "']'")?;
            expr = Expr::Index(Box::new(expr), Box::new(index));
        }
        self.depth = base;
        Ok(expr)
    }

    fn parse_primary(&mut self) -> Result<Expr, PhpError> {
        let line = self.line();
        let Some(token) = self.next() else {
            return Err(self.unexpected("an expression"));
        };

        match token {
            TokenKind::Str(s) => Ok(Expr::Literal(PhpValue::Str(s))),
            TokenKind::Int(n) => Ok(Expr::Literal(PhpValue::Int(n))),
            TokenKind::Float(f) => Ok(Expr::Literal(PhpValue::Float(f))),
            TokenKind::Variable(name) => Ok(Expr::Variable(name)),
            TokenKind::LParen => {
                let expr = self.parse_expr()?;
                self.expect(&TokenKind::RParen, "')'")?;
                Ok(expr)
            }
            TokenKind::LBracket => Ok(Expr::Array(self.parse_array_items(&TokenKind::RBracket)?)),
            TokenKind::Ident(id) => self.parse_ident_expr(id),
            other => Err(PhpError::new(
                line,
                format!("expected an expression, found {}", describe(&other)),
            )),
        }
    }

    fn parse_ident_expr(&mut self, id: String) -> Result<Expr, PhpError> {
        let lower = id.to_ascii_lowercase();
        match lower.as_str() {
            "true" => return Ok(Expr::Literal(PhpValue::Bool(true))),
            "false" => return Ok(Expr::Literal(PhpValue::Bool(false))),
            "null" => return Ok(Expr::Literal(PhpValue::Null)),
            "array" if self.check(&TokenKind::LParen) => {
                self.pos += 1;
                return Ok(Expr::Array(self.parse_array_items(&TokenKind::RParen)?));
            }
            _ => {}
        }

        if self.eat(&TokenKind::LParen) {
            let mut args = Vec::new();
            while !self.eat(&TokenKind::RParen) {
                args.push(self.parse_expr()?);
                if !self.eat(&TokenKind::Comma) {
                    self.expect(&TokenKind::RParen, "')'")?;
                    break;
                }
            }
            return Ok(Expr::Call(lower, args));
        }

        Ok(Expr::Constant(id))
    }

    fn parse_array_items(&mut self, close: &TokenKind) -> Result<Vec<ArrayItem>, PhpError> {
        let mut items = Vec::new();
        while !self.eat(close) {
            let first = self.parse_expr()?;
            let item = if self.eat(&TokenKind::DoubleArrow) {
                ArrayItem {
                    key: Some(first),
                    value: self.parse_expr()?,
                }
            } else {
                ArrayItem {
                    key: None,
                    value: first,
                }
            };
            items.push(item);

            if !self.eat(&TokenKind::Comma) {
                self.expect(close, &describe(close))?;
                break;
            }
        }
        Ok(items)
    }
}

fn describe(kind: &TokenKind) -> String {
    match kind {
        TokenKind::InlineHtml(_) => "inline text".to_string(),
        TokenKind::CloseTag => "'?>'".to_string(),
        TokenKind::Variable(name) => format!("${name}"),
        TokenKind::Ident(id) => format!("'{id}'"),
        TokenKind::Str(_) => "string".to_string(),
        TokenKind::Int(n) => n.to_string(),
        TokenKind::Float(f) => f.to_string(),
        TokenKind::LParen => "'('".to_string(),
        TokenKind::RParen => "')'".to_string(),
        TokenKind::LBracket => "'['".to_string(),
        TokenKind::RBracket => "']'".to_string(),
        TokenKind::LBrace => "'{'".to_string(),
        TokenKind::RBrace => "'}'".to_string(),
        TokenKind::Semicolon => "';'".to_string(),
        TokenKind::Comma => "','".to_string(),
        TokenKind::Assign => "'='".to_string(),
        TokenKind::DoubleArrow => "'=>'".to_string(),
        TokenKind::Dot => "'.'".to_string(),
        TokenKind::Bang => "'!'".to_string(),
        TokenKind::Minus => "'-'".to_string(),
        TokenKind::AndAnd => "'&&'".to_string(),
        TokenKind::OrOr => "'||'".to_string(),
    }
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
