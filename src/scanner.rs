//! Hand-written scanner turning source text into a stream of [`Token`]s.
//!
//! The scanner is pull-based: every call to [`Scanner::next_token`] advances
//! the cursor just far enough to produce one token. Whitespace and comments
//! never surface as tokens. Identifiers are recorded into the scanner's
//! [`SymbolTable`] and lexical faults into its [`ErrorLog`] as a side effect.
//!
//! Two faults end the scan early: an unterminated string and an unclosed
//! block comment. Both are logged and the scanner answers with an EOF token
//! from then on, so a premature EOF paired with [`ErrorLog::has_fatal`]
//! means the stream is incomplete.

use std::iter::FusedIterator;
use tracing::{debug, trace};
use crate::error::{DiagnosticKind, ErrorLog};
use crate::keywords::Keywords;
use crate::symbol_table::SymbolTable;
use crate::token::{Kind, Token};

/// Label stored in the symbol table for every identifier.
pub const IDENTIFIER_LABEL: &str = "IDENTIFIER";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Identifiers longer than this get an "ID Length" diagnostic.
    pub max_identifier_len: usize,
    /// Keep diagnostics off stderr; they are still logged.
    pub quiet: bool,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            max_identifier_len: 30,
            quiet: false,
        }
    }
}

pub struct Scanner<'a> {
    chars: Vec<char>,
    keywords: &'a Keywords,
    options: ScanOptions,
    position: usize,
    line: usize,
    column: usize,
    start: usize,
    symbols: SymbolTable,
    errors: ErrorLog,
}

impl<'a> Scanner<'a> {
    pub fn new(source: &str, keywords: &'a Keywords) -> Self {
        Self::with_options(source, keywords, ScanOptions::default())
    }

    pub fn with_options(source: &str, keywords: &'a Keywords, options: ScanOptions) -> Self {
        let errors = if options.quiet {
            ErrorLog::quiet()
        } else {
            ErrorLog::new()
        };

        Self {
            chars: source.chars().collect(),
            keywords,
            options,
            position: 0,
            line: 1,
            column: 0,
            start: 0,
            symbols: SymbolTable::new(),
            errors,
        }
    }

    /// Line the cursor is currently on.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    pub fn errors(&self) -> &ErrorLog {
        &self.errors
    }

    pub fn into_parts(self) -> (SymbolTable, ErrorLog) {
        (self.symbols, self.errors)
    }

    /// Drains the scanner. The returned vector always ends with exactly one
    /// EOF token.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let is_eof = token.is_eof();
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    /// Produces the next token. Once the input is exhausted (or a fatal fault
    /// forced the end) every further call returns EOF.
    pub fn next_token(&mut self) -> Token {
        loop {
            if let Some(token) = self.scan_token() {
                trace!(
                    kind = %token.kind(),
                    lexeme = token.lexeme(),
                    line = token.line(),
                    column = token.column(),
                    "token"
                );
                return token;
            }
        }
    }

    /// One classification attempt. `None` means nothing was produced at this
    /// point (a comment was skipped or a recoverable fault was logged) and the
    /// caller should try again.
    fn scan_token(&mut self) -> Option<Token> {
        self.skip_whitespace();
        if self.is_at_end() {
            return Some(self.eof());
        }

        self.start = self.position;
        let line = self.line;
        let c = self.advance();
        let column = self.column;

        if c.is_alphabetic() {
            return Some(self.word(line, column));
        }
        if c.is_ascii_digit() {
            return Some(self.number(line, column));
        }
        if (c == '-' || c == '+') && self.peek().is_ascii_digit() {
            return Some(self.number(line, column));
        }
        if c == '"' {
            return Some(self.string(line, column));
        }
        if c == '\'' {
            return self.character(line, column);
        }

        let kind = match c {
            '(' => Kind::LParen,
            ')' => Kind::RParen,
            '{' => Kind::LBrace,
            '}' => Kind::RBrace,
            '[' => Kind::LBracket,
            ']' => Kind::RBracket,
            ',' => Kind::Comma,
            ';' => Kind::Semicolon,
            ':' => Kind::Colon,
            '#' if self.peek() == '#' => {
                self.line_comment();
                return None;
            }
            '#' if self.peek() == '*' => return self.block_comment(line, column),
            '+' => {
                if self.match_char('+') {
                    Kind::IncDecOp
                } else if self.match_char('=') {
                    Kind::AssignmentOp
                } else {
                    Kind::ArithmeticOp
                }
            }
            '-' => {
                if self.match_char('-') {
                    Kind::IncDecOp
                } else if self.match_char('=') {
                    Kind::AssignmentOp
                } else {
                    Kind::ArithmeticOp
                }
            }
            '*' => {
                if self.match_char('*') {
                    Kind::ArithmeticOp
                } else if self.match_char('=') {
                    Kind::AssignmentOp
                } else {
                    Kind::ArithmeticOp
                }
            }
            '/' => {
                if self.match_char('=') {
                    Kind::AssignmentOp
                } else {
                    Kind::ArithmeticOp
                }
            }
            '%' => Kind::ArithmeticOp,
            '=' => {
                if self.match_char('=') {
                    Kind::RelationalOp
                } else {
                    Kind::AssignmentOp
                }
            }
            '!' => {
                if self.match_char('=') {
                    Kind::RelationalOp
                } else {
                    Kind::LogicalOp
                }
            }
            '<' | '>' => {
                self.match_char('=');
                Kind::RelationalOp
            }
            '&' if self.match_char('&') => Kind::LogicalOp,
            '|' if self.match_char('|') => Kind::LogicalOp,
            _ => {
                self.errors.report(
                    DiagnosticKind::InvalidCharacter,
                    line,
                    column,
                    c.to_string(),
                    "Unexpected character",
                );
                return None;
            }
        };

        Some(self.make_token(kind, line, column))
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.chars.len()
    }

    fn peek(&self) -> char {
        self.chars.get(self.position).copied().unwrap_or('\0')
    }

    fn peek_next(&self) -> char {
        self.chars.get(self.position + 1).copied().unwrap_or('\0')
    }

    /// Consumes one character. A consumed newline moves the cursor to the
    /// start of the next line.
    fn advance(&mut self) -> char {
        let c = self.peek();
        self.position += 1;
        if c == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
        c
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.is_at_end() || self.peek() != expected {
            return false;
        }
        self.advance();
        true
    }

    fn lexeme(&self) -> String {
        self.chars[self.start..self.position].iter().collect()
    }

    fn make_token(&self, kind: Kind, line: usize, column: usize) -> Token {
        Token::new(kind, self.lexeme(), line, column)
    }

    fn eof(&self) -> Token {
        Token::new(Kind::Eof, "", self.line, self.column)
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), ' ' | '\t' | '\r' | '\n') {
            self.advance();
        }
    }

    /// `##` through end of line. The newline itself is left for
    /// [`Scanner::skip_whitespace`].
    fn line_comment(&mut self) {
        while !self.is_at_end() && self.peek() != '\n' {
            self.advance();
        }
        debug!(line = self.line, "skipped line comment");
    }

    /// `#* ... *#`, nesting on every inner `#*`. The opening `#` has already
    /// been consumed.
    fn block_comment(&mut self, line: usize, column: usize) -> Option<Token> {
        self.advance();
        let mut depth = 1usize;

        while !self.is_at_end() && depth > 0 {
            if self.peek() == '#' && self.peek_next() == '*' {
                self.advance();
                self.advance();
                depth += 1;
            } else if self.peek() == '*' && self.peek_next() == '#' {
                self.advance();
                self.advance();
                depth -= 1;
            } else {
                self.advance();
            }
        }

        if depth > 0 {
            self.errors.report(
                DiagnosticKind::UnclosedComment,
                line,
                column,
                "#*",
                "Nested comment not closed",
            );
            debug!(line, column, depth, "unclosed block comment, stopping scan");
            return Some(self.eof());
        }

        debug!(from = line, to = self.line, "skipped block comment");
        None
    }

    fn word(&mut self, line: usize, column: usize) -> Token {
        while self.peek().is_alphanumeric() || self.peek() == '_' {
            self.advance();
        }

        let text = self.lexeme();
        if let Some(kind) = self.keywords.lookup(&text) {
            return Token::new(kind, text, line, column);
        }

        let starts_upper = text.chars().next().is_some_and(char::is_uppercase);
        if !starts_upper {
            self.errors.report(
                DiagnosticKind::InvalidIdentifier,
                line,
                column,
                text.clone(),
                "Identifiers must start with Uppercase",
            );
            return Token::new(Kind::Identifier, text, line, column);
        }

        let max = self.options.max_identifier_len;
        if text.chars().count() > max {
            self.errors.report(
                DiagnosticKind::IdLength,
                line,
                column,
                text.clone(),
                format!("Exceeds {} characters", max),
            );
        }
        self.symbols.record(&text, IDENTIFIER_LABEL, line);
        Token::new(Kind::Identifier, text, line, column)
    }

    /// The optional sign, if any, is the character already consumed at the
    /// start of the token.
    fn number(&mut self, line: usize, column: usize) -> Token {
        let mut is_float = false;
        self.consume_digits();

        if self.peek() == '.' {
            is_float = true;
            self.advance();
            self.consume_digits();
        }

        if matches!(self.peek(), 'e' | 'E') {
            is_float = true;
            self.advance();
            if matches!(self.peek(), '+' | '-') {
                self.advance();
            }
            self.consume_digits();
        }

        let kind = if is_float { Kind::Float } else { Kind::Integer };
        self.make_token(kind, line, column)
    }

    fn consume_digits(&mut self) {
        while self.peek().is_ascii_digit() {
            self.advance();
        }
    }

    /// Escapes are not validated: `\u` swallows the next four characters
    /// whatever they are, any other escape swallows one.
    fn string(&mut self, line: usize, column: usize) -> Token {
        while !self.is_at_end() && self.peek() != '"' {
            if self.advance() == '\\' {
                if self.peek() == 'u' && !self.is_at_end() {
                    self.advance();
                    for _ in 0..4 {
                        if self.is_at_end() {
                            break;
                        }
                        self.advance();
                    }
                } else if !self.is_at_end() {
                    self.advance();
                }
            }
        }

        if self.is_at_end() {
            self.errors.report(
                DiagnosticKind::StringError,
                line,
                column,
                self.lexeme(),
                "Unterminated string",
            );
            debug!(line, column, "unterminated string, stopping scan");
            return self.eof();
        }

        self.advance();
        self.make_token(Kind::String, line, column)
    }

    fn character(&mut self, line: usize, column: usize) -> Option<Token> {
        if self.peek() == '\\' && !self.is_at_end() {
            self.advance();
        }
        if !self.is_at_end() {
            self.advance();
        }

        if self.match_char('\'') {
            return Some(self.make_token(Kind::Char, line, column));
        }

        self.errors.report(
            DiagnosticKind::CharError,
            line,
            column,
            self.lexeme(),
            "Malformed character",
        );
        None
    }
}

/// Yields every token up to, but not including, EOF.
impl Iterator for Scanner<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        let token = self.next_token();
        (!token.is_eof()).then_some(token)
    }
}

impl FusedIterator for Scanner<'_> {}
