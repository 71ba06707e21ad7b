use std::fmt;
use serde::{Serialize, Serializer};

/// A single lexical unit. Position is the line and column of the first
/// character of the lexeme, both 1-based.
#[derive(Debug, PartialEq, Eq, Clone, Serialize)]
pub struct Token {
    kind: Kind,
    lexeme: String,
    line: usize,
    column: usize,
}

impl Token {
    pub fn new(kind: Kind, lexeme: impl Into<String>, line: usize, column: usize) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            line,
            column,
        }
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn is_eof(&self) -> bool {
        self.kind == Kind::Eof
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "<{}, \"{}\", Line: {}, Col: {}>",
            self.kind, self.lexeme, self.line, self.column
        )
    }
}

/// Ordered by declaration, which is the order statistics are reported in.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum Kind {
    // Keywords
    Start,       // start
    Finish,      // finish
    Loop,        // loop
    Condition,   // condition
    Declare,     // declare
    Output,      // output
    Input,       // input
    Function,    // function
    Return,      // return
    Break,       // break
    Continue,    // continue
    Else,        // else

    // Literals
    Identifier,  // starts with an uppercase letter
    Integer,     // 42, -7
    Float,       // 3.14, 1e10, 2.5E-3
    String,      // "..."
    Char,        // 'a', '\n'
    Boolean,     // true, false

    // Operators
    ArithmeticOp,  // + - * / % **
    RelationalOp,  // == != < > <= >=
    LogicalOp,     // && || !
    AssignmentOp,  // = += -= *= /=
    IncDecOp,      // ++ --

    // Punctuators
    LParen,      // (
    RParen,      // )
    LBrace,      // {
    RBrace,      // }
    LBracket,    // [
    RBracket,    // ]
    Comma,       // ,
    Semicolon,   // ;
    Colon,       // :

    Eof,         // end of stream, also forced by fatal diagnostics
    Error,
}

impl Kind {
    pub fn label(self) -> &'static str {
        match self {
            Kind::Start => "START",
            Kind::Finish => "FINISH",
            Kind::Loop => "LOOP",
            Kind::Condition => "CONDITION",
            Kind::Declare => "DECLARE",
            Kind::Output => "OUTPUT",
            Kind::Input => "INPUT",
            Kind::Function => "FUNCTION",
            Kind::Return => "RETURN",
            Kind::Break => "BREAK",
            Kind::Continue => "CONTINUE",
            Kind::Else => "ELSE",
            Kind::Identifier => "IDENTIFIER",
            Kind::Integer => "INTEGER",
            Kind::Float => "FLOAT",
            Kind::String => "STRING",
            Kind::Char => "CHAR",
            Kind::Boolean => "BOOLEAN",
            Kind::ArithmeticOp => "ARITHMETIC_OP",
            Kind::RelationalOp => "RELATIONAL_OP",
            Kind::LogicalOp => "LOGICAL_OP",
            Kind::AssignmentOp => "ASSIGNMENT_OP",
            Kind::IncDecOp => "INC_DEC_OP",
            Kind::LParen => "LPAREN",
            Kind::RParen => "RPAREN",
            Kind::LBrace => "LBRACE",
            Kind::RBrace => "RBRACE",
            Kind::LBracket => "LBRACKET",
            Kind::RBracket => "RBRACKET",
            Kind::Comma => "COMMA",
            Kind::Semicolon => "SEMICOLON",
            Kind::Colon => "COLON",
            Kind::Eof => "EOF",
            Kind::Error => "ERROR",
        }
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            Kind::Start
                | Kind::Finish
                | Kind::Loop
                | Kind::Condition
                | Kind::Declare
                | Kind::Output
                | Kind::Input
                | Kind::Function
                | Kind::Return
                | Kind::Break
                | Kind::Continue
                | Kind::Else
        )
    }

    pub fn is_literal(self) -> bool {
        matches!(
            self,
            Kind::Identifier
                | Kind::Integer
                | Kind::Float
                | Kind::String
                | Kind::Char
                | Kind::Boolean
        )
    }

    pub fn is_operator(self) -> bool {
        matches!(
            self,
            Kind::ArithmeticOp
                | Kind::RelationalOp
                | Kind::LogicalOp
                | Kind::AssignmentOp
                | Kind::IncDecOp
        )
    }

    pub fn is_punctuator(self) -> bool {
        matches!(
            self,
            Kind::LParen
                | Kind::RParen
                | Kind::LBrace
                | Kind::RBrace
                | Kind::LBracket
                | Kind::RBracket
                | Kind::Comma
                | Kind::Semicolon
                | Kind::Colon
        )
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.label())
    }
}

impl Serialize for Kind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
