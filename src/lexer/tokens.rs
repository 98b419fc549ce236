use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("fn", TokenKind::Function);
        map.insert("let", TokenKind::Let);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    EndOfInput,

    Identifier,
    Integer,

    Assign,      // =
    Plus,        // +
    Minus,       // -
    Asterisk,    // *
    Slash,       // /
    Bang,        // !
    LessThan,    // <
    GreaterThan, // >
    Equal,       // ==
    NotEqual,    // !=

    Comma,
    Semicolon,
    LeftParen,
    RightParen,
    LeftBrace,
    RightBrace,

    // Reserved
    Function,
    Let,
    True,
    False,
    If,
    Else,
    Return,
}

impl TokenKind {
    /// The name used for this kind in diagnostics.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Identifier => "IDENT",
            TokenKind::Integer => "INT",
            TokenKind::Assign => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Asterisk => "*",
            TokenKind::Slash => "/",
            TokenKind::Bang => "!",
            TokenKind::LessThan => "<",
            TokenKind::GreaterThan => ">",
            TokenKind::Equal => "==",
            TokenKind::NotEqual => "!=",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::LeftParen => "(",
            TokenKind::RightParen => ")",
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::Function => "FUNCTION",
            TokenKind::Let => "LET",
            TokenKind::True => "TRUE",
            TokenKind::False => "FALSE",
            TokenKind::If => "IF",
            TokenKind::Else => "ELSE",
            TokenKind::Return => "RETURN",
        }
    }

    /// Maps a single byte to its token kind, for bytes that always form
    /// a token on their own.
    pub fn from_single_byte(byte: u8) -> Option<TokenKind> {
        let kind = match byte {
            b';' => TokenKind::Semicolon,
            b'(' => TokenKind::LeftParen,
            b')' => TokenKind::RightParen,
            b'{' => TokenKind::LeftBrace,
            b'}' => TokenKind::RightBrace,
            b',' => TokenKind::Comma,
            b'+' => TokenKind::Plus,
            b'-' => TokenKind::Minus,
            b'*' => TokenKind::Asterisk,
            b'/' => TokenKind::Slash,
            b'<' => TokenKind::LessThan,
            b'>' => TokenKind::GreaterThan,
            _ => return None,
        };

        Some(kind)
    }

    pub fn is_keyword(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Classifies an identifier-shaped word against the keyword table.
pub fn lookup_identifier(word: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(word)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    pub fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}
