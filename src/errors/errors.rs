use std::fmt::Display;

use thiserror::Error;

use crate::{lexer::tokens::TokenKind, Position};

/// A single parse failure and where it happened.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::ExpectedToken { .. } => "ExpectedToken",
            ErrorImpl::NoPrefixParseFn { .. } => "NoPrefixParseFn",
            ErrorImpl::IntegerParse { .. } => "IntegerParse",
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.internal_error)
    }
}

impl std::error::Error for Error {}

// Message formats are relied on by downstream tooling, keep them verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ErrorImpl {
    #[error("expected next token is {expected}, got {found} instead")]
    ExpectedToken { expected: TokenKind, found: TokenKind },
    #[error("no prefix parse function for {kind} found")]
    NoPrefixParseFn { kind: TokenKind },
    #[error("could not parse {literal:?} as integer")]
    IntegerParse { literal: String },
}
