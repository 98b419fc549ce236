use std::fmt::Display;

use crate::{lexer::tokens::Token, Span};

use super::{
    ast::{Expr, Node},
    expressions::Identifier,
};

/// `let <name> = <value>;`
///
/// `value` is left empty: the binding's right-hand side is skipped, not
/// parsed.
#[derive(Debug, Clone, PartialEq)]
pub struct LetStmt {
    pub token: Token,
    pub name: Identifier,
    pub value: Option<Expr>,
    pub span: Span,
}

impl Node for LetStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for LetStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} = ", self.token_literal(), self.name)?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// `return <value>;`, with the same empty value slot as `LetStmt`.
#[derive(Debug, Clone, PartialEq)]
pub struct ReturnStmt {
    pub token: Token,
    pub value: Option<Expr>,
    pub span: Span,
}

impl Node for ReturnStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for ReturnStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ", self.token_literal())?;
        if let Some(value) = &self.value {
            write!(f, "{}", value)?;
        }
        write!(f, ";")
    }
}

/// A bare expression used as a statement.
///
/// `expression` is `None` only when the expression failed to parse.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpressionStmt {
    pub token: Token,
    pub expression: Option<Expr>,
    pub span: Span,
}

impl Node for ExpressionStmt {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for ExpressionStmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.expression {
            Some(expression) => write!(f, "{}", expression),
            None => Ok(()),
        }
    }
}
