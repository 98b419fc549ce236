use std::fmt::Display;

use crate::{
    lexer::tokens::{Token, TokenKind},
    Span,
};

use super::ast::{Expr, Node};

// LITERALS

/// Identifier Expression
/// Represents a bare name in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub token: Token,
    pub value: String,
    pub span: Span,
}

impl Identifier {
    pub fn from_token(token: Token) -> Self {
        Identifier {
            value: token.value.clone(),
            span: token.span.clone(),
            token,
        }
    }
}

impl Node for Identifier {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for Identifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// Integer Expression
/// Represents a 64-bit signed integer literal in the AST.
#[derive(Debug, Clone, PartialEq)]
pub struct IntegerLiteral {
    pub token: Token,
    pub value: i64,
    pub span: Span,
}

impl Node for IntegerLiteral {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for IntegerLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

/// Boolean Expression
#[derive(Debug, Clone, PartialEq)]
pub struct BooleanLiteral {
    pub token: Token,
    pub value: bool,
    pub span: Span,
}

impl Node for BooleanLiteral {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for BooleanLiteral {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.token.value)
    }
}

// OPERATORS

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixOperator {
    Minus,
    Bang,
}

impl PrefixOperator {
    pub fn from_token_kind(kind: TokenKind) -> Option<Self> {
        match kind {
            TokenKind::Minus => Some(PrefixOperator::Minus),
            TokenKind::Bang => Some(PrefixOperator::Bang),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PrefixOperator::Minus => "-",
            PrefixOperator::Bang => "!",
        }
    }
}

impl Display for PrefixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfixOperator {
    Plus,
    Minus,
    Multiply,
    Divide,
    LessThan,
    GreaterThan,
    Equal,
    NotEqual,
}

impl InfixOperator {
    /// The token kind that spells this operator.
    pub fn token_kind(&self) -> TokenKind {
        match self {
            InfixOperator::Plus => TokenKind::Plus,
            InfixOperator::Minus => TokenKind::Minus,
            InfixOperator::Multiply => TokenKind::Asterisk,
            InfixOperator::Divide => TokenKind::Slash,
            InfixOperator::LessThan => TokenKind::LessThan,
            InfixOperator::GreaterThan => TokenKind::GreaterThan,
            InfixOperator::Equal => TokenKind::Equal,
            InfixOperator::NotEqual => TokenKind::NotEqual,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InfixOperator::Plus => "+",
            InfixOperator::Minus => "-",
            InfixOperator::Multiply => "*",
            InfixOperator::Divide => "/",
            InfixOperator::LessThan => "<",
            InfixOperator::GreaterThan => ">",
            InfixOperator::Equal => "==",
            InfixOperator::NotEqual => "!=",
        }
    }
}

impl Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

// COMPOUND

/// Prefix Expression
/// `-x` or `!x`. The token is the operator token.
#[derive(Debug, Clone, PartialEq)]
pub struct PrefixExpr {
    pub token: Token,
    pub operator: PrefixOperator,
    pub right_expr: Box<Expr>,
    pub span: Span,
}

impl Node for PrefixExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for PrefixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}{})", self.operator, self.right_expr)
    }
}

/// Infix Expression
/// Any binary operator application. The token is the operator token.
#[derive(Debug, Clone, PartialEq)]
pub struct InfixExpr {
    pub token: Token,
    pub left: Box<Expr>,
    pub operator: InfixOperator,
    pub right: Box<Expr>,
    pub span: Span,
}

impl Node for InfixExpr {
    fn token_literal(&self) -> &str {
        &self.token.value
    }
    fn get_span(&self) -> &Span {
        &self.span
    }
}

impl Display for InfixExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}
