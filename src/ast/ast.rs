use std::fmt::{Debug, Display};

use crate::Span;

use super::{
    expressions::{BooleanLiteral, Identifier, InfixExpr, IntegerLiteral, PrefixExpr},
    statements::{ExpressionStmt, LetStmt, ReturnStmt},
};

/// Node Trait
///
/// Implemented by every node in the tree. `Display` gives the canonical
/// rendering: binary and unary expressions fully parenthesized, so the
/// output reflects the parsed precedence rather than the source spacing.
pub trait Node: Debug + Display {
    /// Literal text of the token the node was built from.
    fn token_literal(&self) -> &str;
    /// Returns the span of the node.
    fn get_span(&self) -> &Span;
}

/// Statement Types
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Let(LetStmt),
    Return(ReturnStmt),
    Expression(ExpressionStmt),
}

impl Node for Stmt {
    fn token_literal(&self) -> &str {
        match self {
            Stmt::Let(stmt) => stmt.token_literal(),
            Stmt::Return(stmt) => stmt.token_literal(),
            Stmt::Expression(stmt) => stmt.token_literal(),
        }
    }
    fn get_span(&self) -> &Span {
        match self {
            Stmt::Let(stmt) => stmt.get_span(),
            Stmt::Return(stmt) => stmt.get_span(),
            Stmt::Expression(stmt) => stmt.get_span(),
        }
    }
}

impl Display for Stmt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Stmt::Let(stmt) => Display::fmt(stmt, f),
            Stmt::Return(stmt) => Display::fmt(stmt, f),
            Stmt::Expression(stmt) => Display::fmt(stmt, f),
        }
    }
}

/// Expression Types
///
/// Each expression exclusively owns its children.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Identifier(Identifier),
    Integer(IntegerLiteral),
    Boolean(BooleanLiteral),
    Prefix(PrefixExpr),
    Infix(InfixExpr),
}

impl Node for Expr {
    fn token_literal(&self) -> &str {
        match self {
            Expr::Identifier(expr) => expr.token_literal(),
            Expr::Integer(expr) => expr.token_literal(),
            Expr::Boolean(expr) => expr.token_literal(),
            Expr::Prefix(expr) => expr.token_literal(),
            Expr::Infix(expr) => expr.token_literal(),
        }
    }
    fn get_span(&self) -> &Span {
        match self {
            Expr::Identifier(expr) => expr.get_span(),
            Expr::Integer(expr) => expr.get_span(),
            Expr::Boolean(expr) => expr.get_span(),
            Expr::Prefix(expr) => expr.get_span(),
            Expr::Infix(expr) => expr.get_span(),
        }
    }
}

impl Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Expr::Identifier(expr) => Display::fmt(expr, f),
            Expr::Integer(expr) => Display::fmt(expr, f),
            Expr::Boolean(expr) => Display::fmt(expr, f),
            Expr::Prefix(expr) => Display::fmt(expr, f),
            Expr::Infix(expr) => Display::fmt(expr, f),
        }
    }
}

/// Root of the tree: top-level statements in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    pub statements: Vec<Stmt>,
}

impl Program {
    pub fn token_literal(&self) -> &str {
        self.statements
            .first()
            .map(|stmt| stmt.token_literal())
            .unwrap_or("")
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Stmt> {
        self.statements.iter()
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }
}

impl Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for stmt in &self.statements {
            write!(f, "{}", stmt)?;
        }
        Ok(())
    }
}
