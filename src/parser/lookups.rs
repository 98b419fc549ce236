use std::collections::HashMap;

use crate::{
    ast::{
        ast::{Expr, Stmt},
        expressions::InfixOperator,
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
};

use super::{expr::*, parser::Parser, stmt::*};

/// Operator precedence, lowest first.
#[derive(PartialEq, PartialOrd, Clone, Copy, Debug)]
pub enum BindingPower {
    Lowest,
    Equals,
    LessGreater,
    Sum,
    Product,
    Prefix,
    Call,
}

pub type StmtHandler = fn(&mut Parser) -> Result<Stmt, Error>;
pub type NUDHandler = fn(&mut Parser) -> Result<Expr, Error>;
pub type LEDHandler = fn(&mut Parser, Expr, InfixOperator) -> Result<Expr, Error>;

pub fn create_token_lookups(parser: &mut Parser) {
    // Equality and relational
    parser.led(InfixOperator::Equal, BindingPower::Equals, parse_infix_expr);
    parser.led(InfixOperator::NotEqual, BindingPower::Equals, parse_infix_expr);
    parser.led(InfixOperator::LessThan, BindingPower::LessGreater, parse_infix_expr);
    parser.led(InfixOperator::GreaterThan, BindingPower::LessGreater, parse_infix_expr);

    // Additive and multiplicative
    parser.led(InfixOperator::Plus, BindingPower::Sum, parse_infix_expr);
    parser.led(InfixOperator::Minus, BindingPower::Sum, parse_infix_expr);
    parser.led(InfixOperator::Multiply, BindingPower::Product, parse_infix_expr);
    parser.led(InfixOperator::Divide, BindingPower::Product, parse_infix_expr);

    // Literals and symbols
    parser.nud(TokenKind::Identifier, parse_primary_expr);
    parser.nud(TokenKind::Integer, parse_primary_expr);
    parser.nud(TokenKind::True, parse_primary_expr);
    parser.nud(TokenKind::False, parse_primary_expr);
    parser.nud(TokenKind::Minus, parse_prefix_expr);
    parser.nud(TokenKind::Bang, parse_prefix_expr);
    parser.nud(TokenKind::LeftParen, parse_grouping_expr);

    // Statements
    parser.stmt(TokenKind::Let, parse_let_stmt);
    parser.stmt(TokenKind::Return, parse_return_stmt);
}

// Lookup tables inside parser struct, so it's easier
pub type StmtLookup = HashMap<TokenKind, StmtHandler>;
pub type NUDLookup = HashMap<TokenKind, NUDHandler>;
pub type LEDLookup = HashMap<TokenKind, (LEDHandler, InfixOperator)>;
pub type BPLookup = HashMap<TokenKind, BindingPower>;
