//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that turns the lexer's token stream
//! into a `Program`. It uses a Pratt parser for expressions and handles:
//!
//! - Statement parsing (`let`, `return`, expression statements)
//! - Expression parsing (prefix and binary operators, literals, grouping)
//! - Error accumulation: every problem is recorded and parsing carries on
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.

pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;

#[cfg(test)]
mod tests;
