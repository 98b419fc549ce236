//! Lexical analysis module for the frontend.
//!
//! This module contains the lexer (scanner) that turns source text into
//! a lazy stream of tokens for the parser. It handles:
//!
//! - Single and two byte operators and delimiters
//! - Recognition of keywords, identifiers and integer literals
//! - Token position tracking for error reporting
//! - Whitespace skipping

pub mod lexer;
pub mod tokens;
