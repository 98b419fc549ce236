//! Parser implementation for building the Abstract Syntax Tree.
//!
//! This module contains the main Parser struct and the `parse` entry point.
//! The parser pulls tokens lazily from a `Lexer`, keeping the current
//! token and one token of lookahead.
//!
//! It maintains lookup tables for:
//! - Statement handlers
//! - NUD (null denotation) handlers for prefix expressions
//! - LED (left denotation) handlers for infix expressions
//! - Binding powers for operator precedence

use std::{collections::HashMap, mem};

use log::debug;

use crate::{
    ast::{ast::Program, expressions::InfixOperator},
    errors::errors::{Error, ErrorImpl},
    lexer::{
        lexer::Lexer,
        tokens::{Token, TokenKind},
    },
    Position,
};

use super::{
    lookups::{
        create_token_lookups, BPLookup, BindingPower, LEDHandler, LEDLookup, NUDHandler, NUDLookup,
        StmtHandler, StmtLookup,
    },
    stmt::parse_stmt,
};

/// The main parser structure that maintains parsing state.
///
/// A parser is single-use: it owns its lexer, walks the input once and
/// collects every error it meets along the way.
pub struct Parser {
    /// Token source
    lexer: Lexer,
    /// The token being looked at
    current: Token,
    /// One token of lookahead
    peek: Token,
    /// Errors recorded so far, in the order they were found
    errors: Vec<Error>,
    /// Lookup table for statement parsing handlers
    stmt_lookup: StmtLookup,
    /// Lookup table for null denotation (prefix) expression handlers
    nud_lookup: NUDLookup,
    /// Lookup table for left denotation (infix) expression handlers
    led_lookup: LEDLookup,
    /// Lookup table for expression binding powers (precedence)
    binding_power_lookup: BPLookup,
}

impl Parser {
    /// Creates a new Parser reading from `lexer`, with every handler registered.
    pub fn new(mut lexer: Lexer) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        let mut parser = Parser {
            lexer,
            current,
            peek,
            errors: vec![],
            stmt_lookup: HashMap::new(),
            nud_lookup: HashMap::new(),
            led_lookup: HashMap::new(),
            binding_power_lookup: HashMap::new(),
        };
        create_token_lookups(&mut parser);
        parser
    }

    /// Parses statements until end of input.
    ///
    /// Statements that fail to parse are left out; the reasons end up in
    /// `errors()`. A non-empty error list means the program is incomplete.
    pub fn parse_program(&mut self) -> Program {
        let mut program = Program::default();

        while self.current_token_kind() != TokenKind::EndOfInput {
            if let Some(stmt) = parse_stmt(self) {
                debug!("parsed statement `{}`", stmt);
                program.statements.push(stmt);
            }
            self.advance();
        }

        program
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> &Token {
        &self.current
    }

    /// Returns the kind of the current token.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current.kind
    }

    pub fn peek_token_kind(&self) -> TokenKind {
        self.peek.kind
    }

    /// Moves the lookahead into the current slot and pulls a new lookahead.
    pub fn advance(&mut self) -> &Token {
        let next = self.lexer.next_token();
        self.current = mem::replace(&mut self.peek, next);
        &self.current
    }

    /// Advances onto the lookahead if it is of the expected kind.
    ///
    /// # Returns
    ///
    /// The new current token, or an `ExpectedToken` error positioned at the
    /// lookahead. The cursor does not move on failure.
    pub fn expect_peek(&mut self, expected_kind: TokenKind) -> Result<Token, Error> {
        if self.peek.kind != expected_kind {
            return Err(Error::new(
                ErrorImpl::ExpectedToken {
                    expected: expected_kind,
                    found: self.peek.kind,
                },
                self.peek.span.start.clone(),
            ));
        }

        Ok(self.advance().clone())
    }

    pub fn record_error(&mut self, error: Error) {
        debug!("parse error at {}: {}", error.get_position().0, error);
        self.errors.push(error);
    }

    /// Every error recorded so far.
    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    /// The recorded errors as plain messages.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors.iter().map(|error| error.to_string()).collect()
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    pub fn current_binding_power(&self) -> BindingPower {
        self.binding_power(self.current.kind)
    }

    pub fn peek_binding_power(&self) -> BindingPower {
        self.binding_power(self.peek.kind)
    }

    fn binding_power(&self, kind: TokenKind) -> BindingPower {
        *self
            .binding_power_lookup
            .get(&kind)
            .unwrap_or(&BindingPower::Lowest)
    }

    /// Returns a reference to the statement lookup table.
    pub fn get_stmt_lookup(&self) -> &StmtLookup {
        &self.stmt_lookup
    }

    /// Returns a reference to the NUD (null denotation) lookup table.
    pub fn get_nud_lookup(&self) -> &NUDLookup {
        &self.nud_lookup
    }

    /// Returns a reference to the LED (left denotation) lookup table.
    pub fn get_led_lookup(&self) -> &LEDLookup {
        &self.led_lookup
    }

    /// Returns a reference to the binding power lookup table.
    pub fn get_bp_lookup(&self) -> &BPLookup {
        &self.binding_power_lookup
    }

    /// Registers a left denotation (infix) handler for an operator.
    ///
    /// # Arguments
    ///
    /// * `operator` - The operator, keyed by its token kind
    /// * `binding_power` - The precedence/binding power for this operator
    /// * `led_fn` - The handler function for this infix operator
    pub fn led(&mut self, operator: InfixOperator, binding_power: BindingPower, led_fn: LEDHandler) {
        let kind = operator.token_kind();
        self.binding_power_lookup.insert(kind, binding_power);
        self.led_lookup.insert(kind, (led_fn, operator));
    }

    /// Registers a null denotation (prefix) handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `nud_fn` - The handler function for this prefix operator
    pub fn nud(&mut self, kind: TokenKind, nud_fn: NUDHandler) {
        self.nud_lookup.insert(kind, nud_fn);
    }

    /// Registers a statement handler for a token.
    ///
    /// # Arguments
    ///
    /// * `kind` - The token kind to register
    /// * `stmt_fn` - The handler function for this statement type
    pub fn stmt(&mut self, kind: TokenKind, stmt_fn: StmtHandler) {
        self.stmt_lookup.insert(kind, stmt_fn);
    }

    /// Returns the position of the current token.
    pub fn get_position(&self) -> Position {
        self.current.span.start.clone()
    }
}

/// Parses a whole source into a Program.
///
/// This is the main entry point for parsing. It creates a lexer and a
/// parser, runs the parser to end of input and hands back the tree along
/// with every error found.
///
/// # Arguments
///
/// * `source` - The source text
/// * `file` - Label used in error positions, `"shell"` when `None`
///
/// # Returns
///
/// A tuple containing:
/// - The Program (possibly missing statements that failed to parse)
/// - The errors, empty on a clean parse
pub fn parse(source: String, file: Option<String>) -> (Program, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(source, file));
    let program = parser.parse_program();

    (program, parser.into_errors())
}
