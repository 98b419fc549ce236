use crate::{
    ast::{
        ast::Stmt,
        expressions::Identifier,
        statements::{ExpressionStmt, LetStmt, ReturnStmt},
    },
    errors::errors::Error,
    lexer::tokens::TokenKind,
    parser::{expr::parse_expr, lookups::BindingPower},
    Span,
};

use super::parser::Parser;

/// Parses one statement starting at the current token.
///
/// Returns `None` when a `let` or `return` is malformed; the error is
/// recorded on the parser and the caller moves on to the next statement.
pub fn parse_stmt(parser: &mut Parser) -> Option<Stmt> {
    if let Some(stmt_fn) = parser.get_stmt_lookup().get(&parser.current_token_kind()).copied() {
        return match stmt_fn(parser) {
            Ok(stmt) => Some(stmt),
            Err(error) => {
                parser.record_error(error);
                None
            }
        };
    }

    Some(parse_expression_stmt(parser))
}

pub fn parse_let_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.current_token().clone();

    let name = Identifier::from_token(parser.expect_peek(TokenKind::Identifier)?);
    parser.expect_peek(TokenKind::Assign)?;

    // The right-hand side is stepped over, not parsed; `value` stays empty.
    skip_to_terminator(parser);

    Ok(Stmt::Let(LetStmt {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token: start_token,
        name,
        value: None,
    }))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let start_token = parser.current_token().clone();

    parser.advance();
    skip_to_terminator(parser);

    Ok(Stmt::Return(ReturnStmt {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token: start_token,
        value: None,
    }))
}

/// Parses an expression statement. The trailing `;` is optional.
///
/// Never fails outright: a broken expression leaves the statement with an
/// empty `expression` slot and its error on the parser, and the tokens up to
/// the next `;` are discarded.
pub fn parse_expression_stmt(parser: &mut Parser) -> Stmt {
    let start_token = parser.current_token().clone();

    let expression = match parse_expr(parser, BindingPower::Lowest) {
        Ok(expr) => {
            if parser.peek_token_kind() == TokenKind::Semicolon {
                parser.advance();
            }
            Some(expr)
        }
        Err(error) => {
            // Drop the rest of the statement so the driver resumes after it
            parser.record_error(error);
            skip_to_terminator(parser);
            None
        }
    };

    Stmt::Expression(ExpressionStmt {
        span: Span {
            start: start_token.span.start.clone(),
            end: parser.current_token().span.end.clone(),
        },
        token: start_token,
        expression,
    })
}

/// Steps over the rest of a statement, stopping on `;` or at end of input.
fn skip_to_terminator(parser: &mut Parser) {
    while !parser
        .current_token()
        .is_one_of_many(&[TokenKind::Semicolon, TokenKind::EndOfInput])
    {
        parser.advance();
    }
}
