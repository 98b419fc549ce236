use crate::{
    ast::{
        ast::{Expr, Node},
        expressions::{
            BooleanLiteral, Identifier, InfixExpr, InfixOperator, IntegerLiteral, PrefixExpr,
            PrefixOperator,
        },
    },
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
    Span,
};

use super::{lookups::BindingPower, parser::Parser};

/// Parses an expression whose operators all bind tighter than `bp`.
///
/// On return the current token is the last token of the expression.
pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn { kind: token_kind },
            parser.get_position(),
        ));
    };

    let mut left = nud_fn(parser)?;

    // While the lookahead binds tighter than bp, fold it into lhs
    while parser.peek_token_kind() != TokenKind::Semicolon && parser.peek_binding_power() > bp {
        let peek_kind = parser.peek_token_kind();
        let Some((led_fn, operator)) = parser.get_led_lookup().get(&peek_kind).copied() else {
            return Ok(left);
        };

        parser.advance();
        left = led_fn(parser, left, operator)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.current_token().clone();

    match token.kind {
        TokenKind::Integer => match parse_integer(&token.value) {
            Some(value) => Ok(Expr::Integer(IntegerLiteral {
                value,
                span: token.span.clone(),
                token,
            })),
            None => Err(Error::new(
                ErrorImpl::IntegerParse { literal: token.value },
                token.span.start,
            )),
        },
        TokenKind::Identifier => Ok(Expr::Identifier(Identifier::from_token(token))),
        TokenKind::True | TokenKind::False => Ok(Expr::Boolean(BooleanLiteral {
            value: token.kind == TokenKind::True,
            span: token.span.clone(),
            token,
        })),
        kind => Err(Error::new(
            ErrorImpl::NoPrefixParseFn { kind },
            token.span.start,
        )),
    }
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    let Some(operator) = PrefixOperator::from_token_kind(operator_token.kind) else {
        return Err(Error::new(
            ErrorImpl::NoPrefixParseFn { kind: operator_token.kind },
            operator_token.span.start,
        ));
    };

    parser.advance();
    let rhs = parse_expr(parser, BindingPower::Prefix)?;

    Ok(Expr::Prefix(PrefixExpr {
        span: Span {
            start: operator_token.span.start.clone(),
            end: rhs.get_span().end.clone(),
        },
        token: operator_token,
        operator,
        right_expr: Box::new(rhs),
    }))
}

pub fn parse_infix_expr(
    parser: &mut Parser,
    left: Expr,
    operator: InfixOperator,
) -> Result<Expr, Error> {
    let operator_token = parser.current_token().clone();
    let bp = parser.current_binding_power();

    parser.advance();
    let right = parse_expr(parser, bp)?;

    Ok(Expr::Infix(InfixExpr {
        span: Span {
            start: left.get_span().start.clone(),
            end: right.get_span().end.clone(),
        },
        token: operator_token,
        left: Box::new(left),
        operator,
        right: Box::new(right),
    }))
}

/// `( expr )`. The parentheses only steer precedence and leave no node behind.
pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Lowest)?;
    parser.expect_peek(TokenKind::RightParen)?;

    Ok(expr)
}

/// Converts integer literal text, honouring a radix prefix: `0x`, `0o`,
/// `0b`, or a bare leading `0` for octal. Everything else is decimal.
pub(crate) fn parse_integer(text: &str) -> Option<i64> {
    let lower = text.to_ascii_lowercase();

    let (digits, radix) = if let Some(rest) = lower.strip_prefix("0x") {
        (rest, 16)
    } else if let Some(rest) = lower.strip_prefix("0o") {
        (rest, 8)
    } else if let Some(rest) = lower.strip_prefix("0b") {
        (rest, 2)
    } else if lower.len() > 1 && lower.starts_with('0') {
        (&lower[1..], 8)
    } else {
        (lower.as_str(), 10)
    };

    // from_str_radix would accept a sign
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }

    i64::from_str_radix(digits, radix).ok()
}
