//! Integration tests for the whole pipeline.
//!
//! These tests drive the public API the way a front end would: source text
//! in, a Program plus error list out, then render it back.

use frontend::{
    ast::ast::{Expr, Stmt},
    format_error,
    lexer::{lexer::tokenize, tokens::TokenKind},
    parser::parser::parse,
};

#[test]
fn test_parse_mixed_program() {
    let source = "let x = 5;\nreturn x;\nx + 2 * y;\n!done".to_string();
    let (program, errors) = parse(source, Some("test.lang".to_string()));

    assert!(errors.is_empty());
    assert_eq!(program.statements.len(), 4);
    assert!(matches!(program.statements[0], Stmt::Let(_)));
    assert!(matches!(program.statements[1], Stmt::Return(_)));
    assert_eq!(program.to_string(), "let x = ;return ;(x + (2 * y))(!done)");
}

#[test]
fn test_statement_order_is_preserved() {
    let (program, errors) = parse("a; b; c;".to_string(), None);

    assert!(errors.is_empty());
    let names: Vec<String> = program
        .statements
        .iter()
        .map(|stmt| match stmt {
            Stmt::Expression(stmt) => match &stmt.expression {
                Some(Expr::Identifier(ident)) => ident.value.clone(),
                other => panic!("expected an identifier, got {:?}", other),
            },
            other => panic!("expected an expression statement, got {:?}", other),
        })
        .collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

#[test]
fn test_round_trip_through_rendering() {
    let source = "a * -b + c / (d - e) == !f != g < h".to_string();
    let (program, errors) = parse(source, None);
    assert!(errors.is_empty());

    let rendered = program.to_string();
    let (reparsed, errors) = parse(rendered.clone(), None);
    assert!(errors.is_empty());
    assert_eq!(reparsed.to_string(), rendered);
}

#[test]
fn test_malformed_input_reports_and_continues() {
    let source = "let x 5;\nlet y = 10;\n@;\n".to_string();
    let (program, errors) = parse(source.clone(), Some("bad.lang".to_string()));

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].to_string(), "expected next token is =, got INT instead");
    assert_eq!(errors[1].to_string(), "no prefix parse function for ILLEGAL found");
    assert!(program
        .statements
        .iter()
        .any(|stmt| matches!(stmt, Stmt::Let(let_stmt) if let_stmt.name.value == "y")));

    let rendered = format_error(&errors[1], &source);
    assert!(rendered.starts_with("Error: NoPrefixParseFn (no prefix parse function for ILLEGAL found)"));
    assert!(rendered.contains("-> bad.lang"));
    assert!(rendered.contains("3 | @;"));
}

#[test]
fn test_tokenize_matches_parser_input() {
    let tokens = tokenize("let five = 5;".to_string(), None);

    assert_eq!(tokens.len(), 6);
    assert_eq!(tokens.last().map(|token| token.kind), Some(TokenKind::EndOfInput));
}
