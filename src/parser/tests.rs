//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the language constructs:
//! - `let` and `return` statements
//! - Literals, identifiers and prefix expressions
//! - Binary operator precedence and associativity
//! - Error accumulation and recovery

use crate::{
    ast::{
        ast::{Expr, Node, Program, Stmt},
        expressions::{InfixOperator, PrefixOperator},
    },
    errors::errors::ErrorImpl,
    lexer::{lexer::Lexer, tokens::TokenKind},
};

use super::{
    expr::parse_integer,
    parser::{parse, Parser},
};

fn parse_clean(source: &str) -> Program {
    let (program, errors) = parse(source.to_string(), Some("test.lang".to_string()));
    let messages: Vec<String> = errors.iter().map(|error| error.to_string()).collect();
    assert!(errors.is_empty(), "parser has {} errors: {:?}", errors.len(), messages);
    program
}

fn parse_messages(source: &str) -> (Program, Vec<String>) {
    let mut parser = Parser::new(Lexer::new(source.to_string(), None));
    let program = parser.parse_program();
    (program, parser.error_messages())
}

fn single_expression(program: &Program) -> &Expr {
    assert_eq!(program.len(), 1, "expected one statement in {:?}", program);
    match &program.statements[0] {
        Stmt::Expression(stmt) => stmt.expression.as_ref().expect("expression slot is empty"),
        other => panic!("expected an expression statement, got {:?}", other),
    }
}

fn assert_integer(expr: &Expr, expected: i64) {
    match expr {
        Expr::Integer(literal) => {
            assert_eq!(literal.value, expected);
            assert_eq!(literal.token_literal(), expected.to_string());
        }
        other => panic!("expected an integer literal, got {:?}", other),
    }
}

fn assert_identifier(expr: &Expr, expected: &str) {
    match expr {
        Expr::Identifier(ident) => {
            assert_eq!(ident.value, expected);
            assert_eq!(ident.token_literal(), expected);
        }
        other => panic!("expected an identifier, got {:?}", other),
    }
}

#[test]
fn test_parse_let_statements() {
    let program = parse_clean("let x = 5;\nlet y = 10;\nlet foo = 838383;");

    assert_eq!(program.len(), 3);
    for (stmt, name) in program.iter().zip(["x", "y", "foo"]) {
        assert_eq!(stmt.token_literal(), "let");
        match stmt {
            Stmt::Let(let_stmt) => {
                assert_eq!(let_stmt.name.value, name);
                assert_eq!(let_stmt.name.token_literal(), name);
                assert!(let_stmt.value.is_none());
            }
            other => panic!("expected a let statement, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_return_statements() {
    let program = parse_clean("return 5;\nreturn 10;\nreturn 90234820;");

    assert_eq!(program.len(), 3);
    for stmt in program.iter() {
        assert!(matches!(stmt, Stmt::Return(_)));
        assert_eq!(stmt.token_literal(), "return");
    }
}

#[test]
fn test_let_and_return_render_with_empty_value() {
    let program = parse_clean("let x = 1 + 2; return y;");

    assert_eq!(program.to_string(), "let x = ;return ;");
}

#[test]
fn test_unterminated_let_and_return_still_finish() {
    let program = parse_clean("let x = 5");
    assert_eq!(program.len(), 1);
    assert!(matches!(program.statements[0], Stmt::Let(_)));

    let program = parse_clean("return 5");
    assert_eq!(program.len(), 1);
    assert!(matches!(program.statements[0], Stmt::Return(_)));
}

#[test]
fn test_parse_identifier_expression() {
    let program = parse_clean("foo;");

    assert_identifier(single_expression(&program), "foo");
    assert_eq!(program.token_literal(), "foo");
}

#[test]
fn test_semicolon_is_optional_at_end_of_input() {
    let program = parse_clean("foo");

    assert_identifier(single_expression(&program), "foo");
}

#[test]
fn test_parse_integer_literal_expression() {
    let program = parse_clean("5;");

    assert_integer(single_expression(&program), 5);
}

#[test]
fn test_parse_boolean_expressions() {
    for (source, expected) in [("true;", true), ("false;", false)] {
        let program = parse_clean(source);
        match single_expression(&program) {
            Expr::Boolean(literal) => {
                assert_eq!(literal.value, expected);
                assert_eq!(literal.token_literal(), expected.to_string());
            }
            other => panic!("expected a boolean literal, got {:?}", other),
        }
    }
}

#[test]
fn test_parse_prefix_expressions() {
    let tests = [
        ("!5;", PrefixOperator::Bang, "5"),
        ("-15;", PrefixOperator::Minus, "15"),
        ("!foobar;", PrefixOperator::Bang, "foobar"),
        ("!true;", PrefixOperator::Bang, "true"),
    ];

    for (source, operator, operand) in tests {
        let program = parse_clean(source);
        match single_expression(&program) {
            Expr::Prefix(prefix) => {
                assert_eq!(prefix.operator, operator);
                assert_eq!(prefix.right_expr.to_string(), operand);
            }
            other => panic!("expected a prefix expression, got {:?}", other),
        }
    }

    let program = parse_clean("-15");
    match single_expression(&program) {
        Expr::Prefix(prefix) => {
            assert_eq!(prefix.operator.as_str(), "-");
            assert_integer(&prefix.right_expr, 15);
        }
        other => panic!("expected a prefix expression, got {:?}", other),
    }
}

#[test]
fn test_parse_infix_expressions() {
    let tests = [
        ("5 + 5;", InfixOperator::Plus),
        ("5 - 5;", InfixOperator::Minus),
        ("5 * 5;", InfixOperator::Multiply),
        ("5 / 5;", InfixOperator::Divide),
        ("5 > 5;", InfixOperator::GreaterThan),
        ("5 < 5;", InfixOperator::LessThan),
        ("5 == 5;", InfixOperator::Equal),
        ("5 != 5;", InfixOperator::NotEqual),
    ];

    for (source, operator) in tests {
        let program = parse_clean(source);
        match single_expression(&program) {
            Expr::Infix(infix) => {
                assert_integer(&infix.left, 5);
                assert_eq!(infix.operator, operator);
                assert_eq!(infix.token_literal(), operator.as_str());
                assert_integer(&infix.right, 5);
            }
            other => panic!("expected an infix expression, got {:?}", other),
        }
    }
}

const PRECEDENCE_CASES: [(&str, &str); 22] = [
    ("-a * b", "((-a) * b)"),
    ("!-a", "(!(-a))"),
    ("a + b + c", "((a + b) + c)"),
    ("a + b - c", "((a + b) - c)"),
    ("a * b * c", "((a * b) * c)"),
    ("a * b / c", "((a * b) / c)"),
    ("a + b / c", "(a + (b / c))"),
    ("a + b * c + d / e - f", "(((a + (b * c)) + (d / e)) - f)"),
    ("3 + 4; -5 * 5", "(3 + 4)((-5) * 5)"),
    ("5 > 4 == 3 < 4", "((5 > 4) == (3 < 4))"),
    ("5 < 4 != 3 > 4", "((5 < 4) != (3 > 4))"),
    ("3 + 4 * 5 == 3 * 1 + 4 * 5", "((3 + (4 * 5)) == ((3 * 1) + (4 * 5)))"),
    ("true", "true"),
    ("false", "false"),
    ("3 > 5 == false", "((3 > 5) == false)"),
    ("3 < 5 == true", "((3 < 5) == true)"),
    ("1 + (2 + 3) + 4", "((1 + (2 + 3)) + 4)"),
    ("(5 + 5) * 2", "((5 + 5) * 2)"),
    ("2 / (5 + 5)", "(2 / (5 + 5))"),
    ("-(5 + 5)", "(-(5 + 5))"),
    ("!(true == true)", "(!(true == true))"),
    ("((a))", "a"),
];

#[test]
fn test_operator_precedence_rendering() {
    for (source, expected) in PRECEDENCE_CASES {
        let program = parse_clean(source);
        assert_eq!(program.to_string(), expected, "source: {}", source);
    }
}

#[test]
fn test_rendering_is_a_fixed_point() {
    for (source, _) in PRECEDENCE_CASES {
        let first = parse_clean(source).to_string();
        let second = parse_clean(&first).to_string();
        assert_eq!(first, second, "source: {}", source);
    }
}

#[test]
fn test_missing_assign_in_let() {
    let (program, errors) = parse_messages("let x 5;");

    assert_eq!(errors, vec!["expected next token is =, got INT instead"]);
    assert_eq!(program.len(), 1);
    assert_integer(single_expression(&program), 5);
}

#[test]
fn test_missing_identifier_in_let() {
    let (program, errors) = parse_messages("let = 10;");

    assert_eq!(errors[0], "expected next token is IDENT, got = instead");
    assert_eq!(errors[1], "no prefix parse function for = found");
    assert!(program.iter().all(|stmt| !matches!(stmt, Stmt::Let(_))));
}

#[test]
fn test_errors_do_not_stop_the_parse() {
    let (program, errors) = parse_messages("let 5; let y = 1; )");

    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], "expected next token is IDENT, got INT instead");
    assert_eq!(errors[1], "no prefix parse function for ) found");
    assert!(program.iter().any(|stmt| matches!(stmt, Stmt::Let(let_stmt) if let_stmt.name.value == "y")));
}

#[test]
fn test_illegal_token_in_expression_position() {
    let (program, errors) = parse_messages("a + `");

    assert_eq!(errors, vec!["no prefix parse function for ILLEGAL found"]);
    match &program.statements[0] {
        Stmt::Expression(stmt) => assert!(stmt.expression.is_none()),
        other => panic!("expected an expression statement, got {:?}", other),
    }
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_broken_expression_discards_rest_of_statement() {
    let (program, errors) = parse_messages("1 + @ + 2;");

    assert_eq!(errors, vec!["no prefix parse function for ILLEGAL found"]);
    assert_eq!(program.len(), 1);
    match &program.statements[0] {
        Stmt::Expression(stmt) => assert!(stmt.expression.is_none()),
        other => panic!("expected an expression statement, got {:?}", other),
    }
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_integer_overflow_inside_expression_reports_once() {
    let (program, errors) = parse_messages("9223372036854775808 + 1;");

    assert_eq!(
        errors,
        vec!["could not parse \"9223372036854775808\" as integer"]
    );
    assert_eq!(program.len(), 1);
}

#[test]
fn test_parse_resumes_after_broken_expression() {
    let (program, errors) = parse_messages("(a + ) * b; c;");

    assert_eq!(errors, vec!["no prefix parse function for ) found"]);
    assert_eq!(program.len(), 2);
    match &program.statements[1] {
        Stmt::Expression(stmt) => assert_identifier(stmt.expression.as_ref().expect("expression slot is empty"), "c"),
        other => panic!("expected an expression statement, got {:?}", other),
    }
    assert_eq!(program.to_string(), "c");
}

#[test]
fn test_missing_closing_paren() {
    let (_, errors) = parse_messages("(1 + 2");

    assert_eq!(errors, vec!["expected next token is ), got EOF instead"]);
}

#[test]
fn test_integer_overflow() {
    let (_, errors) = parse_messages("9223372036854775808;");
    assert_eq!(
        errors,
        vec!["could not parse \"9223372036854775808\" as integer"]
    );

    let program = parse_clean("9223372036854775807;");
    assert_integer(single_expression(&program), i64::MAX);
}

#[test]
fn test_parse_integer_radix_prefixes() {
    assert_eq!(parse_integer("0"), Some(0));
    assert_eq!(parse_integer("42"), Some(42));
    assert_eq!(parse_integer("010"), Some(8));
    assert_eq!(parse_integer("09"), None);
    assert_eq!(parse_integer("0x1F"), Some(31));
    assert_eq!(parse_integer("0b101"), Some(5));
    assert_eq!(parse_integer("0o17"), Some(15));
    assert_eq!(parse_integer("0x"), None);
    assert_eq!(parse_integer("0x-1"), None);
}

#[test]
fn test_octal_literal_keeps_source_text() {
    let program = parse_clean("010");

    match single_expression(&program) {
        Expr::Integer(literal) => {
            assert_eq!(literal.value, 8);
            assert_eq!(literal.to_string(), "010");
        }
        other => panic!("expected an integer literal, got {:?}", other),
    }
}

#[test]
fn test_error_positions() {
    let (_, errors) = parse(String::from("let x 5;"), Some(String::from("pos.lang")));

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].get_position().0, 6);
    assert_eq!(errors[0].get_position().1.as_str(), "pos.lang");
    assert!(matches!(
        errors[0].get_kind(),
        ErrorImpl::ExpectedToken {
            expected: TokenKind::Assign,
            found: TokenKind::Integer
        }
    ));
}

#[test]
fn test_expression_spans() {
    let program = parse_clean("a + bc * 3");
    let expr = single_expression(&program);

    assert_eq!(expr.get_span().start.0, 0);
    assert_eq!(expr.get_span().end.0, 10);
}

#[test]
fn test_empty_program() {
    let program = parse_clean("");

    assert!(program.is_empty());
    assert_eq!(program.token_literal(), "");
    assert_eq!(program.to_string(), "");
}

#[test]
fn test_binding_power_lookup() {
    let parser = Parser::new(Lexer::new(String::new(), None));
    let lookup = parser.get_bp_lookup();

    use super::lookups::BindingPower;
    assert_eq!(lookup.get(&TokenKind::Equal), Some(&BindingPower::Equals));
    assert_eq!(lookup.get(&TokenKind::LessThan), Some(&BindingPower::LessGreater));
    assert_eq!(lookup.get(&TokenKind::Minus), Some(&BindingPower::Sum));
    assert_eq!(lookup.get(&TokenKind::Slash), Some(&BindingPower::Product));
    assert_eq!(lookup.get(&TokenKind::Semicolon), None);
    assert!(parser.get_nud_lookup().contains_key(&TokenKind::Bang));
    assert!(!parser.get_led_lookup().contains_key(&TokenKind::Bang));
}
