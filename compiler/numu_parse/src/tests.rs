#![allow(clippy::unwrap_used, clippy::expect_used)]

use numu_ir::{NodeArena, NodeId, NodeKind, Span};
use numu_lexer::{LexErrorKind, Lexer, TokenKind};
use pretty_assertions::assert_eq;

use super::*;

// ===== Helpers =====

/// Render a tree as an s-expression.
fn sexpr(arena: &NodeArena, id: NodeId) -> String {
    let list = |ids: &[NodeId]| {
        ids.iter()
            .map(|id| sexpr(arena, *id))
            .collect::<Vec<_>>()
            .join(" ")
    };
    match arena.kind(id) {
        NodeKind::Number(v) => format!("{v}"),
        NodeKind::Boolean(b) => format!("{b}"),
        NodeKind::String(s) => format!("{s:?}"),
        NodeKind::Variable(name) => name.clone(),
        NodeKind::Binary { op, left, right } => format!(
            "({} {} {})",
            op.as_symbol(),
            sexpr(arena, *left),
            sexpr(arena, *right)
        ),
        NodeKind::Unary { op, operand } => {
            format!("({} {})", op.as_symbol(), sexpr(arena, *operand))
        }
        NodeKind::Function { name, args } => {
            let args = list(arena.list(*args));
            if args.is_empty() {
                format!("(call {name})")
            } else {
                format!("(call {name} {args})")
            }
        }
        NodeKind::Matrix { rows } => {
            let rows: Vec<String> = arena
                .rows(*rows)
                .iter()
                .map(|row| format!("[{}]", list(arena.list(*row))))
                .collect();
            format!("[{}]", rows.join(" "))
        }
        NodeKind::Assignment { name, value } => format!("(= {name} {})", sexpr(arena, *value)),
        other => format!("{other:?}"),
    }
}

fn parsed(source: &str) -> String {
    let mut arena = NodeArena::new();
    let root = parse_complete(Lexer::new(source), &mut arena).unwrap();
    assert!(arena.verify_tree(root).is_ok());
    sexpr(&arena, root)
}

fn parse_err(source: &str) -> SyntaxError {
    let mut arena = NodeArena::new();
    parse_complete(Lexer::new(source), &mut arena).unwrap_err()
}

fn parse_error_kind(source: &str) -> ParseErrorKind {
    match parse_err(source) {
        SyntaxError::Parse(e) => e.kind,
        SyntaxError::Lex(e) => panic!("expected parse error, got lex error {e}"),
    }
}

// ===== Precedence and grouping =====

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_eq!(parsed("2 + 3 * 4"), "(+ 2 (* 3 4))");
    assert_eq!(parsed("2 * 3 + 4"), "(+ (* 2 3) 4)");
}

#[test]
fn binary_operators_group_to_the_right() {
    assert_eq!(parsed("8 - 3 - 2"), "(- 8 (- 3 2))");
    assert_eq!(parsed("16 / 4 / 2"), "(/ 16 (/ 4 2))");
    assert_eq!(parsed("2 ^ 3 ^ 2"), "(^ 2 (^ 3 2))");
    assert_eq!(parsed("2 ** 3"), "(^ 2 3)");
}

#[test]
fn unary_binds_below_power() {
    assert_eq!(parsed("-2 ^ 2"), "(- (^ 2 2))");
    assert_eq!(parsed("-x * y"), "(* (- x) y)");
    assert_eq!(parsed("--x"), "(- (- x))");
}

#[test]
fn logic_and_comparison_levels() {
    assert_eq!(parsed("!a && b || c"), "(|| (&& (! a) b) c)");
    assert_eq!(parsed("a < b == c"), "(== (< a b) c)");
    assert_eq!(parsed("a + 1 >= b % 2"), "(>= (+ a 1) (% b 2))");
}

#[test]
fn parentheses_override_precedence() {
    assert_eq!(parsed("(1 + 2) * 3"), "(* (+ 1 2) 3)");
    assert_eq!(parsed("((x))"), "x");
}

#[test]
fn assignment_groups_right() {
    assert_eq!(parsed("x = 2 + 3"), "(= x (+ 2 3))");
    assert_eq!(parsed("x = y = 3"), "(= x (= y 3))");
}

// ===== Calls and literals =====

#[test]
fn calls() {
    assert_eq!(parsed("abs(-5)"), "(call abs (- 5))");
    assert_eq!(parsed("max(1, 7, 3)"), "(call max 1 7 3)");
    assert_eq!(parsed("f()"), "(call f)");
    assert_eq!(parsed("2 * f(3)"), "(* 2 (call f 3))");
    assert_eq!(parsed("f(g(x), y = 1)"), "(call f (call g x) (= y 1))");
}

#[test]
fn matrices() {
    assert_eq!(parsed("[]"), "[]");
    assert_eq!(parsed("[1, 2, 3]"), "[[1 2 3]]");
    assert_eq!(parsed("[[1, 2], [3, 4]]"), "[[1 2] [3 4]]");
    assert_eq!(parsed("[[], [x]]"), "[[] [x]]");
}

#[test]
fn matrix_rows_decided_per_item() {
    assert_eq!(parsed("[[1, 2], 3]"), "[[1 2] [3]]");
    assert_eq!(parsed("[1, [2, 3]]"), "[[1] [2 3]]");
    assert_eq!(parsed("[1, 2, [3], 4, 5]"), "[[1 2] [3] [4 5]]");
    assert_eq!(parsed("[[1], [2], x + 1]"), "[[1] [2] [(+ x 1)]]");
}

#[test]
fn literals() {
    assert_eq!(parsed("\"hi there\""), "\"hi there\"");
    assert_eq!(parsed("true"), "true");
    assert_eq!(parsed("false"), "false");
    assert_eq!(parsed("2.5e1"), "25");
}

#[test]
fn named_constants() {
    let mut arena = NodeArena::new();
    for (source, expected) in [
        ("pi", std::f64::consts::PI),
        ("e", std::f64::consts::E),
        ("inf", f64::INFINITY),
    ] {
        let root = parse_complete(Lexer::new(source), &mut arena).unwrap();
        assert_eq!(arena.number_value(root), Some(expected));
    }
    let root = parse_complete(Lexer::new("nan"), &mut arena).unwrap();
    assert!(arena.number_value(root).unwrap().is_nan());
}

#[test]
fn spans_cover_source() {
    let mut arena = NodeArena::new();
    let root = parse_complete(Lexer::new("foo(1, 2)"), &mut arena).unwrap();
    assert_eq!(arena.span(root), Span::new(0, 9));

    let root = parse_complete(Lexer::new("1 + 22"), &mut arena).unwrap();
    assert_eq!(arena.span(root), Span::new(0, 6));

    let root = parse_complete(Lexer::new(" -x"), &mut arena).unwrap();
    assert_eq!(arena.span(root), Span::new(1, 3));
}

// ===== Errors =====

#[test]
fn empty_input_expects_expression() {
    let err = parse_err("");
    assert_eq!(
        err,
        SyntaxError::Parse(ParseError {
            kind: ParseErrorKind::ExpectedExpression {
                found: TokenKind::Eof
            },
            span: Span::point(0),
            line: 1,
            column: 1,
        })
    );
    assert_eq!(
        err.to_string(),
        "expected expression, found end of input at line 1, column 1"
    );
}

#[test]
fn dangling_operator() {
    let err = parse_err("1 +");
    assert_eq!((err.line(), err.column()), (1, 4));
    assert_eq!(err.message(), "expected expression, found end of input");
}

#[test]
fn keywords_do_not_start_expressions() {
    assert_eq!(
        parse_error_kind("let x = 1"),
        ParseErrorKind::ExpectedExpression {
            found: TokenKind::Let
        }
    );
}

#[test]
fn unclosed_group() {
    let err = parse_err("(1 + 2");
    assert_eq!(
        err.to_string(),
        "expected `)` after expression, found end of input at line 1, column 7"
    );
}

#[test]
fn unclosed_call_and_matrix() {
    assert_eq!(
        parse_error_kind("f(1, 2"),
        ParseErrorKind::ExpectedToken {
            expected: TokenKind::RParen,
            context: "after arguments",
            found: TokenKind::Eof,
        }
    );
    assert_eq!(
        parse_error_kind("[1, 2"),
        ParseErrorKind::ExpectedToken {
            expected: TokenKind::RBracket,
            context: "after matrix rows",
            found: TokenKind::Eof,
        }
    );
    assert_eq!(
        parse_error_kind("[[1, 2], 3"),
        ParseErrorKind::ExpectedToken {
            expected: TokenKind::RBracket,
            context: "after matrix rows",
            found: TokenKind::Eof,
        }
    );
    assert_eq!(
        parse_error_kind("[1, [2"),
        ParseErrorKind::ExpectedToken {
            expected: TokenKind::RBracket,
            context: "after row elements",
            found: TokenKind::Eof,
        }
    );
}

#[test]
fn invalid_assignment_target() {
    let err = parse_err("3 = 4");
    assert_eq!(err.message(), "invalid assignment target");
    assert_eq!((err.line(), err.column()), (1, 3));
    assert_eq!(
        parse_error_kind("(a + b) = 1"),
        ParseErrorKind::InvalidAssignmentTarget
    );
}

#[test]
fn invalid_call_target() {
    assert_eq!(parse_error_kind("2(3)"), ParseErrorKind::InvalidCallTarget);
    assert_eq!(
        parse_error_kind("(1 + 2)(3)"),
        ParseErrorKind::InvalidCallTarget
    );
}

#[test]
fn lexing_errors_pass_through() {
    let err = parse_err("1 + $");
    let SyntaxError::Lex(lex) = &err else {
        panic!("expected lex error, got {err:?}");
    };
    assert_eq!(lex.kind, LexErrorKind::UnexpectedChar('$'));
    assert_eq!(err.column(), 5);
}

#[test]
fn parse_stops_where_complete_parse_fails() {
    let mut arena = NodeArena::new();
    let root = parse(Lexer::new("1 2"), &mut arena).unwrap();
    assert_eq!(arena.number_value(root), Some(1.0));

    assert_eq!(
        parse_error_kind("1 2"),
        ParseErrorKind::ExpectedToken {
            expected: TokenKind::Eof,
            context: "after expression",
            found: TokenKind::Number,
        }
    );
}

// ===== Depth =====

#[test]
fn deeply_nested_input() {
    let depth = 20_000;
    let source = format!("{}1{}", "(".repeat(depth), ")".repeat(depth));
    assert_eq!(parsed(&source), "1");

    let source = format!("{}x", "-".repeat(depth));
    let mut arena = NodeArena::new();
    let root = parse_complete(Lexer::new(&source), &mut arena).unwrap();
    assert_eq!(numu_ir::subtree_size(&arena, root), depth + 1);
}

// ===== Precedence ladder =====

#[test]
fn ladder_is_ordered() {
    assert!(Precedence::None < Precedence::Assignment);
    assert!(Precedence::Term < Precedence::Factor);
    assert!(Precedence::Unary < Precedence::Power);
    assert_eq!(Precedence::Call.next(), Precedence::Primary);
    assert_eq!(Precedence::Primary.next(), Precedence::Primary);
    assert_eq!(
        Associativity::Left.operand_precedence(Precedence::Term),
        Precedence::Factor
    );
    assert_eq!(
        Associativity::Right.operand_precedence(Precedence::Term),
        Precedence::Term
    );
}
