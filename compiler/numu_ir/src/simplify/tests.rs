#![allow(clippy::unwrap_used, clippy::expect_used)]

use pretty_assertions::assert_eq;

use super::*;
use crate::{deep_clone, structurally_equal, BinaryOp, Span, UnaryOp};

const S: Span = Span::DUMMY;

fn num(arena: &mut NodeArena, v: f64) -> NodeId {
    arena.number(v, S)
}

#[test]
fn folds_nested_arithmetic() {
    // 2 + 3 * 4
    let mut arena = NodeArena::new();
    let (two, three, four) = (num(&mut arena, 2.0), num(&mut arena, 3.0), num(&mut arena, 4.0));
    let product = arena.binary(BinaryOp::Mul, three, four, S);
    let sum = arena.binary(BinaryOp::Add, two, product, S);

    let simplified = simplify(&mut arena, sum);
    assert_eq!(arena.number_value(simplified), Some(14.0));
}

#[test]
fn keeps_variables_and_folds_constant_siblings() {
    // x + 2 * 3  =>  x + 6
    let mut arena = NodeArena::new();
    let x = arena.variable("x", S);
    let (two, three) = (num(&mut arena, 2.0), num(&mut arena, 3.0));
    let product = arena.binary(BinaryOp::Mul, two, three, S);
    let sum = arena.binary(BinaryOp::Add, x, product, S);

    let simplified = simplify(&mut arena, sum);

    let mut expected = NodeArena::new();
    let ex = expected.variable("x", S);
    let six = expected.number(6.0, S);
    let expected_root = expected.binary(BinaryOp::Add, ex, six, S);
    assert!(structurally_equal(&arena, simplified, &expected, expected_root));
}

#[test]
fn modulo_and_comparisons_are_not_folded() {
    let mut arena = NodeArena::new();
    let (seven, two) = (num(&mut arena, 7.0), num(&mut arena, 2.0));
    let rem = arena.binary(BinaryOp::Mod, seven, two, S);
    let simplified = simplify(&mut arena, rem);
    assert!(matches!(
        arena.kind(simplified),
        NodeKind::Binary {
            op: BinaryOp::Mod,
            ..
        }
    ));

    let (a, b) = (num(&mut arena, 1.0), num(&mut arena, 2.0));
    let lt = arena.binary(BinaryOp::Lt, a, b, S);
    let simplified = simplify(&mut arena, lt);
    assert_eq!(arena.number_value(simplified), None);
}

#[test]
fn unary_folds_except_not() {
    let mut arena = NodeArena::new();
    let nine = num(&mut arena, 9.0);
    let root = arena.unary(UnaryOp::Sqrt, nine, S);
    let neg = arena.unary(UnaryOp::Negate, root, S);
    let simplified = simplify(&mut arena, neg);
    assert_eq!(arena.number_value(simplified), Some(-3.0));

    let one = num(&mut arena, 1.0);
    let not = arena.unary(UnaryOp::Not, one, S);
    let simplified = simplify(&mut arena, not);
    assert!(matches!(
        arena.kind(simplified),
        NodeKind::Unary {
            op: UnaryOp::Not,
            ..
        }
    ));
}

#[test]
fn division_by_zero_folds_to_infinity() {
    let mut arena = NodeArena::new();
    let (one, zero) = (num(&mut arena, 1.0), num(&mut arena, 0.0));
    let div = arena.binary(BinaryOp::Div, one, zero, S);
    let simplified = simplify(&mut arena, div);
    assert_eq!(arena.number_value(simplified), Some(f64::INFINITY));
}

#[test]
fn simplifies_inside_calls_and_matrices() {
    // f(1 + 1, y)
    let mut arena = NodeArena::new();
    let (a, b) = (num(&mut arena, 1.0), num(&mut arena, 1.0));
    let sum = arena.binary(BinaryOp::Add, a, b, S);
    let y = arena.variable("y", S);
    let call = arena.function("f", [sum, y], S);
    let (c, d) = (num(&mut arena, 2.0), num(&mut arena, 5.0));
    let pow = arena.binary(BinaryOp::Pow, c, d, S);
    let matrix = arena.matrix([vec![call], vec![pow]], S);

    let simplified = simplify(&mut arena, matrix);

    let mut expected = NodeArena::new();
    let two = expected.number(2.0, S);
    let ey = expected.variable("y", S);
    let ecall = expected.function("f", [two, ey], S);
    let thirty_two = expected.number(32.0, S);
    let ematrix = expected.matrix([vec![ecall], vec![thirty_two]], S);
    assert!(structurally_equal(&arena, simplified, &expected, ematrix));
    assert!(arena.verify_tree(simplified).is_ok());
}

#[test]
fn leaves_the_input_tree_untouched() {
    let mut arena = NodeArena::new();
    let (a, b) = (num(&mut arena, 4.0), num(&mut arena, 5.0));
    let sum = arena.binary(BinaryOp::Add, a, b, S);
    let mut snapshot = NodeArena::new();
    let before = deep_clone(&arena, sum, &mut snapshot);

    let simplified = simplify(&mut arena, sum);

    assert_ne!(simplified, sum);
    assert!(structurally_equal(&arena, sum, &snapshot, before));
}

#[test]
fn leaf_input_yields_fresh_copy() {
    let mut arena = NodeArena::new();
    let x = arena.variable("x", S);
    let simplified = simplify(&mut arena, x);
    assert_ne!(simplified, x);
    assert!(structurally_equal(&arena, simplified, &arena, x));
}
