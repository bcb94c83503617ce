use numu_ir::{InvariantViolation, NodeTag, Span};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn messages() {
    let cases = [
        (division_by_zero(), "division by zero"),
        (modulo_by_zero(), "modulo by zero"),
        (log_of_non_positive(), "logarithm of non-positive number"),
        (sqrt_of_negative(), "square root of negative number"),
        (undefined_variable("x"), "undefined variable: x"),
        (unknown_function("foo"), "unknown function: foo"),
        (arity_mismatch("abs", 1, 2), "function abs expects 1 arguments, got 2"),
        (empty_arguments("min"), "function min requires at least one argument"),
        (duplicate_function("abs"), "function already registered: abs"),
        (
            invalid_arity(-3),
            "invalid arity -3: expected -1 or a non-negative count",
        ),
        (
            unsupported_operator("<"),
            "operator `<` is not supported in numeric evaluation",
        ),
        (
            unsupported_node(NodeTag::String),
            "cannot evaluate a string node to a number",
        ),
        (not_implemented("matrix"), "matrix operations not yet implemented"),
        (not_implemented("tensor"), "tensor operations not yet implemented"),
    ];
    for (err, message) in cases {
        assert_eq!(err.to_string(), message);
        assert_eq!(err.message(), message);
        assert!(!err.is_internal());
    }
}

#[test]
fn invariant_violations_are_internal() {
    let err = EvalError::from(InvariantViolation::NodeOutOfBounds { id: 9, len: 2 });
    assert!(err.is_internal());
    assert_eq!(
        err.to_string(),
        "internal error: node id 9 is out of bounds for an arena of 2 nodes"
    );
}

#[test]
fn innermost_span_wins() {
    let err = division_by_zero()
        .with_span(Span::new(4, 5))
        .with_span(Span::new(0, 9));
    assert_eq!(err.span, Some(Span::new(4, 5)));
}
