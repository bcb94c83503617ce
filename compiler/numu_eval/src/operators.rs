//! Binary operators on scalars.
//!
//! Arithmetic is delegated to [`BinaryOp::fold`] so the evaluator and the
//! simplifier agree on every operator both understand. The evaluator adds
//! the zero-divisor checks and the floating remainder.

use numu_ir::BinaryOp;

use crate::errors::{division_by_zero, modulo_by_zero, unsupported_operator, EvalResult};

/// Applies `op` to two already-evaluated operands.
pub fn evaluate_binary(op: BinaryOp, left: f64, right: f64) -> EvalResult {
    match op {
        BinaryOp::Div => checked_div(left, right),
        BinaryOp::Mod => checked_rem(left, right),
        BinaryOp::Add | BinaryOp::Sub | BinaryOp::Mul | BinaryOp::Pow => op
            .fold(left, right)
            .ok_or_else(|| unsupported_operator(op.as_symbol())),
        BinaryOp::Eq
        | BinaryOp::NotEq
        | BinaryOp::Lt
        | BinaryOp::LtEq
        | BinaryOp::Gt
        | BinaryOp::GtEq
        | BinaryOp::And
        | BinaryOp::Or => Err(unsupported_operator(op.as_symbol())),
    }
}

#[inline]
fn checked_div(left: f64, right: f64) -> EvalResult {
    if right == 0.0 {
        return Err(division_by_zero());
    }
    Ok(left / right)
}

/// Truncated remainder; the sign follows the dividend.
#[inline]
fn checked_rem(left: f64, right: f64) -> EvalResult {
    if right == 0.0 {
        return Err(modulo_by_zero());
    }
    Ok(left % right)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::expect_used)]

    use super::*;

    #[test]
    fn arithmetic() {
        assert_eq!(evaluate_binary(BinaryOp::Add, 2.0, 3.0).unwrap(), 5.0);
        assert_eq!(evaluate_binary(BinaryOp::Sub, 2.0, 3.0).unwrap(), -1.0);
        assert_eq!(evaluate_binary(BinaryOp::Mul, 2.0, 3.0).unwrap(), 6.0);
        assert_eq!(evaluate_binary(BinaryOp::Div, 3.0, 2.0).unwrap(), 1.5);
        assert_eq!(evaluate_binary(BinaryOp::Pow, 2.0, 9.0).unwrap(), 512.0);
        assert_eq!(evaluate_binary(BinaryOp::Mod, 7.5, 2.0).unwrap(), 1.5);
        assert_eq!(evaluate_binary(BinaryOp::Mod, -7.0, 3.0).unwrap(), -1.0);
    }

    #[test]
    fn zero_divisors() {
        let div = evaluate_binary(BinaryOp::Div, 1.0, 0.0).unwrap_err();
        assert_eq!(div.to_string(), "division by zero");
        let neg = evaluate_binary(BinaryOp::Div, 1.0, -0.0).unwrap_err();
        assert_eq!(neg.to_string(), "division by zero");
        let rem = evaluate_binary(BinaryOp::Mod, 1.0, 0.0).unwrap_err();
        assert_eq!(rem.to_string(), "modulo by zero");
    }

    #[test]
    fn tiny_divisor_is_not_zero() {
        assert!(evaluate_binary(BinaryOp::Div, 1.0, f64::MIN_POSITIVE).is_ok());
    }

    #[test]
    fn comparisons_unsupported() {
        for op in [
            BinaryOp::Eq,
            BinaryOp::NotEq,
            BinaryOp::Lt,
            BinaryOp::LtEq,
            BinaryOp::Gt,
            BinaryOp::GtEq,
            BinaryOp::And,
            BinaryOp::Or,
        ] {
            let err = evaluate_binary(op, 1.0, 2.0).unwrap_err();
            assert_eq!(
                err.to_string(),
                format!(
                    "operator `{}` is not supported in numeric evaluation",
                    op.as_symbol()
                )
            );
        }
    }
}
