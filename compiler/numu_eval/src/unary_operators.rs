//! Unary operators on scalars.

use numu_ir::UnaryOp;

use crate::errors::{log_of_non_positive, sqrt_of_negative, unsupported_operator, EvalResult};

/// Applies `op` to an already-evaluated operand.
///
/// `log` and `sqrt` are domain-checked; the remaining scalar operators defer
/// to [`UnaryOp::fold`]. `!` and the matrix operators have no scalar meaning.
pub fn evaluate_unary(op: UnaryOp, operand: f64) -> EvalResult {
    match op {
        UnaryOp::Log if operand <= 0.0 => Err(log_of_non_positive()),
        UnaryOp::Sqrt if operand < 0.0 => Err(sqrt_of_negative()),
        _ => op
            .fold(operand)
            .ok_or_else(|| unsupported_operator(op.as_symbol())),
    }
}
