//! Binary and Unary Operators
//!
//! All operator types used in expressions, with their source symbols and the
//! arithmetic the simplifier is allowed to fold at compile time.

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    Pow,

    // Comparison
    Eq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Returns the source-level symbol for this operator.
    ///
    /// Used in error messages to show the exact operator that failed.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Pow => "^",
            Self::Eq => "==",
            Self::NotEq => "!=",
            Self::Lt => "<",
            Self::LtEq => "<=",
            Self::Gt => ">",
            Self::GtEq => ">=",
            Self::And => "&&",
            Self::Or => "||",
        }
    }

    pub const fn is_arithmetic(self) -> bool {
        matches!(
            self,
            Self::Add | Self::Sub | Self::Mul | Self::Div | Self::Mod | Self::Pow
        )
    }

    /// Folds `left op right` when both operands are known numbers.
    ///
    /// Only `+ - * / ^` fold; every other operator returns `None` and is kept
    /// as a node. Division follows IEEE semantics here, so `1 / 0` folds to
    /// infinity; the evaluator is the one that reports division by zero.
    pub fn fold(self, left: f64, right: f64) -> Option<f64> {
        match self {
            Self::Add => Some(left + right),
            Self::Sub => Some(left - right),
            Self::Mul => Some(left * right),
            Self::Div => Some(left / right),
            Self::Pow => Some(left.powf(right)),
            Self::Mod
            | Self::Eq
            | Self::NotEq
            | Self::Lt
            | Self::LtEq
            | Self::Gt
            | Self::GtEq
            | Self::And
            | Self::Or => None,
        }
    }
}

/// Unary operators, including the named math functions.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    Negate,
    Not,
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Exp,
    Log,
    Sqrt,
    Transpose,
    Determinant,
    Inverse,
}

impl UnaryOp {
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Negate => "-",
            Self::Not => "!",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Exp => "exp",
            Self::Log => "log",
            Self::Sqrt => "sqrt",
            Self::Transpose => "transpose",
            Self::Determinant => "det",
            Self::Inverse => "inv",
        }
    }

    /// Applies the operator to a scalar.
    ///
    /// Returns `None` for `Not` and the matrix operators, which have no scalar
    /// meaning. `Log` and `Sqrt` are unguarded here (`log(0)` is `-inf`).
    pub fn fold(self, x: f64) -> Option<f64> {
        match self {
            Self::Negate => Some(-x),
            Self::Sin => Some(x.sin()),
            Self::Cos => Some(x.cos()),
            Self::Tan => Some(x.tan()),
            Self::Asin => Some(x.asin()),
            Self::Acos => Some(x.acos()),
            Self::Atan => Some(x.atan()),
            Self::Exp => Some(x.exp()),
            Self::Log => Some(x.ln()),
            Self::Sqrt => Some(x.sqrt()),
            Self::Not | Self::Transpose | Self::Determinant | Self::Inverse => None,
        }
    }

    pub const fn is_matrix_op(self) -> bool {
        matches!(self, Self::Transpose | Self::Determinant | Self::Inverse)
    }
}
