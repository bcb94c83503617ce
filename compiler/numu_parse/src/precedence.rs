//! Binding precedence ladder.

/// Binding precedence, lowest to highest.
///
/// `Ternary` has no operator attached; it keeps the ladder aligned with the
/// grammar's documented levels.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum Precedence {
    None,
    Assignment,
    Ternary,
    Or,
    And,
    Equality,
    Comparison,
    Term,
    Factor,
    Unary,
    Power,
    Call,
    Primary,
}

impl Precedence {
    /// The next tighter level. `Primary` is its own successor.
    pub const fn next(self) -> Precedence {
        match self {
            Precedence::None => Precedence::Assignment,
            Precedence::Assignment => Precedence::Ternary,
            Precedence::Ternary => Precedence::Or,
            Precedence::Or => Precedence::And,
            Precedence::And => Precedence::Equality,
            Precedence::Equality => Precedence::Comparison,
            Precedence::Comparison => Precedence::Term,
            Precedence::Term => Precedence::Factor,
            Precedence::Factor => Precedence::Unary,
            Precedence::Unary => Precedence::Power,
            Precedence::Power => Precedence::Call,
            Precedence::Call | Precedence::Primary => Precedence::Primary,
        }
    }
}

/// How an infix operator groups with itself.
///
/// A `Right` operator parses its right operand at its own level, so
/// `a - b - c` is `a - (b - c)`. A `Left` operator parses it one level
/// higher.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Associativity {
    Left,
    Right,
}

impl Associativity {
    /// Minimum precedence for the right operand of an operator at `level`.
    pub const fn operand_precedence(self, level: Precedence) -> Precedence {
        match self {
            Associativity::Left => level.next(),
            Associativity::Right => level,
        }
    }
}
