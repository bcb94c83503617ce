//! Core node types.

use std::fmt;

use super::{BinaryOp, UnaryOp};
use crate::{DimRange, NodeId, NodeRange, RowRange, Span};

/// A node in the flat AST.
///
/// Children are `NodeId`s into the same arena; a node never refers to a node
/// allocated after itself.
#[derive(Clone, PartialEq)]
pub struct Node {
    pub kind: NodeKind,
    pub span: Span,
}

impl Node {
    #[inline]
    pub fn new(kind: NodeKind, span: Span) -> Self {
        Node { kind, span }
    }

    #[inline]
    pub fn tag(&self) -> NodeTag {
        self.kind.tag()
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {:?}", self.kind, self.span)
    }
}

/// Node variants.
///
/// `PartialEq` here compares child *ids*, not subtrees; use
/// [`structurally_equal`](crate::structurally_equal) to compare trees.
#[derive(Clone, PartialEq)]
pub enum NodeKind {
    // ===== Literals =====
    Number(f64),
    Boolean(bool),
    String(String),

    // ===== Expressions =====
    Variable(String),
    Binary {
        op: BinaryOp,
        left: NodeId,
        right: NodeId,
    },
    Unary {
        op: UnaryOp,
        operand: NodeId,
    },
    /// `name(args...)`
    Function {
        name: String,
        args: NodeRange,
    },
    /// `[[a, b], [c, d]]`: rows of entries, rows may differ in length.
    Matrix {
        rows: RowRange,
    },
    Tensor {
        dims: DimRange,
        values: NodeRange,
    },
    /// `name = value`
    Assignment {
        name: String,
        value: NodeId,
    },

    // ===== Statements =====
    Block {
        statements: NodeRange,
    },
    If {
        condition: NodeId,
        then_branch: NodeId,
        else_branch: Option<NodeId>,
    },
    While {
        condition: NodeId,
        body: NodeId,
    },
    For {
        init: NodeId,
        condition: NodeId,
        step: NodeId,
        body: NodeId,
    },
    Return {
        value: Option<NodeId>,
    },
}

impl NodeKind {
    pub fn tag(&self) -> NodeTag {
        match self {
            NodeKind::Number(_) => NodeTag::Number,
            NodeKind::Boolean(_) => NodeTag::Boolean,
            NodeKind::String(_) => NodeTag::String,
            NodeKind::Variable(_) => NodeTag::Variable,
            NodeKind::Binary { .. } => NodeTag::Binary,
            NodeKind::Unary { .. } => NodeTag::Unary,
            NodeKind::Function { .. } => NodeTag::Function,
            NodeKind::Matrix { .. } => NodeTag::Matrix,
            NodeKind::Tensor { .. } => NodeTag::Tensor,
            NodeKind::Assignment { .. } => NodeTag::Assignment,
            NodeKind::Block { .. } => NodeTag::Block,
            NodeKind::If { .. } => NodeTag::If,
            NodeKind::While { .. } => NodeTag::While,
            NodeKind::For { .. } => NodeTag::For,
            NodeKind::Return { .. } => NodeTag::Return,
        }
    }

    /// Returns `true` for variants with no children.
    pub fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeKind::Number(_) | NodeKind::Boolean(_) | NodeKind::String(_) | NodeKind::Variable(_)
        )
    }
}

impl fmt::Debug for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Number(v) => write!(f, "Number({v})"),
            NodeKind::Boolean(b) => write!(f, "Boolean({b})"),
            NodeKind::String(s) => write!(f, "String({s:?})"),
            NodeKind::Variable(name) => write!(f, "Variable({name})"),
            NodeKind::Binary { op, left, right } => {
                write!(f, "Binary({:?}, {left:?}, {right:?})", op)
            }
            NodeKind::Unary { op, operand } => write!(f, "Unary({op:?}, {operand:?})"),
            NodeKind::Function { name, args } => write!(f, "Function({name}, {args:?})"),
            NodeKind::Matrix { rows } => write!(f, "Matrix({rows:?})"),
            NodeKind::Tensor { dims, values } => write!(f, "Tensor({dims:?}, {values:?})"),
            NodeKind::Assignment { name, value } => write!(f, "Assignment({name}, {value:?})"),
            NodeKind::Block { statements } => write!(f, "Block({statements:?})"),
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => write!(f, "If({condition:?}, {then_branch:?}, {else_branch:?})"),
            NodeKind::While { condition, body } => write!(f, "While({condition:?}, {body:?})"),
            NodeKind::For {
                init,
                condition,
                step,
                body,
            } => write!(f, "For({init:?}, {condition:?}, {step:?}, {body:?})"),
            NodeKind::Return { value } => write!(f, "Return({value:?})"),
        }
    }
}

/// Field-free discriminant of [`NodeKind`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NodeTag {
    Number,
    Boolean,
    String,
    Variable,
    Binary,
    Unary,
    Function,
    Matrix,
    Tensor,
    Assignment,
    Block,
    If,
    While,
    For,
    Return,
}

impl NodeTag {
    /// Lowercase name used in diagnostics.
    pub const fn name(self) -> &'static str {
        match self {
            NodeTag::Number => "number",
            NodeTag::Boolean => "boolean",
            NodeTag::String => "string",
            NodeTag::Variable => "variable",
            NodeTag::Binary => "binary",
            NodeTag::Unary => "unary",
            NodeTag::Function => "function call",
            NodeTag::Matrix => "matrix",
            NodeTag::Tensor => "tensor",
            NodeTag::Assignment => "assignment",
            NodeTag::Block => "block",
            NodeTag::If => "if",
            NodeTag::While => "while",
            NodeTag::For => "for",
            NodeTag::Return => "return",
        }
    }
}
