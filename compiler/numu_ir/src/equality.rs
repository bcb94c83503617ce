//! Structural equality across arenas.

use numu_stack::ensure_sufficient_stack;

use crate::ast::NodeKind;
use crate::{NodeArena, NodeId, NodeRange};

/// Returns `true` if the tree at `a` in `arena_a` and the tree at `b` in
/// `arena_b` have the same shape, operators, names, and literal values.
///
/// Spans are ignored. Numbers compare with `==`, so `0.0` equals `-0.0` and a
/// `NaN` literal is never equal to anything. Passing the same arena and the
/// same id returns `true` without walking the tree.
///
/// A tree is therefore equal to its clone unless it holds a `NaN` literal:
/// the clone is a different node, so the comparison walks both trees and the
/// `NaN`s differ. Their [`structural_hash`](crate::structural_hash) values
/// still match.
pub fn structurally_equal(arena_a: &NodeArena, a: NodeId, arena_b: &NodeArena, b: NodeId) -> bool {
    if std::ptr::eq(arena_a, arena_b) && a == b {
        return true;
    }
    Comparer { arena_a, arena_b }.nodes(a, b)
}

struct Comparer<'a> {
    arena_a: &'a NodeArena,
    arena_b: &'a NodeArena,
}

impl Comparer<'_> {
    fn nodes(&self, a: NodeId, b: NodeId) -> bool {
        ensure_sufficient_stack(|| self.kinds(self.arena_a.kind(a), self.arena_b.kind(b)))
    }

    fn lists(&self, a: NodeRange, b: NodeRange) -> bool {
        let (xs, ys) = (self.arena_a.list(a), self.arena_b.list(b));
        xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| self.nodes(*x, *y))
    }

    fn optional(&self, a: Option<NodeId>, b: Option<NodeId>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => self.nodes(a, b),
            _ => false,
        }
    }

    fn kinds(&self, a: &NodeKind, b: &NodeKind) -> bool {
        match (a, b) {
            (NodeKind::Number(x), NodeKind::Number(y)) => x == y,
            (NodeKind::Boolean(x), NodeKind::Boolean(y)) => x == y,
            (NodeKind::String(x), NodeKind::String(y))
            | (NodeKind::Variable(x), NodeKind::Variable(y)) => x == y,
            (
                NodeKind::Binary {
                    op: op_a,
                    left: la,
                    right: ra,
                },
                NodeKind::Binary {
                    op: op_b,
                    left: lb,
                    right: rb,
                },
            ) => op_a == op_b && self.nodes(*la, *lb) && self.nodes(*ra, *rb),
            (
                NodeKind::Unary {
                    op: op_a,
                    operand: xa,
                },
                NodeKind::Unary {
                    op: op_b,
                    operand: xb,
                },
            ) => op_a == op_b && self.nodes(*xa, *xb),
            (
                NodeKind::Function {
                    name: na,
                    args: aa,
                },
                NodeKind::Function {
                    name: nb,
                    args: ab,
                },
            ) => na == nb && self.lists(*aa, *ab),
            (NodeKind::Matrix { rows: ra }, NodeKind::Matrix { rows: rb }) => {
                let (xs, ys) = (self.arena_a.rows(*ra), self.arena_b.rows(*rb));
                xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| self.lists(*x, *y))
            }
            (
                NodeKind::Tensor {
                    dims: da,
                    values: va,
                },
                NodeKind::Tensor {
                    dims: db,
                    values: vb,
                },
            ) => self.arena_a.dims(*da) == self.arena_b.dims(*db) && self.lists(*va, *vb),
            (
                NodeKind::Assignment {
                    name: na,
                    value: va,
                },
                NodeKind::Assignment {
                    name: nb,
                    value: vb,
                },
            ) => na == nb && self.nodes(*va, *vb),
            (NodeKind::Block { statements: sa }, NodeKind::Block { statements: sb }) => {
                self.lists(*sa, *sb)
            }
            (
                NodeKind::If {
                    condition: ca,
                    then_branch: ta,
                    else_branch: ea,
                },
                NodeKind::If {
                    condition: cb,
                    then_branch: tb,
                    else_branch: eb,
                },
            ) => self.nodes(*ca, *cb) && self.nodes(*ta, *tb) && self.optional(*ea, *eb),
            (
                NodeKind::While {
                    condition: ca,
                    body: ba,
                },
                NodeKind::While {
                    condition: cb,
                    body: bb,
                },
            ) => self.nodes(*ca, *cb) && self.nodes(*ba, *bb),
            (
                NodeKind::For {
                    init: ia,
                    condition: ca,
                    step: sa,
                    body: ba,
                },
                NodeKind::For {
                    init: ib,
                    condition: cb,
                    step: sb,
                    body: bb,
                },
            ) => {
                self.nodes(*ia, *ib)
                    && self.nodes(*ca, *cb)
                    && self.nodes(*sa, *sb)
                    && self.nodes(*ba, *bb)
            }
            (NodeKind::Return { value: va }, NodeKind::Return { value: vb }) => {
                self.optional(*va, *vb)
            }
            _ => false,
        }
    }
}
