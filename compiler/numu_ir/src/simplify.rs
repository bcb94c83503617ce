//! Constant folding.
//!
//! Produces a new tree in which every arithmetic subtree whose operands are
//! all number literals has been replaced by its value. Only `+ - * / ^` and
//! the scalar unary operators fold; everything else is rebuilt with
//! simplified children. The input tree is left untouched.

use numu_stack::ensure_sufficient_stack;
use tracing::debug;

use crate::ast::{Node, NodeKind};
use crate::rebuild::{map_children, ChildMap};
use crate::{NodeArena, NodeId};

/// Simplify the tree rooted at `root`, allocating the result in `arena`.
#[tracing::instrument(level = "debug", skip(arena))]
pub fn simplify(arena: &mut NodeArena, root: NodeId) -> NodeId {
    let before = arena.len();
    let mut folder = Folder { arena, folded: 0 };
    let result = folder.fold(root);
    debug!(
        folded = folder.folded,
        allocated = folder.arena.len() - before,
        "simplified"
    );
    result
}

struct Folder<'a> {
    arena: &'a mut NodeArena,
    folded: usize,
}

impl Folder<'_> {
    fn fold(&mut self, id: NodeId) -> NodeId {
        ensure_sufficient_stack(|| {
            let Node { kind, span } = self.arena.get(id).clone();
            match kind {
                NodeKind::Binary { op, left, right } => {
                    let left = self.fold(left);
                    let right = self.fold(right);
                    let folded = self
                        .arena
                        .number_value(left)
                        .zip(self.arena.number_value(right))
                        .and_then(|(l, r)| op.fold(l, r));
                    if let Some(value) = folded {
                        self.folded += 1;
                        return self.arena.number(value, span);
                    }
                    self.arena.binary(op, left, right, span)
                }
                NodeKind::Unary { op, operand } => {
                    let operand = self.fold(operand);
                    let folded = self.arena.number_value(operand).and_then(|x| op.fold(x));
                    if let Some(value) = folded {
                        self.folded += 1;
                        return self.arena.number(value, span);
                    }
                    self.arena.unary(op, operand, span)
                }
                kind => {
                    let kind = map_children(kind, self);
                    self.arena.alloc(Node::new(kind, span))
                }
            }
        })
    }
}

impl ChildMap for Folder<'_> {
    fn source(&self) -> &NodeArena {
        &*self.arena
    }

    fn dest(&mut self) -> &mut NodeArena {
        self.arena
    }

    fn map_node(&mut self, id: NodeId) -> NodeId {
        self.fold(id)
    }
}

#[cfg(test)]
mod tests;
