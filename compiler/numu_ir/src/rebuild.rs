//! Rebuilding a node's payload with every child replaced.
//!
//! Deep clone and simplify both walk a tree and allocate a fresh copy of each
//! composite node whose children have been transformed. The only thing that
//! differs between them is what happens to a child, so that part is a trait.

use smallvec::SmallVec;

use crate::ast::NodeKind;
use crate::{DimRange, NodeArena, NodeId, NodeRange, RowRange};

/// Maps the children of one node into a destination arena.
pub(crate) trait ChildMap {
    /// Arena the original child ids and ranges belong to.
    fn source(&self) -> &NodeArena;

    /// Arena receiving the rebuilt lists.
    fn dest(&mut self) -> &mut NodeArena;

    /// Transforms one child subtree, returning its id in the destination.
    fn map_node(&mut self, id: NodeId) -> NodeId;

    fn map_list(&mut self, range: NodeRange) -> NodeRange {
        let ids: SmallVec<[NodeId; 8]> = self.source().list(range).iter().copied().collect();
        let mapped: SmallVec<[NodeId; 8]> = ids.into_iter().map(|id| self.map_node(id)).collect();
        self.dest().alloc_list(mapped)
    }

    fn map_rows(&mut self, rows: RowRange) -> RowRange {
        let ranges: SmallVec<[NodeRange; 4]> = self.source().rows(rows).iter().copied().collect();
        let mapped: SmallVec<[NodeRange; 4]> = ranges
            .into_iter()
            .map(|row| self.map_list(row))
            .collect();
        self.dest().alloc_rows(mapped)
    }

    fn map_dims(&mut self, dims: DimRange) -> DimRange {
        let sizes: SmallVec<[usize; 4]> = self.source().dims(dims).iter().copied().collect();
        self.dest().alloc_dims(sizes)
    }
}

/// Returns `kind` with every child passed through `map`.
///
/// Children are mapped in source order, so the rebuilt subtree keeps the
/// children-before-parent allocation order.
pub(crate) fn map_children(kind: NodeKind, map: &mut impl ChildMap) -> NodeKind {
    match kind {
        NodeKind::Number(_)
        | NodeKind::Boolean(_)
        | NodeKind::String(_)
        | NodeKind::Variable(_) => kind,
        NodeKind::Binary { op, left, right } => {
            let left = map.map_node(left);
            let right = map.map_node(right);
            NodeKind::Binary { op, left, right }
        }
        NodeKind::Unary { op, operand } => NodeKind::Unary {
            op,
            operand: map.map_node(operand),
        },
        NodeKind::Function { name, args } => NodeKind::Function {
            name,
            args: map.map_list(args),
        },
        NodeKind::Matrix { rows } => NodeKind::Matrix {
            rows: map.map_rows(rows),
        },
        NodeKind::Tensor { dims, values } => {
            let dims = map.map_dims(dims);
            let values = map.map_list(values);
            NodeKind::Tensor { dims, values }
        }
        NodeKind::Assignment { name, value } => NodeKind::Assignment {
            name,
            value: map.map_node(value),
        },
        NodeKind::Block { statements } => NodeKind::Block {
            statements: map.map_list(statements),
        },
        NodeKind::If {
            condition,
            then_branch,
            else_branch,
        } => {
            let condition = map.map_node(condition);
            let then_branch = map.map_node(then_branch);
            let else_branch = else_branch.map(|id| map.map_node(id));
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            }
        }
        NodeKind::While { condition, body } => {
            let condition = map.map_node(condition);
            let body = map.map_node(body);
            NodeKind::While { condition, body }
        }
        NodeKind::For {
            init,
            condition,
            step,
            body,
        } => {
            let init = map.map_node(init);
            let condition = map.map_node(condition);
            let step = map.map_node(step);
            let body = map.map_node(body);
            NodeKind::For {
                init,
                condition,
                step,
                body,
            }
        }
        NodeKind::Return { value } => NodeKind::Return {
            value: value.map(|id| map.map_node(id)),
        },
    }
}
