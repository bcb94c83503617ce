//! Pre-order traversal.

use crate::ast::Node;
use crate::{NodeArena, NodeId};

/// Visits every node of the tree rooted at `root`, parents before children,
/// children in source order.
///
/// Uses an explicit stack, so arbitrarily deep trees do not recurse.
pub fn traverse<F>(arena: &NodeArena, root: NodeId, mut visit: F)
where
    F: FnMut(NodeId, &Node),
{
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        visit(id, arena.get(id));
        stack.extend(arena.children(id).into_iter().rev());
    }
}

/// Number of nodes in the tree rooted at `root`.
pub fn subtree_size(arena: &NodeArena, root: NodeId) -> usize {
    let mut count = 0;
    traverse(arena, root, |_, _| count += 1);
    count
}
