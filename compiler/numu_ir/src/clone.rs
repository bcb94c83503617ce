//! Deep copy of subtrees, within one arena or across arenas.

use numu_stack::ensure_sufficient_stack;

use crate::ast::Node;
use crate::rebuild::{map_children, ChildMap};
use crate::{NodeArena, NodeId};

/// Copies the subtree rooted at `id` in `src` into `dst`.
///
/// Every node of the copy is freshly allocated in `dst`, including the
/// variable and function name strings. The result is structurally equal to
/// the source and shares nothing with it.
pub fn deep_clone(src: &NodeArena, id: NodeId, dst: &mut NodeArena) -> NodeId {
    ArenaCopy { src, dst }.copy(id)
}

/// [`deep_clone`] for an optional root; `None` copies to `None`.
pub fn clone_opt(src: &NodeArena, id: Option<NodeId>, dst: &mut NodeArena) -> Option<NodeId> {
    id.map(|id| deep_clone(src, id, dst))
}

impl NodeArena {
    /// Copies the subtree rooted at `id` into this same arena.
    pub fn clone_subtree(&mut self, id: NodeId) -> NodeId {
        InPlaceCopy { arena: self }.copy(id)
    }
}

struct ArenaCopy<'a> {
    src: &'a NodeArena,
    dst: &'a mut NodeArena,
}

impl ArenaCopy<'_> {
    fn copy(&mut self, id: NodeId) -> NodeId {
        ensure_sufficient_stack(|| {
            let src = self.src;
            let node = src.get(id);
            let kind = map_children(node.kind.clone(), self);
            self.dst.alloc(Node::new(kind, node.span))
        })
    }
}

impl ChildMap for ArenaCopy<'_> {
    fn source(&self) -> &NodeArena {
        self.src
    }

    fn dest(&mut self) -> &mut NodeArena {
        self.dst
    }

    fn map_node(&mut self, id: NodeId) -> NodeId {
        self.copy(id)
    }
}

struct InPlaceCopy<'a> {
    arena: &'a mut NodeArena,
}

impl InPlaceCopy<'_> {
    fn copy(&mut self, id: NodeId) -> NodeId {
        ensure_sufficient_stack(|| {
            let Node { kind, span } = self.arena.get(id).clone();
            let kind = map_children(kind, self);
            self.arena.alloc(Node::new(kind, span))
        })
    }
}

impl ChildMap for InPlaceCopy<'_> {
    fn source(&self) -> &NodeArena {
        &*self.arena
    }

    fn dest(&mut self) -> &mut NodeArena {
        self.arena
    }

    fn map_node(&mut self, id: NodeId) -> NodeId {
        self.copy(id)
    }
}
