//! Arena allocation for the flat AST.
//!
//! - Contiguous storage for all nodes
//! - Child lists, matrix rows, and tensor dimensions in side buffers
//! - Bulk deallocation on drop or [`NodeArena::reset`]

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::ast::{BinaryOp, Node, NodeKind, UnaryOp};
use crate::{DimRange, InvariantViolation, NodeId, NodeRange, RowRange, Span};

/// Contiguous storage for every node of one or more trees.
///
/// # Design
/// - Nodes are stored in a flat `Vec` and addressed by `NodeId`
/// - Factories allocate children before parents, so ids grow towards the root
/// - Factories do not check sharing: passing one id twice builds a DAG that
///   [`verify_tree`](Self::verify_tree) rejects
/// - Nothing is freed individually; dropping the arena frees everything
#[derive(Clone, Default)]
pub struct NodeArena {
    /// All nodes (indexed by `NodeId`).
    nodes: Vec<Node>,

    /// Flattened child lists (call arguments, block statements, row entries,
    /// tensor values).
    lists: Vec<NodeId>,

    /// Matrix rows; each row is a range into `lists`.
    rows: Vec<NodeRange>,

    /// Tensor dimension sizes.
    dims: Vec<usize>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create with estimated capacity based on source size.
    /// Heuristic: ~1 node per 4 bytes of source.
    pub fn with_capacity(source_len: usize) -> Self {
        let estimated_nodes = source_len / 4;
        NodeArena {
            nodes: Vec::with_capacity(estimated_nodes),
            lists: Vec::with_capacity(estimated_nodes / 4),
            rows: Vec::new(),
            dims: Vec::new(),
        }
    }

    /// Drop every node while keeping the allocated capacity.
    ///
    /// All previously issued ids become dangling.
    pub fn reset(&mut self) {
        self.nodes.clear();
        self.lists.clear();
        self.rows.clear();
        self.dims.clear();
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    // ===== Node allocation =====

    /// Allocate a node, return its id.
    #[inline]
    pub fn alloc(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Get node by ID.
    ///
    /// # Panics
    /// Panics if `id` does not belong to this arena.
    #[inline]
    #[track_caller]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Get node by ID, reporting a foreign or stale id as an error.
    #[inline]
    pub fn try_get(&self, id: NodeId) -> Result<&Node, InvariantViolation> {
        self.nodes
            .get(id.index())
            .ok_or(InvariantViolation::NodeOutOfBounds {
                id: id.raw(),
                len: self.nodes.len(),
            })
    }

    #[inline]
    #[track_caller]
    pub fn kind(&self, id: NodeId) -> &NodeKind {
        &self.get(id).kind
    }

    #[inline]
    #[track_caller]
    pub fn span(&self, id: NodeId) -> Span {
        self.get(id).span
    }

    /// The value of a `Number` node, `None` for any other variant.
    #[inline]
    pub fn number_value(&self, id: NodeId) -> Option<f64> {
        match self.try_get(id).map(|node| &node.kind) {
            Ok(NodeKind::Number(value)) => Some(*value),
            _ => None,
        }
    }

    // ===== Side buffers =====

    /// Allocate a child list, return its range.
    pub fn alloc_list(&mut self, ids: impl IntoIterator<Item = NodeId>) -> NodeRange {
        let start = self.lists.len() as u32;
        self.lists.extend(ids);
        NodeRange::new(start, self.lists.len() as u32 - start)
    }

    #[inline]
    #[track_caller]
    pub fn list(&self, range: NodeRange) -> &[NodeId] {
        &self.lists[range.indices()]
    }

    pub fn alloc_rows(&mut self, rows: impl IntoIterator<Item = NodeRange>) -> RowRange {
        let start = self.rows.len() as u32;
        self.rows.extend(rows);
        RowRange::new(start, self.rows.len() as u32 - start)
    }

    #[inline]
    #[track_caller]
    pub fn rows(&self, range: RowRange) -> &[NodeRange] {
        &self.rows[range.indices()]
    }

    pub fn alloc_dims(&mut self, dims: impl IntoIterator<Item = usize>) -> DimRange {
        let start = self.dims.len() as u32;
        self.dims.extend(dims);
        DimRange::new(start, self.dims.len() as u32 - start)
    }

    #[inline]
    #[track_caller]
    pub fn dims(&self, range: DimRange) -> &[usize] {
        &self.dims[range.indices()]
    }

    // ===== Factories =====

    pub fn number(&mut self, value: f64, span: Span) -> NodeId {
        self.alloc(Node::new(NodeKind::Number(value), span))
    }

    pub fn boolean(&mut self, value: bool, span: Span) -> NodeId {
        self.alloc(Node::new(NodeKind::Boolean(value), span))
    }

    pub fn string(&mut self, value: impl Into<String>, span: Span) -> NodeId {
        self.alloc(Node::new(NodeKind::String(value.into()), span))
    }

    pub fn variable(&mut self, name: impl Into<String>, span: Span) -> NodeId {
        self.alloc(Node::new(NodeKind::Variable(name.into()), span))
    }

    pub fn binary(&mut self, op: BinaryOp, left: NodeId, right: NodeId, span: Span) -> NodeId {
        self.alloc(Node::new(NodeKind::Binary { op, left, right }, span))
    }

    pub fn unary(&mut self, op: UnaryOp, operand: NodeId, span: Span) -> NodeId {
        self.alloc(Node::new(NodeKind::Unary { op, operand }, span))
    }

    /// `name(args...)`; `args` must already be allocated in this arena.
    pub fn function(
        &mut self,
        name: impl Into<String>,
        args: impl IntoIterator<Item = NodeId>,
        span: Span,
    ) -> NodeId {
        let args = self.alloc_list(args);
        self.alloc(Node::new(
            NodeKind::Function {
                name: name.into(),
                args,
            },
            span,
        ))
    }

    /// Matrix from row-major entries. Rows may have different lengths.
    pub fn matrix<R>(&mut self, rows: impl IntoIterator<Item = R>, span: Span) -> NodeId
    where
        R: IntoIterator<Item = NodeId>,
    {
        let ranges: SmallVec<[NodeRange; 4]> =
            rows.into_iter().map(|row| self.alloc_list(row)).collect();
        let rows = self.alloc_rows(ranges);
        self.alloc(Node::new(NodeKind::Matrix { rows }, span))
    }

    pub fn tensor(
        &mut self,
        dims: impl IntoIterator<Item = usize>,
        values: impl IntoIterator<Item = NodeId>,
        span: Span,
    ) -> NodeId {
        let dims = self.alloc_dims(dims);
        let values = self.alloc_list(values);
        self.alloc(Node::new(NodeKind::Tensor { dims, values }, span))
    }

    pub fn assignment(&mut self, name: impl Into<String>, value: NodeId, span: Span) -> NodeId {
        self.alloc(Node::new(
            NodeKind::Assignment {
                name: name.into(),
                value,
            },
            span,
        ))
    }

    pub fn block(&mut self, statements: impl IntoIterator<Item = NodeId>, span: Span) -> NodeId {
        let statements = self.alloc_list(statements);
        self.alloc(Node::new(NodeKind::Block { statements }, span))
    }

    pub fn if_node(
        &mut self,
        condition: NodeId,
        then_branch: NodeId,
        else_branch: Option<NodeId>,
        span: Span,
    ) -> NodeId {
        self.alloc(Node::new(
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            },
            span,
        ))
    }

    pub fn while_node(&mut self, condition: NodeId, body: NodeId, span: Span) -> NodeId {
        self.alloc(Node::new(NodeKind::While { condition, body }, span))
    }

    pub fn for_node(
        &mut self,
        init: NodeId,
        condition: NodeId,
        step: NodeId,
        body: NodeId,
        span: Span,
    ) -> NodeId {
        self.alloc(Node::new(
            NodeKind::For {
                init,
                condition,
                step,
                body,
            },
            span,
        ))
    }

    pub fn return_node(&mut self, value: Option<NodeId>, span: Span) -> NodeId {
        self.alloc(Node::new(NodeKind::Return { value }, span))
    }

    // ===== Structure =====

    /// Direct children of `id`, in source order.
    ///
    /// Matrix entries are listed row by row.
    pub fn children(&self, id: NodeId) -> SmallVec<[NodeId; 4]> {
        let mut out = SmallVec::new();
        match &self.get(id).kind {
            NodeKind::Number(_)
            | NodeKind::Boolean(_)
            | NodeKind::String(_)
            | NodeKind::Variable(_) => {}
            NodeKind::Binary { left, right, .. } => {
                out.push(*left);
                out.push(*right);
            }
            NodeKind::Unary { operand, .. } => out.push(*operand),
            NodeKind::Function { args, .. } => out.extend_from_slice(self.list(*args)),
            NodeKind::Matrix { rows } => {
                for row in self.rows(*rows) {
                    out.extend_from_slice(self.list(*row));
                }
            }
            NodeKind::Tensor { values, .. } => out.extend_from_slice(self.list(*values)),
            NodeKind::Assignment { value, .. } => out.push(*value),
            NodeKind::Block { statements } => out.extend_from_slice(self.list(*statements)),
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                out.push(*condition);
                out.push(*then_branch);
                out.extend(*else_branch);
            }
            NodeKind::While { condition, body } => {
                out.push(*condition);
                out.push(*body);
            }
            NodeKind::For {
                init,
                condition,
                step,
                body,
            } => {
                out.extend([*init, *condition, *step, *body]);
            }
            NodeKind::Return { value } => out.extend(*value),
        }
        out
    }

    /// Checks that the tree under `root` is well formed.
    ///
    /// Every id must be in bounds, every child must be allocated before its
    /// parent, and no node may be reachable through two parents.
    pub fn verify_tree(&self, root: NodeId) -> Result<(), InvariantViolation> {
        self.try_get(root)?;
        let mut seen = FxHashSet::default();
        seen.insert(root);
        let mut stack = vec![root];
        while let Some(parent) = stack.pop() {
            for child in self.children(parent) {
                self.try_get(child)?;
                if child >= parent {
                    return Err(InvariantViolation::ForwardReference {
                        parent: parent.raw(),
                        child: child.raw(),
                    });
                }
                if !seen.insert(child) {
                    return Err(InvariantViolation::SharedSubtree { child: child.raw() });
                }
                stack.push(child);
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for NodeArena {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeArena")
            .field("nodes", &self.nodes.len())
            .field("lists", &self.lists.len())
            .field("rows", &self.rows.len())
            .field("dims", &self.dims.len())
            .finish()
    }
}
