//! numu IR - the AST model and the algorithms that run over it.
//!
//! This crate contains:
//! - `Span` for byte-offset source locations
//! - `NodeId` / `NodeRange` indices into a [`NodeArena`]
//! - AST nodes (`Node`, `NodeKind`) and operators (`BinaryOp`, `UnaryOp`)
//! - Tree algorithms: deep clone, structural equality, structural hash,
//!   pre-order traversal, and constant-folding simplification
//!
//! # Design
//!
//! - **Flat storage**: nodes live in a caller-owned [`NodeArena`]; children are
//!   `NodeId` indices, child lists are `NodeRange`s into a shared list buffer.
//! - **Single ownership**: trees built by the parser and the tree algorithms
//!   reach every node through exactly one parent, and a child id is always
//!   smaller than its parent's. The factories accept any existing id, so a
//!   hand-built tree can share a subtree; [`NodeArena::verify_tree`] is the
//!   check.
//! - **No globals**: independent arenas never observe each other.

/// Compile-time assertion that a type has a specific size.
///
/// Used to prevent accidental size regressions in frequently-allocated types.
#[macro_export]
macro_rules! static_assert_size {
    ($ty:ty, $size:expr) => {
        const _: [(); $size] = [(); ::std::mem::size_of::<$ty>()];
    };
}

mod arena;
pub mod ast;
mod clone;
mod equality;
mod error;
mod hash;
mod node_id;
mod rebuild;
mod simplify;
mod span;
mod traverse;

pub use arena::NodeArena;
pub use ast::{BinaryOp, Node, NodeKind, NodeTag, UnaryOp};
pub use clone::{clone_opt, deep_clone};
pub use equality::structurally_equal;
pub use error::InvariantViolation;
pub use hash::structural_hash;
pub use node_id::{DimRange, NodeId, NodeRange, RowRange};
pub use simplify::simplify;
pub use span::Span;
pub use traverse::{subtree_size, traverse};
