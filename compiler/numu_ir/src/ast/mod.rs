//! Flat AST types using arena allocation.
//!
//! - No `Box<Node>`, children are `NodeId` indices into a `NodeArena`
//! - Child lists are ranges into the arena's contiguous side buffers
//!
//! # Module Structure
//!
//! - `node`: Core node types (`Node`, `NodeKind`, `NodeTag`)
//! - `operators`: Binary and unary operators

mod node;
mod operators;

pub use node::{Node, NodeKind, NodeTag};
pub use operators::{BinaryOp, UnaryOp};

#[cfg(test)]
mod tests;
