//! Arena invariant violations.

use thiserror::Error;

/// A broken structural invariant of a [`NodeArena`](crate::NodeArena).
///
/// These indicate a bug in whatever built the tree, never bad user input.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("node id {id} is out of bounds for an arena of {len} nodes")]
    NodeOutOfBounds { id: u32, len: usize },

    #[error("node {child} is reachable from more than one parent")]
    SharedSubtree { child: u32 },

    #[error("node {parent} refers to node {child}, which was allocated after it")]
    ForwardReference { parent: u32, child: u32 },
}
