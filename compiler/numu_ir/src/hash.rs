//! Structural subtree hashing.
//!
//! Produces span-free hashes that agree with
//! [`structurally_equal`](crate::structurally_equal): two equal trees hash the
//! same no matter which arena they live in or where their nodes were
//! allocated.
//!
//! # Strategy
//!
//! Recursive depth-first walk. For each node:
//! 1. Start from a per-variant seed
//! 2. Mix in non-child data (literal value, name, operator)
//! 3. Mix in each child's hash, in source order
//!
//! `NodeId`s are never hashed; only the content at each index is.

use std::hash::{Hash, Hasher};

use numu_stack::ensure_sufficient_stack;
use rustc_hash::FxHasher;

use crate::ast::{NodeKind, NodeTag};
use crate::{NodeArena, NodeId, NodeRange};

/// Multiplier applied after every mix step.
const MIX: u64 = 0x0000_0100_0000_01B3;

/// Stand-in for an absent optional child.
const ABSENT: u64 = 0x9E37_79B9_7F4A_7C15;

/// Hash the subtree rooted at `root`.
///
/// # Panics
///
/// Panics if `root` or one of its descendants is not in `arena`.
pub fn structural_hash(arena: &NodeArena, root: NodeId) -> u64 {
    hash_node(arena, root)
}

#[inline]
fn mix(hash: u64, value: u64) -> u64 {
    (hash ^ value).wrapping_mul(MIX)
}

fn seed(tag: NodeTag) -> u64 {
    let mut hasher = FxHasher::default();
    tag.hash(&mut hasher);
    hasher.finish() | 1
}

fn hash_str(s: &str) -> u64 {
    let mut hasher = FxHasher::default();
    s.hash(&mut hasher);
    hasher.finish()
}

/// Bit pattern for a number literal.
///
/// `0.0` and `-0.0` compare equal, so they must hash equal too.
fn number_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else if value.is_nan() {
        f64::NAN.to_bits()
    } else {
        value.to_bits()
    }
}

fn hash_list(arena: &NodeArena, range: NodeRange, mut hash: u64) -> u64 {
    let ids = arena.list(range);
    hash = mix(hash, ids.len() as u64);
    for id in ids {
        hash = mix(hash, hash_node(arena, *id));
    }
    hash
}

fn hash_optional(arena: &NodeArena, id: Option<NodeId>) -> u64 {
    id.map_or(ABSENT, |id| hash_node(arena, id))
}

fn hash_node(arena: &NodeArena, id: NodeId) -> u64 {
    ensure_sufficient_stack(|| {
        let kind = arena.kind(id);
        let hash = seed(kind.tag());
        match kind {
            NodeKind::Number(v) => mix(hash, number_bits(*v)),
            NodeKind::Boolean(b) => mix(hash, u64::from(*b)),
            NodeKind::String(s) | NodeKind::Variable(s) => mix(hash, hash_str(s)),
            NodeKind::Binary { op, left, right } => {
                let hash = mix(hash, *op as u64);
                let hash = mix(hash, hash_node(arena, *left));
                mix(hash, hash_node(arena, *right))
            }
            NodeKind::Unary { op, operand } => {
                mix(mix(hash, *op as u64), hash_node(arena, *operand))
            }
            NodeKind::Function { name, args } => hash_list(arena, *args, mix(hash, hash_str(name))),
            NodeKind::Matrix { rows } => {
                let rows = arena.rows(*rows);
                let mut hash = mix(hash, rows.len() as u64);
                for row in rows {
                    hash = hash_list(arena, *row, hash);
                }
                hash
            }
            NodeKind::Tensor { dims, values } => {
                let dims = arena.dims(*dims);
                let mut hash = mix(hash, dims.len() as u64);
                for dim in dims {
                    hash = mix(hash, *dim as u64);
                }
                hash_list(arena, *values, hash)
            }
            NodeKind::Assignment { name, value } => {
                mix(mix(hash, hash_str(name)), hash_node(arena, *value))
            }
            NodeKind::Block { statements } => hash_list(arena, *statements, hash),
            NodeKind::If {
                condition,
                then_branch,
                else_branch,
            } => {
                let hash = mix(hash, hash_node(arena, *condition));
                let hash = mix(hash, hash_node(arena, *then_branch));
                mix(hash, hash_optional(arena, *else_branch))
            }
            NodeKind::While { condition, body } => {
                let hash = mix(hash, hash_node(arena, *condition));
                mix(hash, hash_node(arena, *body))
            }
            NodeKind::For {
                init,
                condition,
                step,
                body,
            } => [init, condition, step, body]
                .into_iter()
                .fold(hash, |hash, child| mix(hash, hash_node(arena, *child))),
            NodeKind::Return { value } => mix(hash, hash_optional(arena, *value)),
        }
    })
}
