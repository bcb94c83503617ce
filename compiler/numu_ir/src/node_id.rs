//! Node IDs and ranges for the flat AST.
//!
//! - `NodeId(u32)` instead of `Box<Node>`: 4 bytes, O(1) compare
//! - `NodeRange` for child lists stored contiguously in the arena
//! - `RowRange` for matrix rows, `DimRange` for tensor dimensions

use std::fmt;

/// Index into a [`NodeArena`](crate::NodeArena).
///
/// An id is only meaningful for the arena that produced it.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct NodeId(u32);

impl NodeId {
    /// Invalid node ID (sentinel value).
    pub const INVALID: NodeId = NodeId(u32::MAX);

    #[inline]
    pub const fn new(index: u32) -> Self {
        NodeId(index)
    }

    /// Index into the arena's node vector.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.0 != u32::MAX
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            write!(f, "NodeId({})", self.0)
        } else {
            write!(f, "NodeId::INVALID")
        }
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::INVALID
    }
}

/// Defines a `start..start + len` range type over one of the arena's side
/// buffers.
///
/// Each generated type has `EMPTY`, `new()`, `is_empty()`, `len()`,
/// `indices()`, and a `Debug` impl printing `TypeName(start..end)`.
macro_rules! define_range {
    ($($(#[$meta:meta])* $name:ident),* $(,)?) => { $(
        $(#[$meta])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
        #[repr(C)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: Self = Self { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                Self { start, len }
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            #[inline]
            pub fn indices(&self) -> ::std::ops::Range<usize> {
                self.start as usize..(self.start + self.len) as usize
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({}..{})", stringify!($name), self.start, self.start + self.len)
            }
        }
    )* };
}

define_range!(
    /// Contiguous child ids (call arguments, block statements, matrix row
    /// entries, tensor values).
    NodeRange,
    /// Contiguous matrix rows; each row is a `NodeRange`.
    RowRange,
    /// Contiguous tensor dimension sizes.
    DimRange,
);

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{NodeId, NodeRange};
    crate::static_assert_size!(NodeId, 4);
    crate::static_assert_size!(NodeRange, 8);
}
