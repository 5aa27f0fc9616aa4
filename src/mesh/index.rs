//! Index types for mesh elements.
//!
//! Vertices, half-edges, and faces are addressed by type-safe id wrappers
//! over `u32` slot indices. An id stays valid for as long as its element is
//! registered; removing the element and letting the slot be reused makes
//! old copies of the id refer to the new occupant, so callers that remove
//! elements must not retain ids across the removal.

use std::fmt::{self, Debug};
use std::hash::Hash;

/// Trait implemented by the element id types, used by the arena storage.
///
/// All three ids share the same representation: a `u32` slot index with
/// `u32::MAX` reserved as the invalid sentinel.
pub trait ElementId: Copy + Eq + PartialEq + Hash + Debug + 'static {
    /// The sentinel value representing "no element".
    const INVALID: Self;

    /// Convert from a slot index.
    ///
    /// # Panics
    /// Panics in debug builds if the value collides with the sentinel.
    fn from_usize(v: usize) -> Self;

    /// Convert to a slot index.
    fn index(self) -> usize;

    /// Check if this is a valid (non-sentinel) id.
    fn is_valid(self) -> bool {
        self != Self::INVALID
    }
}

/// A type-safe vertex id.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct VertexId(u32);

/// A type-safe half-edge id.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct HalfEdgeId(u32);

/// A type-safe face id.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[repr(transparent)]
pub struct FaceId(u32);

macro_rules! impl_id_type {
    ($name:ident, $display:literal) => {
        impl $name {
            /// Create a new id from a raw slot index.
            #[inline]
            pub fn new(index: usize) -> Self {
                debug_assert!(index < u32::MAX as usize, "index {} too large", index);
                Self(index as u32)
            }

            /// Create an invalid/null id.
            #[inline]
            pub fn invalid() -> Self {
                Self(u32::MAX)
            }

            /// Get the raw slot index.
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            /// Check if this is a valid (non-null) id.
            #[inline]
            pub fn is_valid(self) -> bool {
                self.0 != u32::MAX
            }
        }

        impl ElementId for $name {
            const INVALID: Self = Self(u32::MAX);

            #[inline]
            fn from_usize(v: usize) -> Self {
                Self::new(v)
            }

            #[inline]
            fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.is_valid() {
                    write!(f, "{}({})", $display, self.0)
                } else {
                    write!(f, "{}(INVALID)", $display)
                }
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::invalid()
            }
        }

        impl From<usize> for $name {
            fn from(v: usize) -> Self {
                Self::new(v)
            }
        }
    };
}

impl_id_type!(VertexId, "V");
impl_id_type!(HalfEdgeId, "HE");
impl_id_type!(FaceId, "F");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_id() {
        let v = VertexId::new(42);
        assert_eq!(v.index(), 42);
        assert!(v.is_valid());

        let invalid = VertexId::invalid();
        assert!(!invalid.is_valid());
    }

    #[test]
    fn test_type_safety() {
        // These are different types and cannot be mixed
        let v = VertexId::new(0);
        let he = HalfEdgeId::new(0);
        let f = FaceId::new(0);

        // All have the same raw value but are distinct types
        assert_eq!(v.index(), he.index());
        assert_eq!(he.index(), f.index());
    }

    #[test]
    fn test_debug_format() {
        let v = VertexId::new(42);
        assert_eq!(format!("{:?}", v), "V(42)");

        let invalid = HalfEdgeId::invalid();
        assert_eq!(format!("{:?}", invalid), "HE(INVALID)");
    }

    #[test]
    fn test_default_is_invalid() {
        assert!(!FaceId::default().is_valid());
    }
}
