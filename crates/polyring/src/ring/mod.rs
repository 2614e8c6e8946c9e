//! Vertex ring: a counterclockwise circular doubly-linked list in an arena.
//!
//! Purpose
//! - Hold the boundary of a simple polygon as a mutable cycle of vertices,
//!   each carrying a point and a caller-typed metadata value.
//! - Support the append/remove/neighbour queries an ear-clipping driver needs.
//!
//! Layout
//! - Vertices live in a `Vec` of slots; `next`/`prev` are slot indices.
//! - Removed slots go on a free list and are reused by later appends.
//! - Handles (`VertexId`) carry the ring tag and the slot generation, so
//!   foreign and stale handles are rejected with `RingError::InvalidVertexHandle`.
//!
//! Conventions
//! - `append` inserts before the anchor, so appending points in
//!   counterclockwise order yields a counterclockwise ring. Which vertex is the
//!   anchor is not part of the contract; only the cyclic order is.

mod iter;
mod ops;
mod types;

pub use iter::Iter;
pub use ops::Ring;
pub use types::{RingCfg, RingId, VertexId};
