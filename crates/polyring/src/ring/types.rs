//! Handle, configuration and slot types for the vertex arena.
//!
//! Kept small and explicit so `ops` and `iter` read as plain index juggling.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::Point;

/// Tag identifying one ring instance; every handle carries the tag of its ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RingId(u64);

impl RingId {
    pub(crate) fn fresh() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(0);
        RingId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Checked handle to a live vertex of a [`crate::Ring`].
///
/// A handle stays valid until its vertex is removed. After that every
/// operation rejects it, even once the slot has been reused by a later append.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct VertexId {
    pub(crate) ring: RingId,
    pub(crate) slot: usize,
    pub(crate) generation: u32,
}

impl VertexId {
    /// Ring this handle was issued by.
    #[inline]
    pub fn ring(&self) -> RingId {
        self.ring
    }

    /// Arena slot index; stable for the lifetime of the vertex.
    #[inline]
    pub fn slot(&self) -> usize {
        self.slot
    }
}

/// Ring construction configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct RingCfg {
    /// Vertex slots reserved up front.
    pub capacity: usize,
}

/// One arena slot. Live iff `meta` is `Some`.
///
/// Links are kept outside the payload so neighbour walks never have to
/// unwrap; a vacant slot links to itself.
#[derive(Clone, Debug)]
pub(crate) struct Slot<M> {
    pub(crate) generation: u32,
    pub(crate) next: usize,
    pub(crate) prev: usize,
    pub(crate) point: Point,
    pub(crate) meta: Option<M>,
}

impl<M> Slot<M> {
    #[inline]
    pub(crate) fn is_live(&self) -> bool {
        self.meta.is_some()
    }
}
