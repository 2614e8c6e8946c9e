//! Structural ring operations: create, append, remove, neighbour lookup.

use tracing::{debug, trace};

use super::types::{RingCfg, RingId, Slot, VertexId};
use crate::error::{HandleFault, RingError};
use crate::Point;

/// Counterclockwise ring of vertices stored in an index arena.
///
/// Invariants:
/// - `len` equals the number of live slots and the number of steps along
///   `next` from `anchor` back to `anchor`.
/// - `anchor` is `None` iff `len == 0`.
/// - For every live slot `s`: `slots[slots[s].next].prev == s` and
///   `slots[slots[s].prev].next == s`.
/// - `free` lists exactly the vacant slots, and its capacity never drops
///   below `slots.len()` so `remove` does not allocate.
#[derive(Debug)]
pub struct Ring<M = ()> {
    id: RingId,
    pub(crate) slots: Vec<Slot<M>>,
    free: Vec<usize>,
    pub(crate) anchor: Option<usize>,
    len: usize,
}

impl<M> Default for Ring<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> Ring<M> {
    /// Empty ring. Does not allocate.
    pub fn new() -> Self {
        Self {
            id: RingId::fresh(),
            slots: Vec::new(),
            free: Vec::new(),
            anchor: None,
            len: 0,
        }
    }

    /// Empty ring with `cfg.capacity` slots reserved.
    pub fn with_cfg(cfg: RingCfg) -> Result<Self, RingError> {
        let mut ring = Self::new();
        ring.slots.try_reserve_exact(cfg.capacity)?;
        ring.free.try_reserve_exact(cfg.capacity)?;
        debug!(ring = ?ring.id, capacity = cfg.capacity, "ring reserved");
        Ok(ring)
    }

    #[inline]
    pub fn id(&self) -> RingId {
        self.id
    }

    /// Number of live vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Some live vertex, or `None` for an empty ring. No ordering guarantee.
    pub fn any_vertex(&self) -> Option<VertexId> {
        self.anchor.map(|s| self.handle(s))
    }

    /// Insert `point` as the new counterclockwise-last vertex, i.e. right
    /// before the anchor. The first vertex becomes the anchor, linked to itself.
    ///
    /// On allocation failure the ring is unchanged.
    pub fn append(&mut self, point: Point, meta: M) -> Result<VertexId, RingError> {
        let slot = match self.free.last().copied() {
            Some(s) => s,
            None => {
                self.slots.try_reserve(1)?;
                self.free
                    .try_reserve((self.slots.len() + 1).saturating_sub(self.free.len()))?;
                self.slots.len()
            }
        };
        let (prev, next) = match self.anchor {
            Some(anchor) => (self.slots[anchor].prev, anchor),
            None => (slot, slot),
        };
        if slot == self.slots.len() {
            self.slots.push(Slot {
                generation: 0,
                next,
                prev,
                point,
                meta: Some(meta),
            });
        } else {
            self.free.pop();
            let s = &mut self.slots[slot];
            s.next = next;
            s.prev = prev;
            s.point = point;
            s.meta = Some(meta);
        }
        match self.anchor {
            Some(_) => {
                self.slots[prev].next = slot;
                self.slots[next].prev = slot;
            }
            None => self.anchor = Some(slot),
        }
        self.len += 1;
        trace!(ring = ?self.id, slot, x = point.x, y = point.y, len = self.len, "append");
        Ok(self.handle(slot))
    }

    /// Splice `v` out of the ring and hand back its point and metadata.
    ///
    /// The former neighbours become adjacent. If `v` was the anchor, its
    /// former successor takes over. `v` is invalid afterwards.
    pub fn remove(&mut self, v: VertexId) -> Result<(Point, M), RingError> {
        let s = self.resolve(v)?;
        let slot = &mut self.slots[s];
        let Some(meta) = slot.meta.take() else {
            return Err(fault(v, HandleFault::Removed));
        };
        let (prev, next) = (slot.prev, slot.next);
        let point = slot.point;
        slot.generation = slot.generation.wrapping_add(1);
        slot.next = s;
        slot.prev = s;
        self.len -= 1;
        if self.len == 0 {
            self.anchor = None;
        } else {
            self.slots[prev].next = next;
            self.slots[next].prev = prev;
            if self.anchor == Some(s) {
                self.anchor = Some(next);
            }
        }
        self.free.push(s);
        trace!(ring = ?self.id, slot = s, len = self.len, "remove");
        Ok((point, meta))
    }

    /// Remove every vertex. Outstanding handles become invalid; the arena
    /// keeps its capacity.
    pub fn clear(&mut self) {
        for (i, slot) in self.slots.iter_mut().enumerate() {
            if slot.meta.take().is_some() {
                slot.generation = slot.generation.wrapping_add(1);
                slot.next = i;
                slot.prev = i;
                self.free.push(i);
            }
        }
        self.anchor = None;
        self.len = 0;
        debug!(ring = ?self.id, "ring cleared");
    }

    #[inline]
    pub fn contains(&self, v: VertexId) -> bool {
        self.resolve(v).is_ok()
    }

    pub fn point(&self, v: VertexId) -> Result<Point, RingError> {
        let s = self.resolve(v)?;
        Ok(self.slots[s].point)
    }

    pub fn meta(&self, v: VertexId) -> Result<&M, RingError> {
        let s = self.resolve(v)?;
        self.slots[s]
            .meta
            .as_ref()
            .ok_or(fault(v, HandleFault::Removed))
    }

    pub fn meta_mut(&mut self, v: VertexId) -> Result<&mut M, RingError> {
        let s = self.resolve(v)?;
        self.slots[s]
            .meta
            .as_mut()
            .ok_or(fault(v, HandleFault::Removed))
    }

    /// Replace the metadata of `v`, returning the previous value. Links are untouched.
    pub fn update_meta(&mut self, v: VertexId, meta: M) -> Result<M, RingError> {
        let slot = self.meta_mut(v)?;
        Ok(std::mem::replace(slot, meta))
    }

    /// `(a, b)` such that the counterclockwise order is `a, v, b`.
    pub fn adjacent(&self, v: VertexId) -> Result<(VertexId, VertexId), RingError> {
        let s = self.resolve(v)?;
        let slot = &self.slots[s];
        Ok((self.handle(slot.prev), self.handle(slot.next)))
    }

    /// Counterclockwise successor.
    pub fn next(&self, v: VertexId) -> Result<VertexId, RingError> {
        let s = self.resolve(v)?;
        Ok(self.handle(self.slots[s].next))
    }

    /// Counterclockwise predecessor.
    pub fn prev(&self, v: VertexId) -> Result<VertexId, RingError> {
        let s = self.resolve(v)?;
        Ok(self.handle(self.slots[s].prev))
    }

    /// Walk the whole arena and check every structural invariant.
    pub fn validate(&self) -> Result<(), RingError> {
        let live = self.slots.iter().filter(|s| s.is_live()).count();
        if live != self.len {
            return Err(RingError::Inconsistent(format!(
                "{live} live slots but len is {}",
                self.len
            )));
        }
        let Some(anchor) = self.anchor else {
            return match self.len {
                0 => Ok(()),
                n => Err(RingError::Inconsistent(format!("len {n} without anchor"))),
            };
        };
        let mut cur = anchor;
        for step in 0..self.len {
            let slot = &self.slots[cur];
            if !slot.is_live() {
                return Err(RingError::Inconsistent(format!(
                    "vacant slot {cur} reached after {step} steps"
                )));
            }
            if self.slots[slot.next].prev != cur || self.slots[slot.prev].next != cur {
                return Err(RingError::Inconsistent(format!(
                    "links around slot {cur} are not mutual inverses"
                )));
            }
            cur = slot.next;
            if cur == anchor && step + 1 < self.len {
                return Err(RingError::Inconsistent(format!(
                    "cycle closes after {} of {} vertices",
                    step + 1,
                    self.len
                )));
            }
        }
        if cur != anchor {
            return Err(RingError::Inconsistent(format!(
                "cycle does not close after {} steps",
                self.len
            )));
        }
        Ok(())
    }

    /// Slot index of a live handle issued by this ring.
    pub(crate) fn resolve(&self, v: VertexId) -> Result<usize, RingError> {
        if v.ring != self.id {
            return Err(fault(v, HandleFault::ForeignRing));
        }
        let slot = self
            .slots
            .get(v.slot)
            .ok_or(fault(v, HandleFault::OutOfRange))?;
        if slot.generation != v.generation || !slot.is_live() {
            return Err(fault(v, HandleFault::Removed));
        }
        Ok(v.slot)
    }

    #[inline]
    pub(crate) fn handle(&self, slot: usize) -> VertexId {
        VertexId {
            ring: self.id,
            slot,
            generation: self.slots[slot].generation,
        }
    }
}

impl<M: Default> Ring<M> {
    /// Append with default metadata.
    pub fn push(&mut self, point: Point) -> Result<VertexId, RingError> {
        self.append(point, M::default())
    }

    /// Build a ring from points given in counterclockwise order.
    pub fn from_points<I>(points: I) -> Result<Self, RingError>
    where
        I: IntoIterator<Item = Point>,
    {
        let points = points.into_iter();
        let mut ring = Self::with_cfg(RingCfg {
            capacity: points.size_hint().0,
        })?;
        for p in points {
            ring.push(p)?;
        }
        Ok(ring)
    }
}

#[inline]
fn fault(vertex: VertexId, reason: HandleFault) -> RingError {
    RingError::InvalidVertexHandle { vertex, reason }
}
