//! Shape predicates over a ring: convexity, cones, diagonals, ears.
//!
//! Purpose
//! - Answer the questions an ear-clipping driver asks of a counterclockwise
//!   simple polygon without mutating it.
//!
//! Conventions
//! - The ring is assumed simple and counterclockwise; nothing here checks it.
//! - Collinear triples take the `Collinear` branch of every case split, so
//!   degenerate input gives a deterministic answer instead of an error.
//! - Handles are checked; the only error is `RingError::InvalidVertexHandle`.
//!
//! References
//! - O'Rourke, *Computational Geometry in C* (2nd ed), ch. 1 (`InCone`,
//!   `Diagonalie`, `Diagonal`).

use crate::error::RingError;
use crate::predicates::{area2, intersect_proper, left_on, orientation, Orientation};
use crate::ring::{Ring, VertexId};
use crate::Point;

/// Turn direction at a vertex, walking `prev → v → next`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexKind {
    Convex,
    Reflex,
    Collinear,
}

impl From<Orientation> for VertexKind {
    fn from(o: Orientation) -> Self {
        match o {
            Orientation::Left => VertexKind::Convex,
            Orientation::Right => VertexKind::Reflex,
            Orientation::Collinear => VertexKind::Collinear,
        }
    }
}

impl<M> Ring<M> {
    /// Points of `prev(v)`, `v`, `next(v)`.
    fn corner(&self, v: VertexId) -> Result<(Point, Point, Point), RingError> {
        let s = self.resolve(v)?;
        let slot = &self.slots[s];
        Ok((
            self.slots[slot.prev].point,
            slot.point,
            self.slots[slot.next].point,
        ))
    }

    pub fn classify(&self, v: VertexId) -> Result<VertexKind, RingError> {
        let (a, p, b) = self.corner(v)?;
        Ok(orientation(a, p, b).into())
    }

    /// Strict left turn at `v`. Reflex and collinear vertices are not convex.
    pub fn is_convex(&self, v: VertexId) -> Result<bool, RingError> {
        Ok(self.classify(v)? == VertexKind::Convex)
    }

    /// `b` lies inside the cone of interior directions at `a`.
    ///
    /// For a convex (or straight) corner `b` must be left-on of both incident
    /// edges; for a reflex corner it must not be right-on of both.
    pub fn in_cone(&self, a: VertexId, b: VertexId) -> Result<bool, RingError> {
        let (a0, pa, a1) = self.corner(a)?;
        let pb = self.point(b)?;
        if left_on(pa, a1, a0) {
            return Ok(left_on(pa, pb, a0) && left_on(pb, pa, a1));
        }
        Ok(!(left_on(pa, pb, a1) && left_on(pb, pa, a0)))
    }

    /// Segment `a–b` properly crosses no edge that avoids both `a` and `b`.
    ///
    /// Edges incident to `a` or `b` are skipped by identity, not by position.
    /// Touching a vertex or running along an edge is not a crossing.
    pub fn diagonalie(&self, a: VertexId, b: VertexId) -> Result<bool, RingError> {
        let sa = self.resolve(a)?;
        let sb = self.resolve(b)?;
        let (pa, pb) = (self.slots[sa].point, self.slots[sb].point);
        for (c, pc) in self.iter() {
            let c1 = self.slots[c.slot].next;
            if [c.slot, c1].iter().any(|&s| s == sa || s == sb) {
                continue;
            }
            if intersect_proper(pa, pb, pc, self.slots[c1].point) {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// `u–w` is an internal diagonal: visible from both ends and crossing no edge.
    pub fn is_diagonal(&self, u: VertexId, w: VertexId) -> Result<bool, RingError> {
        Ok(self.in_cone(u, w)? && self.in_cone(w, u)? && self.diagonalie(u, w)?)
    }

    /// `v` can be clipped: its neighbours form a diagonal.
    pub fn is_ear(&self, v: VertexId) -> Result<bool, RingError> {
        let (a, b) = self.adjacent(v)?;
        self.is_diagonal(a, b)
    }

    /// Twice the signed enclosed area; positive for counterclockwise rings.
    pub fn area2(&self) -> i128 {
        let Some(first) = self.iter().next().map(|(_, p)| p) else {
            return 0;
        };
        self.iter()
            .map(|(v, p)| (p, self.slots[self.slots[v.slot].next].point))
            .map(|(p, q)| area2(first, p, q))
            .sum()
    }
}
