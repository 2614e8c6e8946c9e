//! Counterclockwise walks over a ring.

use std::iter::FusedIterator;

use super::ops::Ring;
use super::types::VertexId;
use crate::error::RingError;
use crate::Point;

/// Yields `(vertex, point)` once per live vertex, following `next`.
#[derive(Clone, Debug)]
pub struct Iter<'a, M> {
    ring: &'a Ring<M>,
    cur: usize,
    remaining: usize,
}

impl<'a, M> Iterator for Iter<'a, M> {
    type Item = (VertexId, Point);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let slot = &self.ring.slots[self.cur];
        let item = (self.ring.handle(self.cur), slot.point);
        self.cur = slot.next;
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<M> ExactSizeIterator for Iter<'_, M> {}
impl<M> FusedIterator for Iter<'_, M> {}

impl<M> Ring<M> {
    /// Walk starting at the anchor.
    pub fn iter(&self) -> Iter<'_, M> {
        Iter {
            ring: self,
            cur: self.anchor.unwrap_or(0),
            remaining: self.len(),
        }
    }

    /// Walk starting at `v`.
    pub fn iter_from(&self, v: VertexId) -> Result<Iter<'_, M>, RingError> {
        let cur = self.resolve(v)?;
        Ok(Iter {
            ring: self,
            cur,
            remaining: self.len(),
        })
    }

    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.iter().map(|(v, _)| v)
    }

    /// Points in counterclockwise order from the anchor.
    pub fn points(&self) -> Vec<Point> {
        self.iter().map(|(_, p)| p).collect()
    }
}

impl<'a, M> IntoIterator for &'a Ring<M> {
    type Item = (VertexId, Point);
    type IntoIter = Iter<'a, M>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
