//! Exact orientation and segment predicates on integer points.
//!
//! All arithmetic is widened to `i128`, so any `i32` input is exact and
//! collinear cases are decided without tolerances.

use crate::Point;

/// Side of the directed line `a → b` on which a third point lies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Orientation {
    Left,
    Right,
    Collinear,
}

impl Orientation {
    /// Classify a signed doubled area.
    #[inline]
    pub fn of(area2: i128) -> Self {
        match area2.signum() {
            1 => Orientation::Left,
            -1 => Orientation::Right,
            _ => Orientation::Collinear,
        }
    }

    /// Orientation seen with the line direction flipped.
    #[inline]
    pub fn reverse(self) -> Self {
        match self {
            Orientation::Left => Orientation::Right,
            Orientation::Right => Orientation::Left,
            Orientation::Collinear => Orientation::Collinear,
        }
    }
}

/// Twice the signed area of triangle `abc`: `(b - a) × (c - a)`.
#[inline]
pub fn area2(a: Point, b: Point, c: Point) -> i128 {
    let (ax, ay) = (a.x as i128, a.y as i128);
    let (bx, by) = (b.x as i128, b.y as i128);
    let (cx, cy) = (c.x as i128, c.y as i128);
    (bx - ax) * (cy - ay) - (cx - ax) * (by - ay)
}

#[inline]
pub fn orientation(a: Point, b: Point, c: Point) -> Orientation {
    Orientation::of(area2(a, b, c))
}

/// `c` strictly left of `a → b`.
#[inline]
pub fn left(a: Point, b: Point, c: Point) -> bool {
    area2(a, b, c) > 0
}

#[inline]
pub fn left_on(a: Point, b: Point, c: Point) -> bool {
    area2(a, b, c) >= 0
}

#[inline]
pub fn collinear(a: Point, b: Point, c: Point) -> bool {
    area2(a, b, c) == 0
}

/// `c` lies on the closed segment `[a, b]`.
///
/// Range test on x unless the segment is vertical, then on y.
pub fn between(a: Point, b: Point, c: Point) -> bool {
    if !collinear(a, b, c) {
        return false;
    }
    if a.x != b.x {
        (a.x <= c.x && c.x <= b.x) || (a.x >= c.x && c.x >= b.x)
    } else {
        (a.y <= c.y && c.y <= b.y) || (a.y >= c.y && c.y >= b.y)
    }
}

/// Open segments `p1p2` and `p3p4` cross at a single point interior to both.
///
/// Shared endpoints and collinear overlap are not proper intersections.
pub fn intersect_proper(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    let o1 = orientation(p1, p2, p3);
    let o2 = orientation(p1, p2, p4);
    let o3 = orientation(p3, p4, p1);
    let o4 = orientation(p3, p4, p2);
    if [o1, o2, o3, o4].contains(&Orientation::Collinear) {
        return false;
    }
    o1 != o2 && o3 != o4
}

/// Closed segments `p1p2` and `p3p4` share at least one point.
pub fn intersect(p1: Point, p2: Point, p3: Point, p4: Point) -> bool {
    intersect_proper(p1, p2, p3, p4)
        || between(p1, p2, p3)
        || between(p1, p2, p4)
        || between(p3, p4, p1)
        || between(p3, p4, p2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::point;
    use proptest::prelude::*;

    #[test]
    fn orientation_unit_triangle() {
        let (a, b, c) = (point![0, 0], point![1, 0], point![0, 1]);
        assert_eq!(orientation(a, b, c), Orientation::Left);
        assert_eq!(orientation(a, c, b), Orientation::Right);
        assert_eq!(orientation(a, b, point![5, 0]), Orientation::Collinear);
        assert_eq!(area2(a, b, c), 1);
    }

    #[test]
    fn extreme_coordinates_do_not_overflow() {
        let a = point![i32::MIN, i32::MIN];
        let b = point![i32::MAX, i32::MIN];
        let c = point![i32::MIN, i32::MAX];
        let side = (i32::MAX as i128) - (i32::MIN as i128);
        assert_eq!(area2(a, b, c), side * side);
        assert!(left(a, b, c));
        assert!(collinear(a, b, point![0, i32::MIN]));
    }

    #[test]
    fn between_covers_endpoints_and_vertical_segments() {
        let (a, b) = (point![0, 0], point![4, 2]);
        assert!(between(a, b, a));
        assert!(between(a, b, b));
        assert!(between(a, b, point![2, 1]));
        assert!(!between(a, b, point![6, 3]));
        assert!(!between(a, b, point![2, 2]));
        let (v0, v1) = (point![3, 5], point![3, -1]);
        assert!(between(v0, v1, point![3, 0]));
        assert!(!between(v0, v1, point![3, 6]));
        // degenerate segment
        assert!(between(a, a, a));
        assert!(!between(a, a, b));
    }

    #[test]
    fn proper_intersection_excludes_touching_and_overlap() {
        let o = point![0, 0];
        // plain crossing
        assert!(intersect_proper(o, point![4, 4], point![0, 4], point![4, 0]));
        // shared endpoint
        assert!(!intersect_proper(o, point![4, 4], o, point![4, 0]));
        assert!(intersect(o, point![4, 4], o, point![4, 0]));
        // T-junction: endpoint of one segment on the interior of the other
        assert!(!intersect_proper(o, point![4, 0], point![2, 0], point![2, 3]));
        assert!(intersect(o, point![4, 0], point![2, 0], point![2, 3]));
        // collinear overlap
        assert!(!intersect_proper(o, point![4, 0], point![2, 0], point![6, 0]));
        assert!(intersect(o, point![4, 0], point![2, 0], point![6, 0]));
        // collinear, disjoint
        assert!(!intersect(o, point![1, 0], point![2, 0], point![3, 0]));
        // parallel
        assert!(!intersect(o, point![4, 0], point![0, 1], point![4, 1]));
    }

    #[test]
    fn zero_length_segments_resolve_without_panicking() {
        let p = point![2, 2];
        assert!(!intersect_proper(p, p, point![0, 0], point![4, 4]));
        assert!(intersect(p, p, point![0, 0], point![4, 4]));
        assert!(!intersect(p, p, point![0, 1], point![4, 5]));
    }

    fn coord() -> impl Strategy<Value = i32> {
        -1_000_000i32..=1_000_000
    }

    proptest! {
        #[test]
        fn orientation_is_antisymmetric(
            ax in coord(), ay in coord(), bx in coord(), by in coord(), cx in coord(), cy in coord()
        ) {
            let (a, b, c) = (point![ax, ay], point![bx, by], point![cx, cy]);
            prop_assert_eq!(orientation(a, b, c), orientation(a, c, b).reverse());
            prop_assert_eq!(orientation(a, b, c), orientation(b, c, a));
        }

        #[test]
        fn proper_intersection_is_symmetric(
            p in prop::array::uniform8(-20i32..=20)
        ) {
            let (p1, p2, p3, p4) = (point![p[0], p[1]], point![p[2], p[3]], point![p[4], p[5]], point![p[6], p[7]]);
            prop_assert_eq!(intersect_proper(p1, p2, p3, p4), intersect_proper(p3, p4, p1, p2));
            prop_assert_eq!(intersect_proper(p1, p2, p3, p4), intersect_proper(p2, p1, p3, p4));
            prop_assert_eq!(intersect(p1, p2, p3, p4), intersect(p4, p3, p2, p1));
            if intersect_proper(p1, p2, p3, p4) {
                prop_assert!(intersect(p1, p2, p3, p4));
            }
        }
    }
}
