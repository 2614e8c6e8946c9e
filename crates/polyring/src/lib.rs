//! Simple polygons as counterclockwise vertex rings, with exact predicates.
//!
//! The crate holds the data structure behind ear-clipping triangulation:
//! - `ring`: arena-backed circular doubly-linked list of vertices with
//!   checked handles and typed per-vertex metadata.
//! - `predicates`: exact integer orientation and segment tests.
//! - `polygon`: convexity, in-cone, diagonal and ear tests on a ring.
//! - `sample`: reproducible random simple polygons.
//!
//! Input rings are assumed simple and counterclockwise; the crate never
//! checks that. Holes and multiple contours are not supported.
//!
//! ```
//! use polyring::{Point, Ring};
//!
//! let mut ring: Ring = Ring::new();
//! let ids: Vec<_> = [(0, 0), (4, 0), (4, 4), (2, 1), (0, 4)]
//!     .into_iter()
//!     .map(|(x, y)| ring.push(Point::new(x, y)).unwrap())
//!     .collect();
//! assert!(!ring.is_convex(ids[3]).unwrap());
//! assert!(ring.is_diagonal(ids[0], ids[3]).unwrap());
//! assert!(!ring.is_diagonal(ids[0], ids[2]).unwrap());
//! ```

pub mod error;
pub mod polygon;
pub mod predicates;
pub mod ring;
pub mod sample;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Integer grid point.
pub type Point = nalgebra::Point2<i32>;

pub use error::{HandleFault, RingError};
pub use polygon::VertexKind;
pub use predicates::Orientation;
pub use ring::{Ring, RingCfg, RingId, VertexId};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::predicates::{
        area2, between, collinear, intersect, intersect_proper, left, left_on, orientation,
        Orientation,
    };
    pub use crate::sample::{draw_star_polygon, draw_star_ring, ReplayToken, StarCfg};
    pub use crate::{Point, Ring, RingCfg, RingError, VertexId, VertexKind};
}
