//! Graham scans over planar points that are already in hull order.
//!
//! [`open_scan`] turns an ordered sequence into a convex polyline and
//! [`closed_scan`] into a convex polygon, repairing the seam between its last
//! and first points. Both consult an [`Orientation2D`] test and nothing else,
//! so the point type and its arithmetic are up to the caller. [`Lattice`] and
//! [`Rational`] are exact tests for integer and rational coordinates.
//!
//! ```
//! use hullscan::{closed_scan, Lattice};
//!
//! let polygon = closed_scan([[0, 0], [1, 0], [1, 5], [-5, -1]], &Lattice);
//! assert_eq!(polygon, [[1, 0], [1, 5], [-5, -1]]);
//! ```

pub mod orientation;
pub mod predicate;
pub mod scan;

pub use orientation::{from_fn, Lattice, Orientation, Orientation2D, Rational};
pub use predicate::{HullPredicate, TurnFilter};
pub use scan::{
    closed_scan, closed_scan_into, closed_scan_with, is_convex_chain, is_convex_polygon,
    open_scan, open_scan_into, open_scan_with,
};
