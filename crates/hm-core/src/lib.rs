//! Foundational primitives for the `histomorph` workspace.
//!
//! ## Coordinate Frame
//! All geometry lives in image pixel space. An external calibration converts
//! measured lengths and areas to physical units after the fact; nothing in
//! this workspace scales coordinates.
//!
//! ## Curves
//! [`Curve`] is an ordered polyline of [`Point2f`] vertices in two flavors:
//! - *closed*: a cross-section perimeter whose indices wrap modulo the vertex
//!   count, with the closing segment included in its length.
//! - *open*: a label line or interlabel segment with no wraparound.
//!
//! A curve always has at least two vertices; constructors reject anything
//! shorter with [`Error::DegenerateCurve`]. Vertex order and count are fixed
//! for the lifetime of one analysis.

mod curve;
mod error;
mod geom;

pub use curve::Curve;
pub use error::Error;
pub use geom::{Point2f, Vec2f};
