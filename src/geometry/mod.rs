//! Geometry helpers consumed by the shape renderer: a circular arc
//! construction helper, bulge conversion and an append-only path.

pub mod arc;
pub mod path;

pub use arc::{bulge_to_arc, signed_bulge_radius, ConstructionArc};
pub use path::{Path, PathSegment};
