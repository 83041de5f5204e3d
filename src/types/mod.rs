//! Geometric value types shared by the path builder and the renderer

pub mod bounds;
pub mod vector;

pub use bounds::BoundingBox2D;
pub use vector::{is_close, Vector2};
