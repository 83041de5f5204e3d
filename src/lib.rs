//! # shx-fonts
//!
//! A pure Rust library for reading AutoCAD shape files and shape fonts
//! (SHX binary and SHP text format) and rendering their glyphs as vector
//! paths.
//!
//! ## Features
//!
//! - Read compiled SHX files (`shapes 1.0`, `shapes 1.1`, `unifont 1.0`)
//! - Read and write SHP source files
//! - Render shapes and text into paths of lines and circular arcs
//!
//! BIGFONT files are not supported.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use shx_fonts::read_file;
//!
//! let font = read_file("txt.shx")?;
//! let path = font.render_text("Hello", false)?;
//! for polyline in path.flattening(0.01) {
//!     println!("{} vertices", polyline.len());
//! }
//! # Ok::<(), shx_fonts::ShapeFileError>(())
//! ```
//!
//! ## Architecture
//!
//! - `io` - SHX and SHP parsers, SHP writer
//! - `font` - `ShapeFile` symbol table and the `CodeSource` lookup trait
//! - `render` - interpreter of the shape bytecode
//! - `geometry` - output `Path` and arc construction

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod font;
pub mod geometry;
pub mod io;
pub mod notification;
pub mod render;
pub mod types;

// Re-export commonly used types
pub use error::{Result, ShapeFileError};
pub use types::{BoundingBox2D, Vector2};

// Re-export font types
pub use font::{CodeSource, FontEmbedding, FontEncoding, FontMode, ShapeFile, Symbol};

// Re-export geometry types
pub use geometry::{ConstructionArc, Path, PathSegment};

// Re-export I/O functions
pub use io::{read_file, shp_dumps, shp_loads, shx_loadb, ShapeReaderConfiguration};

// Re-export rendering
pub use render::{render_shapes, render_shapes_with, RenderConfiguration, ShapeRenderer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_load_and_render() {
        let font = shp_loads("*UNIFONT,6,demo\n10,2,0,0,0,0\n*00041,4,kA\n8,5,0,0\n").unwrap();
        assert!(font.is_font());
        let path = font.render_text("AA", false).unwrap();
        assert_eq!(path.end(), Vector2::new(10.0, 0.0));
    }
}
