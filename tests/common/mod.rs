//! Shared test utilities for shx-fonts integration tests.
//!
//! Binary SHX files are built in memory by the [`builders`] module, text
//! fixtures live here as constants.

#![allow(dead_code)]

pub mod builders;

use shx_fonts::{shp_loads, ShapeFile, Vector2};
use std::path::PathBuf;

/// A small unifont source with a font definition, two glyphs and a glyph
/// built from a sub-shape.
pub const DEMO_UNIFONT_SHP: &str = "\
; demo font
*UNIFONT,6,DEMO
10,2,0,0,0,0

*00041,4,kA
8,5,0,0
*00042,8,kB
2,8,(1,0),1,014,010,0

*00043,3,kC
7,041,0
";

/// A shape file without font definition, numbers are decimal
pub const DEMO_SHAPES_SHP: &str = "\
*1,5,BOX
014,010,01C,018,0
*2,3,SUB
7,1,0
";

pub fn demo_font() -> ShapeFile {
    shp_loads(DEMO_UNIFONT_SHP).expect("demo font must parse")
}

/// Resolve path into the `test_output/` directory, creating it if needed.
pub fn test_output_path(filename: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("test_output");
    std::fs::create_dir_all(&dir).expect("create test_output directory");
    dir.join(filename)
}

pub fn assert_point_close(actual: Vector2, expected: (f64, f64)) {
    assert!(
        actual.is_close(&Vector2::new(expected.0, expected.1)),
        "expected ({}, {}), got {}",
        expected.0,
        expected.1,
        actual
    );
}
