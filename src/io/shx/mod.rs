//! Binary SHX shape files
//!
//! The file type is detected from the header text at the start of the
//! file. BIGFONT files are recognized but not supported.

mod byte_cursor;
mod legacy;
mod shape_codes;
mod unifont;

pub use byte_cursor::ByteCursor;
pub use shape_codes::{parse_shape_codes, SubShapeWidth};

use crate::error::{Result, ShapeFileError};
use crate::font::ShapeFile;
use crate::io::ShapeReaderConfiguration;

pub const SHAPES_1_0_SIGNATURE: &[u8] = b"AutoCAD-86 shapes 1.0";
pub const SHAPES_1_1_SIGNATURE: &[u8] = b"AutoCAD-86 shapes 1.1";
pub const UNIFONT_1_0_SIGNATURE: &[u8] = b"AutoCAD-86 unifont 1.0";
pub const BIGFONT_1_0_SIGNATURE: &[u8] = b"AutoCAD-86 bigfont 1.0";

/// Byte following the header text of all supported formats
pub(crate) const SIGNATURE_BYTE: u8 = 0x1A;

/// Supported SHX variants
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShxFormat {
    Shapes10,
    Shapes11,
    Unifont10,
}

impl ShxFormat {
    /// Detect the format from the start of `data`
    pub fn detect(data: &[u8]) -> Result<Self> {
        if data.starts_with(SHAPES_1_0_SIGNATURE) {
            Ok(ShxFormat::Shapes10)
        } else if data.starts_with(SHAPES_1_1_SIGNATURE) {
            Ok(ShxFormat::Shapes11)
        } else if data.starts_with(UNIFONT_1_0_SIGNATURE) {
            Ok(ShxFormat::Unifont10)
        } else if data.starts_with(BIGFONT_1_0_SIGNATURE) {
            Err(ShapeFileError::UnsupportedShapeFile(
                "BIGFONT shapes are not supported yet".to_string(),
            ))
        } else {
            Err(ShapeFileError::UnsupportedShapeFile(
                "unknown shape file format".to_string(),
            ))
        }
    }
}

/// Load a SHX file from memory with the default configuration
pub fn shx_loadb(data: &[u8]) -> Result<ShapeFile> {
    shx_loadb_with(data, &ShapeReaderConfiguration::default())
}

/// Load a SHX file from memory
pub fn shx_loadb_with(data: &[u8], config: &ShapeReaderConfiguration) -> Result<ShapeFile> {
    match ShxFormat::detect(data)? {
        // 1.1 has the same layout as 1.0
        ShxFormat::Shapes10 | ShxFormat::Shapes11 => legacy::load_shape_file(data, config),
        ShxFormat::Unifont10 => unifont::load_unifont_file(data, config),
    }
}

/// Map cursor failures to [`ShapeFileError::FileStructure`] with context.
pub(crate) fn structure_error(context: impl Into<String>) -> impl Fn(ShapeFileError) -> ShapeFileError {
    let context = context.into();
    move |err| match err {
        ShapeFileError::FileStructure(_) => err,
        other => ShapeFileError::FileStructure(format!("{}: {}", context, other)),
    }
}
