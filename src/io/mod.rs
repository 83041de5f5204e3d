//! Reading shape files from disk or memory
//!
//! - [`shx`]: compiled binary shape files and fonts
//! - [`shp`]: shape definition text files

pub mod shp;
pub mod shx;

pub use shp::{shp_dumps, shp_loads};
pub use shx::{shx_loadb, shx_loadb_with};

use crate::error::{Result, ShapeFileError};
use crate::font::ShapeFile;
use encoding_rs::Encoding;
use std::fs;
use std::path::Path;

/// Configuration for the shape file readers.
#[derive(Debug, Clone)]
pub struct ShapeReaderConfiguration {
    /// Encoding of font and shape names in SHX files.
    ///
    /// Default: Windows-1252.
    pub encoding: &'static Encoding,
}

impl Default for ShapeReaderConfiguration {
    fn default() -> Self {
        Self {
            encoding: encoding_rs::WINDOWS_1252,
        }
    }
}

impl ShapeReaderConfiguration {
    /// Set the name encoding
    pub fn with_encoding(mut self, encoding: &'static Encoding) -> Self {
        self.encoding = encoding;
        self
    }
}

/// Load a `.shp` or `.shx` file, detected by the file name extension.
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<ShapeFile> {
    read_file_with(path, &ShapeReaderConfiguration::default())
}

/// Load a `.shp` or `.shx` file with an explicit configuration.
pub fn read_file_with<P: AsRef<Path>>(
    path: P,
    config: &ShapeReaderConfiguration,
) -> Result<ShapeFile> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("shp") => {
            // non UTF-8 bytes only occur in comments and names
            let data = fs::read(path)?;
            shp_loads(&String::from_utf8_lossy(&data))
        }
        Some("shx") => {
            let data = fs::read(path)?;
            shx_loadb_with(&data, config)
        }
        _ => Err(ShapeFileError::UnsupportedShapeFile(
            "unknown filetype".to_string(),
        )),
    }
}
