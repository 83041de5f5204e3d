//! Font-level properties stored in the font definition record

use crate::error::ShapeFileError;

/// `TryFrom<i32>` via `from_code`, unknown values are invalid font parameters
macro_rules! impl_try_from_code {
    ($type:ty, $parameter:literal) => {
        impl TryFrom<i32> for $type {
            type Error = ShapeFileError;

            fn try_from(code: i32) -> Result<Self, Self::Error> {
                Self::from_code(code).ok_or_else(|| {
                    ShapeFileError::InvalidFontParameters(format!(
                        concat!("invalid font ", $parameter, " {}"),
                        code
                    ))
                })
            }
        }
    };
}

impl_try_from_code!(FontMode, "mode");
impl_try_from_code!(FontEncoding, "encoding");
impl_try_from_code!(FontEmbedding, "embedding");

/// Text orientation supported by a font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontMode {
    /// Horizontal text only
    #[default]
    Horizontal = 0,
    /// Horizontal and vertical (stacked) text
    Bidirectional = 2,
}

impl FontMode {
    /// Create from the stored mode value
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(FontMode::Horizontal),
            2 => Some(FontMode::Bidirectional),
            _ => None,
        }
    }

    pub fn to_code(self) -> i32 {
        self as i32
    }
}

/// Interpretation of the shape numbers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontEncoding {
    /// Shape numbers are unicode code points
    #[default]
    Unicode = 0,
    /// Packed multibyte encoding
    PackedMultibyte = 1,
    /// Plain shape file, the numbers carry no character semantics
    ShapeFileOnly = 2,
}

impl FontEncoding {
    /// Create from the stored encoding value
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(FontEncoding::Unicode),
            1 => Some(FontEncoding::PackedMultibyte),
            2 => Some(FontEncoding::ShapeFileOnly),
            _ => None,
        }
    }

    pub fn to_code(self) -> i32 {
        self as i32
    }
}

/// Embedding policy of a font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontEmbedding {
    /// Font may be embedded
    #[default]
    Allowed = 0,
    /// Font may not be embedded
    Disallowed = 1,
    /// Embedding allowed for read-only use
    ReadOnly = 2,
}

impl FontEmbedding {
    /// Create from the stored embedding value
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(FontEmbedding::Allowed),
            1 => Some(FontEmbedding::Disallowed),
            2 => Some(FontEmbedding::ReadOnly),
            _ => None,
        }
    }

    pub fn to_code(self) -> i32 {
        self as i32
    }
}
