//! Error types for the shape font library

use std::io;
use thiserror::Error;

/// Main error type for shape file parsing and rendering
#[derive(Debug, Error)]
pub enum ShapeFileError {
    /// IO error occurred during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Unknown signature, BIGFONT file or unknown file extension
    #[error("Unsupported shape file: {0}")]
    UnsupportedShapeFile(String),

    /// Malformed font definition header in a SHP file
    #[error("Invalid font definition: {0}")]
    InvalidFontDefinition(String),

    /// Wrong arity or invalid values in a font definition
    #[error("Invalid font parameters: {0}")]
    InvalidFontParameters(String),

    /// A SHP record with fewer than two lines
    #[error("Invalid shape record: {0}")]
    InvalidShapeRecord(String),

    /// Violated structural invariant of the file format
    #[error("File structure error: {0}")]
    FileStructure(String),

    /// Code 6 (pop location) executed with an empty location stack
    #[error("stack underflow while rendering shape number {shape_number}")]
    StackUnderflow { shape_number: i32 },

    /// An opcode whose operands run past the end of the program
    #[error("shape number {shape_number}: operands of code {code} exceed the program")]
    TruncatedProgram { shape_number: i32, code: i32 },

    /// Code 3 with a divisor of 0
    #[error("shape number {shape_number}: vector length divided by zero")]
    InvalidScaleFactor { shape_number: i32 },

    /// Sub-shape nesting exceeded the configured depth
    #[error("sub-shape recursion limit of {depth} exceeded at shape number {shape_number}")]
    RecursionLimit { shape_number: i32, depth: usize },
}

/// Result type alias for shape file operations
pub type Result<T> = std::result::Result<T, ShapeFileError>;

impl ShapeFileError {
    /// Replace the shape number of a [`ShapeFileError::StackUnderflow`] error,
    /// other errors pass through unchanged.
    pub(crate) fn with_shape_number(self, number: i32) -> Self {
        match self {
            ShapeFileError::StackUnderflow { .. } => ShapeFileError::StackUnderflow {
                shape_number: number,
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShapeFileError::UnsupportedShapeFile("unknown filetype".to_string());
        assert_eq!(err.to_string(), "Unsupported shape file: unknown filetype");
    }

    #[test]
    fn test_stack_underflow_display() {
        let err = ShapeFileError::StackUnderflow { shape_number: 65 };
        assert_eq!(
            err.to_string(),
            "stack underflow while rendering shape number 65"
        );
    }

    #[test]
    fn test_with_shape_number() {
        let err = ShapeFileError::StackUnderflow { shape_number: 3 }.with_shape_number(65);
        assert!(matches!(err, ShapeFileError::StackUnderflow { shape_number: 65 }));

        let err = ShapeFileError::FileStructure("x".into()).with_shape_number(65);
        assert!(matches!(err, ShapeFileError::FileStructure(_)));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: ShapeFileError = io_err.into();
        assert!(matches!(err, ShapeFileError::Io(_)));
    }
}
