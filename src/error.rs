use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for evc operations
#[derive(Error, Diagnostic, Debug)]
pub enum EvcError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(evc::io))]
    Io { path: PathBuf, message: String },

    #[error("Failed to load image {path}: {message}")]
    #[diagnostic(
        code(evc::image_load),
        help("Check that the file exists and is a PNG, JPEG, BMP, GIF or other supported format")
    )]
    ImageLoad { path: PathBuf, message: String },

    #[error("Image dimensions differ: {}x{} vs {}x{}", .first.0, .first.1, .second.0, .second.1)]
    #[diagnostic(
        code(evc::dimension_mismatch),
        help("Both images must share the same width and height")
    )]
    DimensionMismatch {
        first: (u32, u32),
        second: (u32, u32),
    },

    #[error(
        "Secret and cover halftones differ in size: {}x{} vs {}x{}",
        .secret.0, .secret.1, .cover.0, .cover.1
    )]
    #[diagnostic(code(evc::size_mismatch))]
    SizeMismatch {
        secret: (u32, u32),
        cover: (u32, u32),
    },

    #[error("Invalid image: {message}")]
    #[diagnostic(code(evc::image))]
    InvalidImage {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(evc::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, EvcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimension_mismatch_message() {
        let err = EvcError::DimensionMismatch {
            first: (4, 4),
            second: (4, 5),
        };
        assert_eq!(err.to_string(), "Image dimensions differ: 4x4 vs 4x5");
    }

    #[test]
    fn test_size_mismatch_message() {
        let err = EvcError::SizeMismatch {
            secret: (4, 4),
            cover: (5, 4),
        };
        assert_eq!(
            err.to_string(),
            "Secret and cover halftones differ in size: 4x4 vs 5x4"
        );
    }
}
