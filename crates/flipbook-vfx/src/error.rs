//! Error types for flipbook generation.

use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::frame::Size;
use crate::palette::Rgba;
use crate::png::PngError;

/// Result type for flipbook operations.
pub type FlipbookResult<T> = Result<T, FlipbookError>;

/// Errors that can occur while drawing, assembling, or writing flipbooks.
#[derive(Debug, Error)]
pub enum FlipbookError {
    /// Canvas dimensions are unusable.
    #[error("Invalid canvas size {width}x{height}: {reason}")]
    InvalidSize {
        width: u32,
        height: u32,
        reason: &'static str,
    },

    /// An effect must have at least one frame.
    #[error("Invalid frame count {0}: must be at least 1")]
    InvalidFrameCount(u32),

    /// Drawer invoked past the end of the sequence.
    #[error("Frame index {index} is out of range for a {count}-frame effect")]
    FrameIndexOutOfRange { index: u32, count: u32 },

    /// Playback rate must be positive.
    #[error("Invalid playback rate {0}: must be at least 1 fps")]
    InvalidRate(u32),

    /// A frame sequence mixes canvas sizes.
    #[error("Frame {index} is {actual}, expected {expected}")]
    FrameSizeMismatch {
        index: usize,
        expected: Size,
        actual: Size,
    },

    /// A frame sequence does not hold exactly one frame per index.
    #[error("Sequence has {actual} frames, expected {expected}")]
    FrameCountMismatch { expected: u32, actual: usize },

    /// Selection names an effect that is not in the catalog.
    #[error("Unknown effect '{0}'")]
    UnknownEffect(String),

    /// A pixel is not a palette color and cannot be indexed.
    #[error("Pixel ({x}, {y}) in frame {frame} has color {rgba:?} outside the palette")]
    OffPalette {
        frame: usize,
        x: u32,
        y: u32,
        rgba: Rgba,
    },

    /// PNG encoding error.
    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    /// GIF encoding error.
    #[error("GIF encoding error: {0}")]
    Gif(#[from] gif::EncodingError),

    /// Filesystem error.
    #[error("IO error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The external APNG assembler ran and failed.
    #[error("APNG assembler exited with status {status}: {stderr}")]
    ApngAssembler { status: i32, stderr: String },

    /// The external APNG assembler reported success but wrote nothing.
    #[error("APNG assembler did not produce {path}")]
    ApngOutputMissing { path: PathBuf },

    /// The worker pool for parallel generation could not start.
    #[error("Failed to build thread pool: {0}")]
    ThreadPool(String),
}

impl FlipbookError {
    pub(crate) fn io(path: impl AsRef<Path>, source: std::io::Error) -> Self {
        FlipbookError::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            FlipbookError::InvalidSize { .. } => "FLIPBOOK_001",
            FlipbookError::InvalidFrameCount(_) => "FLIPBOOK_002",
            FlipbookError::FrameIndexOutOfRange { .. } => "FLIPBOOK_003",
            FlipbookError::InvalidRate(_) => "FLIPBOOK_004",
            FlipbookError::FrameSizeMismatch { .. } => "FLIPBOOK_005",
            FlipbookError::UnknownEffect(_) => "FLIPBOOK_006",
            FlipbookError::OffPalette { .. } => "FLIPBOOK_007",
            FlipbookError::Png(_) => "FLIPBOOK_008",
            FlipbookError::Gif(_) => "FLIPBOOK_009",
            FlipbookError::Io { .. } => "FLIPBOOK_010",
            FlipbookError::ApngAssembler { .. } => "FLIPBOOK_011",
            FlipbookError::ApngOutputMissing { .. } => "FLIPBOOK_012",
            FlipbookError::ThreadPool(_) => "FLIPBOOK_013",
            FlipbookError::FrameCountMismatch { .. } => "FLIPBOOK_014",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_are_unique() {
        let errors = [
            FlipbookError::InvalidSize {
                width: 0,
                height: 1,
                reason: "zero",
            },
            FlipbookError::InvalidFrameCount(0),
            FlipbookError::FrameIndexOutOfRange { index: 3, count: 2 },
            FlipbookError::InvalidRate(0),
            FlipbookError::FrameSizeMismatch {
                index: 1,
                expected: Size::new(2, 2),
                actual: Size::new(3, 3),
            },
            FlipbookError::UnknownEffect("nope".into()),
            FlipbookError::OffPalette {
                frame: 0,
                x: 0,
                y: 0,
                rgba: [1, 2, 3, 4],
            },
            FlipbookError::io("out", std::io::Error::other("disk full")),
            FlipbookError::ApngAssembler {
                status: 1,
                stderr: String::new(),
            },
            FlipbookError::ApngOutputMissing {
                path: PathBuf::from("a.apng"),
            },
            FlipbookError::ThreadPool("no threads".into()),
            FlipbookError::FrameCountMismatch {
                expected: 12,
                actual: 11,
            },
        ];
        let mut codes: Vec<_> = errors.iter().map(|e| e.code()).collect();
        codes.sort();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_display_includes_context() {
        let err = FlipbookError::FrameIndexOutOfRange { index: 12, count: 12 };
        assert_eq!(
            err.to_string(),
            "Frame index 12 is out of range for a 12-frame effect"
        );

        let err = FlipbookError::io("assets/x.png", std::io::Error::other("denied"));
        assert!(err.to_string().contains("assets/x.png"));
    }
}
