//! Error types for encoding and decoding answer barcodes.

use std::path::PathBuf;
use thiserror::Error;

/// Layout failures detected before any pixel is written.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// Not even one question block fits between the side paddings.
    #[error("image too narrow to encode answers: {image_width}px wide")]
    TooNarrow { image_width: u32 },

    /// The rendered strip does not fit inside the target image.
    #[error("barcode strip needs {strip_height}px but image is only {image_height}px tall")]
    StripTooTall { strip_height: u32, image_height: u32 },

    /// Bar width, gap, row height and side padding must all be non-zero.
    #[error("degenerate barcode geometry: bar width, gap, row height and side padding must be non-zero")]
    DegenerateGeometry,
}

/// Errors surfaced by the codec and its file-level helpers.
#[derive(Debug, Error)]
pub enum BarcodeError {
    #[error("{} - path does not exist", .0.display())]
    MissingInput(PathBuf),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error("invalid answer list at line {line}: {reason}")]
    AnswerFormat { line: usize, reason: String },

    #[error("expected {expected} answers, got {found}")]
    QuestionCount { expected: usize, found: usize },

    #[error("image error for {}: {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("I/O error for {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, BarcodeError>;
