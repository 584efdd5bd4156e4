//! Answer barcode codec
//!
//! Writes a multiple-choice answer set as rows of black bars along the bottom
//! of an image and reads it back from a scan. Each row starts with three
//! sync bars; the decoder measures bar width and gap from them, so geometry
//! never has to be stored in the image. Questions are emitted in a fixed
//! shuffled order which the decoder inverts.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// Barcode reading (sync bar search, row decoding, deshuffling)
#[allow(missing_docs)]
pub mod decoder;
/// Barcode writing (layout, rendering, compositing)
pub mod encoder;
/// Error types
#[allow(missing_docs)]
pub mod error;
/// Core data structures (answers, permutation, geometry, bit matrix)
#[allow(missing_docs)]
pub mod models;
/// File-level encode/decode helpers
pub mod tools;
/// Utility functions (binarization)
pub mod utils;

pub use decoder::{DecoderConfig, decode};
pub use encoder::encode;
pub use encoder::layout::RowLayout;
pub use error::{BarcodeError, LayoutError};
pub use models::{
    AnswerSet, BarcodeGeometry, BitMatrix, Choice, Permutation, QUESTION_COUNT, QuestionAnswer,
};
