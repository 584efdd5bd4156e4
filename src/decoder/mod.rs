//! Answer barcode decoding
//!
//! This module recovers an answer set from a (re)scanned image:
//! - Binarization of the grayscale input
//! - Bottom-up search for sync bars, inferring bar width and gap
//! - Block reading of each barcode row
//! - Concatenation and inverse permutation of the shuffled answers

/// Sync bar search and geometry inference
pub mod alignment;
/// Decode loop and row concatenation
pub mod assemble;
/// Decoder tunables and their environment overrides
pub mod config;
/// Five-block answer reading within one row
pub mod row;

pub use assemble::DecodedRow;
pub use config::DecoderConfig;

use crate::models::{AnswerSet, BitMatrix, Permutation};
use crate::utils::binarization::binarize;
use image::GrayImage;

/// Decode the answer set embedded in `image`.
///
/// Never fails: questions that could not be read come back empty.
pub fn decode(image: &GrayImage, permutation: &Permutation, config: &DecoderConfig) -> AnswerSet {
    let matrix = binarize(image, config.binarization);
    decode_matrix(&matrix, permutation, config)
}

/// Decode from an already binarized image
pub fn decode_matrix(
    matrix: &BitMatrix,
    permutation: &Permutation,
    config: &DecoderConfig,
) -> AnswerSet {
    let target = permutation.len();
    let rows = assemble::decode_rows(matrix, config, target);
    let shuffled = assemble::concat_rows(&rows, target);

    if shuffled.len() < target {
        tracing::warn!(
            decoded = shuffled.len(),
            expected = target,
            "barcode ended early, missing answers left empty"
        );
    }
    let answers = permutation.unshuffle(&shuffled);
    tracing::info!(
        rows = rows.len(),
        answered = answers.answered(),
        "decoded answer barcode"
    );
    answers
}

/// Rows found in `image`, for inspection
pub fn inspect(
    image: &GrayImage,
    permutation: &Permutation,
    config: &DecoderConfig,
) -> Vec<DecodedRow> {
    let matrix = binarize(image, config.binarization);
    assemble::decode_rows(&matrix, config, permutation.len())
}
