use crate::models::{BitMatrix, Choice, OPTION_COUNT, QuestionAnswer};
use std::ops::Range;

/// Read consecutive five-block answer groups from one barcode row.
///
/// `band` selects the pixel rows averaged per block. Reading stops at the
/// first group with no selected block or when a group no longer fits.
pub fn decode_row(
    matrix: &BitMatrix,
    band: Range<usize>,
    bar_width: usize,
    gap: usize,
    start_col: usize,
    select_threshold: f32,
) -> Vec<QuestionAnswer> {
    let mut answers = Vec::new();
    if bar_width == 0 || band.is_empty() {
        return answers;
    }

    let window = bar_width * OPTION_COUNT;
    let mut x = start_col;
    while x + window <= matrix.width() {
        let mut answer = QuestionAnswer::EMPTY;
        for choice in Choice::ALL {
            let block_x = x + choice.index() * bar_width;
            let selected = matrix
                .white_ratio(block_x..block_x + bar_width, band.clone())
                .is_some_and(|white| white <= select_threshold);
            if selected {
                answer.insert(choice);
            }
        }

        if answer.is_empty() {
            break;
        }
        answers.push(answer);
        x += window + gap;
    }
    answers
}

/// Pixel rows read for an alignment found on `row`
pub fn sample_band(row: usize, sample_rows: usize) -> Range<usize> {
    (row + 1).saturating_sub(sample_rows)..row + 1
}
