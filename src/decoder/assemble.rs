use super::alignment::{Alignment, AlignmentScanner, ScanState};
use super::config::DecoderConfig;
use super::row::{decode_row, sample_band};
use crate::models::{BitMatrix, QuestionAnswer};

/// One barcode row as read from the image, answers in shuffled order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRow {
    pub alignment: Alignment,
    pub answers: Vec<QuestionAnswer>,
}

/// Walk the image bottom-up collecting rows until `target` answers are read
/// or no further row can be found.
pub fn decode_rows(matrix: &BitMatrix, config: &DecoderConfig, target: usize) -> Vec<DecodedRow> {
    let scanner = AlignmentScanner::new(matrix, config.bar_tolerance);
    let mut rows = Vec::new();
    let mut collected = 0usize;

    let Some(bottom) = matrix.height().checked_sub(1) else {
        return rows;
    };
    let mut state = ScanState::Searching { row: bottom };

    while collected < target {
        state = match state {
            ScanState::Searching { .. } => scanner.step(state),
            ScanState::Found(alignment) => {
                let answers = decode_row(
                    matrix,
                    sample_band(alignment.row, config.sample_rows),
                    alignment.bar_width,
                    alignment.gap,
                    alignment.scan_start,
                    config.select_threshold,
                );
                if answers.is_empty() {
                    tracing::debug!(row = alignment.row, "alignment row without answers");
                    ScanState::Exhausted
                } else {
                    collected += answers.len();
                    rows.push(DecodedRow { alignment, answers });
                    match alignment.row.checked_sub(config.row_step) {
                        Some(row) => ScanState::Searching { row },
                        None => ScanState::Exhausted,
                    }
                }
            }
            ScanState::Exhausted => break,
        };
    }

    tracing::debug!(rows = rows.len(), answers = collected, "decode loop finished");
    rows
}

/// Concatenate rows in scan order, keeping at most `target` answers
pub fn concat_rows(rows: &[DecodedRow], target: usize) -> Vec<QuestionAnswer> {
    rows.iter()
        .flat_map(|row| row.answers.iter().copied())
        .take(target)
        .collect()
}
