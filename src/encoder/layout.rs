use crate::error::LayoutError;
use crate::models::BarcodeGeometry;

/// How questions are split into barcode rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowLayout {
    /// Question blocks per row
    pub questions_per_row: usize,
    /// Rows needed for every question
    pub rows: usize,
}

impl RowLayout {
    /// Height of the rendered strip including the bottom padding
    pub fn strip_height(&self, geometry: &BarcodeGeometry) -> u32 {
        self.rows as u32 * geometry.row_height + geometry.bottom_padding
    }

    /// Range of answer indices carried by row `row`
    pub fn row_range(&self, row: usize, question_count: usize) -> std::ops::Range<usize> {
        let start = (row * self.questions_per_row).min(question_count);
        let end = (start + self.questions_per_row).min(question_count);
        start..end
    }
}

/// Number of question blocks that fit in one row of an image `image_width` wide.
///
/// The overhead term charges the three sync bars as `3w + g·w`.
pub fn row_capacity(image_width: u32, geometry: &BarcodeGeometry) -> i64 {
    let w = geometry.bar_width as i64;
    let g = geometry.gap as i64;
    let available = image_width as i64 - 2 * geometry.side_padding as i64 - 3 * w - g * w;
    available.div_euclid(w * 5 + g)
}

/// Pixels from the left edge to the end of the last block of a full row
fn row_extent(questions_per_row: usize, geometry: &BarcodeGeometry) -> u64 {
    let pitch = geometry.question_pitch() as u64;
    geometry.first_question_x() as u64 + questions_per_row as u64 * pitch - geometry.gap as u64
}

/// Plan rows for `question_count` questions.
///
/// A row whose last block would cross the right edge is rejected as too
/// narrow rather than clipped.
pub fn plan(
    image_width: u32,
    question_count: usize,
    geometry: &BarcodeGeometry,
) -> Result<RowLayout, LayoutError> {
    geometry.validate()?;

    let capacity = row_capacity(image_width, geometry);
    if capacity <= 0 {
        return Err(LayoutError::TooNarrow { image_width });
    }

    let questions_per_row = (capacity as usize).min(question_count);
    if questions_per_row > 0 && row_extent(questions_per_row, geometry) > image_width as u64 {
        return Err(LayoutError::TooNarrow { image_width });
    }
    let rows = if questions_per_row == 0 {
        0
    } else {
        question_count.div_ceil(questions_per_row)
    };

    Ok(RowLayout {
        questions_per_row,
        rows,
    })
}
