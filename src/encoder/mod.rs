//! Answer barcode encoding
//!
//! - Layout planning (questions per row, rows needed)
//! - Row rendering (sync bars plus 5-bit answer blocks)
//! - Compositing the strip over the bottom of the host image

/// Row capacity and row count planning
pub mod layout;
/// Strip rendering and compositing
pub mod render;

use crate::error::LayoutError;
use crate::models::{AnswerSet, BarcodeGeometry, Permutation};
use image::GrayImage;
use layout::RowLayout;

/// Shuffle `answers`, render them and overwrite the bottom of `image`.
///
/// Fails before touching any pixel when the strip cannot be laid out.
pub fn encode(
    image: &mut GrayImage,
    answers: &AnswerSet,
    permutation: &Permutation,
    geometry: &BarcodeGeometry,
) -> Result<RowLayout, LayoutError> {
    let shuffled = permutation.shuffle(answers.as_slice());
    let (strip, layout) = render::render_strip(&shuffled, image.width(), geometry)?;
    render::composite(image, &strip)?;

    tracing::info!(
        questions_per_row = layout.questions_per_row,
        rows = layout.rows,
        strip_height = strip.height(),
        "embedded answer barcode"
    );
    Ok(layout)
}
