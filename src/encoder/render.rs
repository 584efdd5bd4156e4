//! Pixel rendering of barcode rows and compositing into the host image.

use super::layout::{RowLayout, plan};
use crate::error::LayoutError;
use crate::models::{BarcodeGeometry, QuestionAnswer};
use image::{GrayImage, Luma};

const BLACK: Luma<u8> = Luma([0]);
const WHITE: Luma<u8> = Luma([255]);

/// Render the whole strip for `answers`, already in emission order.
///
/// Row 0 sits directly above the bottom padding; later rows stack upward.
pub fn render_strip(
    answers: &[QuestionAnswer],
    image_width: u32,
    geometry: &BarcodeGeometry,
) -> Result<(GrayImage, RowLayout), LayoutError> {
    let layout = plan(image_width, answers.len(), geometry)?;
    let strip_height = layout.strip_height(geometry);
    let mut strip = GrayImage::from_pixel(image_width, strip_height, WHITE);

    for row in 0..layout.rows {
        let top = strip_height - geometry.bottom_padding - (row as u32 + 1) * geometry.row_height;
        let chunk = &answers[layout.row_range(row, answers.len())];
        render_row(&mut strip, top, chunk, geometry);
    }

    Ok((strip, layout))
}

/// Draw one row whose top edge is at `top`: three sync bars, then one
/// five-block group per answer.
pub fn render_row(
    strip: &mut GrayImage,
    top: u32,
    answers: &[QuestionAnswer],
    geometry: &BarcodeGeometry,
) {
    let w = geometry.bar_width;
    for i in 0..3 {
        let x = geometry.side_padding + i * (w + geometry.gap);
        fill_block(strip, x, top, w, geometry.row_height);
    }

    let mut x = geometry.first_question_x();
    for answer in answers {
        for selected in answer.blocks() {
            if selected {
                fill_block(strip, x, top, w, geometry.row_height);
            }
            x += w;
        }
        x += geometry.gap;
    }
}

fn fill_block(strip: &mut GrayImage, x0: u32, y0: u32, width: u32, height: u32) {
    let x_end = (x0 + width).min(strip.width());
    let y_end = (y0 + height).min(strip.height());
    for y in y0..y_end {
        for x in x0..x_end {
            strip.put_pixel(x, y, BLACK);
        }
    }
}

/// Overwrite the bottom of `image` with `strip`. Nothing is written when the
/// strip does not fit.
pub fn composite(image: &mut GrayImage, strip: &GrayImage) -> Result<(), LayoutError> {
    if strip.height() > image.height() {
        return Err(LayoutError::StripTooTall {
            strip_height: strip.height(),
            image_height: image.height(),
        });
    }

    let offset = image.height() - strip.height();
    let width = strip.width().min(image.width());
    for y in 0..strip.height() {
        for x in 0..width {
            image.put_pixel(x, offset + y, *strip.get_pixel(x, y));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Choice;

    fn geometry() -> BarcodeGeometry {
        BarcodeGeometry::default()
    }

    fn is_black(img: &GrayImage, x: u32, y: u32) -> bool {
        img.get_pixel(x, y)[0] == 0
    }

    #[test]
    fn test_row_pixels() {
        let answers = [QuestionAnswer::from_choices([Choice::A, Choice::C])];
        let (strip, layout) = render_strip(&answers, 1000, &geometry()).unwrap();
        assert_eq!(layout.rows, 1);
        assert_eq!(strip.height(), 30);

        // Row occupies y in 0..20, padding below
        let y = 10;
        for x in [20, 24, 35, 39, 50, 54] {
            assert!(is_black(&strip, x, y), "sync bar pixel {x}");
        }
        for x in [19, 25, 34, 40, 55, 64] {
            assert!(!is_black(&strip, x, y), "gap pixel {x}");
        }
        // Blocks: A at 65..70, B 70..75, C 75..80, D 80..85, E 85..90
        assert!(is_black(&strip, 65, y) && is_black(&strip, 69, y));
        assert!(!is_black(&strip, 72, y));
        assert!(is_black(&strip, 75, y) && is_black(&strip, 79, y));
        assert!(!is_black(&strip, 82, y) && !is_black(&strip, 87, y));
        assert!(!is_black(&strip, 20, 25));
    }

    #[test]
    fn test_rows_stack_bottom_up() {
        let geometry = geometry();
        // 180 wide: (180 - 40 - 15 - 50) / 35 = 2 questions per row
        let answers = [
            QuestionAnswer::from_choices([Choice::A]),
            QuestionAnswer::from_choices([Choice::A]),
            QuestionAnswer::from_choices([Choice::E]),
        ];
        let (strip, layout) = render_strip(&answers, 180, &geometry).unwrap();
        assert_eq!(layout.questions_per_row, 2);
        assert_eq!(layout.rows, 2);
        assert_eq!(strip.height(), 50);

        // Row 0 at y 20..40, row 1 at y 0..20
        let first_a = geometry.first_question_x();
        let first_e = first_a + 4 * geometry.bar_width;
        assert!(is_black(&strip, first_a, 30));
        assert!(!is_black(&strip, first_e, 30));
        assert!(is_black(&strip, first_e, 5));
        assert!(!is_black(&strip, first_a, 5));
    }

    #[test]
    fn test_composite_overwrites_only_bottom() {
        let mut host = GrayImage::from_pixel(100, 200, Luma([128]));
        let strip = GrayImage::from_pixel(100, 30, Luma([0]));
        composite(&mut host, &strip).unwrap();
        assert_eq!(host.get_pixel(50, 169)[0], 128);
        assert_eq!(host.get_pixel(50, 170)[0], 0);
        assert_eq!(host.get_pixel(99, 199)[0], 0);
    }

    #[test]
    fn test_composite_rejects_tall_strip() {
        let mut host = GrayImage::from_pixel(100, 20, Luma([128]));
        let strip = GrayImage::from_pixel(100, 30, Luma([0]));
        assert_eq!(
            composite(&mut host, &strip),
            Err(LayoutError::StripTooTall {
                strip_height: 30,
                image_height: 20
            })
        );
        assert!(host.pixels().all(|p| p[0] == 128));
    }

    #[test]
    fn test_too_narrow_renders_nothing() {
        let answers = [QuestionAnswer::from_choices([Choice::B])];
        assert!(matches!(
            render_strip(&answers, 50, &geometry()),
            Err(LayoutError::TooNarrow { .. })
        ));
    }
}
