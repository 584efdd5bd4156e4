use crate::models::BitMatrix;
use image::GrayImage;

/// Default cut-off of the fixed threshold: anything at or below is black
pub const DEFAULT_THRESHOLD: u8 = 100;

/// How grayscale pixels are split into black and white before scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Binarization {
    /// Pixels `<= threshold` are black
    Fixed(u8),
    /// Pixels below Otsu's optimal threshold are black
    Otsu,
}

impl Default for Binarization {
    fn default() -> Self {
        Binarization::Fixed(DEFAULT_THRESHOLD)
    }
}

/// Binarize a grayscale image with the chosen policy
pub fn binarize(image: &GrayImage, mode: Binarization) -> BitMatrix {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let gray = image.as_raw();
    match mode {
        Binarization::Fixed(threshold) => threshold_binarize(gray, width, height, threshold),
        Binarization::Otsu => otsu_binarize(gray, width, height),
    }
}

/// Convert grayscale image to binary using Otsu's thresholding method
pub fn otsu_binarize(gray: &[u8], width: usize, height: usize) -> BitMatrix {
    let threshold = calculate_otsu_threshold(gray);
    tracing::debug!(threshold, "otsu threshold selected");

    let mut binary = BitMatrix::new(width, height);
    for y in 0..height {
        for x in 0..width {
            binary.set(x, y, gray[y * width + x] < threshold);
        }
    }
    binary
}

/// Calculate Otsu's optimal threshold
fn calculate_otsu_threshold(gray: &[u8]) -> u8 {
    let mut histogram = [0u64; 256];
    for &pixel in gray {
        histogram[pixel as usize] += 1;
    }

    let total_pixels = gray.len() as f64;
    let total_sum: u64 = histogram
        .iter()
        .enumerate()
        .map(|(intensity, &count)| intensity as u64 * count)
        .sum();

    let mut max_variance = 0.0;
    let mut optimal_threshold = 128u8;
    let mut class1_pixels = 0u64;
    let mut class1_sum = 0u64;

    // Class 1 holds intensities strictly below the candidate threshold
    for threshold in 1..=255usize {
        class1_pixels += histogram[threshold - 1];
        class1_sum += (threshold as u64 - 1) * histogram[threshold - 1];
        let class2_pixels = gray.len() as u64 - class1_pixels;

        if class1_pixels == 0 || class2_pixels == 0 {
            continue;
        }

        let class1_mean = class1_sum as f64 / class1_pixels as f64;
        let class2_mean = (total_sum - class1_sum) as f64 / class2_pixels as f64;

        let weight1 = class1_pixels as f64 / total_pixels;
        let weight2 = class2_pixels as f64 / total_pixels;

        let variance = weight1 * weight2 * (class1_mean - class2_mean).powi(2);

        if variance > max_variance {
            max_variance = variance;
            optimal_threshold = threshold as u8;
        }
    }

    optimal_threshold
}

/// Fixed global threshold binarization, `<= threshold` is black
pub fn threshold_binarize(gray: &[u8], width: usize, height: usize, threshold: u8) -> BitMatrix {
    let mut binary = BitMatrix::new(width, height);
    for y in 0..height {
        for x in 0..width {
            binary.set(x, y, gray[y * width + x] <= threshold);
        }
    }
    binary
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_binarize() {
        let gray = vec![100, 150, 200, 50]; // 2x2 image
        let binary = threshold_binarize(&gray, 2, 2, DEFAULT_THRESHOLD);

        assert!(binary.get(0, 0)); // 100 is on the black side
        assert!(!binary.get(1, 0));
        assert!(!binary.get(0, 1));
        assert!(binary.get(1, 1));
    }

    #[test]
    fn test_otsu_binarize() {
        let mut gray = vec![50u8; 50]; // Dark class
        gray.extend(vec![200u8; 50]); // Light class

        let binary = otsu_binarize(&gray, 10, 10);

        assert!(binary.get(0, 0)); // Dark
        assert!(!binary.get(0, 7)); // Light
    }

    #[test]
    fn test_binarize_gray_image() {
        let mut img = GrayImage::from_pixel(4, 1, image::Luma([255]));
        img.put_pixel(1, 0, image::Luma([30]));
        img.put_pixel(2, 0, image::Luma([120]));

        let fixed = binarize(&img, Binarization::default());
        assert!(fixed.get(1, 0));
        assert!(!fixed.get(2, 0));

        let otsu = binarize(&img, Binarization::Otsu);
        assert!(otsu.get(1, 0));
        assert!(!otsu.get(3, 0));
    }
}
