use std::ops::Range;

/// Packed binary image, `true` = black
#[derive(Debug, Clone)]
pub struct BitMatrix {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl BitMatrix {
    /// Create an all-white matrix
    pub fn new(width: usize, height: usize) -> Self {
        let bytes_needed = (width * height).div_ceil(8);
        Self {
            width,
            height,
            data: vec![0; bytes_needed],
        }
    }

    /// Get matrix width
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get matrix height
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get pixel at (x, y); out of bounds reads as white
    pub fn get(&self, x: usize, y: usize) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        let index = y * self.width + x;
        (self.data[index / 8] >> (index % 8)) & 1 == 1
    }

    /// Set pixel at (x, y); out of bounds writes are dropped
    pub fn set(&mut self, x: usize, y: usize, black: bool) {
        if x >= self.width || y >= self.height {
            return;
        }
        let index = y * self.width + x;
        if black {
            self.data[index / 8] |= 1 << (index % 8);
        } else {
            self.data[index / 8] &= !(1 << (index % 8));
        }
    }

    /// Fill an axis-aligned rectangle, clipped to the matrix
    pub fn fill_rect(&mut self, xs: Range<usize>, ys: Range<usize>, black: bool) {
        for y in ys.start..ys.end.min(self.height) {
            for x in xs.start..xs.end.min(self.width) {
                self.set(x, y, black);
            }
        }
    }

    /// Positions `x < x_end - 1` in row `y` where pixel `x` and `x + 1` differ
    pub fn transitions(&self, y: usize, x_end: usize) -> Vec<usize> {
        let x_end = x_end.min(self.width);
        let mut out = Vec::new();
        if x_end < 2 || y >= self.height {
            return out;
        }
        let mut prev = self.get(0, y);
        for x in 1..x_end {
            let cur = self.get(x, y);
            if cur != prev {
                out.push(x - 1);
                prev = cur;
            }
        }
        out
    }

    /// Fraction of white pixels inside the rectangle, `None` if it is empty
    pub fn white_ratio(&self, xs: Range<usize>, ys: Range<usize>) -> Option<f32> {
        let xs = xs.start..xs.end.min(self.width);
        let ys = ys.start..ys.end.min(self.height);
        if xs.is_empty() || ys.is_empty() {
            return None;
        }
        let mut white = 0usize;
        for y in ys.clone() {
            for x in xs.clone() {
                if !self.get(x, y) {
                    white += 1;
                }
            }
        }
        Some(white as f32 / (xs.len() * ys.len()) as f32)
    }
}

impl Default for BitMatrix {
    fn default() -> Self {
        Self::new(0, 0)
    }
}
