//! Sync bar detection: three equal bars at the left edge of every barcode row
//! give away the bar width and gap the strip was rendered with.

use crate::models::BitMatrix;

/// Geometry measured from one row of sync bars
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Alignment {
    /// Measured bar width (w)
    pub bar_width: usize,
    /// Measured gap (g)
    pub gap: usize,
    /// Pixel row the bars were found on
    pub row: usize,
    /// First column of the first question block
    pub scan_start: usize,
}

/// Progress of the bottom-up search for barcode rows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    /// Looking for sync bars at or above `row`
    Searching { row: usize },
    /// Bars found, row not decoded yet
    Found(Alignment),
    /// No more barcode data
    Exhausted,
}

pub struct AlignmentScanner<'a> {
    matrix: &'a BitMatrix,
    bar_tolerance: f32,
}

impl<'a> AlignmentScanner<'a> {
    pub fn new(matrix: &'a BitMatrix, bar_tolerance: f32) -> Self {
        Self {
            matrix,
            bar_tolerance,
        }
    }

    /// Advance the state machine by one search
    pub fn step(&self, state: ScanState) -> ScanState {
        match state {
            ScanState::Searching { row } => match self.scan(row) {
                Some(alignment) => ScanState::Found(alignment),
                None => ScanState::Exhausted,
            },
            other => other,
        }
    }

    /// Scan upward from `start_row` to row 1 for the first qualifying row
    pub fn scan(&self, start_row: usize) -> Option<Alignment> {
        let height = self.matrix.height();
        if height == 0 {
            return None;
        }
        let start_row = start_row.min(height - 1);
        (1..=start_row).rev().find_map(|row| self.measure_row(row))
    }

    /// Measure the first three bars in the left half of `row`
    fn measure_row(&self, row: usize) -> Option<Alignment> {
        let t = self.matrix.transitions(row, self.matrix.width() / 2);
        if t.len() < 6 {
            return None;
        }

        let bars = [t[1] - t[0], t[3] - t[2], t[5] - t[4]];
        let consistent = bars
            .windows(2)
            .all(|pair| (pair[0] as f32 - pair[1] as f32).abs() <= self.bar_tolerance);
        if !consistent {
            tracing::trace!(row, ?bars, "rejected row with inconsistent bar widths");
            return None;
        }

        let bar_width = (bars.iter().sum::<usize>() as f32 / 3.0).round() as usize;
        let gap = ((t[2] - t[1]) + (t[4] - t[3])) / 2;
        let alignment = Alignment {
            bar_width,
            gap,
            row,
            scan_start: t[5] + 1 + gap,
        };
        tracing::debug!(
            row,
            bar_width,
            gap,
            scan_start = alignment.scan_start,
            "found alignment bars"
        );
        Some(alignment)
    }
}
