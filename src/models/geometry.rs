use crate::error::LayoutError;

/// Pixel dimensions of the encoded strip.
///
/// Chosen freely at encode time and never written into the image. The decoder
/// measures `bar_width` and `gap` back from the bars themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarcodeGeometry {
    /// Width of an alignment bar and of one option block (w)
    pub bar_width: u32,
    /// Space between bars and between question blocks (g)
    pub gap: u32,
    /// Height of one barcode row (h)
    pub row_height: u32,
    /// Blank margin left of the bars and on the right edge
    pub side_padding: u32,
    /// Blank margin below the lowest row
    pub bottom_padding: u32,
}

impl Default for BarcodeGeometry {
    fn default() -> Self {
        Self {
            bar_width: 5,
            gap: 10,
            row_height: 20,
            side_padding: 20,
            bottom_padding: 10,
        }
    }
}

impl BarcodeGeometry {
    /// Horizontal span of one question: five blocks plus the trailing gap
    pub fn question_pitch(&self) -> u32 {
        self.bar_width * 5 + self.gap
    }

    /// X position of the first question block
    pub fn first_question_x(&self) -> u32 {
        self.side_padding + 3 * (self.bar_width + self.gap)
    }

    /// Reject geometry that cannot produce separable bars.
    ///
    /// The first sync bar needs at least one white column to its left.
    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.bar_width == 0 || self.gap == 0 || self.row_height == 0 || self.side_padding == 0
        {
            return Err(LayoutError::DegenerateGeometry);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let geometry = BarcodeGeometry::default();
        assert_eq!(geometry.question_pitch(), 35);
        assert_eq!(geometry.first_question_x(), 65);
        assert!(geometry.validate().is_ok());
    }

    #[test]
    fn test_zero_gap_is_rejected() {
        let geometry = BarcodeGeometry {
            gap: 0,
            ..BarcodeGeometry::default()
        };
        assert_eq!(geometry.validate(), Err(LayoutError::DegenerateGeometry));
    }

    #[test]
    fn test_zero_side_padding_is_rejected() {
        let geometry = BarcodeGeometry {
            side_padding: 0,
            ..BarcodeGeometry::default()
        };
        assert_eq!(geometry.validate(), Err(LayoutError::DegenerateGeometry));
    }
}
