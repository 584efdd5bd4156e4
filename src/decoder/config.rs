use crate::utils::binarization::Binarization;
use std::str::FromStr;

/// Tunables of the decode loop.
///
/// `row_step` is a fixed vertical hop between alignment rows and does not
/// follow the encoded row height. With the default of 25 and 20px rows the
/// hop drifts 5px per row, so it lands past a row once more than four rows
/// are stacked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecoderConfig {
    /// Pixel rows to move up from a decoded alignment row before scanning again
    pub row_step: usize,
    /// Pixel rows (ending at the alignment row) averaged when reading blocks
    pub sample_rows: usize,
    /// Largest allowed difference between consecutive sync bar widths
    pub bar_tolerance: f32,
    /// A block counts as selected when its white fraction is at or below this
    pub select_threshold: f32,
    /// Grayscale to black/white policy
    pub binarization: Binarization,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            row_step: 25,
            sample_rows: 2,
            bar_tolerance: 1.5,
            select_threshold: 0.4,
            binarization: Binarization::default(),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<T> {
    lookup(name).and_then(|v| v.trim().parse::<T>().ok())
}

impl DecoderConfig {
    /// Defaults overridden by `ANSWERBAR_*` environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable name.
    ///
    /// Unparseable values and negative bar tolerances fall back to the default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let binarization = match lookup("ANSWERBAR_THRESHOLD").as_deref().map(str::trim) {
            Some("otsu") => Binarization::Otsu,
            Some(value) => value
                .parse::<u8>()
                .map(Binarization::Fixed)
                .unwrap_or(defaults.binarization),
            None => defaults.binarization,
        };

        Self {
            row_step: parse_var::<usize>(&lookup, "ANSWERBAR_ROW_STEP")
                .unwrap_or(defaults.row_step)
                .max(1),
            sample_rows: parse_var::<usize>(&lookup, "ANSWERBAR_SAMPLE_ROWS")
                .unwrap_or(defaults.sample_rows)
                .max(1),
            bar_tolerance: parse_var::<f32>(&lookup, "ANSWERBAR_BAR_TOLERANCE")
                .filter(|t| *t >= 0.0)
                .unwrap_or(defaults.bar_tolerance),
            select_threshold: parse_var::<f32>(&lookup, "ANSWERBAR_SELECT_THRESHOLD")
                .unwrap_or(defaults.select_threshold)
                .clamp(0.0, 1.0),
            binarization,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name: &str| map.get(name).cloned()
    }

    #[test]
    fn test_defaults_without_overrides() {
        assert_eq!(DecoderConfig::from_lookup(|_| None), DecoderConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = DecoderConfig::from_lookup(lookup_from(&[
            ("ANSWERBAR_ROW_STEP", " 20 "),
            ("ANSWERBAR_SAMPLE_ROWS", "4"),
            ("ANSWERBAR_SELECT_THRESHOLD", "0.3"),
            ("ANSWERBAR_THRESHOLD", "otsu"),
        ]));
        assert_eq!(config.row_step, 20);
        assert_eq!(config.sample_rows, 4);
        assert_eq!(config.select_threshold, 0.3);
        assert_eq!(config.binarization, Binarization::Otsu);
        assert_eq!(config.bar_tolerance, 1.5);
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = DecoderConfig::from_lookup(lookup_from(&[
            ("ANSWERBAR_ROW_STEP", "0"),
            ("ANSWERBAR_SAMPLE_ROWS", "many"),
            ("ANSWERBAR_THRESHOLD", "300"),
            ("ANSWERBAR_BAR_TOLERANCE", "-2"),
        ]));
        assert_eq!(config.row_step, 1);
        assert_eq!(config.sample_rows, 2);
        assert_eq!(config.binarization, Binarization::Fixed(100));
        assert_eq!(config.bar_tolerance, 1.5);
    }
}
