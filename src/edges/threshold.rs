//! Double thresholding of the suppressed magnitude field.
//!
//! Classifies every cell as strong, weak, or non-edge using two
//! data-dependent thresholds:
//!
//! - `high = max(suppressed) · high_ratio`
//! - `low  = high · low_ratio`
//!
//! The low threshold is chained off `high`, not off the raw maximum. With
//! the default ratios (0.09, 0.05) this gives a very narrow weak band; the
//! chain is deliberate and must not be rebased onto the raw maximum.
//!
//! An all-zero input would make both thresholds zero and trivially mark
//! every cell weak, so that case short-circuits to an all-none result.
use crate::image::ImageF32;
use serde::Serialize;

/// Byte value for a strong edge in the combined representation.
pub const STRONG_BYTE: u8 = 255;
/// Byte value for a weak edge in the combined representation.
pub const WEAK_BYTE: u8 = 25;

/// Three-way label for a suppressed-magnitude cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EdgeClass {
    /// Below the low threshold: not an edge.
    None,
    /// Between low and high: ambiguous, pending neighborhood support.
    Weak,
    /// At or above the high threshold: confident edge.
    Strong,
}

impl EdgeClass {
    /// Combined byte encoding: strong 255, weak 25, none 0.
    #[inline]
    pub fn byte(self) -> u8 {
        match self {
            EdgeClass::None => 0,
            EdgeClass::Weak => WEAK_BYTE,
            EdgeClass::Strong => STRONG_BYTE,
        }
    }
}

/// The two thresholds actually applied, for reporting.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct Thresholds {
    pub high: f32,
    pub low: f32,
}

/// Dense per-pixel classification of the suppressed magnitude field.
#[derive(Clone, Debug)]
pub struct Classification {
    w: usize,
    h: usize,
    labels: Vec<EdgeClass>,
}

impl Classification {
    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> EdgeClass {
        self.labels[y * self.w + x]
    }

    pub fn labels(&self) -> &[EdgeClass] {
        &self.labels
    }

    /// Combined byte view (strong 255, weak 25, none 0), row-major.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.labels.iter().map(|c| c.byte()).collect()
    }

    /// Build directly from labels, for tests that need a fixed layout
    /// independent of any thresholds.
    #[cfg(test)]
    pub(crate) fn from_labels(w: usize, h: usize, labels: Vec<EdgeClass>) -> Self {
        assert_eq!(labels.len(), w * h, "label count must equal w * h");
        Self { w, h, labels }
    }
}

/// Classify a suppressed magnitude field into strong / weak / none.
///
/// Ratios are expected in (0, 1); the pipeline entry point validates them.
pub fn classify(suppressed: &ImageF32, high_ratio: f32, low_ratio: f32) -> (Classification, Thresholds) {
    let w = suppressed.w;
    let h = suppressed.h;
    let max = suppressed.max_value();

    // No edges survived suppression: every cell is none. Without this
    // branch both thresholds collapse to zero and every cell would be
    // spuriously weak.
    if max == 0.0 {
        return (
            Classification {
                w,
                h,
                labels: vec![EdgeClass::None; w * h],
            },
            Thresholds {
                high: 0.0,
                low: 0.0,
            },
        );
    }

    let high = max * high_ratio;
    let low = high * low_ratio;
    let labels = suppressed
        .data
        .iter()
        .map(|&v| {
            if v >= high {
                EdgeClass::Strong
            } else if v >= low {
                EdgeClass::Weak
            } else {
                EdgeClass::None
            }
        })
        .collect();

    (Classification { w, h, labels }, Thresholds { high, low })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_follow_the_ratio_chain() {
        let img = ImageF32::from_vec(2, 2, vec![0.0, 10.0, 50.0, 100.0]);
        let (_, t) = classify(&img, 0.5, 0.5);
        assert_eq!(t.high, 50.0);
        assert_eq!(t.low, 25.0);
        assert!(t.low <= t.high);
    }

    #[test]
    fn cells_partition_into_three_labels() {
        let img = ImageF32::from_vec(2, 2, vec![10.0, 30.0, 60.0, 100.0]);
        let (c, _) = classify(&img, 0.5, 0.5);
        assert_eq!(c.get(0, 0), EdgeClass::None); // 10 < 25
        assert_eq!(c.get(1, 0), EdgeClass::Weak); // 25 <= 30 < 50
        assert_eq!(c.get(0, 1), EdgeClass::Strong); // 60 >= 50
        assert_eq!(c.get(1, 1), EdgeClass::Strong);
    }

    #[test]
    fn boundary_values_are_inclusive_low_exclusive_high() {
        let img = ImageF32::from_vec(3, 1, vec![25.0, 49.999, 100.0]);
        let (c, _) = classify(&img, 0.5, 0.5);
        assert_eq!(c.get(0, 0), EdgeClass::Weak);
        assert_eq!(c.get(1, 0), EdgeClass::Weak);
        assert_eq!(c.get(2, 0), EdgeClass::Strong);
    }

    #[test]
    fn all_zero_input_yields_all_none() {
        let (c, t) = classify(&ImageF32::new(4, 3), 0.09, 0.05);
        assert!(c.labels().iter().all(|&l| l == EdgeClass::None));
        assert_eq!(t.high, 0.0);
        assert_eq!(t.low, 0.0);
    }

    #[test]
    fn byte_view_uses_combined_encoding() {
        let img = ImageF32::from_vec(3, 1, vec![10.0, 30.0, 100.0]);
        let (c, _) = classify(&img, 0.5, 0.5);
        assert_eq!(c.to_bytes(), vec![0, WEAK_BYTE, STRONG_BYTE]);
    }
}
