#![doc = include_str!("../README.md")]

pub mod detector;
pub mod edges;
pub mod error;
pub mod image;
pub mod smooth;

// --- High-level re-exports -------------------------------------------------

// Main entry points: pipeline + results.
pub use crate::detector::{detect_edges, process_file, DetectorParams, EdgeDetection, StageTimings};
pub use crate::error::Error;

// Stage types generally useful to callers inspecting intermediates.
pub use crate::edges::{Classification, EdgeClass, EdgeMap, Thresholds};

/// Small prelude for quick experiments.
///
/// ```
/// use canny_detector::prelude::*;
///
/// let field = ImageF32::new(16, 16);
/// let stages = detect_edges(&field, &DetectorParams::default()).unwrap();
/// assert_eq!(stages.edge_map.count_edges(), 0);
/// ```
pub mod prelude {
    pub use crate::detector::{detect_edges, DetectorParams, EdgeDetection};
    pub use crate::image::ImageF32;
}
