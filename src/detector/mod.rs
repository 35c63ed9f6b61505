//! Pipeline entry points.
//!
//! [`detect_edges`] runs the four core stages on an intensity field after
//! Gaussian smoothing, returning every intermediate array plus per-stage
//! timings. [`process_file`] is the file-to-file convenience wrapper:
//! load → grayscale → detect → optionally save the final map.
pub mod params;

pub use params::DetectorParams;

use crate::edges::{classify, link_edges, sobel_gradients, suppress};
use crate::edges::{Classification, EdgeMap, Thresholds};
use crate::error::Error;
use crate::image::io::{load_grayscale_image, save_gray_bytes};
use crate::image::ImageF32;
use crate::smooth::gaussian_smooth;
use log::debug;
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// Wall-clock milliseconds spent in each stage.
#[derive(Clone, Copy, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTimings {
    pub smooth_ms: f64,
    pub gradient_ms: f64,
    pub nms_ms: f64,
    pub threshold_ms: f64,
    pub hysteresis_ms: f64,
}

/// All stage outputs of one pipeline run.
#[derive(Clone, Debug)]
pub struct EdgeDetection {
    /// Intensity field after Gaussian smoothing
    pub smoothed: ImageF32,
    /// Gradient magnitude, rescaled to a 255 ceiling
    pub magnitude: ImageF32,
    /// Gradient direction in radians, [0, π]
    pub direction: ImageF32,
    /// Magnitude after non-maximum suppression
    pub suppressed: ImageF32,
    /// Thresholds actually applied
    pub thresholds: Thresholds,
    /// Strong / weak / none labels
    pub classification: Classification,
    /// Final binary edge map
    pub edge_map: EdgeMap,
    pub timings: StageTimings,
}

fn validate_input(intensity: &ImageF32) -> Result<(), Error> {
    if intensity.w == 0 || intensity.h == 0 {
        return Err(Error::InvalidInput(format!(
            "intensity field is empty ({}x{})",
            intensity.w, intensity.h
        )));
    }
    if let Some(i) = intensity.data.iter().position(|v| !v.is_finite()) {
        return Err(Error::InvalidInput(format!(
            "non-finite sample at ({}, {})",
            i % intensity.w,
            i / intensity.w
        )));
    }
    Ok(())
}

/// Run the full pipeline on a raw intensity field.
///
/// Fails fast with [`Error::InvalidInput`] on an empty array, non-finite
/// samples, or out-of-range parameters; the numeric stages themselves are
/// total.
pub fn detect_edges(intensity: &ImageF32, params: &DetectorParams) -> Result<EdgeDetection, Error> {
    params.validate()?;
    validate_input(intensity)?;

    let mut timings = StageTimings::default();

    let start = Instant::now();
    let smoothed = gaussian_smooth(intensity, params.kernel_size, params.sigma);
    timings.smooth_ms = start.elapsed().as_secs_f64() * 1000.0;

    let start = Instant::now();
    let gradient = sobel_gradients(&smoothed);
    timings.gradient_ms = start.elapsed().as_secs_f64() * 1000.0;

    let start = Instant::now();
    let suppressed = suppress(&gradient.magnitude, &gradient.direction);
    timings.nms_ms = start.elapsed().as_secs_f64() * 1000.0;

    let start = Instant::now();
    let (classification, thresholds) = classify(&suppressed, params.high_ratio, params.low_ratio);
    timings.threshold_ms = start.elapsed().as_secs_f64() * 1000.0;

    let start = Instant::now();
    let edge_map = link_edges(&classification);
    timings.hysteresis_ms = start.elapsed().as_secs_f64() * 1000.0;

    debug!(
        "detect_edges {}x{}: high={:.3} low={:.3} edges={} \
         (smooth {:.3}ms, grad {:.3}ms, nms {:.3}ms, thresh {:.3}ms, hyst {:.3}ms)",
        intensity.w,
        intensity.h,
        thresholds.high,
        thresholds.low,
        edge_map.count_edges(),
        timings.smooth_ms,
        timings.gradient_ms,
        timings.nms_ms,
        timings.threshold_ms,
        timings.hysteresis_ms,
    );

    Ok(EdgeDetection {
        smoothed,
        magnitude: gradient.magnitude,
        direction: gradient.direction,
        suppressed,
        thresholds,
        classification,
        edge_map,
        timings,
    })
}

/// Load a grayscale image, detect edges, and optionally save the final map.
pub fn process_file(
    input: &Path,
    save_path: Option<&Path>,
    params: &DetectorParams,
) -> Result<EdgeDetection, Error> {
    let gray = load_grayscale_image(input)?;
    let detection = detect_edges(&gray.to_f32(), params)?;
    if let Some(path) = save_path {
        let map = &detection.edge_map;
        save_gray_bytes(path, map.width(), map.height(), map.data())?;
    }
    Ok(detection)
}
