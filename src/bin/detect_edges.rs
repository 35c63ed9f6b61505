//! JSON-configured edge detection tool.
//!
//! Reads a grayscale image, runs the full pipeline, saves the final edge
//! map (and, optionally, every intermediate stage image), and writes a JSON
//! summary with the thresholds, edge count, and per-stage timings.
use canny_detector::detector::{detect_edges, DetectorParams, StageTimings};
use canny_detector::edges::Thresholds;
use canny_detector::error::Error;
use canny_detector::image::io::{
    load_grayscale_image, save_gray_bytes, save_grayscale_f32, write_json_file,
};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Deserialize)]
struct ToolConfig {
    input: PathBuf,
    #[serde(default)]
    detector: DetectorParams,
    output: OutputConfig,
}

#[derive(Debug, Deserialize)]
struct OutputConfig {
    edge_map: PathBuf,
    summary_json: PathBuf,
    /// Directory for intermediate stage images (gradient, suppressed,
    /// threshold). Skipped when absent.
    #[serde(default)]
    stages_dir: Option<PathBuf>,
}

fn load_config(path: &Path) -> Result<ToolConfig, Error> {
    let data = fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    serde_json::from_str(&data).map_err(|e| Error::Json {
        path: path.to_path_buf(),
        source: e,
    })
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DetectionSummary {
    width: usize,
    height: usize,
    params: DetectorParams,
    thresholds: Thresholds,
    edge_count: usize,
    timings: StageTimings,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Error> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| Error::InvalidInput("Usage: detect_edges <config.json>".to_string()))?;
    let config = load_config(Path::new(&config_path))?;

    let gray = load_grayscale_image(&config.input)?;
    let detection = detect_edges(&gray.to_f32(), &config.detector)?;

    let map = &detection.edge_map;
    save_gray_bytes(&config.output.edge_map, map.width(), map.height(), map.data())?;

    if let Some(dir) = &config.output.stages_dir {
        save_grayscale_f32(&detection.smoothed, &dir.join("smoothed.png"))?;
        save_grayscale_f32(&detection.magnitude, &dir.join("gradient.png"))?;
        save_grayscale_f32(&detection.suppressed, &dir.join("suppressed.png"))?;
        let bytes = detection.classification.to_bytes();
        save_gray_bytes(&dir.join("threshold.png"), map.width(), map.height(), &bytes)?;
    }

    let summary = DetectionSummary {
        width: map.width(),
        height: map.height(),
        params: config.detector,
        thresholds: detection.thresholds,
        edge_count: map.count_edges(),
        timings: detection.timings,
    };
    write_json_file(&config.output.summary_json, &summary)?;

    println!(
        "Saved edge map ({} edge pixels) to {}",
        summary.edge_count,
        config.output.edge_map.display()
    );
    println!("Saved summary to {}", config.output.summary_json.display());

    Ok(())
}
