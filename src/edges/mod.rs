//! The four core edge-detection stages, composed as a strict pipeline:
//!
//! 1. [`grad`] — Sobel gradient magnitude (rescaled to a 255 ceiling) and
//!    folded direction.
//! 2. [`nms`] — direction-aligned non-maximum suppression to one-pixel-wide
//!    ridges.
//! 3. [`threshold`] — strong / weak / none classification from two chained
//!    data-dependent thresholds.
//! 4. [`hysteresis`] — single-pass raster-order weak-edge linking into the
//!    final binary map.
//!
//! Each stage is a pure function from its input arrays to a freshly
//! allocated output of identical spatial dimensions; no stage retains state
//! between invocations. Border pixels are never suppression or linking
//! candidates and end up none/non-edge.

pub mod grad;
pub mod hysteresis;
pub mod nms;
pub mod threshold;

pub use grad::{sobel_gradients, Gradient};
pub use hysteresis::{link_edges, EdgeMap};
pub use nms::suppress;
pub use threshold::{classify, Classification, EdgeClass, Thresholds};
