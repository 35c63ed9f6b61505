//! Hysteresis edge linking over the classified byte field.
//!
//! A single raster-order pass walks the interior of a mutable copy of the
//! combined byte array (strong 255, weak 25, none 0). A weak cell is
//! promoted to an edge if any cell of its 3×3 window is 255 at the moment
//! the cell is visited, and discarded otherwise.
//!
//! Because the pass mutates in place, a promotion can cascade to weak cells
//! below/right of it within the same pass, while weak cells above/left of a
//! not-yet-promoted cell never see that promotion. This is a partial,
//! order-dependent propagation, not connected-component linking; the scan
//! order is part of the contract and must stay row-major. Do not replace it
//! with a fixed-point flood fill.
use super::threshold::{Classification, WEAK_BYTE};

/// Final binary edge map: 255 = edge, 0 = non-edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeMap {
    w: usize,
    h: usize,
    data: Vec<u8>,
}

impl EdgeMap {
    pub fn width(&self) -> usize {
        self.w
    }

    pub fn height(&self) -> usize {
        self.h
    }

    /// Raw bytes in row-major order, each 0 or 255.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn is_edge(&self, x: usize, y: usize) -> bool {
        self.data[y * self.w + x] == 255
    }

    /// Number of edge pixels in the map.
    pub fn count_edges(&self) -> usize {
        self.data.iter().filter(|&&v| v == 255).count()
    }
}

/// Link weak edges to strong ones in a single raster-order pass.
///
/// Strong cells always survive, none cells never do, border cells are
/// always non-edge.
pub fn link_edges(classification: &Classification) -> EdgeMap {
    let w = classification.width();
    let h = classification.height();
    let mut bytes = classification.to_bytes();

    if w >= 3 && h >= 3 {
        for y in 1..h - 1 {
            for x in 1..w - 1 {
                if bytes[y * w + x] != WEAK_BYTE {
                    continue;
                }
                let mut supported = false;
                'window: for yy in y - 1..=y + 1 {
                    for xx in x - 1..=x + 1 {
                        if bytes[yy * w + xx] == 255 {
                            supported = true;
                            break 'window;
                        }
                    }
                }
                bytes[y * w + x] = if supported { 255 } else { 0 };
            }
        }
    }

    // Binarize: unvisited weak cells sit on the border and are dropped with
    // everything else that is not strong.
    for (i, v) in bytes.iter_mut().enumerate() {
        let x = i % w;
        let y = i / w;
        let border = x == 0 || y == 0 || x + 1 == w || y + 1 == h;
        *v = if *v == 255 && !border { 255 } else { 0 };
    }

    EdgeMap { w, h, data: bytes }
}
