//! Non-maximum suppression on gradient magnitude with direction alignment.
//!
//! Thins the magnitude field to one-pixel-wide ridges: each interior pixel
//! survives only if its magnitude is at least as large as both neighbors
//! along the quantized gradient direction.
//!
//! - The direction angle (degrees, [0, 180]) selects one of four neighbor
//!   pairs by half-open sector; the exact sector boundaries matter on
//!   near-diagonal edges and must not be shifted.
//! - Ties keep the pixel (`>=`, not `>`), so plateaus of equal magnitude
//!   survive rather than vanishing entirely.
//! - The outermost 1-pixel frame is always zero; its 3×3 neighborhood is
//!   undefined.
use crate::image::{ImageF32, ImageView, ImageViewMut};

/// Suppress non-maximal magnitudes along the gradient direction.
///
/// Every output cell is either 0 or exactly the input magnitude at that
/// cell; no values are invented. Border cells are always 0.
pub fn suppress(magnitude: &ImageF32, direction: &ImageF32) -> ImageF32 {
    assert_eq!(
        (magnitude.w, magnitude.h),
        (direction.w, direction.h),
        "magnitude and direction must share dimensions"
    );
    let w = magnitude.w;
    let h = magnitude.h;
    let mut suppressed = ImageF32::new(w, h);
    if w < 3 || h < 3 {
        return suppressed;
    }

    for y in 1..h - 1 {
        let mag_prev = magnitude.row(y - 1);
        let mag_row = magnitude.row(y);
        let mag_next = magnitude.row(y + 1);
        let dir_row = direction.row(y);
        let out_row = suppressed.row_mut(y);

        for x in 1..w - 1 {
            let angle = dir_row[x].to_degrees();

            let (neighbor1, neighbor2) = if !(22.5..157.5).contains(&angle) {
                // [0, 22.5) ∪ [157.5, 180]: horizontal
                (mag_row[x - 1], mag_row[x + 1])
            } else if angle < 67.5 {
                // [22.5, 67.5): anti-diagonal
                (mag_prev[x + 1], mag_next[x - 1])
            } else if angle < 112.5 {
                // [67.5, 112.5): vertical
                (mag_prev[x], mag_next[x])
            } else {
                // [112.5, 157.5): diagonal
                (mag_prev[x - 1], mag_next[x + 1])
            };

            let mag = mag_row[x];
            if mag >= neighbor1 && mag >= neighbor2 {
                out_row[x] = mag;
            }
        }
    }

    suppressed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mag3x3(center: f32, neighbors: [[f32; 3]; 3]) -> ImageF32 {
        let mut data: Vec<f32> = neighbors.iter().flatten().copied().collect();
        data[4] = center;
        ImageF32::from_vec(3, 3, data)
    }

    fn dir3x3(angle_deg: f32) -> ImageF32 {
        ImageF32::from_vec(3, 3, vec![angle_deg.to_radians(); 9])
    }

    #[test]
    fn borders_are_always_zero() {
        let mag = ImageF32::from_vec(4, 4, vec![10.0; 16]);
        let dir = ImageF32::new(4, 4);
        let out = suppress(&mag, &dir);
        for y in 0..4 {
            for x in 0..4 {
                if y == 0 || y == 3 || x == 0 || x == 3 {
                    assert_eq!(out.get(x, y), 0.0);
                }
            }
        }
    }

    #[test]
    fn horizontal_sector_compares_left_and_right() {
        let mag = mag3x3(5.0, [[9.0, 9.0, 9.0], [4.0, 0.0, 6.0], [9.0, 9.0, 9.0]]);
        // 6.0 to the right beats the center despite weaker rows above/below.
        assert_eq!(suppress(&mag, &dir3x3(0.0)).get(1, 1), 0.0);

        let mag = mag3x3(7.0, [[9.0, 9.0, 9.0], [4.0, 0.0, 6.0], [9.0, 9.0, 9.0]]);
        assert_eq!(suppress(&mag, &dir3x3(0.0)).get(1, 1), 7.0);
    }

    #[test]
    fn vertical_sector_compares_above_and_below() {
        let mag = mag3x3(5.0, [[9.0, 4.0, 9.0], [9.0, 0.0, 9.0], [9.0, 6.0, 9.0]]);
        assert_eq!(suppress(&mag, &dir3x3(90.0)).get(1, 1), 0.0);

        let mag = mag3x3(6.5, [[9.0, 4.0, 9.0], [9.0, 0.0, 9.0], [9.0, 6.0, 9.0]]);
        assert_eq!(suppress(&mag, &dir3x3(90.0)).get(1, 1), 6.5);
    }

    #[test]
    fn anti_diagonal_sector_compares_upper_right_and_lower_left() {
        let mag = mag3x3(5.0, [[0.0, 0.0, 6.0], [0.0, 0.0, 0.0], [4.0, 0.0, 0.0]]);
        assert_eq!(suppress(&mag, &dir3x3(45.0)).get(1, 1), 0.0);

        let mag = mag3x3(6.0, [[0.0, 0.0, 6.0], [0.0, 0.0, 0.0], [4.0, 0.0, 0.0]]);
        assert_eq!(suppress(&mag, &dir3x3(45.0)).get(1, 1), 6.0);
    }

    #[test]
    fn diagonal_sector_compares_upper_left_and_lower_right() {
        let mag = mag3x3(5.0, [[6.0, 0.0, 0.0], [0.0, 0.0, 0.0], [0.0, 0.0, 4.0]]);
        assert_eq!(suppress(&mag, &dir3x3(135.0)).get(1, 1), 0.0);
    }

    #[test]
    fn sector_boundaries_are_half_open() {
        // Exactly 22.5° belongs to the anti-diagonal sector, not horizontal:
        // the weak left/right neighbors would keep the pixel, but the
        // upper-right neighbor suppresses it.
        let mag = mag3x3(5.0, [[0.0, 0.0, 6.0], [1.0, 0.0, 1.0], [4.0, 0.0, 0.0]]);
        assert_eq!(suppress(&mag, &dir3x3(22.5)).get(1, 1), 0.0);
        // Exactly 157.5° belongs to the horizontal sector.
        let mag = mag3x3(5.0, [[6.0, 0.0, 0.0], [1.0, 0.0, 1.0], [0.0, 0.0, 6.0]]);
        assert_eq!(suppress(&mag, &dir3x3(157.5)).get(1, 1), 5.0);
    }

    #[test]
    fn ties_keep_the_pixel() {
        let mag = mag3x3(6.0, [[0.0, 0.0, 0.0], [6.0, 0.0, 6.0], [0.0, 0.0, 0.0]]);
        assert_eq!(suppress(&mag, &dir3x3(0.0)).get(1, 1), 6.0);
    }

    #[test]
    fn no_values_are_invented() {
        let mut mag = ImageF32::new(5, 5);
        let mut dir = ImageF32::new(5, 5);
        for y in 0..5 {
            for x in 0..5 {
                mag.set(x, y, ((x * 7 + y * 3) % 11) as f32);
                dir.set(x, y, ((x + y) as f32 * 0.35) % std::f32::consts::PI);
            }
        }
        let out = suppress(&mag, &dir);
        for y in 0..5 {
            for x in 0..5 {
                let v = out.get(x, y);
                assert!(v == 0.0 || v == mag.get(x, y));
            }
        }
    }
}
