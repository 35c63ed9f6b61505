//! Image gradients (Sobel) with normalized magnitude and folded direction.
//!
//! - Convolves the classic 3×3 Sobel pair (`X` and `Y`) with border clamping
//!   (replicate), keeping the input's `H×W` shape.
//! - Outputs per-pixel magnitude `sqrt(Ix² + Iy²)` rescaled so the global
//!   maximum is exactly 255, and direction `atan2(Iy, Ix)` with negative
//!   angles folded by +π into [0, π] (direction is a ridge orientation,
//!   not a signed vector).
//! - A uniform input yields an all-zero magnitude; rescaling is skipped so
//!   no division by zero occurs.
//!
//! The rescale ceiling of 255 is what the threshold stage's ratios are
//! defined against; downstream code relies on it.
//!
//! Complexity: O(W·H); memory: two float buffers.
use crate::image::{ImageF32, ImageView};

type Kernel3 = [[f32; 3]; 3];

const SOBEL_KERNEL_X: Kernel3 = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];
const SOBEL_KERNEL_Y: Kernel3 = [[1.0, 2.0, 1.0], [0.0, 0.0, 0.0], [-1.0, -2.0, -1.0]];

/// Magnitude ceiling after rescaling.
pub const MAGNITUDE_CEILING: f32 = 255.0;

/// Per-pixel gradient magnitude and direction.
#[derive(Clone, Debug)]
pub struct Gradient {
    /// Edge strength per pixel, rescaled so `max == 255` (all zero for a
    /// uniform input)
    pub magnitude: ImageF32,
    /// Ridge orientation per pixel in radians, range [0, π]
    pub direction: ImageF32,
}

/// Compute one output row of raw magnitude and folded direction.
fn fill_row(l: &ImageF32, y: usize, mag_row: &mut [f32], dir_row: &mut [f32]) {
    let w = l.w;
    let h = l.h;
    let y_idx = [y.saturating_sub(1), y, (y + 1).min(h - 1)];
    let rows = [l.row(y_idx[0]), l.row(y_idx[1]), l.row(y_idx[2])];
    for x in 0..w {
        let x_idx = [x.saturating_sub(1), x, (x + 1).min(w - 1)];

        let mut sum_x = 0.0;
        let mut sum_y = 0.0;
        for (ky, row) in rows.iter().enumerate() {
            let kx_row = &SOBEL_KERNEL_X[ky];
            let ky_row = &SOBEL_KERNEL_Y[ky];
            sum_x += row[x_idx[0]] * kx_row[0]
                + row[x_idx[1]] * kx_row[1]
                + row[x_idx[2]] * kx_row[2];
            sum_y += row[x_idx[0]] * ky_row[0]
                + row[x_idx[1]] * ky_row[1]
                + row[x_idx[2]] * ky_row[2];
        }

        mag_row[x] = (sum_x * sum_x + sum_y * sum_y).sqrt();
        let mut angle = sum_y.atan2(sum_x);
        if angle < 0.0 {
            angle += std::f32::consts::PI;
        }
        dir_row[x] = angle;
    }
}

/// Compute Sobel gradients on a single-channel float image.
pub fn sobel_gradients(l: &ImageF32) -> Gradient {
    let w = l.w;
    let h = l.h;
    let mut magnitude = ImageF32::new(w, h);
    let mut direction = ImageF32::new(w, h);
    if w == 0 || h == 0 {
        return Gradient {
            magnitude,
            direction,
        };
    }

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        magnitude
            .data
            .par_chunks_mut(w)
            .zip(direction.data.par_chunks_mut(w))
            .enumerate()
            .for_each(|(y, (mag_row, dir_row))| fill_row(l, y, mag_row, dir_row));
    }
    #[cfg(not(feature = "parallel"))]
    for y in 0..h {
        let start = y * w;
        let (mag_row, dir_row) = (
            &mut magnitude.data[start..start + w],
            &mut direction.data[start..start + w],
        );
        fill_row(l, y, mag_row, dir_row);
    }

    // Rescale so the global maximum is exactly the ceiling. Dividing by the
    // max first keeps the peak value bit-exact at 255.
    let max = magnitude.max_value();
    if max > 0.0 {
        for v in &mut magnitude.data {
            *v = *v / max * MAGNITUDE_CEILING;
        }
    }

    Gradient {
        magnitude,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_step(w: usize, h: usize) -> ImageF32 {
        let mut img = ImageF32::new(w, h);
        for y in 0..h {
            for x in w / 2..w {
                img.set(x, y, 200.0);
            }
        }
        img
    }

    #[test]
    fn output_dimensions_match_input() {
        let grad = sobel_gradients(&ImageF32::new(9, 6));
        assert_eq!((grad.magnitude.w, grad.magnitude.h), (9, 6));
        assert_eq!((grad.direction.w, grad.direction.h), (9, 6));
    }

    #[test]
    fn uniform_input_gives_zero_magnitude() {
        let img = ImageF32::from_vec(5, 5, vec![77.0; 25]);
        let grad = sobel_gradients(&img);
        assert!(grad.magnitude.data.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn rescaled_maximum_is_exactly_ceiling() {
        let grad = sobel_gradients(&vertical_step(8, 8));
        assert_eq!(grad.magnitude.max_value(), MAGNITUDE_CEILING);
    }

    #[test]
    fn direction_is_folded_into_half_turn() {
        let grad = sobel_gradients(&vertical_step(8, 8));
        for &a in &grad.direction.data {
            assert!((0.0..=std::f32::consts::PI).contains(&a), "angle {a}");
        }
    }

    #[test]
    fn vertical_step_direction_is_horizontal() {
        // Rows are identical, so Iy == 0 and the gradient points along x.
        let grad = sobel_gradients(&vertical_step(8, 8));
        let a = grad.direction.get(4, 4);
        let horizontal = a < 1e-4 || (std::f32::consts::PI - a) < 1e-4;
        assert!(horizontal, "angle {a}");
    }
}
