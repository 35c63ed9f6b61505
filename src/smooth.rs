//! Separable Gaussian low-pass filter with replicate borders.
//!
//! Design
//! - 1D kernel sampled from `exp(-x²/2σ²)` and normalized to sum 1, applied
//!   horizontally then vertically.
//! - Boundary handling clamps indices (replicate border), so the output
//!   keeps the input's `H×W` shape.
//! - `kernel_size == 1` degenerates to the identity, useful for tests that
//!   need an unfiltered field.
//!
//! Complexity: O(W·H·K) with two 1D passes.
use crate::image::ImageF32;

/// Build the normalized 1D Gaussian kernel of odd length `kernel_size`.
fn gaussian_kernel(kernel_size: usize, sigma: f32) -> Vec<f32> {
    debug_assert!(kernel_size % 2 == 1 && kernel_size > 0);
    let half = (kernel_size / 2) as isize;
    let inv_two_sigma_sq = 1.0 / (2.0 * sigma * sigma);
    let mut kernel: Vec<f32> = (-half..=half)
        .map(|i| {
            let x = i as f32;
            (-x * x * inv_two_sigma_sq).exp()
        })
        .collect();
    let sum: f32 = kernel.iter().sum();
    for v in &mut kernel {
        *v /= sum;
    }
    kernel
}

/// Smooth an intensity field with a `kernel_size × kernel_size` Gaussian of
/// standard deviation `sigma`. Output shape equals input shape.
///
/// `kernel_size` must be odd and positive, `sigma` strictly positive; the
/// pipeline entry point validates both before calling here.
pub fn gaussian_smooth(inp: &ImageF32, kernel_size: usize, sigma: f32) -> ImageF32 {
    let w = inp.w;
    let h = inp.h;
    if w == 0 || h == 0 || kernel_size == 1 {
        return inp.clone();
    }
    let kernel = gaussian_kernel(kernel_size, sigma);
    let half = (kernel_size / 2) as isize;

    // horizontal
    let mut tmp = ImageF32::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, &kv) in kernel.iter().enumerate() {
                let xx = (x as isize + k as isize - half).clamp(0, w as isize - 1) as usize;
                acc += inp.get(xx, y) * kv;
            }
            tmp.set(x, y, acc);
        }
    }

    // vertical
    let mut out = ImageF32::new(w, h);
    for y in 0..h {
        for x in 0..w {
            let mut acc = 0.0;
            for (k, &kv) in kernel.iter().enumerate() {
                let yy = (y as isize + k as isize - half).clamp(0, h as isize - 1) as usize;
                acc += tmp.get(x, yy) * kv;
            }
            out.set(x, y, acc);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kernel_is_normalized_and_symmetric() {
        let k = gaussian_kernel(5, 1.4);
        let sum: f32 = k.iter().sum();
        assert!((sum - 1.0).abs() < 1e-6);
        assert!((k[0] - k[4]).abs() < 1e-7);
        assert!((k[1] - k[3]).abs() < 1e-7);
        assert!(k[2] > k[1] && k[1] > k[0]);
    }

    #[test]
    fn uniform_field_is_preserved() {
        let inp = ImageF32::from_vec(6, 4, vec![120.0; 24]);
        let out = gaussian_smooth(&inp, 5, 1.4);
        assert_eq!(out.w, 6);
        assert_eq!(out.h, 4);
        for &v in &out.data {
            assert!((v - 120.0).abs() < 1e-3);
        }
    }

    #[test]
    fn single_tap_kernel_is_identity() {
        let inp = ImageF32::from_vec(3, 3, (0..9).map(|v| v as f32).collect());
        let out = gaussian_smooth(&inp, 1, 1.4);
        assert_eq!(out.data, inp.data);
    }

    #[test]
    fn output_shape_matches_input() {
        let inp = ImageF32::new(7, 5);
        let out = gaussian_smooth(&inp, 3, 0.8);
        assert_eq!((out.w, out.h), (7, 5));
    }
}
