use canny_detector::image::ImageF32;

/// Generates a uniform intensity field.
pub fn uniform_f32(width: usize, height: usize, value: f32) -> ImageF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    ImageF32::from_vec(width, height, vec![value; width * height])
}

/// Generates a vertical step edge: columns left of `step_x` hold `left`,
/// the rest hold `right`.
pub fn vertical_step_f32(width: usize, height: usize, step_x: usize, left: f32, right: f32) -> ImageF32 {
    assert!(width > 0 && height > 0, "image dimensions must be positive");
    assert!(step_x < width, "step column must lie inside the image");

    let mut img = ImageF32::new(width, height);
    for y in 0..height {
        for x in 0..width {
            img.set(x, y, if x < step_x { left } else { right });
        }
    }
    img
}
