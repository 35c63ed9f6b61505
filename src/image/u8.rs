//! Owned 8-bit grayscale buffer, the decode-side counterpart of `ImageF32`.
use super::ImageF32;

#[derive(Clone, Debug)]
pub struct GrayImageU8 {
    width: usize,
    height: usize,
    stride: usize,
    data: Vec<u8>,
}

impl GrayImageU8 {
    /// Construct an owned grayscale buffer from raw row-major bytes.
    /// Panics if the length does not match `width × height`.
    pub fn new(width: usize, height: usize, data: Vec<u8>) -> Self {
        assert_eq!(
            data.len(),
            width * height,
            "buffer length must equal width * height"
        );
        Self {
            width,
            height,
            stride: width,
            data,
        }
    }

    /// Image width in pixels
    pub fn width(&self) -> usize {
        self.width
    }

    /// Image height in pixels
    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw bytes in row-major order
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Convert to an f32 intensity field in the [0, 255] range.
    pub fn to_f32(&self) -> ImageF32 {
        let data = self.data.iter().map(|&v| v as f32).collect();
        ImageF32::from_vec(self.width, self.height, data)
    }
}

impl crate::image::traits::ImageView for GrayImageU8 {
    type Pixel = u8;

    #[inline]
    fn width(&self) -> usize {
        self.width
    }
    #[inline]
    fn height(&self) -> usize {
        self.height
    }
    #[inline]
    fn stride(&self) -> usize {
        self.stride
    }
    #[inline]
    fn row(&self, y: usize) -> &[u8] {
        let start = y * self.stride;
        &self.data[start..start + self.width]
    }
    #[inline]
    fn as_slice(&self) -> Option<&[u8]> {
        (self.stride == self.width).then_some(&self.data[..self.width * self.height])
    }
}
