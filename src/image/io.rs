//! I/O helpers for grayscale images and JSON reports.
//!
//! - `load_grayscale_image`: read a PNG/JPEG/etc. into an owned 8-bit gray buffer.
//! - `save_grayscale_f32`: write an `ImageF32` (values in [0, 255]) to a grayscale PNG.
//! - `save_gray_bytes`: write a raw 8-bit gray buffer to a PNG.
//! - `write_json_file`: pretty-print a serializable value to disk.
//!
//! All save helpers create parent directories as needed.
use super::{GrayImageU8, ImageF32, ImageView};
use crate::error::Error;
use image::{DynamicImage, GrayImage, ImageBuffer, Luma};
use serde::Serialize;
use std::fs;
use std::path::Path;

/// Load an image from disk and convert to 8-bit grayscale.
pub fn load_grayscale_image(path: &Path) -> Result<GrayImageU8, Error> {
    if !path.exists() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let img = image::open(path)
        .map_err(|e| Error::Decode {
            path: path.to_path_buf(),
            source: e,
        })?
        .into_luma8();
    let width = img.width() as usize;
    let height = img.height() as usize;
    Ok(GrayImageU8::new(width, height, img.into_raw()))
}

/// Save a float image to a grayscale PNG, clamping values to [0, 255].
pub fn save_grayscale_f32(image: &ImageF32, path: &Path) -> Result<(), Error> {
    ensure_parent_dir(path)?;
    let mut out = GrayImage::new(image.w as u32, image.h as u32);
    for y in 0..image.h {
        let row = image.row(y);
        for (x, &px) in row.iter().enumerate() {
            let v = px.clamp(0.0, 255.0);
            out.put_pixel(x as u32, y as u32, Luma([v as u8]));
        }
    }
    out.save(path).map_err(|e| Error::Encode {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save a raw 8-bit gray buffer (row-major, `width × height`) to a PNG.
pub fn save_gray_bytes(path: &Path, width: usize, height: usize, data: &[u8]) -> Result<(), Error> {
    ensure_parent_dir(path)?;
    let image: ImageBuffer<Luma<u8>, Vec<u8>> =
        ImageBuffer::from_raw(width as u32, height as u32, data.to_vec()).ok_or_else(|| {
            Error::InvalidInput(format!(
                "buffer length {} does not match {}x{}",
                data.len(),
                width,
                height
            ))
        })?;
    DynamicImage::ImageLuma8(image)
        .save(path)
        .map_err(|e| Error::Encode {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Serialize a value as pretty JSON to `path`, creating parent directories.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<(), Error> {
    ensure_parent_dir(path)?;
    let json = serde_json::to_string_pretty(value).map_err(|e| Error::Json {
        path: path.to_path_buf(),
        source: e,
    })?;
    fs::write(path, json).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })
}

fn ensure_parent_dir(path: &Path) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| Error::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }
    Ok(())
}
