// Decode/encode glue between external image containers and the engine's
// `PixelBuffer`. The engine itself never touches files or formats; this layer
// converts whatever the `image` crate decodes down to opaque 8-bit RGB (any
// alpha channel is dropped here, before a buffer enters the engine) and packs
// results back out through the public accessor contract.

use crate::core_modules::color::color::Color;
use crate::core_modules::pixel_buffer::PixelBuffer;
use crate::error::PictureError;
use image::ExtendedColorType;
use std::path::Path;
use thiserror::Error;

/// Failures at the container boundary. Kept apart from `PictureError` so the
/// engine's own taxonomy stays free of file and format concerns.
#[derive(Debug, Error)]
pub enum CodecError {
    #[error(transparent)]
    Image(#[from] image::ImageError),
    #[error(transparent)]
    Picture(#[from] PictureError),
}

/// Decodes the image at `path` into a pixel buffer, populating every
/// coordinate through the buffer's `set` contract.
pub fn load(path: impl AsRef<Path>) -> Result<PixelBuffer, CodecError> {
    let decoded = image::open(path)?.to_rgb8();
    let mut buffer =
        PixelBuffer::with_dimensions(i64::from(decoded.width()), i64::from(decoded.height()))?;
    for (x, y, pixel) in decoded.enumerate_pixels() {
        buffer.set(x, y, Color::from(pixel.0))?;
    }
    Ok(buffer)
}

/// Encodes the buffer to `path`, format inferred from the extension
/// (PNG and JPEG are the expected containers). Output is always opaque RGB.
pub fn save(buffer: &PixelBuffer, path: impl AsRef<Path>) -> Result<(), CodecError> {
    let (width, height) = (buffer.width(), buffer.height());
    let mut bytes = Vec::with_capacity(width as usize * height as usize * 3);
    for y in 0..height {
        for x in 0..width {
            bytes.extend_from_slice(&buffer.get(x, y)?.channels());
        }
    }
    image::save_buffer(path, &bytes, width, height, ExtendedColorType::Rgb8)?;
    Ok(())
}
