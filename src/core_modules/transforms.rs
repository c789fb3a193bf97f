// THEORY:
// The `transforms` module is the engine's catalog of raster operations. Every
// function here is pure: it reads one or more `PixelBuffer`s through shared
// references, allocates the output at the dimensions its rule dictates, fills
// every output pixel, and hands the result back. Inputs are never mutated and
// a failed transform never returns a partial buffer.
//
// Key architectural principles:
// 1.  **Coordinate Remapping**: The geometric operations (rotations, flips) are
//     pure index arithmetic. Each output pixel is a single input pixel read at
//     a remapped coordinate, which makes the loops trivially row-parallel.
// 2.  **Truncating Integer Averages**: Grayscale, blend and blur all average
//     channels in widened integer arithmetic and truncate on division. The
//     results are bit-exact and reproducible across platforms.
// 3.  **Dimension Reconciliation**: The multi-source operations (blend, mosaic)
//     take the minimum width and minimum height independently across their
//     inputs, so no input pixel outside any source's bounds is ever read.
//     Mosaic additionally crops to a multiple of the tile size.

use crate::core_modules::color::color::Color;
use crate::core_modules::pixel_buffer::PixelBuffer;
use crate::error::PictureError;

/// Inverts every channel of every pixel.
pub fn invert(input: &PixelBuffer) -> PixelBuffer {
    map_pixels(input, Color::invert)
}

/// Replaces every pixel with the truncating mean of its three channels,
/// replicated to red, green and blue.
pub fn grayscale(input: &PixelBuffer) -> PixelBuffer {
    map_pixels(input, |color| {
        let avg =
            ((u16::from(color.red) + u16::from(color.green) + u16::from(color.blue)) / 3) as u8;
        Color::new(avg, avg, avg)
    })
}

/// Rotates 90 degrees clockwise. A `W x H` input becomes `H x W`.
pub fn rotate90(input: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (input.width(), input.height());
    let mut out = PixelBuffer::new(h, w);
    for x in 0..w {
        for y in 0..h {
            out.put(h - 1 - y, x, input.at(x, y));
        }
    }
    out
}

/// Rotates 180 degrees. Dimensions are preserved.
pub fn rotate180(input: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (input.width(), input.height());
    let mut out = PixelBuffer::new(w, h);
    for x in 0..w {
        for y in 0..h {
            out.put(x, y, input.at(w - 1 - x, h - 1 - y));
        }
    }
    out
}

/// Rotates 270 degrees clockwise. A `W x H` input becomes `H x W`.
pub fn rotate270(input: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (input.width(), input.height());
    let mut out = PixelBuffer::new(h, w);
    for x in 0..w {
        for y in 0..h {
            out.put(y, w - 1 - x, input.at(x, y));
        }
    }
    out
}

/// Mirrors across the vertical axis: `out[x, y] = in[W-1-x, y]`.
pub fn flip_horizontal(input: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (input.width(), input.height());
    let mut out = PixelBuffer::new(w, h);
    for x in 0..w {
        for y in 0..h {
            out.put(x, y, input.at(w - 1 - x, y));
        }
    }
    out
}

/// Mirrors across the horizontal axis: `out[x, y] = in[x, H-1-y]`.
pub fn flip_vertical(input: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (input.width(), input.height());
    let mut out = PixelBuffer::new(w, h);
    for x in 0..w {
        for y in 0..h {
            out.put(x, y, input.at(x, h - 1 - y));
        }
    }
    out
}

/// Averages all inputs pixel by pixel. The output takes the minimum width and
/// minimum height across the inputs; each channel is the truncating mean over
/// the input count. Fails with `InvalidArgument` on an empty list.
pub fn blend(inputs: &[PixelBuffer]) -> Result<PixelBuffer, PictureError> {
    let (min_width, min_height) = minimum_dimensions(inputs, "blend")?;
    let count = inputs.len() as u32;
    let mut out = PixelBuffer::new(min_width, min_height);
    for x in 0..min_width {
        for y in 0..min_height {
            let mut total_red = 0u32;
            let mut total_green = 0u32;
            let mut total_blue = 0u32;
            for input in inputs {
                let pixel = input.at(x, y);
                total_red += u32::from(pixel.red);
                total_green += u32::from(pixel.green);
                total_blue += u32::from(pixel.blue);
            }
            out.put(
                x,
                y,
                Color::new(
                    (total_red / count) as u8,
                    (total_green / count) as u8,
                    (total_blue / count) as u8,
                ),
            );
        }
    }
    Ok(out)
}

/// 3x3 box blur. Interior pixels become the truncating mean of their 3x3
/// neighborhood including self; border pixels are copied unchanged. On buffers
/// smaller than 3x3 every pixel is a border pixel, so the output equals the
/// input.
pub fn blur(input: &PixelBuffer) -> PixelBuffer {
    let (w, h) = (input.width(), input.height());
    let mut out = PixelBuffer::new(w, h);
    for x in 0..w {
        for y in 0..h {
            let interior = x > 0 && x < w - 1 && y > 0 && y < h - 1;
            if !interior {
                out.put(x, y, input.at(x, y));
                continue;
            }
            let mut total_red = 0u32;
            let mut total_green = 0u32;
            let mut total_blue = 0u32;
            for nx in (x - 1)..=(x + 1) {
                for ny in (y - 1)..=(y + 1) {
                    let pixel = input.at(nx, ny);
                    total_red += u32::from(pixel.red);
                    total_green += u32::from(pixel.green);
                    total_blue += u32::from(pixel.blue);
                }
            }
            out.put(
                x,
                y,
                Color::new(
                    (total_red / 9) as u8,
                    (total_green / 9) as u8,
                    (total_blue / 9) as u8,
                ),
            );
        }
    }
    out
}

/// Tiles the output with `tile_size x tile_size` squares, each sourced whole
/// from one input. The tile at grid position `(tx, ty)` copies input
/// `(tx + ty) % n` at the same absolute coordinates. The output is the minimum
/// input dimensions cropped down to a multiple of the tile size. Fails with
/// `InvalidArgument` on an empty list or a zero tile size.
pub fn mosaic(inputs: &[PixelBuffer], tile_size: u32) -> Result<PixelBuffer, PictureError> {
    if tile_size == 0 {
        return Err(PictureError::InvalidArgument(
            "mosaic tile size must be positive".into(),
        ));
    }
    let (min_width, min_height) = minimum_dimensions(inputs, "mosaic")?;
    let out_width = min_width - min_width % tile_size;
    let out_height = min_height - min_height % tile_size;
    let count = inputs.len() as u32;
    let mut out = PixelBuffer::new(out_width, out_height);
    for x in 0..out_width {
        for y in 0..out_height {
            let source = ((x / tile_size + y / tile_size) % count) as usize;
            out.put(x, y, inputs[source].at(x, y));
        }
    }
    Ok(out)
}

/// The smallest width and smallest height across the inputs, taken
/// independently. The inputs need not share dimensions.
fn minimum_dimensions(
    inputs: &[PixelBuffer],
    operation: &str,
) -> Result<(u32, u32), PictureError> {
    let first = inputs.first().ok_or_else(|| {
        PictureError::InvalidArgument(format!("{operation} requires at least one input"))
    })?;
    let mut min_width = first.width();
    let mut min_height = first.height();
    for input in inputs {
        min_width = min_width.min(input.width());
        min_height = min_height.min(input.height());
    }
    Ok((min_width, min_height))
}

/// Shared per-pixel loop for the photometric operations. Each output pixel
/// depends on exactly one input pixel.
fn map_pixels(input: &PixelBuffer, f: impl Fn(Color) -> Color) -> PixelBuffer {
    let (w, h) = (input.width(), input.height());
    let mut out = PixelBuffer::new(w, h);
    for x in 0..w {
        for y in 0..h {
            out.put(x, y, f(input.at(x, y)));
        }
    }
    out
}
