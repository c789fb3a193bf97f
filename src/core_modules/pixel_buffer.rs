// THEORY:
// The `PixelBuffer` is the engine's in-memory raster representation: a dense
// row-major grid of `Color` values with explicit width and height. It is the
// single data structure every transform consumes and produces.
//
// Key architectural principles:
// 1.  **Exclusive Ownership**: A buffer owns its pixel store outright. Transforms
//     read their inputs through shared references and allocate fresh output
//     buffers, so no two buffers ever alias mutable state.
// 2.  **Checked Boundary, Unchecked Interior**: The public `get`/`set` contract
//     is bounds-checked and surfaces `OutOfBounds` immediately. The transform
//     catalog, whose loops are valid by construction, goes through crate-private
//     direct accessors instead of paying the check per pixel.
// 3.  **Structural Identity**: Equality and hashing are defined purely over
//     dimensions and pixel content, never over object identity. `content_hash`
//     is a fixed polynomial accumulation, so equal buffers always hash equally.

use crate::core_modules::color::color::Color;
use crate::error::PictureError;
use std::fmt;

/// A dense, row-major grid of opaque RGB pixels.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    /// The width of the grid in pixels.
    width: u32,
    /// The height of the grid in pixels.
    height: u32,
    /// Flattened pixel store, `width * height` entries, row by row.
    pixels: Vec<Color>,
}

impl PixelBuffer {
    /// Creates a blank buffer of the given dimensions with every pixel black.
    pub fn new(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;
        Self {
            width,
            height,
            pixels: vec![Color::BLACK; len],
        }
    }

    /// Validating constructor for dimensions arriving from outside the engine
    /// (parsed arguments, decoded headers). Internal dimensions are unsigned,
    /// so the negativity check lives here, where signed input enters.
    pub fn with_dimensions(width: i64, height: i64) -> Result<Self, PictureError> {
        let valid = |v: i64| u32::try_from(v).ok();
        match (valid(width), valid(height)) {
            (Some(w), Some(h)) => Ok(Self::new(w, h)),
            _ => Err(PictureError::InvalidDimension { width, height }),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tests whether the point lies within the boundaries of this buffer.
    pub fn contains(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the color at `(x, y)`, or `OutOfBounds` if the coordinate lies
    /// outside the buffer's extent.
    pub fn get(&self, x: u32, y: u32) -> Result<Color, PictureError> {
        if !self.contains(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        Ok(self.pixels[self.offset(x, y)])
    }

    /// Overwrites the color at `(x, y)` in place. Same bounds contract as `get`.
    pub fn set(&mut self, x: u32, y: u32, color: Color) -> Result<(), PictureError> {
        if !self.contains(x, y) {
            return Err(self.out_of_bounds(x, y));
        }
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
        Ok(())
    }

    /// Deterministic structural hash: polynomial accumulation with multiplier
    /// 31 over packed `0xRRGGBB` pixel values, columns outermost. The traversal
    /// order is fixed forever; equal buffers always produce equal hashes.
    pub fn content_hash(&self) -> u64 {
        let mut hash = 0u64;
        for x in 0..self.width {
            for y in 0..self.height {
                let color = self.at(x, y);
                let packed = (u64::from(color.red) << 16)
                    | (u64::from(color.green) << 8)
                    | u64::from(color.blue);
                hash = hash.wrapping_mul(31).wrapping_add(packed);
            }
        }
        hash
    }

    /// Inverts every pixel of this buffer in place. Explicitly named mutating
    /// variant for callers that own the buffer and want to skip the allocation;
    /// the pure `transforms::invert` is the default contract.
    pub fn invert_in_place(&mut self) {
        for pixel in &mut self.pixels {
            *pixel = pixel.invert();
        }
    }

    /// In-place counterpart of `transforms::grayscale`, same truncating
    /// channel-average semantics.
    pub fn grayscale_in_place(&mut self) {
        for pixel in &mut self.pixels {
            let avg = ((u16::from(pixel.red) + u16::from(pixel.green) + u16::from(pixel.blue))
                / 3) as u8;
            *pixel = Color::new(avg, avg, avg);
        }
    }

    /// Direct read for loops that are in bounds by construction.
    pub(crate) fn at(&self, x: u32, y: u32) -> Color {
        debug_assert!(self.contains(x, y));
        self.pixels[self.offset(x, y)]
    }

    /// Direct write counterpart of `at`.
    pub(crate) fn put(&mut self, x: u32, y: u32, color: Color) {
        debug_assert!(self.contains(x, y));
        let offset = self.offset(x, y);
        self.pixels[offset] = color;
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    fn out_of_bounds(&self, x: u32, y: u32) -> PictureError {
        PictureError::OutOfBounds {
            x,
            y,
            width: self.width,
            height: self.height,
        }
    }
}

impl fmt::Display for PixelBuffer {
    /// Renders the channel grid one row per line, e.g. `(255,0,0)(0,255,0)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let color = self.at(x, y);
                write!(f, "({},{},{})", color.red, color.green, color.blue)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
