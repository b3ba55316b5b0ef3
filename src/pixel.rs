//! # Pixel Buffer
//!
//! The encoder's input: a rectangular, row-major grid of RGBA samples.
//!
//! ```text
//! (0,0) ─────────────► x (width)
//!   │  p[0]   p[1]   ... p[w-1]
//!   │  p[w]   p[w+1] ... p[2w-1]
//!   ▼
//!   y (height)          index = y * width + x
//! ```
//!
//! A [`PixelBuffer`] is validated once, at construction. Every packer can
//! therefore assume `pixels.len() == width * height` and never reads out of
//! bounds. Edges are capped at [`MAX_DIMENSION`], so size arithmetic on a
//! valid buffer cannot overflow.
//!
//! ## Example
//!
//! ```
//! use spritepack::pixel::{Pixel, PixelBuffer};
//!
//! let buf = PixelBuffer::filled(8, 2, Pixel::WHITE).unwrap();
//! assert_eq!(buf.len(), 16);
//! assert_eq!(buf.get(7, 1), Pixel::WHITE);
//!
//! // Length mismatches are rejected, never truncated
//! assert!(PixelBuffer::new(4, 4, vec![Pixel::BLACK; 15]).is_err());
//! ```

use image::{Rgba, RgbaImage};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SpritepackError};

/// Largest accepted width or height.
pub const MAX_DIMENSION: usize = 4096;

/// Rec. 709 luma weights.
const LUMA_R: f64 = 0.2126;
const LUMA_G: f64 = 0.7152;
const LUMA_B: f64 = 0.0722;

/// A single straight-alpha RGBA sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const BLACK: Self = Self::rgb(0, 0, 0);
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    pub const TRANSPARENT: Self = Self::rgba(0, 0, 0, 0);

    /// Fully opaque color.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Same value in all three color channels, opaque.
    #[inline]
    pub const fn gray(v: u8) -> Self {
        Self::rgb(v, v, v)
    }

    /// `r + g + b`, used by the monochrome threshold.
    #[inline]
    pub fn channel_sum(&self) -> u16 {
        self.r as u16 + self.g as u16 + self.b as u16
    }

    /// Perceptual brightness in `0.0..=255.0`.
    #[inline]
    pub fn luma(&self) -> f64 {
        LUMA_R * self.r as f64 + LUMA_G * self.g as f64 + LUMA_B * self.b as f64
    }
}

impl From<Rgba<u8>> for Pixel {
    fn from(px: Rgba<u8>) -> Self {
        let [r, g, b, a] = px.0;
        Self { r, g, b, a }
    }
}

impl From<Pixel> for Rgba<u8> {
    fn from(px: Pixel) -> Self {
        Rgba([px.r, px.g, px.b, px.a])
    }
}

/// Validated, immutable grid of pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Pixel>,
}

impl PixelBuffer {
    /// Wrap a row-major pixel vector.
    ///
    /// Fails with [`SpritepackError::InvalidDimensions`] when either side is
    /// zero, [`SpritepackError::DimensionsTooLarge`] above [`MAX_DIMENSION`], and with [`SpritepackError::BufferLengthMismatch`] when the
    /// vector does not hold exactly `width * height` pixels.
    pub fn new(width: usize, height: usize, pixels: Vec<Pixel>) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        if pixels.len() != expected {
            return Err(SpritepackError::BufferLengthMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A buffer where every pixel has the same value.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Result<Self> {
        let count = pixel_count(width, height)?;
        Ok(Self {
            width,
            height,
            pixels: vec![pixel; count],
        })
    }

    /// Build from interleaved `r, g, b, a` bytes (4 bytes per pixel).
    pub fn from_rgba_bytes(width: usize, height: usize, rgba: &[u8]) -> Result<Self> {
        let expected = pixel_count(width, height)?;
        let too_large = SpritepackError::DimensionsTooLarge {
            width,
            height,
            max: MAX_DIMENSION,
        };
        if rgba.len() != expected.checked_mul(4).ok_or(too_large)? {
            return Err(SpritepackError::BufferLengthMismatch {
                expected,
                actual: rgba.len() / 4,
            });
        }
        let pixels = rgba
            .chunks_exact(4)
            .map(|c| Pixel::rgba(c[0], c[1], c[2], c[3]))
            .collect();
        Self::new(width, height, pixels)
    }

    /// Copy the pixels of a decoded image.
    pub fn from_image(img: &RgbaImage) -> Result<Self> {
        let pixels = img.pixels().map(|px| Pixel::from(*px)).collect();
        Self::new(img.width() as usize, img.height() as usize, pixels)
    }

    /// Convert back into an `image` buffer (for PNG previews).
    pub fn to_image(&self) -> RgbaImage {
        let mut img = RgbaImage::new(self.width as u32, self.height as u32);
        for (i, px) in self.pixels.iter().enumerate() {
            let x = (i % self.width) as u32;
            let y = (i / self.width) as u32;
            img.put_pixel(x, y, (*px).into());
        }
        img
    }

    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    /// Always false for a constructed buffer; present for API symmetry.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Pixel at `(x, y)`. Panics when out of bounds, like slice indexing.
    #[inline]
    pub fn get(&self, x: usize, y: usize) -> Pixel {
        self.pixels[y * self.width + x]
    }

    /// One row of pixels, left to right.
    #[inline]
    pub fn row(&self, y: usize) -> &[Pixel] {
        let start = y * self.width;
        &self.pixels[start..start + self.width]
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        self.pixels.chunks_exact(self.width)
    }
}

/// Validate a canvas size and return its pixel count.
///
/// Zero edges are [`SpritepackError::InvalidDimensions`]; edges above
/// [`MAX_DIMENSION`] are [`SpritepackError::DimensionsTooLarge`].
pub fn pixel_count(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(SpritepackError::InvalidDimensions { width, height });
    }
    let too_large = SpritepackError::DimensionsTooLarge {
        width,
        height,
        max: MAX_DIMENSION,
    };
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(too_large);
    }
    width.checked_mul(height).ok_or(too_large)
}
