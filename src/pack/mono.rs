//! # 1-Bit Packing
//!
//! Monochrome bitmaps for OLED/LCD controllers and GFX `drawBitmap`.
//!
//! ## Bit Packing
//!
//! Each bit represents one pixel, most significant bit first:
//! - Bit 7 (MSB) = first pixel of the group
//! - Bit 0 (LSB) = eighth pixel of the group
//! - 1 = on (lit), 0 = off
//!
//! ```text
//! Byte value 0xF0 = 11110000 = ████░░░░
//! Byte value 0xAA = 10101010 = █░█░█░█░
//! ```
//!
//! ## Horizontal Layout
//!
//! Rows top to bottom, 8 horizontally adjacent pixels per byte. Every row
//! starts a fresh byte; a partial last byte is padded with zero bits.
//!
//! ```text
//! width = 10:   row 0 → [x0..x7] [x8 x9 0 0 0 0 0 0]
//!               row 1 → [x0..x7] [x8 x9 0 0 0 0 0 0]
//! bytes/row = ceil(width / 8)
//! ```
//!
//! ## Vertical Layout
//!
//! Column by column, 8 vertically adjacent pixels (a "page") per byte, bit 7
//! at the top of the page. Rows past the bottom edge contribute zero bits.
//!
//! ```text
//! column 0: page 0 (y0..y7), page 1 (y8..y15), ...
//! column 1: page 0, page 1, ...
//! bytes = width * ceil(height / 8)
//! ```
//!
//! ## Thresholds
//!
//! | Packer | Pixel is on when |
//! |--------|------------------|
//! | [`pack_1bit`] | `r + g + b > 381` (alpha ignored) |
//! | [`pack_1bit_alpha`] | `a > 127` (color ignored) |

use crate::mode::Orientation;
use crate::pixel::{Pixel, PixelBuffer};

/// Half of `3 * 255`.
const LIT_THRESHOLD: u16 = 381;

/// Half of 255.
const OPAQUE_THRESHOLD: u8 = 127;

/// Brightness predicate for monochrome packing.
#[inline]
pub fn is_lit(p: &Pixel) -> bool {
    p.channel_sum() > LIT_THRESHOLD
}

/// Opacity predicate for alpha masks.
#[inline]
pub fn is_opaque(p: &Pixel) -> bool {
    p.a > OPAQUE_THRESHOLD
}

/// Pack by brightness.
///
/// ## Example
///
/// ```
/// use spritepack::mode::Orientation;
/// use spritepack::pack::pack_1bit;
/// use spritepack::pixel::{Pixel, PixelBuffer};
///
/// // 10 lit pixels: one full byte, then 2 bits + 6 padding bits
/// let buf = PixelBuffer::filled(10, 1, Pixel::WHITE).unwrap();
/// assert_eq!(pack_1bit(&buf, Orientation::Horizontal), vec![0xFF, 0xC0]);
/// ```
pub fn pack_1bit(buf: &PixelBuffer, orientation: Orientation) -> Vec<u8> {
    pack_with(buf, orientation, is_lit)
}

/// Pack by opacity. Same geometry as [`pack_1bit`].
pub fn pack_1bit_alpha(buf: &PixelBuffer, orientation: Orientation) -> Vec<u8> {
    pack_with(buf, orientation, is_opaque)
}

fn pack_with(buf: &PixelBuffer, orientation: Orientation, on: fn(&Pixel) -> bool) -> Vec<u8> {
    match orientation {
        Orientation::Horizontal => pack_rows(buf, on),
        Orientation::Vertical => pack_columns(buf, on),
    }
}

fn pack_rows(buf: &PixelBuffer, on: fn(&Pixel) -> bool) -> Vec<u8> {
    let width_bytes = buf.width().div_ceil(8);
    let mut out = Vec::with_capacity(width_bytes * buf.height());

    for row in buf.rows() {
        for group in row.chunks(8) {
            let byte = group
                .iter()
                .enumerate()
                .filter(|(_, p)| on(*p))
                .fold(0u8, |acc, (i, _)| acc | (0x80 >> i));
            out.push(byte);
        }
    }

    out
}

fn pack_columns(buf: &PixelBuffer, on: fn(&Pixel) -> bool) -> Vec<u8> {
    let (width, height) = (buf.width(), buf.height());
    let pages = height.div_ceil(8);
    let mut out = Vec::with_capacity(width * pages);

    for x in 0..width {
        for page in 0..pages {
            let mut byte = 0u8;
            for bit in 0..8 {
                let y = page * 8 + bit;
                if y < height && on(&buf.get(x, y)) {
                    byte |= 0x80 >> bit;
                }
            }
            out.push(byte);
        }
    }

    out
}
