//! # 4-Bit Grayscale Packing
//!
//! Two pixels per byte for 16-level grayscale panels (SSD1322, SSD1327).
//!
//! ```text
//! byte = [ hi nibble: first pixel | lo nibble: second pixel ]
//!
//! width = 5:  [p0 p1] [p2 p3] [p4 0]   ← odd pixel flushed alone
//! ```
//!
//! Each row starts a fresh byte. The level of a pixel is its Rec. 709 luma
//! divided by 16, rounded and clamped to `0..=15`.

use crate::pixel::{Pixel, PixelBuffer};

/// 4-bit gray level of a pixel.
///
/// ```
/// use spritepack::pack::gray4;
/// use spritepack::pixel::Pixel;
///
/// assert_eq!(gray4(&Pixel::BLACK), 0);
/// assert_eq!(gray4(&Pixel::gray(80)), 5);
/// assert_eq!(gray4(&Pixel::WHITE), 15);
/// ```
#[inline]
pub fn gray4(p: &Pixel) -> u8 {
    (p.luma() / 16.0).round().clamp(0.0, 15.0) as u8
}

/// Pack two gray levels per byte, row by row.
pub fn pack_gray4(buf: &PixelBuffer) -> Vec<u8> {
    let width_bytes = buf.width().div_ceil(2);
    let mut out = Vec::with_capacity(width_bytes * buf.height());

    for row in buf.rows() {
        for pair in row.chunks(2) {
            let hi = gray4(&pair[0]);
            let lo = pair.get(1).map(gray4).unwrap_or(0);
            out.push((hi << 4) | lo);
        }
    }

    out
}
