//! # Color Packing
//!
//! Row-major (y outer, x inner) packers for color TFT panels.
//!
//! ## RGB565
//!
//! One 16-bit word per pixel. Channels are truncated, not rounded:
//!
//! ```text
//!  15      11 10        5 4       0
//! ┌──────────┬───────────┬─────────┐
//! │ R (r>>3) │ G (g>>2)  │ B (b>>3)│
//! └──────────┴───────────┴─────────┘
//! ```
//!
//! ## RGB332
//!
//! One byte per pixel:
//!
//! ```text
//!  7   5 4   2 1 0
//! ┌─────┬─────┬───┐
//! │ R>>5│ G>>5│B>>6│
//! └─────┴─────┴───┘
//! ```
//!
//! ## RGB888 / RGBA8888
//!
//! Channels copied verbatim: 3 bytes (`r, g, b`) or 4 bytes (`r, g, b, a`)
//! per pixel. Only the RGBA variant carries alpha; the others assume an
//! opaque image.

use crate::pixel::{Pixel, PixelBuffer};

/// Truncate a pixel to RGB565.
///
/// ```
/// use spritepack::pack::rgb565;
/// use spritepack::pixel::Pixel;
///
/// assert_eq!(rgb565(&Pixel::rgb(255, 0, 0)), 0xF800);
/// assert_eq!(rgb565(&Pixel::rgb(0, 255, 0)), 0x07E0);
/// assert_eq!(rgb565(&Pixel::rgb(0, 0, 255)), 0x001F);
/// ```
#[inline]
pub fn rgb565(p: &Pixel) -> u16 {
    let r5 = (p.r >> 3) as u16;
    let g6 = (p.g >> 2) as u16;
    let b5 = (p.b >> 3) as u16;
    (r5 << 11) | (g6 << 5) | b5
}

/// Truncate a pixel to RGB332.
#[inline]
pub fn rgb332(p: &Pixel) -> u8 {
    let r3 = p.r >> 5;
    let g3 = p.g >> 5;
    let b2 = p.b >> 6;
    (r3 << 5) | (g3 << 2) | b2
}

/// One RGB565 word per pixel.
pub fn pack_rgb565(buf: &PixelBuffer) -> Vec<u16> {
    buf.pixels().iter().map(rgb565).collect()
}

/// Three bytes per pixel, `r, g, b`.
pub fn pack_rgb24(buf: &PixelBuffer) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len() * 3);
    for p in buf.pixels() {
        out.extend_from_slice(&[p.r, p.g, p.b]);
    }
    out
}

/// Four bytes per pixel, `r, g, b, a`.
pub fn pack_rgba32(buf: &PixelBuffer) -> Vec<u8> {
    let mut out = Vec::with_capacity(buf.len() * 4);
    for p in buf.pixels() {
        out.extend_from_slice(&[p.r, p.g, p.b, p.a]);
    }
    out
}

/// One RGB332 byte per pixel.
pub fn pack_rgb332(buf: &PixelBuffer) -> Vec<u8> {
    buf.pixels().iter().map(rgb332).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primaries() -> PixelBuffer {
        PixelBuffer::new(
            3,
            1,
            vec![
                Pixel::rgb(255, 0, 0),
                Pixel::rgb(0, 255, 0),
                Pixel::rgb(0, 0, 255),
            ],
        )
        .unwrap()
    }

    #[test]
    fn test_rgb565_primaries() {
        assert_eq!(pack_rgb565(&primaries()), vec![0xF800, 0x07E0, 0x001F]);
    }

    #[test]
    fn test_rgb565_truncates() {
        // 0b0000_0111 drops entirely in the 5-bit channels
        assert_eq!(rgb565(&Pixel::rgb(7, 3, 7)), 0x0000);
        assert_eq!(rgb565(&Pixel::rgb(8, 4, 8)), 0x0821);
        assert_eq!(rgb565(&Pixel::WHITE), 0xFFFF);
    }

    #[test]
    fn test_rgb565_ignores_alpha() {
        assert_eq!(
            rgb565(&Pixel::rgba(255, 0, 0, 0)),
            rgb565(&Pixel::rgb(255, 0, 0))
        );
    }

    #[test]
    fn test_rgb332_primaries() {
        assert_eq!(pack_rgb332(&primaries()), vec![0xE0, 0x1C, 0x03]);
        assert_eq!(rgb332(&Pixel::WHITE), 0xFF);
    }

    #[test]
    fn test_rgb24_order() {
        let buf = PixelBuffer::new(2, 1, vec![Pixel::rgba(1, 2, 3, 4), Pixel::rgba(5, 6, 7, 8)])
            .unwrap();
        assert_eq!(pack_rgb24(&buf), vec![1, 2, 3, 5, 6, 7]);
    }

    #[test]
    fn test_rgba32_order() {
        let buf = PixelBuffer::new(1, 2, vec![Pixel::rgba(1, 2, 3, 4), Pixel::rgba(5, 6, 7, 8)])
            .unwrap();
        assert_eq!(pack_rgba32(&buf), vec![1, 2, 3, 4, 5, 6, 7, 8]);
    }

    #[test]
    fn test_row_major_order() {
        let pixels = (0..6u8).map(|v| Pixel::rgb(v * 8, 0, 0)).collect();
        let buf = PixelBuffer::new(3, 2, pixels).unwrap();
        let words = pack_rgb565(&buf);
        let reds: Vec<u16> = words.iter().map(|w| w >> 11).collect();
        assert_eq!(reds, vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_lengths() {
        let buf = PixelBuffer::filled(5, 7, Pixel::WHITE).unwrap();
        assert_eq!(pack_rgb565(&buf).len(), 35);
        assert_eq!(pack_rgb24(&buf).len(), 105);
        assert_eq!(pack_rgba32(&buf).len(), 140);
        assert_eq!(pack_rgb332(&buf).len(), 35);
    }
}
