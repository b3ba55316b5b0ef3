//! # Packed Data Preview
//!
//! Decodes a packed sequence back into a [`PixelBuffer`], showing what the
//! display will actually draw, and renders it as PNG.
//!
//! ```text
//! PixelBuffer → pack() → Packed → unpack() → PixelBuffer' → PNG
//! ```
//!
//! Decoding is lossy in exactly the way the packers are:
//!
//! | Draw mode | Decoded pixel |
//! |-----------|---------------|
//! | 1-bit | white (on) or black (off), opaque |
//! | alpha mask | white opaque (on) or transparent (off) |
//! | RGB565 / RGB332 | truncated channels scaled back to 0..=255 |
//! | GRAY4 | `level * 17` gray |
//! | RGB24 | exact color, opaque |
//! | RGBA32 | exact |
//!
//! ## Example
//!
//! ```
//! use spritepack::mode::DrawMode;
//! use spritepack::pack::{self, Packed};
//! use spritepack::pixel::{Pixel, PixelBuffer};
//! use spritepack::preview::unpack;
//!
//! let buf = PixelBuffer::filled(10, 3, Pixel::WHITE).unwrap();
//! let packed = pack::pack(&buf, DrawMode::Vertical1Bit);
//! let decoded = unpack(&packed, DrawMode::Vertical1Bit, 10, 3).unwrap();
//! assert_eq!(decoded, buf);
//! ```

use std::io::Cursor;

use crate::error::{Result, SpritepackError};
use crate::mode::DrawMode;
use crate::pack::Packed;
use crate::pixel::{pixel_count, Pixel, PixelBuffer};

/// Decode `packed` as `mode` data for a `width x height` canvas.
pub fn unpack(packed: &Packed, mode: DrawMode, width: usize, height: usize) -> Result<PixelBuffer> {
    pixel_count(width, height)?;
    let expected = mode.packed_len(width, height);
    if packed.len() != expected {
        return Err(SpritepackError::BufferLengthMismatch {
            expected,
            actual: packed.len(),
        });
    }

    let pixels = match (mode, packed) {
        (DrawMode::Horizontal1Bit, Packed::Bytes(data)) => {
            decode_rows(data, width, height, Pixel::WHITE, Pixel::BLACK)
        }
        (DrawMode::HorizontalAlpha, Packed::Bytes(data)) => {
            decode_rows(data, width, height, Pixel::WHITE, Pixel::TRANSPARENT)
        }
        (DrawMode::Vertical1Bit, Packed::Bytes(data)) => decode_columns(data, width, height),
        (DrawMode::HorizontalRgb565, Packed::Words(data)) => {
            data.iter().map(|&w| expand_rgb565(w)).collect()
        }
        (DrawMode::HorizontalRgb888_24, Packed::Bytes(data)) => data
            .chunks_exact(3)
            .map(|c| Pixel::rgb(c[0], c[1], c[2]))
            .collect(),
        (DrawMode::HorizontalRgb888_32, Packed::Bytes(data)) => data
            .chunks_exact(4)
            .map(|c| Pixel::rgba(c[0], c[1], c[2], c[3]))
            .collect(),
        (DrawMode::Rgb332, Packed::Bytes(data)) => data.iter().map(|&v| expand_rgb332(v)).collect(),
        (DrawMode::Gray4, Packed::Bytes(data)) => decode_gray4(data, width, height),
        (mode, packed) => {
            return Err(SpritepackError::ElementTypeMismatch {
                draw_mode: mode,
                expected: mode.element_type(),
                actual: packed.element_type(),
            });
        }
    };

    PixelBuffer::new(width, height, pixels)
}

/// Encode a buffer as PNG bytes.
pub fn render_png(buf: &PixelBuffer) -> Result<Vec<u8>> {
    let mut png_bytes = Vec::new();
    buf.to_image()
        .write_to(&mut Cursor::new(&mut png_bytes), image::ImageFormat::Png)
        .map_err(|e| SpritepackError::Image(format!("Failed to encode PNG: {}", e)))?;
    Ok(png_bytes)
}

/// Scale a `bits`-wide channel value back to 8 bits by bit replication.
#[inline]
fn widen(value: u16, bits: u32) -> u8 {
    let v = value as u32;
    let mut out = v << (8 - bits);
    let mut filled = bits;
    while filled < 8 {
        out |= out >> filled;
        filled *= 2;
    }
    out as u8
}

fn expand_rgb565(w: u16) -> Pixel {
    Pixel::rgb(
        widen(w >> 11, 5),
        widen((w >> 5) & 0x3F, 6),
        widen(w & 0x1F, 5),
    )
}

fn expand_rgb332(v: u8) -> Pixel {
    let v = v as u16;
    Pixel::rgb(widen(v >> 5, 3), widen((v >> 2) & 0x07, 3), widen(v & 0x03, 2))
}

fn decode_rows(data: &[u8], width: usize, height: usize, on: Pixel, off: Pixel) -> Vec<Pixel> {
    let width_bytes = width.div_ceil(8);
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let byte = data[y * width_bytes + x / 8];
            let lit = byte & (0x80 >> (x % 8)) != 0;
            pixels.push(if lit { on } else { off });
        }
    }
    pixels
}

fn decode_columns(data: &[u8], width: usize, height: usize) -> Vec<Pixel> {
    let pages = height.div_ceil(8);
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let byte = data[x * pages + y / 8];
            let lit = byte & (0x80 >> (y % 8)) != 0;
            pixels.push(if lit { Pixel::WHITE } else { Pixel::BLACK });
        }
    }
    pixels
}

fn decode_gray4(data: &[u8], width: usize, height: usize) -> Vec<Pixel> {
    let width_bytes = width.div_ceil(2);
    let mut pixels = Vec::with_capacity(width * height);
    for y in 0..height {
        for x in 0..width {
            let pair = data[y * width_bytes + x / 2];
            let level = if x % 2 == 0 { pair >> 4 } else { pair & 0x0F };
            pixels.push(Pixel::gray(level * 17));
        }
    }
    pixels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::ElementType;
    use crate::pack;

    fn checker(width: usize, height: usize) -> PixelBuffer {
        let pixels = (0..width * height)
            .map(|i| {
                let (x, y) = (i % width, i / width);
                if (x + y) % 2 == 0 {
                    Pixel::WHITE
                } else {
                    Pixel::BLACK
                }
            })
            .collect();
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_1bit_round_trip_both_orientations() {
        let buf = checker(11, 13);
        for mode in [DrawMode::Horizontal1Bit, DrawMode::Vertical1Bit] {
            let packed = pack::pack(&buf, mode);
            assert_eq!(unpack(&packed, mode, 11, 13).unwrap(), buf, "{}", mode);
        }
    }

    #[test]
    fn test_alpha_mask_decodes_transparency() {
        let buf = PixelBuffer::new(2, 1, vec![Pixel::BLACK, Pixel::TRANSPARENT]).unwrap();
        let packed = pack::pack(&buf, DrawMode::HorizontalAlpha);
        let decoded = unpack(&packed, DrawMode::HorizontalAlpha, 2, 1).unwrap();
        assert_eq!(decoded.pixels(), &[Pixel::WHITE, Pixel::TRANSPARENT]);
    }

    #[test]
    fn test_rgb565_expansion_saturates() {
        assert_eq!(expand_rgb565(0xFFFF), Pixel::WHITE);
        assert_eq!(expand_rgb565(0xF800), Pixel::rgb(255, 0, 0));
        assert_eq!(expand_rgb565(0x0000), Pixel::BLACK);
    }

    #[test]
    fn test_rgb332_expansion() {
        assert_eq!(expand_rgb332(0xFF), Pixel::WHITE);
        assert_eq!(expand_rgb332(0x03), Pixel::rgb(0, 0, 255));
        assert_eq!(expand_rgb332(0x1C), Pixel::rgb(0, 255, 0));
    }

    #[test]
    fn test_exact_modes_round_trip() {
        let buf = PixelBuffer::new(
            2,
            1,
            vec![Pixel::rgba(10, 20, 30, 40), Pixel::rgba(50, 60, 70, 80)],
        )
        .unwrap();
        let rgba = pack::pack(&buf, DrawMode::HorizontalRgb888_32);
        assert_eq!(unpack(&rgba, DrawMode::HorizontalRgb888_32, 2, 1).unwrap(), buf);

        let rgb = pack::pack(&buf, DrawMode::HorizontalRgb888_24);
        let decoded = unpack(&rgb, DrawMode::HorizontalRgb888_24, 2, 1).unwrap();
        assert_eq!(decoded.get(1, 0), Pixel::rgb(50, 60, 70));
    }

    #[test]
    fn test_gray4_levels() {
        let decoded = unpack(&Packed::Bytes(vec![0x0F, 0xA0]), DrawMode::Gray4, 3, 1).unwrap();
        assert_eq!(
            decoded.pixels(),
            &[Pixel::gray(0), Pixel::gray(255), Pixel::gray(170)]
        );
    }

    #[test]
    fn test_rejects_wrong_length() {
        let err = unpack(&Packed::Bytes(vec![0; 3]), DrawMode::Horizontal1Bit, 8, 2).unwrap_err();
        assert!(matches!(
            err,
            SpritepackError::BufferLengthMismatch {
                expected: 2,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_rejects_wrong_element_type() {
        let err = unpack(&Packed::Bytes(vec![0; 2]), DrawMode::HorizontalRgb565, 2, 1).unwrap_err();
        assert!(matches!(
            err,
            SpritepackError::ElementTypeMismatch {
                draw_mode: DrawMode::HorizontalRgb565,
                expected: ElementType::U16,
                actual: ElementType::U8,
            }
        ));
        assert_eq!(
            err.to_string(),
            "HORIZONTAL_RGB565 data must be uint16_t elements, got uint8_t"
        );
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        let huge = 1usize << 32;
        let err = unpack(&Packed::Bytes(vec![]), DrawMode::Vertical1Bit, huge, huge).unwrap_err();
        assert!(matches!(err, SpritepackError::DimensionsTooLarge { .. }));
    }

    #[test]
    fn test_render_png_signature() {
        let png = render_png(&checker(4, 4)).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
    }
}
