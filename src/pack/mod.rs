//! # Format Packers
//!
//! Pure transforms from a [`PixelBuffer`] to the packed integer sequence a
//! display controller expects.
//!
//! ## Formats Overview
//!
//! | Draw mode | Packer | Element | Length |
//! |-----------|--------|---------|--------|
//! | `HORIZONTAL_1BIT` | [`mono::pack_1bit`] | u8 | `ceil(w/8) * h` |
//! | `VERTICAL_1BIT` | [`mono::pack_1bit`] | u8 | `w * ceil(h/8)` |
//! | `HORIZONTAL_ALPHA` | [`mono::pack_1bit_alpha`] | u8 | `ceil(w/8) * h` |
//! | `HORIZONTAL_RGB565` | [`color::pack_rgb565`] | u16 | `w * h` |
//! | `HORIZONTAL_RGB888_24` | [`color::pack_rgb24`] | u8 | `3 * w * h` |
//! | `HORIZONTAL_RGB888_32` | [`color::pack_rgba32`] | u8 | `4 * w * h` |
//! | `RGB332` | [`color::pack_rgb332`] | u8 | `w * h` |
//! | `GRAY4` | [`gray::pack_gray4`] | u8 | `ceil(w/2) * h` |
//!
//! Packers never mutate their input and hold no state: packing the same
//! buffer twice yields identical output, and packing on several threads at
//! once needs no coordination.
//!
//! ## Example
//!
//! ```
//! use spritepack::mode::DrawMode;
//! use spritepack::pack::{self, Packed};
//! use spritepack::pixel::{Pixel, PixelBuffer};
//!
//! let buf = PixelBuffer::new(
//!     3,
//!     1,
//!     vec![Pixel::rgb(255, 0, 0), Pixel::rgb(0, 255, 0), Pixel::rgb(0, 0, 255)],
//! )
//! .unwrap();
//!
//! let packed = pack::pack(&buf, DrawMode::HorizontalRgb565);
//! assert_eq!(packed, Packed::Words(vec![0xF800, 0x07E0, 0x001F]));
//! ```

pub mod color;
pub mod gray;
pub mod mono;

pub use color::{pack_rgb24, pack_rgb332, pack_rgb565, pack_rgba32, rgb332, rgb565};
pub use gray::{gray4, pack_gray4};
pub use mono::{is_lit, is_opaque, pack_1bit, pack_1bit_alpha};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

use crate::mode::{DrawMode, ElementType};
use crate::pixel::PixelBuffer;

/// Packed output: a sequence of 8-bit or 16-bit elements.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Packed {
    Bytes(Vec<u8>),
    Words(Vec<u16>),
}

impl Packed {
    /// Number of elements (not bytes).
    pub fn len(&self) -> usize {
        match self {
            Packed::Bytes(b) => b.len(),
            Packed::Words(w) => w.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn element_type(&self) -> ElementType {
        match self {
            Packed::Bytes(_) => ElementType::U8,
            Packed::Words(_) => ElementType::U16,
        }
    }

    /// Elements widened to `u32`, in order.
    pub fn values(&self) -> Vec<u32> {
        match self {
            Packed::Bytes(b) => b.iter().map(|&v| v as u32).collect(),
            Packed::Words(w) => w.iter().map(|&v| v as u32).collect(),
        }
    }

    /// Size of the raw binary form.
    pub fn byte_len(&self) -> usize {
        self.len() * self.element_type().size()
    }

    /// Raw bytes for direct binary embedding.
    ///
    /// 8-bit sequences are returned as-is; 16-bit words are split in the
    /// requested byte order.
    ///
    /// ```
    /// use spritepack::pack::{Endian, Packed};
    ///
    /// let words = Packed::Words(vec![0xF800]);
    /// assert_eq!(words.to_bytes(Endian::Big), vec![0xF8, 0x00]);
    /// assert_eq!(words.to_bytes(Endian::Little), vec![0x00, 0xF8]);
    /// ```
    pub fn to_bytes(&self, endian: Endian) -> Vec<u8> {
        match self {
            Packed::Bytes(b) => b.clone(),
            Packed::Words(w) => w
                .iter()
                .flat_map(|&v| match endian {
                    Endian::Big => v.to_be_bytes(),
                    Endian::Little => v.to_le_bytes(),
                })
                .collect(),
        }
    }
}

/// Byte order for 16-bit words in raw binary output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Endian {
    /// Most significant byte first (the order SPI TFT controllers read).
    #[default]
    Big,
    /// Least significant byte first (native order on AVR/ARM MCUs).
    Little,
}

impl FromStr for Endian {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "big" | "be" => Ok(Endian::Big),
            "little" | "le" => Ok(Endian::Little),
            other => Err(format!("unknown byte order '{}' (expected big or little)", other)),
        }
    }
}

impl fmt::Display for Endian {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endian::Big => f.write_str("big"),
            Endian::Little => f.write_str("little"),
        }
    }
}

/// Pack `buf` with the packer selected by `mode`.
pub fn pack(buf: &PixelBuffer, mode: DrawMode) -> Packed {
    match mode {
        DrawMode::Horizontal1Bit | DrawMode::Vertical1Bit => {
            Packed::Bytes(pack_1bit(buf, mode.orientation()))
        }
        DrawMode::HorizontalAlpha => Packed::Bytes(pack_1bit_alpha(buf, mode.orientation())),
        DrawMode::HorizontalRgb565 => Packed::Words(pack_rgb565(buf)),
        DrawMode::HorizontalRgb888_24 => Packed::Bytes(pack_rgb24(buf)),
        DrawMode::HorizontalRgb888_32 => Packed::Bytes(pack_rgba32(buf)),
        DrawMode::Rgb332 => Packed::Bytes(pack_rgb332(buf)),
        DrawMode::Gray4 => Packed::Bytes(pack_gray4(buf)),
    }
}
