//! # Draw Modes and Output Formats
//!
//! Two closed selectors drive every generation request:
//!
//! | Selector | Chooses | Example |
//! |----------|---------|---------|
//! | [`DrawMode`] | packer + channel layout | `HORIZONTAL_RGB565` |
//! | [`OutputFormat`] | code emitter template | `ARDUINO_SINGLE_BITMAP` |
//!
//! Both parse from their canonical names (and short CLI aliases). Anything
//! else is rejected with an explicit error rather than falling through to a
//! default.
//!
//! ```
//! use spritepack::mode::{DrawMode, OutputFormat};
//!
//! let mode: DrawMode = "HORIZONTAL_RGB565".parse().unwrap();
//! assert_eq!(mode, DrawMode::HorizontalRgb565);
//! assert_eq!("rgb565".parse::<DrawMode>().unwrap(), mode);
//!
//! assert!("HORIZONTAL_CMYK".parse::<DrawMode>().is_err());
//! assert!("GIF".parse::<OutputFormat>().is_err());
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::SpritepackError;

/// Bit order of 1-bit packing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// 8 horizontally adjacent pixels per byte, rows padded to a byte.
    #[default]
    Horizontal,
    /// 8 vertically adjacent pixels per byte (a "page"), column-major.
    Vertical,
}

/// Width of one packed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ElementType {
    #[serde(rename = "uint8_t")]
    U8,
    #[serde(rename = "uint16_t")]
    U16,
}

impl ElementType {
    /// C type used in generated declarations.
    pub fn c_type(self) -> &'static str {
        match self {
            ElementType::U8 => "uint8_t",
            ElementType::U16 => "uint16_t",
        }
    }

    /// Hex digits in a zero-padded literal.
    pub fn hex_digits(self) -> usize {
        match self {
            ElementType::U8 => 2,
            ElementType::U16 => 4,
        }
    }

    pub fn bits(self) -> u32 {
        match self {
            ElementType::U8 => 8,
            ElementType::U16 => 16,
        }
    }

    /// Size of one element in bytes.
    pub fn size(self) -> usize {
        self.bits() as usize / 8
    }

    /// Arduino flash accessor for this element width.
    pub fn pgm_read(self) -> &'static str {
        match self {
            ElementType::U8 => "pgm_read_byte",
            ElementType::U16 => "pgm_read_word",
        }
    }

    /// Unit name used in size comments ("bytes", "words").
    pub fn unit(self) -> &'static str {
        match self {
            ElementType::U8 => "bytes",
            ElementType::U16 => "words",
        }
    }
}

impl fmt::Display for ElementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.c_type())
    }
}

/// Packer and channel layout selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DrawMode {
    #[serde(rename = "HORIZONTAL_1BIT")]
    Horizontal1Bit,
    #[serde(rename = "VERTICAL_1BIT")]
    Vertical1Bit,
    #[serde(rename = "HORIZONTAL_ALPHA")]
    HorizontalAlpha,
    #[serde(rename = "HORIZONTAL_RGB565")]
    HorizontalRgb565,
    #[serde(rename = "HORIZONTAL_RGB888_24")]
    HorizontalRgb888_24,
    #[serde(rename = "HORIZONTAL_RGB888_32")]
    HorizontalRgb888_32,
    #[serde(rename = "RGB332")]
    Rgb332,
    #[serde(rename = "GRAY4")]
    Gray4,
}

impl DrawMode {
    pub const ALL: [DrawMode; 8] = [
        DrawMode::Horizontal1Bit,
        DrawMode::Vertical1Bit,
        DrawMode::HorizontalAlpha,
        DrawMode::HorizontalRgb565,
        DrawMode::HorizontalRgb888_24,
        DrawMode::HorizontalRgb888_32,
        DrawMode::Rgb332,
        DrawMode::Gray4,
    ];

    /// Canonical selector name.
    pub fn name(self) -> &'static str {
        match self {
            DrawMode::Horizontal1Bit => "HORIZONTAL_1BIT",
            DrawMode::Vertical1Bit => "VERTICAL_1BIT",
            DrawMode::HorizontalAlpha => "HORIZONTAL_ALPHA",
            DrawMode::HorizontalRgb565 => "HORIZONTAL_RGB565",
            DrawMode::HorizontalRgb888_24 => "HORIZONTAL_RGB888_24",
            DrawMode::HorizontalRgb888_32 => "HORIZONTAL_RGB888_32",
            DrawMode::Rgb332 => "RGB332",
            DrawMode::Gray4 => "GRAY4",
        }
    }

    /// Short alias accepted on the command line.
    pub fn alias(self) -> &'static str {
        match self {
            DrawMode::Horizontal1Bit => "1bit",
            DrawMode::Vertical1Bit => "vertical",
            DrawMode::HorizontalAlpha => "alpha",
            DrawMode::HorizontalRgb565 => "rgb565",
            DrawMode::HorizontalRgb888_24 => "rgb24",
            DrawMode::HorizontalRgb888_32 => "rgba32",
            DrawMode::Rgb332 => "rgb332",
            DrawMode::Gray4 => "gray4",
        }
    }

    pub fn element_type(self) -> ElementType {
        match self {
            DrawMode::HorizontalRgb565 => ElementType::U16,
            _ => ElementType::U8,
        }
    }

    /// One bit per pixel (color or alpha threshold).
    pub fn is_monochrome(self) -> bool {
        matches!(
            self,
            DrawMode::Horizontal1Bit | DrawMode::Vertical1Bit | DrawMode::HorizontalAlpha
        )
    }

    /// Bit orientation for the 1-bit modes.
    pub fn orientation(self) -> Orientation {
        match self {
            DrawMode::Vertical1Bit => Orientation::Vertical,
            _ => Orientation::Horizontal,
        }
    }

    /// Number of packed elements produced for a `width x height` buffer.
    ///
    /// ```
    /// use spritepack::mode::DrawMode;
    ///
    /// assert_eq!(DrawMode::Horizontal1Bit.packed_len(10, 3), 2 * 3);
    /// assert_eq!(DrawMode::Vertical1Bit.packed_len(10, 3), 10);
    /// assert_eq!(DrawMode::Gray4.packed_len(5, 2), 6);
    /// ```
    ///
    /// Saturates at `usize::MAX` instead of overflowing; dimensions that
    /// passed [`crate::pixel::pixel_count`] never get there.
    pub fn packed_len(self, width: usize, height: usize) -> usize {
        match self {
            DrawMode::Horizontal1Bit | DrawMode::HorizontalAlpha => {
                width.div_ceil(8).saturating_mul(height)
            }
            DrawMode::Vertical1Bit => width.saturating_mul(height.div_ceil(8)),
            DrawMode::HorizontalRgb565 | DrawMode::Rgb332 => width.saturating_mul(height),
            DrawMode::HorizontalRgb888_24 => width.saturating_mul(height).saturating_mul(3),
            DrawMode::HorizontalRgb888_32 => width.saturating_mul(height).saturating_mul(4),
            DrawMode::Gray4 => width.div_ceil(2).saturating_mul(height),
        }
    }
}

impl fmt::Display for DrawMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for DrawMode {
    type Err = SpritepackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DrawMode::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(s) || m.alias().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpritepackError::UnsupportedDrawMode(s.to_string()))
    }
}

/// Code emitter selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Full sketch: includes, data, display init, draw loop.
    #[serde(rename = "ARDUINO_CODE")]
    ArduinoCode,
    /// Hex listing with a comment header.
    #[serde(rename = "PLAIN_BYTES")]
    PlainBytes,
    /// One PROGMEM array declaration.
    #[serde(rename = "ARDUINO_SINGLE_BITMAP")]
    ArduinoSingleBitmap,
    /// Adafruit GFX font with one full-canvas glyph.
    #[serde(rename = "GFX_BITMAP_FONT")]
    GfxBitmapFont,
}

impl OutputFormat {
    pub const ALL: [OutputFormat; 4] = [
        OutputFormat::ArduinoCode,
        OutputFormat::PlainBytes,
        OutputFormat::ArduinoSingleBitmap,
        OutputFormat::GfxBitmapFont,
    ];

    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::ArduinoCode => "ARDUINO_CODE",
            OutputFormat::PlainBytes => "PLAIN_BYTES",
            OutputFormat::ArduinoSingleBitmap => "ARDUINO_SINGLE_BITMAP",
            OutputFormat::GfxBitmapFont => "GFX_BITMAP_FONT",
        }
    }

    pub fn alias(self) -> &'static str {
        match self {
            OutputFormat::ArduinoCode => "arduino",
            OutputFormat::PlainBytes => "plain",
            OutputFormat::ArduinoSingleBitmap => "single",
            OutputFormat::GfxBitmapFont => "gfx-font",
        }
    }

    /// Whether `mode` can be rendered by this format.
    ///
    /// GFX glyph bitmaps are horizontal 1-bit data; every other format
    /// accepts every mode.
    pub fn supports(self, mode: DrawMode) -> bool {
        match self {
            OutputFormat::GfxBitmapFont => {
                matches!(mode, DrawMode::Horizontal1Bit | DrawMode::HorizontalAlpha)
            }
            OutputFormat::ArduinoCode
            | OutputFormat::PlainBytes
            | OutputFormat::ArduinoSingleBitmap => true,
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for OutputFormat {
    type Err = SpritepackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        OutputFormat::ALL
            .into_iter()
            .find(|f| f.name().eq_ignore_ascii_case(s) || f.alias().eq_ignore_ascii_case(s))
            .ok_or_else(|| SpritepackError::UnsupportedOutputFormat(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_mode_parse_canonical_and_alias() {
        for mode in DrawMode::ALL {
            assert_eq!(mode.name().parse::<DrawMode>().unwrap(), mode);
            assert_eq!(mode.alias().parse::<DrawMode>().unwrap(), mode);
            assert_eq!(mode.to_string(), mode.name());
        }
        assert_eq!(
            "horizontal_1bit".parse::<DrawMode>().unwrap(),
            DrawMode::Horizontal1Bit
        );
    }

    #[test]
    fn test_draw_mode_parse_unknown() {
        let err = "PALETTE_8".parse::<DrawMode>().unwrap_err();
        assert!(matches!(err, SpritepackError::UnsupportedDrawMode(ref s) if s == "PALETTE_8"));
    }

    #[test]
    fn test_output_format_parse() {
        for format in OutputFormat::ALL {
            assert_eq!(format.name().parse::<OutputFormat>().unwrap(), format);
            assert_eq!(format.alias().parse::<OutputFormat>().unwrap(), format);
        }
        assert!(matches!(
            "".parse::<OutputFormat>(),
            Err(SpritepackError::UnsupportedOutputFormat(_))
        ));
    }

    #[test]
    fn test_serde_uses_canonical_names() {
        let json = serde_json::to_string(&DrawMode::HorizontalRgb888_32).unwrap();
        assert_eq!(json, "\"HORIZONTAL_RGB888_32\"");
        let mode: DrawMode = serde_json::from_str("\"GRAY4\"").unwrap();
        assert_eq!(mode, DrawMode::Gray4);
        let format: OutputFormat = serde_json::from_str("\"GFX_BITMAP_FONT\"").unwrap();
        assert_eq!(format, OutputFormat::GfxBitmapFont);
    }

    #[test]
    fn test_packed_len_saturates() {
        let huge = 1usize << 40;
        for mode in DrawMode::ALL {
            assert_eq!(mode.packed_len(huge, huge), usize::MAX, "{}", mode);
        }
    }

    #[test]
    fn test_element_types() {
        assert_eq!(DrawMode::HorizontalRgb565.element_type(), ElementType::U16);
        assert_eq!(DrawMode::Rgb332.element_type(), ElementType::U8);
        assert_eq!(ElementType::U16.hex_digits(), 4);
        assert_eq!(ElementType::U8.c_type(), "uint8_t");
    }

    #[test]
    fn test_gfx_font_only_supports_horizontal_1bit() {
        let supported: Vec<DrawMode> = DrawMode::ALL
            .into_iter()
            .filter(|m| OutputFormat::GfxBitmapFont.supports(*m))
            .collect();
        assert_eq!(
            supported,
            vec![DrawMode::Horizontal1Bit, DrawMode::HorizontalAlpha]
        );
        assert!(DrawMode::ALL
            .into_iter()
            .all(|m| OutputFormat::ArduinoCode.supports(m)));
    }
}
