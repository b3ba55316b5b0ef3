//! # Code Generation
//!
//! Wraps packed pixel data into ready-to-compile source text.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────┐     ┌───────────┐     ┌──────────┐
//! │ PixelBuffer │ ──► │  Packer  │ ──► │  Emitter  │ ──► │ Renderer │
//! │             │     │(DrawMode)│     │(OutputFmt)│     │ (String) │
//! └─────────────┘     └──────────┘     └───────────┘     └──────────┘
//! ```
//!
//! | Output format | Emitter | Produces |
//! |---------------|---------|----------|
//! | `ARDUINO_CODE` | [`sketch`] | includes, data, `setup()`/`loop()` |
//! | `PLAIN_BYTES` | [`plain`] | comment header + hex listing |
//! | `ARDUINO_SINGLE_BITMAP` | [`single`] | one PROGMEM array |
//! | `GFX_BITMAP_FONT` | [`gfx_font`] | bitmap, glyph table, `GFXfont` |
//!
//! ## Example
//!
//! ```
//! use spritepack::codegen::{self, EmitOptions, GenerateRequest};
//! use spritepack::mode::{DrawMode, OutputFormat};
//! use spritepack::pixel::{Pixel, PixelBuffer};
//!
//! let buffer = PixelBuffer::filled(8, 1, Pixel::WHITE).unwrap();
//! let generated = codegen::generate(&GenerateRequest {
//!     buffer: &buffer,
//!     name: "my sprite",
//!     draw_mode: DrawMode::Horizontal1Bit,
//!     output_format: OutputFormat::ArduinoSingleBitmap,
//!     options: EmitOptions::default(),
//! })
//! .unwrap();
//!
//! assert_eq!(generated.identifier, "my_sprite");
//! assert_eq!(generated.filename, "my_sprite.h");
//! assert!(generated.code.contains("const uint8_t my_sprite[] PROGMEM = {"));
//! assert!(generated.code.contains("0xFF"));
//! ```

pub mod gfx_font;
pub mod ir;
pub mod literal;
pub mod plain;
mod render;
pub mod single;
pub mod sketch;

pub use ir::{Artifact, CodeBlock, Item};
pub use literal::{hex_literal, sanitize_identifier};

use crate::display::DisplayProfile;
use crate::error::{Result, SpritepackError};
use crate::mode::{DrawMode, ElementType, OutputFormat};
use crate::pack::{self, Packed};
use crate::pixel::PixelBuffer;

/// Literals per line in data arrays.
pub const DEFAULT_VALUES_PER_LINE: usize = 16;

/// First character code of the single-glyph GFX font (space).
pub const DEFAULT_FIRST_CHAR: u8 = 0x20;

/// Emitter configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct EmitOptions {
    /// Display target for sketches. `None` picks one from the draw mode.
    pub display: Option<DisplayProfile>,
    pub values_per_line: usize,
    /// Append a minimal working sketch to `PLAIN_BYTES` output.
    pub include_sketch: bool,
    /// Character code the GFX glyph is mapped to.
    pub first_char: u8,
}

impl Default for EmitOptions {
    fn default() -> Self {
        Self {
            display: None,
            values_per_line: DEFAULT_VALUES_PER_LINE,
            include_sketch: false,
            first_char: DEFAULT_FIRST_CHAR,
        }
    }
}

impl EmitOptions {
    /// Display profile for `mode`, honoring an explicit choice.
    pub fn display_for(&self, mode: DrawMode) -> DisplayProfile {
        self.display.unwrap_or_else(|| DisplayProfile::for_mode(mode))
    }
}

/// One generation request.
#[derive(Debug, Clone)]
pub struct GenerateRequest<'a> {
    pub buffer: &'a PixelBuffer,
    /// User-supplied asset name (sanitized before use).
    pub name: &'a str,
    pub draw_mode: DrawMode,
    pub output_format: OutputFormat,
    pub options: EmitOptions,
}

/// Result of a generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct Generated {
    /// Sanitized asset name used in every declaration.
    pub identifier: String,
    /// `<identifier>.h`
    pub filename: String,
    pub draw_mode: DrawMode,
    pub output_format: OutputFormat,
    pub width: usize,
    pub height: usize,
    /// Raw packed sequence, for binary embedding.
    pub packed: Packed,
    /// Generated source text.
    pub code: String,
}

/// Packed data plus the metadata every emitter needs.
#[derive(Debug, Clone, Copy)]
pub struct Asset<'a> {
    pub identifier: &'a str,
    pub width: usize,
    pub height: usize,
    pub mode: DrawMode,
    pub packed: &'a Packed,
}

impl Asset<'_> {
    pub fn element(&self) -> ElementType {
        self.packed.element_type()
    }

    /// `'logo', 16x16px`
    pub fn summary(&self) -> String {
        format!("'{}', {}x{}px", self.identifier, self.width, self.height)
    }

    /// `32 bytes`, `1 byte`, `256 words`
    pub fn count_label(&self) -> String {
        let n = self.packed.len();
        let unit = self.element().unit();
        if n == 1 {
            format!("1 {}", unit.trim_end_matches('s'))
        } else {
            format!("{} {}", n, unit)
        }
    }

    /// PROGMEM data array under `name`.
    pub fn array(&self, name: &str, per_line: usize) -> Item {
        Item::Array {
            name: name.to_string(),
            element: self.element(),
            values: self.packed.values(),
            per_line,
        }
    }

    /// Bare hex listing of the data.
    pub fn listing(&self, per_line: usize) -> Item {
        Item::Listing {
            element: self.element(),
            values: self.packed.values(),
            per_line,
        }
    }
}

/// Pack the buffer and render it with the selected emitter.
///
/// Fails with [`SpritepackError::UnsupportedCombination`] when the output
/// format cannot carry the draw mode (GFX fonts need horizontal 1-bit data).
pub fn generate(request: &GenerateRequest<'_>) -> Result<Generated> {
    let GenerateRequest {
        buffer,
        name,
        draw_mode,
        output_format,
        options,
    } = request;

    if !output_format.supports(*draw_mode) {
        return Err(SpritepackError::UnsupportedCombination {
            draw_mode: *draw_mode,
            output_format: *output_format,
        });
    }

    let identifier = sanitize_identifier(name);
    let packed = pack::pack(buffer, *draw_mode);
    let asset = Asset {
        identifier: &identifier,
        width: buffer.width(),
        height: buffer.height(),
        mode: *draw_mode,
        packed: &packed,
    };

    let artifact = match output_format {
        OutputFormat::ArduinoCode => sketch::emit(&asset, options),
        OutputFormat::PlainBytes => plain::emit(&asset, options),
        OutputFormat::ArduinoSingleBitmap => single::emit(&asset, options),
        OutputFormat::GfxBitmapFont => gfx_font::emit(&asset, options)?,
    };
    let code = artifact.to_source();

    tracing::debug!(
        identifier = %identifier,
        draw_mode = %draw_mode,
        output_format = %output_format,
        elements = packed.len(),
        code_len = code.len(),
        "generated asset"
    );

    Ok(Generated {
        filename: format!("{}.h", identifier),
        identifier,
        draw_mode: *draw_mode,
        output_format: *output_format,
        width: buffer.width(),
        height: buffer.height(),
        packed,
        code,
    })
}

/// Validate raw RGBA bytes and generate in one step.
///
/// This is the boundary entry point for callers holding an untyped buffer
/// (the HTTP API, editors): dimension and length errors surface here,
/// before any packing.
pub fn generate_from_rgba(
    name: &str,
    width: usize,
    height: usize,
    rgba: &[u8],
    draw_mode: DrawMode,
    output_format: OutputFormat,
    options: EmitOptions,
) -> Result<Generated> {
    let buffer = PixelBuffer::from_rgba_bytes(width, height, rgba)?;
    generate(&GenerateRequest {
        buffer: &buffer,
        name,
        draw_mode,
        output_format,
        options,
    })
}
