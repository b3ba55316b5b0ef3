//! # GFX Bitmap Font Emitter
//!
//! Wraps a monochrome bitmap as an Adafruit GFX font holding one glyph that
//! spans the whole canvas, so a custom icon can be drawn with `print()`.
//!
//! ```text
//! const uint8_t  <name>Bitmaps[] PROGMEM = { ... };
//! const GFXglyph <name>Glyphs[]  PROGMEM = { { 0, w, h, w, 0, 0 } };
//! const GFXfont  <name>          PROGMEM = { bitmaps, glyphs, first, last, h };
//! ```
//!
//! `GFXglyph` stores width, height and advance as `uint8_t`, so the canvas
//! must be at most 255x255.

use super::ir::{Artifact, Item};
use super::literal::char_comment;
use super::{Asset, EmitOptions};
use crate::error::{Result, SpritepackError};

/// Largest glyph edge a `GFXglyph` can describe.
const MAX_GLYPH_EDGE: usize = 255;

pub fn emit(asset: &Asset<'_>, options: &EmitOptions) -> Result<Artifact> {
    if asset.width > MAX_GLYPH_EDGE || asset.height > MAX_GLYPH_EDGE {
        return Err(SpritepackError::DimensionsTooLarge {
            width: asset.width,
            height: asset.height,
            max: MAX_GLYPH_EDGE,
        });
    }

    let name = asset.identifier;
    let bitmaps = format!("{}Bitmaps", name);
    let glyphs = format!("{}Glyphs", name);
    let (w, h) = (asset.width, asset.height);

    let mut artifact = Artifact::new();
    artifact.comment(format!("{}, single-glyph GFX font", asset.summary()));
    artifact.push(Item::Include("Adafruit_GFX.h".to_string()));
    artifact.blank();

    artifact.comment(asset.count_label());
    artifact.push(asset.array(&bitmaps, options.values_per_line));
    artifact.blank();

    // offset, width, height, xAdvance, xOffset, yOffset
    artifact.push(Item::Initializer {
        decl: format!("const GFXglyph {}[] PROGMEM", glyphs),
        lines: vec![format!(
            "{{ 0, {}, {}, {}, 0, 0 }} // {}",
            w,
            h,
            w,
            char_comment(options.first_char)
        )],
    });
    artifact.blank();

    artifact.push(Item::Initializer {
        decl: format!("const GFXfont {} PROGMEM", name),
        lines: vec![
            format!("(uint8_t  *){},", bitmaps),
            format!("(GFXglyph *){},", glyphs),
            format!("0x{:02X}, 0x{:02X}, {}", options.first_char, options.first_char, h),
        ],
    });

    Ok(artifact)
}
