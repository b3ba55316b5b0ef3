//! # Arduino Sketch Emitter
//!
//! Produces a complete `.ino`-ready sketch: display includes and driver
//! setup, the PROGMEM data array, and a `setup()` that draws the asset once.
//!
//! ## Drawing Strategy per Draw Mode
//!
//! | Draw mode | Drawing code |
//! |-----------|--------------|
//! | `HORIZONTAL_1BIT`, `HORIZONTAL_ALPHA` | `drawBitmap` blit |
//! | `VERTICAL_1BIT` | column/page loop with `drawPixel` |
//! | `HORIZONTAL_RGB565` | `setAddrWindow` + `writePixel` per pixel |
//! | `HORIZONTAL_RGB888_24` | `color565(r, g, b)` + `drawPixel` |
//! | `HORIZONTAL_RGB888_32` | as RGB24, skipping pixels with `a < 128` |
//! | `RGB332` | channel expansion + `drawPixel` |
//! | `GRAY4` | nibble → `level * 17` gray + `drawPixel` |
//!
//! The draw code is shared with the minimal sketch appended to
//! `PLAIN_BYTES` output (see [`emit_minimal`]).

use super::ir::{Artifact, CodeBlock, Item};
use super::{Asset, EmitOptions};
use crate::display::DisplayProfile;
use crate::mode::DrawMode;

/// Variables declared by the drawing code in [`draw_block`].
pub(crate) const SKETCH_LOCALS: &[&str] = &[
    "x", "y", "i", "r", "g", "b", "a", "v", "page", "pages", "pair", "level", "stride",
];

/// Full sketch with a descriptive header and named dimension constants.
pub fn emit(asset: &Asset<'_>, options: &EmitOptions) -> Artifact {
    let profile = options.display_for(asset.mode);
    let width_const = format!("{}_width", asset.identifier);
    let height_const = format!("{}_height", asset.identifier);

    let mut artifact = Artifact::new();
    artifact.comment(format!("{}, {}", asset.summary(), asset.mode));
    artifact.comment(format!("Target: {}", profile.name));
    artifact.extend(preamble(&profile));

    artifact.line(format!("const uint16_t {} = {};", width_const, asset.width));
    artifact.line(format!("const uint16_t {} = {};", height_const, asset.height));
    artifact.blank();

    artifact.comment(format!("{}, {}", asset.summary(), asset.count_label()));
    artifact.push(asset.array(asset.identifier, options.values_per_line));
    artifact.blank();

    artifact.extend(setup_and_loop(asset, &profile, &width_const, &height_const));
    artifact
}

/// Minimal working sketch: includes, driver, data, and drawing code with
/// literal dimensions.
pub fn emit_minimal(asset: &Asset<'_>, options: &EmitOptions) -> Artifact {
    let profile = options.display_for(asset.mode);
    let width = asset.width.to_string();
    let height = asset.height.to_string();

    let mut artifact = Artifact::new();
    artifact.extend(preamble(&profile));
    artifact.push(asset.array(asset.identifier, options.values_per_line));
    artifact.blank();
    artifact.extend(setup_and_loop(asset, &profile, &width, &height));
    artifact
}

/// Includes, hardware defines, and the driver object.
fn preamble(profile: &DisplayProfile) -> Vec<Item> {
    let mut items: Vec<Item> = profile
        .includes
        .iter()
        .map(|h| Item::Include(h.to_string()))
        .collect();
    items.push(Item::Blank);

    if !profile.defines.is_empty() {
        items.extend(profile.defines.iter().map(|(name, value)| Item::Define {
            name: name.to_string(),
            value: value.to_string(),
        }));
        items.push(Item::Blank);
    }

    items.push(Item::Line(profile.declaration.to_string()));
    items.push(Item::Blank);
    items
}

fn setup_and_loop(
    asset: &Asset<'_>,
    profile: &DisplayProfile,
    width: &str,
    height: &str,
) -> Vec<Item> {
    let mut setup = CodeBlock::new();
    setup.extend(profile.begin.iter());
    setup.line(profile.clear);
    setup.append(&draw_block(asset, profile, width, height));
    if !profile.flush.is_empty() {
        setup.line(profile.flush);
    }

    vec![
        Item::Function {
            signature: "void setup()".to_string(),
            body: setup,
        },
        Item::Blank,
        Item::Function {
            signature: "void loop()".to_string(),
            body: CodeBlock::new(),
        },
    ]
}

/// Statements that draw the asset at `(0, 0)`.
///
/// `width` and `height` are C expressions (constant names or literals).
pub fn draw_block(
    asset: &Asset<'_>,
    profile: &DisplayProfile,
    width: &str,
    height: &str,
) -> CodeBlock {
    let name = asset.identifier;
    let obj = profile.object;
    let mut block = CodeBlock::new();

    match asset.mode {
        DrawMode::Horizontal1Bit | DrawMode::HorizontalAlpha => {
            block.line(format!(
                "{}.drawBitmap(0, 0, {}, {}, {}, {});",
                obj, name, width, height, profile.on_color
            ));
        }
        DrawMode::Vertical1Bit => {
            block.line(format!("const uint16_t pages = ({} + 7) / 8;", height));
            block.open(format!("for (int16_t x = 0; x < {}; x++)", width));
            block.open(format!("for (int16_t y = 0; y < {}; y++)", height));
            block.line(format!(
                "uint8_t page = pgm_read_byte(&{}[x * pages + y / 8]);",
                name
            ));
            block.open("if (page & (0x80 >> (y & 7)))");
            block.line(format!("{}.drawPixel(x, y, {});", obj, profile.on_color));
            block.close();
            block.close();
            block.close();
        }
        DrawMode::HorizontalRgb565 => {
            block.line(format!("{}.startWrite();", obj));
            block.line(format!("{}.setAddrWindow(0, 0, {}, {});", obj, width, height));
            open_pixel_loop(&mut block, width, height);
            block.line(format!("uint32_t i = (uint32_t)y * {} + x;", width));
            block.line(format!(
                "{}.writePixel(x, y, pgm_read_word(&{}[i]));",
                obj, name
            ));
            block.close();
            block.close();
            block.line(format!("{}.endWrite();", obj));
        }
        DrawMode::HorizontalRgb888_24 | DrawMode::HorizontalRgb888_32 => {
            let stride = if asset.mode == DrawMode::HorizontalRgb888_32 { 4 } else { 3 };
            open_pixel_loop(&mut block, width, height);
            block.line(format!(
                "uint32_t i = ((uint32_t)y * {} + x) * {};",
                width, stride
            ));
            block.line(format!("uint8_t r = pgm_read_byte(&{}[i]);", name));
            block.line(format!("uint8_t g = pgm_read_byte(&{}[i + 1]);", name));
            block.line(format!("uint8_t b = pgm_read_byte(&{}[i + 2]);", name));
            if stride == 4 {
                block.line(format!("uint8_t a = pgm_read_byte(&{}[i + 3]);", name));
                block.line("if (a < 128) continue;");
            }
            block.line(format!("{0}.drawPixel(x, y, {0}.color565(r, g, b));", obj));
            block.close();
            block.close();
        }
        DrawMode::Rgb332 => {
            open_pixel_loop(&mut block, width, height);
            block.line(format!(
                "uint8_t v = pgm_read_byte(&{}[(uint32_t)y * {} + x]);",
                name, width
            ));
            block.line(format!(
                "{0}.drawPixel(x, y, {0}.color565(v & 0xE0, (v << 3) & 0xE0, (v << 6) & 0xC0));",
                obj
            ));
            block.close();
            block.close();
        }
        DrawMode::Gray4 => {
            block.line(format!("const uint16_t stride = ({} + 1) / 2;", width));
            open_pixel_loop(&mut block, width, height);
            block.line(format!(
                "uint8_t pair = pgm_read_byte(&{}[(uint32_t)y * stride + x / 2]);",
                name
            ));
            block.line("uint8_t level = (x & 1) ? (pair & 0x0F) : (pair >> 4);");
            block.line("uint8_t v = level * 17;");
            block.line(format!("{0}.drawPixel(x, y, {0}.color565(v, v, v));", obj));
            block.close();
            block.close();
        }
    }

    block
}

/// Row-major `y`/`x` loop header (two levels; caller closes both).
fn open_pixel_loop(block: &mut CodeBlock, width: &str, height: &str) {
    block.open(format!("for (int16_t y = 0; y < {}; y++)", height));
    block.open(format!("for (int16_t x = 0; x < {}; x++)", width));
}
