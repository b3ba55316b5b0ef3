//! # Plain Bytes Emitter
//!
//! A comment header followed by the bare hex listing, for pasting into an
//! existing declaration. With [`EmitOptions::include_sketch`] a minimal
//! working sketch is appended below the listing.

use super::ir::Artifact;
use super::{Asset, EmitOptions, sketch};

pub fn emit(asset: &Asset<'_>, options: &EmitOptions) -> Artifact {
    let mut artifact = Artifact::new();
    artifact.comment(asset.summary());
    artifact.comment(format!(
        "{}, {}, {}",
        asset.count_label(),
        asset.element().c_type(),
        asset.mode
    ));
    artifact.push(asset.listing(options.values_per_line));

    if options.include_sketch {
        artifact.blank();
        artifact.comment("Minimal working sketch");
        artifact.extend(sketch::emit_minimal(asset, options).items);
    }

    artifact
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mode::DrawMode;
    use crate::pack::Packed;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_listing_only() {
        let packed = Packed::Words(vec![0xF800, 0x07E0, 0x001F]);
        let asset = Asset {
            identifier: "rgb",
            width: 3,
            height: 1,
            mode: DrawMode::HorizontalRgb565,
            packed: &packed,
        };
        let code = emit(&asset, &EmitOptions::default()).to_source();
        assert_eq!(
            code,
            "// 'rgb', 3x1px\n// 3 words, uint16_t, HORIZONTAL_RGB565\n0xF800, 0x07E0, 0x001F\n"
        );
    }

    #[test]
    fn test_listing_wraps_lines() {
        let packed = Packed::Bytes((0..20).collect());
        let asset = Asset {
            identifier: "ramp",
            width: 20,
            height: 1,
            mode: DrawMode::Rgb332,
            packed: &packed,
        };
        let options = EmitOptions {
            values_per_line: 8,
            ..Default::default()
        };
        let code = emit(&asset, &options).to_source();
        let lines: Vec<&str> = code.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[2], "0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07,");
        assert_eq!(lines[4], "0x10, 0x11, 0x12, 0x13");
    }

    #[test]
    fn test_with_sketch() {
        let packed = Packed::Bytes(vec![0xAA]);
        let asset = Asset {
            identifier: "dot",
            width: 8,
            height: 1,
            mode: DrawMode::Horizontal1Bit,
            packed: &packed,
        };
        let options = EmitOptions {
            include_sketch: true,
            ..Default::default()
        };
        let code = emit(&asset, &options).to_source();
        assert!(code.starts_with("// 'dot', 8x1px\n// 1 byte, uint8_t, HORIZONTAL_1BIT\n0xAA\n\n"));
        assert!(code.contains("// Minimal working sketch\n#include <Wire.h>"));
        assert!(code.contains("const uint8_t dot[] PROGMEM = {\n  0xAA\n};"));
        assert!(code.contains("display.drawBitmap(0, 0, dot, 8, 1, SSD1306_WHITE);"));
        assert!(code.ends_with("void loop() {\n}\n"));
    }
}
