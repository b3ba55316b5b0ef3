//! End-to-end encoder tests.
//!
//! Exercise the public API from pixel buffer to generated source and check
//! exact packed values for known inputs.

use pretty_assertions::assert_eq;
use spritepack::{
    codegen::sanitize_identifier, generate, generate_from_rgba, pack, preview, DrawMode,
    EmitOptions, GenerateRequest, OutputFormat, Packed, Pixel, PixelBuffer, SpritepackError,
};

fn alternating(width: usize, height: usize) -> PixelBuffer {
    let pixels = (0..width * height)
        .map(|i| if i % 2 == 0 { Pixel::WHITE } else { Pixel::BLACK })
        .collect();
    PixelBuffer::new(width, height, pixels).unwrap()
}

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

/// Deterministic pseudo-random buffer for length checks.
fn noise(width: usize, height: usize, seed: u32) -> PixelBuffer {
    let mut state = seed.wrapping_mul(2654435761).max(1);
    let pixels = (0..width * height)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 17;
            state ^= state << 5;
            let [r, g, b, a] = state.to_le_bytes();
            Pixel::rgba(r, g, b, a)
        })
        .collect();
    PixelBuffer::new(width, height, pixels).unwrap()
}

fn request(buffer: &PixelBuffer, mode: DrawMode, format: OutputFormat) -> GenerateRequest<'_> {
    GenerateRequest {
        buffer,
        name: "asset",
        draw_mode: mode,
        output_format: format,
        options: EmitOptions::default(),
    }
}

// ============================================================================
// Packing
// ============================================================================

#[test]
fn test_horizontal_alternating_byte() {
    let packed = pack(&alternating(8, 1), DrawMode::Horizontal1Bit);
    assert_eq!(packed, Packed::Bytes(vec![0xAA]));
}

#[test]
fn test_horizontal_row_padding() {
    let buf = PixelBuffer::filled(10, 1, Pixel::WHITE).unwrap();
    assert_eq!(
        pack(&buf, DrawMode::Horizontal1Bit),
        Packed::Bytes(vec![0xFF, 0xC0])
    );
}

#[test]
fn test_vertical_alternating_page() {
    let packed = pack(&alternating(1, 8), DrawMode::Vertical1Bit);
    assert_eq!(packed, Packed::Bytes(vec![0xAA]));
}

#[test]
fn test_rgb565_primaries() {
    assert_eq!(
        pack(&primaries(), DrawMode::HorizontalRgb565),
        Packed::Words(vec![0xF800, 0x07E0, 0x001F])
    );
}

#[test]
fn test_rgb332_primaries() {
    assert_eq!(
        pack(&primaries(), DrawMode::Rgb332),
        Packed::Bytes(vec![0xE0, 0x1C, 0x03])
    );
}

#[test]
fn test_gray4_ramp() {
    let buf = PixelBuffer::new(
        4,
        1,
        vec![
            Pixel::gray(0),
            Pixel::gray(85),
            Pixel::gray(160),
            Pixel::gray(255),
        ],
    )
    .unwrap();
    assert_eq!(pack(&buf, DrawMode::Gray4), Packed::Bytes(vec![0x05, 0xAF]));
}

#[test]
fn test_rgb24_and_rgba32_copy_channels() {
    let buf = PixelBuffer::new(1, 1, vec![Pixel::rgba(1, 2, 3, 4)]).unwrap();
    assert_eq!(
        pack(&buf, DrawMode::HorizontalRgb888_24),
        Packed::Bytes(vec![1, 2, 3])
    );
    assert_eq!(
        pack(&buf, DrawMode::HorizontalRgb888_32),
        Packed::Bytes(vec![1, 2, 3, 4])
    );
}

#[test]
fn test_alpha_mask_ignores_color() {
    let buf = PixelBuffer::new(
        4,
        1,
        vec![
            Pixel::rgba(0, 0, 0, 255),
            Pixel::rgba(255, 255, 255, 0),
            Pixel::rgba(0, 0, 0, 128),
            Pixel::rgba(255, 255, 255, 127),
        ],
    )
    .unwrap();
    assert_eq!(
        pack(&buf, DrawMode::HorizontalAlpha),
        Packed::Bytes(vec![0xA0])
    );
}

#[test]
fn test_packed_lengths_for_all_modes() {
    for (w, h) in [(1, 1), (7, 3), (8, 8), (9, 9), (17, 5), (3, 16)] {
        let buf = noise(w, h, (w * 31 + h) as u32);
        for mode in DrawMode::ALL {
            let packed = pack(&buf, mode);
            assert_eq!(packed.len(), mode.packed_len(w, h), "{} at {}x{}", mode, w, h);
            assert_eq!(packed.element_type(), mode.element_type(), "{}", mode);
        }
    }

    assert_eq!(DrawMode::Horizontal1Bit.packed_len(9, 2), 4);
    assert_eq!(DrawMode::Vertical1Bit.packed_len(2, 9), 4);
    assert_eq!(DrawMode::HorizontalRgb888_24.packed_len(2, 2), 12);
    assert_eq!(DrawMode::Gray4.packed_len(3, 2), 4);
}

#[test]
fn test_packing_is_deterministic() {
    let buf = noise(13, 7, 42);
    for mode in DrawMode::ALL {
        assert_eq!(pack(&buf, mode), pack(&buf, mode), "{}", mode);
    }
}

#[test]
fn test_monochrome_round_trip_through_preview() {
    let buf = noise(19, 11, 7);
    for mode in [DrawMode::Horizontal1Bit, DrawMode::Vertical1Bit] {
        let decoded = preview::unpack(&pack(&buf, mode), mode, 19, 11).unwrap();
        for y in 0..11 {
            for x in 0..19 {
                let lit = buf.get(x, y).channel_sum() > 381;
                assert_eq!(decoded.get(x, y) == Pixel::WHITE, lit, "{} ({}, {})", mode, x, y);
            }
        }
    }
}

// ============================================================================
// Validation
// ============================================================================

#[test]
fn test_length_mismatch_is_rejected() {
    let err = generate_from_rgba(
        "short",
        4,
        4,
        &[0u8; 4 * 15],
        DrawMode::Horizontal1Bit,
        OutputFormat::PlainBytes,
        EmitOptions::default(),
    )
    .unwrap_err();
    assert!(matches!(
        err,
        SpritepackError::BufferLengthMismatch {
            expected: 16,
            actual: 15
        }
    ));
}

#[test]
fn test_zero_dimensions_are_rejected() {
    let err = PixelBuffer::new(0, 4, vec![]).unwrap_err();
    assert!(matches!(
        err,
        SpritepackError::InvalidDimensions {
            width: 0,
            height: 4
        }
    ));
}

#[test]
fn test_overflowing_dimensions_are_rejected_before_packing() {
    let huge = 1usize << 32;
    for mode in [DrawMode::Vertical1Bit, DrawMode::HorizontalRgb888_32] {
        let err = generate_from_rgba(
            "huge",
            huge,
            huge,
            &[],
            mode,
            OutputFormat::PlainBytes,
            EmitOptions::default(),
        )
        .unwrap_err();
        assert!(
            matches!(err, SpritepackError::DimensionsTooLarge { .. }),
            "{}: {}",
            mode,
            err
        );
    }
}

#[test]
fn test_unknown_selectors_are_rejected() {
    assert!(matches!(
        "HORIZONTAL_CMYK".parse::<DrawMode>(),
        Err(SpritepackError::UnsupportedDrawMode(name)) if name == "HORIZONTAL_CMYK"
    ));
    assert!(matches!(
        "SVG".parse::<OutputFormat>(),
        Err(SpritepackError::UnsupportedOutputFormat(_))
    ));
}

#[test]
fn test_gfx_font_rejects_color_modes() {
    let buf = primaries();
    let err = generate(&request(
        &buf,
        DrawMode::HorizontalRgb565,
        OutputFormat::GfxBitmapFont,
    ))
    .unwrap_err();
    assert!(matches!(
        err,
        SpritepackError::UnsupportedCombination {
            draw_mode: DrawMode::HorizontalRgb565,
            output_format: OutputFormat::GfxBitmapFont,
        }
    ));
}

// ============================================================================
// Code generation
// ============================================================================

#[test]
fn test_every_supported_combination_generates() {
    let buf = noise(9, 5, 3);
    for mode in DrawMode::ALL {
        for format in OutputFormat::ALL {
            let result = generate(&request(&buf, mode, format));
            if format.supports(mode) {
                let generated = result.unwrap();
                assert!(!generated.code.is_empty(), "{} / {}", mode, format);
                assert_eq!(generated.packed, pack(&buf, mode));
            } else {
                assert!(result.is_err(), "{} / {}", mode, format);
            }
        }
    }
}

#[test]
fn test_single_bitmap_exact_output() {
    let buf = alternating(8, 1);
    let generated = generate(&GenerateRequest {
        buffer: &buf,
        name: "blink",
        draw_mode: DrawMode::Horizontal1Bit,
        output_format: OutputFormat::ArduinoSingleBitmap,
        options: EmitOptions::default(),
    })
    .unwrap();

    assert_eq!(
        generated.code,
        "// 'blink', 8x1px, 1 byte\nconst uint8_t blink[] PROGMEM = {\n  0xAA\n};\n"
    );
}

#[test]
fn test_plain_bytes_exact_output() {
    let generated = generate(&GenerateRequest {
        buffer: &primaries(),
        name: "rgb",
        draw_mode: DrawMode::HorizontalRgb565,
        output_format: OutputFormat::PlainBytes,
        options: EmitOptions::default(),
    })
    .unwrap();

    assert_eq!(
        generated.code,
        "// 'rgb', 3x1px\n// 3 words, uint16_t, HORIZONTAL_RGB565\n0xF800, 0x07E0, 0x001F\n"
    );
}

#[test]
fn test_identifier_is_consistent_everywhere() {
    let buf = PixelBuffer::filled(16, 16, Pixel::WHITE).unwrap();
    let name = "9 lives-icon!";
    let identifier = sanitize_identifier(name);
    assert_eq!(identifier, "_9_lives_icon_");

    for format in OutputFormat::ALL {
        let generated = generate(&GenerateRequest {
            buffer: &buf,
            name,
            draw_mode: DrawMode::Horizontal1Bit,
            output_format: format,
            options: EmitOptions::default(),
        })
        .unwrap();

        assert_eq!(generated.identifier, identifier);
        assert_eq!(generated.filename, format!("{}.h", identifier));
        assert!(
            !generated.code.contains(name),
            "raw name leaked into {} output",
            format
        );
    }
}

#[test]
fn test_sketch_contains_draw_call_and_data() {
    let buf = primaries();
    let generated = generate(&GenerateRequest {
        buffer: &buf,
        name: "flag",
        draw_mode: DrawMode::HorizontalRgb565,
        output_format: OutputFormat::ArduinoCode,
        options: EmitOptions::default(),
    })
    .unwrap();

    let code = &generated.code;
    assert!(code.contains("#include <Adafruit_ST7789.h>"));
    assert!(code.contains("const uint16_t flag[] PROGMEM = {\n  0xF800, 0x07E0, 0x001F\n};"));
    assert!(code.contains("void setup() {"));
    assert!(code.contains("void loop() {"));
}

#[test]
fn test_sketch_names_do_not_shadow_the_asset() {
    let buf = PixelBuffer::filled(8, 8, Pixel::WHITE).unwrap();

    let generated = generate(&GenerateRequest {
        buffer: &buf,
        name: "display",
        draw_mode: DrawMode::Horizontal1Bit,
        output_format: OutputFormat::ArduinoCode,
        options: EmitOptions::default(),
    })
    .unwrap();
    assert_eq!(generated.identifier, "display_");
    assert!(generated.code.contains("const uint8_t display_[] PROGMEM = {"));
    assert!(generated
        .code
        .contains("display.drawBitmap(0, 0, display_, display__width, display__height, SSD1306_WHITE);"));

    let generated = generate(&GenerateRequest {
        buffer: &buf,
        name: "x",
        draw_mode: DrawMode::Vertical1Bit,
        output_format: OutputFormat::ArduinoCode,
        options: EmitOptions::default(),
    })
    .unwrap();
    assert!(generated.code.contains("pgm_read_byte(&x_[x * pages + y / 8])"));
}

#[test]
fn test_values_per_line_wraps_arrays() {
    let buf = PixelBuffer::filled(40, 1, Pixel::WHITE).unwrap();
    let generated = generate(&GenerateRequest {
        buffer: &buf,
        name: "wide",
        draw_mode: DrawMode::Rgb332,
        output_format: OutputFormat::ArduinoSingleBitmap,
        options: EmitOptions {
            values_per_line: 10,
            ..Default::default()
        },
    })
    .unwrap();

    let data_lines: Vec<&str> = generated
        .code
        .lines()
        .filter(|l| l.starts_with("  0x"))
        .collect();
    assert_eq!(data_lines.len(), 4);
    assert!(data_lines[..3].iter().all(|l| l.ends_with(',')));
    assert!(!data_lines[3].ends_with(','));
}
