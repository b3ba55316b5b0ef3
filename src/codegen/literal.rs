//! # Literals and Identifiers
//!
//! Every hex literal and every identifier in generated source passes
//! through this module.
//!
//! ## Hex Literals
//!
//! | Element | Format | Example |
//! |---------|--------|---------|
//! | `uint8_t` | `0x` + 2 uppercase digits | `0x0A`, `0xFF` |
//! | `uint16_t` | `0x` + 4 uppercase digits | `0x001F`, `0xF800` |
//!
//! ## Identifiers
//!
//! Asset names come from users (`"my logo (v2)"`). Every character outside
//! `[A-Za-z0-9_]` becomes `_`, so `"my logo (v2)"` → `my_logo__v2_`.
//! A result that would clash with a C++ keyword or a name the generated
//! sketch declares itself (`display`, `setup`, loop variables, hardware
//! defines) gets a trailing `_`.

use super::sketch::SKETCH_LOCALS;
use crate::display::DisplayProfile;
use crate::mode::ElementType;

const CPP_KEYWORDS: &[&str] = &[
    "alignas", "alignof", "and", "asm", "auto", "bool", "break", "case", "catch", "char",
    "class", "const", "constexpr", "continue", "default", "delete", "do", "double", "else",
    "enum", "explicit", "extern", "false", "float", "for", "friend", "goto", "if", "inline",
    "int", "long", "mutable", "namespace", "new", "noexcept", "not", "nullptr", "operator",
    "or", "private", "protected", "public", "register", "return", "short", "signed", "sizeof",
    "static", "struct", "switch", "template", "this", "throw", "true", "try", "typedef",
    "typename", "union", "unsigned", "using", "virtual", "void", "volatile", "while", "xor",
];

/// Names the Arduino core or a generated sketch already defines.
const SKETCH_GLOBALS: &[&str] = &["setup", "loop", "Wire", "SPI", "PROGMEM"];

/// Format one element as a zero-padded, uppercase hex literal.
///
/// ```
/// use spritepack::codegen::literal::hex_literal;
/// use spritepack::mode::ElementType;
///
/// assert_eq!(hex_literal(0xAA, ElementType::U8), "0xAA");
/// assert_eq!(hex_literal(0x5, ElementType::U8), "0x05");
/// assert_eq!(hex_literal(0xF800, ElementType::U16), "0xF800");
/// assert_eq!(hex_literal(0x1F, ElementType::U16), "0x001F");
/// ```
pub fn hex_literal(value: u32, element: ElementType) -> String {
    format!("0x{:0width$X}", value, width = element.hex_digits())
}

/// Replace every character outside `[A-Za-z0-9_]` with `_`.
///
/// An empty name becomes `_`, and a leading digit gets a `_` prefix, so the
/// result is always a valid C identifier. Reserved names get a `_` suffix.
///
/// ```
/// use spritepack::codegen::literal::sanitize_identifier;
///
/// assert_eq!(sanitize_identifier("sprite-name.v2"), "sprite_name_v2");
/// assert_eq!(sanitize_identifier("Logo_64"), "Logo_64");
/// assert_eq!(sanitize_identifier("8ball"), "_8ball");
/// assert_eq!(sanitize_identifier("display"), "display_");
/// ```
pub fn sanitize_identifier(name: &str) -> String {
    let mut ident: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();

    if ident.is_empty() || ident.starts_with(|c: char| c.is_ascii_digit()) {
        ident.insert(0, '_');
    }
    if is_reserved(&ident) {
        ident.push('_');
    }
    ident
}

/// Whether `ident` would collide with a keyword or a sketch-level name.
pub fn is_reserved(ident: &str) -> bool {
    CPP_KEYWORDS.contains(&ident)
        || SKETCH_GLOBALS.contains(&ident)
        || SKETCH_LOCALS.contains(&ident)
        || DisplayProfile::ALL.iter().any(|p| {
            p.object == ident || p.defines.iter().any(|(name, _)| *name == ident)
        })
}

/// Split `values` into comma-separated lines of at most `per_line` literals.
///
/// Every line but the last ends with a comma, so joining the lines with
/// newlines yields a valid initializer body.
pub fn format_values(values: &[u32], element: ElementType, per_line: usize) -> Vec<String> {
    let chunks: Vec<&[u32]> = values.chunks(per_line.max(1)).collect();
    let last = chunks.len().saturating_sub(1);

    chunks
        .iter()
        .enumerate()
        .map(|(i, chunk)| {
            let mut line = chunk
                .iter()
                .map(|&v| hex_literal(v, element))
                .collect::<Vec<_>>()
                .join(", ");
            if i != last {
                line.push(',');
            }
            line
        })
        .collect()
}

/// Character literal for a glyph comment: `' '`, `'A'`, or the hex code for
/// anything unprintable.
pub fn char_comment(code: u8) -> String {
    if code.is_ascii_graphic() || code == b' ' {
        format!("0x{:02X} '{}'", code, code as char)
    } else {
        format!("0x{:02X}", code)
    }
}
