//! # Spritepack - Firmware Bitmap Encoder
//!
//! Spritepack turns an RGBA pixel buffer into the packed byte/word layouts
//! that small displays expect and wraps the result in compilable source
//! code. It provides:
//!
//! - **Packing**: 1-bit (horizontal, vertical page, alpha mask), RGB565,
//!   RGB332, 4-bit grayscale, RGB24 and RGBA32
//! - **Code generation**: full Arduino sketches, bare PROGMEM arrays,
//!   plain hex listings and Adafruit GFX fonts
//! - **Preview**: decode packed data back to pixels and PNG
//! - **Export**: header/binary files and parallel batch generation
//! - **Server**: an HTTP API for browser-based editors
//!
//! ## Quick Start
//!
//! ```
//! use spritepack::{generate_from_rgba, DrawMode, EmitOptions, OutputFormat};
//!
//! // 8x1 sprite alternating white/black
//! let rgba: Vec<u8> = (0..8)
//!     .flat_map(|i| if i % 2 == 0 { [255, 255, 255, 255] } else { [0, 0, 0, 255] })
//!     .collect();
//!
//! let generated = generate_from_rgba(
//!     "blink",
//!     8,
//!     1,
//!     &rgba,
//!     DrawMode::Horizontal1Bit,
//!     OutputFormat::ArduinoSingleBitmap,
//!     EmitOptions::default(),
//! )?;
//!
//! assert!(generated.code.contains("const uint8_t blink[] PROGMEM = {"));
//! assert!(generated.code.contains("0xAA"));
//! # Ok::<(), spritepack::SpritepackError>(())
//! ```
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`pixel`] | `Pixel` and validated `PixelBuffer` |
//! | [`mode`] | `DrawMode` / `OutputFormat` selectors |
//! | [`pack`] | Bit and color packers |
//! | [`codegen`] | Source emitters and renderer |
//! | [`display`] | Target display profiles |
//! | [`preview`] | Packed data decoding and PNG output |
//! | [`export`] | File output and batch generation |
//! | [`server`] | HTTP API |
//! | [`error`] | Error types |

pub mod codegen;
pub mod display;
pub mod error;
pub mod export;
pub mod mode;
pub mod pack;
pub mod pixel;
pub mod preview;
pub mod server;

// Re-exports for convenience
pub use codegen::{generate, generate_from_rgba, EmitOptions, GenerateRequest, Generated};
pub use display::DisplayProfile;
pub use error::{Result, SpritepackError};
pub use mode::{DrawMode, ElementType, OutputFormat};
pub use pack::{pack, Endian, Packed};
pub use pixel::{Pixel, PixelBuffer};
