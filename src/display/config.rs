//! # Display Profiles
//!
//! This module describes the display hardware a generated sketch targets:
//! which Arduino libraries to include, how to construct and start the
//! driver, and how to push a frame.
//!
//! ## Supported Displays
//!
//! | Profile | Panel | Library | Resolution |
//! |---------|-------|---------|------------|
//! | `SSD1306_128X64` | Monochrome OLED (I2C) | Adafruit_SSD1306 | 128x64 |
//! | `ST7789_240X240` | Color TFT (SPI) | Adafruit_ST7789 | 240x240 |
//!
//! ## Usage
//!
//! ```
//! use spritepack::display::DisplayProfile;
//! use spritepack::mode::DrawMode;
//!
//! let profile = DisplayProfile::for_mode(DrawMode::HorizontalRgb565);
//! assert_eq!(profile.name, "ST7789 240x240");
//! assert!(profile.includes.contains(&"Adafruit_ST7789.h"));
//! ```

use crate::mode::DrawMode;

/// Panel family, which decides how pixels are pushed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelKind {
    /// 1-bit framebuffer flushed with `display()`.
    Monochrome,
    /// Direct-write 16-bit color panel.
    Color,
}

/// # Display Profile
///
/// Static description of a display target.
///
/// - **includes**: headers in include order
/// - **declaration**: global driver object, terminated with `;`
/// - **begin**: statements run first in `setup()`
/// - **clear** / **flush**: frame start and end
/// - **on_color**: color constant for lit pixels in 1-bit drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayProfile {
    /// Human-readable name
    pub name: &'static str,

    pub kind: PanelKind,

    /// Driver object identifier used in generated code
    pub object: &'static str,

    pub includes: &'static [&'static str],

    /// `#define` pairs emitted before the driver declaration
    pub defines: &'static [(&'static str, &'static str)],

    pub declaration: &'static str,

    pub begin: &'static [&'static str],

    pub clear: &'static str,

    /// Empty when the panel draws directly
    pub flush: &'static str,

    pub on_color: &'static str,

    pub width: u16,
    pub height: u16,
}

impl DisplayProfile {
    /// # SSD1306 128x64 OLED
    ///
    /// I2C at address `0x3C`, no reset pin. Drawing happens in the
    /// library's RAM framebuffer and is pushed with `display()`.
    pub const SSD1306_128X64: Self = Self {
        name: "SSD1306 128x64",
        kind: PanelKind::Monochrome,
        object: "display",
        includes: &["Wire.h", "Adafruit_GFX.h", "Adafruit_SSD1306.h"],
        defines: &[
            ("SCREEN_WIDTH", "128"),
            ("SCREEN_HEIGHT", "64"),
            ("OLED_RESET", "-1"),
            ("SCREEN_ADDRESS", "0x3C"),
        ],
        declaration: "Adafruit_SSD1306 display(SCREEN_WIDTH, SCREEN_HEIGHT, &Wire, OLED_RESET);",
        begin: &[
            "if (!display.begin(SSD1306_SWITCHCAPVCC, SCREEN_ADDRESS)) {",
            "  for (;;);",
            "}",
        ],
        clear: "display.clearDisplay();",
        flush: "display.display();",
        on_color: "SSD1306_WHITE",
        width: 128,
        height: 64,
    };

    /// # ST7789 240x240 TFT
    ///
    /// Hardware SPI with CS on pin 10, DC on 9 and RST on 8. Pixels are
    /// written straight to the panel, so there is no flush.
    pub const ST7789_240X240: Self = Self {
        name: "ST7789 240x240",
        kind: PanelKind::Color,
        object: "tft",
        includes: &["SPI.h", "Adafruit_GFX.h", "Adafruit_ST7789.h"],
        defines: &[("TFT_CS", "10"), ("TFT_DC", "9"), ("TFT_RST", "8")],
        declaration: "Adafruit_ST7789 tft = Adafruit_ST7789(TFT_CS, TFT_DC, TFT_RST);",
        begin: &["tft.init(240, 240);", "tft.setRotation(0);"],
        clear: "tft.fillScreen(ST77XX_BLACK);",
        flush: "",
        on_color: "ST77XX_WHITE",
        width: 240,
        height: 240,
    };

    /// Every known profile.
    pub const ALL: [DisplayProfile; 2] = [Self::SSD1306_128X64, Self::ST7789_240X240];

    /// Default target for a draw mode: the OLED for 1-bit data, the TFT for
    /// everything else.
    pub fn for_mode(mode: DrawMode) -> Self {
        if mode.is_monochrome() {
            Self::SSD1306_128X64
        } else {
            Self::ST7789_240X240
        }
    }

    /// Look up a profile by name (case-insensitive, `ssd1306`/`st7789`
    /// accepted as short forms).
    pub fn by_name(name: &str) -> Option<Self> {
        let lower = name.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|p| {
                let full = p.name.to_ascii_lowercase();
                full == lower || full.split(' ').next() == Some(lower.as_str())
            })
    }

    /// Whether a `width x height` asset fits on the panel.
    #[inline]
    pub fn fits(&self, width: usize, height: usize) -> bool {
        width <= self.width as usize && height <= self.height as usize
    }
}
