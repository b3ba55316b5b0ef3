//! # Spritepack CLI
//!
//! Command-line interface for turning images into firmware bitmap sources.
//!
//! ## Usage
//!
//! ```bash
//! # List draw modes and output formats
//! spritepack modes
//!
//! # Print a PROGMEM array for a 1-bit icon
//! spritepack encode icon.png --mode 1bit --format single
//!
//! # Write a full sketch plus a raw little-endian RGB565 dump
//! spritepack encode logo.png --mode rgb565 --format arduino --out build --bin logo.bin --endian little
//!
//! # Export a whole icon set in parallel
//! spritepack batch icons/*.png --mode vertical --format single --out include
//!
//! # Run the HTTP API
//! spritepack serve --listen 0.0.0.0:8080
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use spritepack::{
    codegen::{self, EmitOptions, GenerateRequest, DEFAULT_VALUES_PER_LINE},
    display::DisplayProfile,
    export,
    mode::{DrawMode, OutputFormat},
    pack::Endian,
    preview,
    server::{self, ServerConfig, DEFAULT_MAX_DIMENSION},
    PixelBuffer, SpritepackError,
};

/// Sketch target selectable with `--display`.
#[derive(Debug, Clone, Copy, ValueEnum)]
enum DisplayArg {
    /// SSD1306 128x64 I2C OLED
    Ssd1306,
    /// ST7789 240x240 SPI TFT
    St7789,
}

impl DisplayArg {
    fn profile(self) -> DisplayProfile {
        match self {
            DisplayArg::Ssd1306 => DisplayProfile::SSD1306_128X64,
            DisplayArg::St7789 => DisplayProfile::ST7789_240X240,
        }
    }
}

/// Spritepack - pixel buffer encoder for small displays
#[derive(Parser, Debug)]
#[command(name = "spritepack")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Encode one PNG into source code
    Encode {
        /// Input image (decoded as RGBA, no scaling)
        input: PathBuf,

        /// Draw mode (canonical name or alias, see `spritepack modes`)
        #[arg(long, default_value = "HORIZONTAL_1BIT")]
        mode: DrawMode,

        /// Output format (canonical name or alias)
        #[arg(long, default_value = "ARDUINO_SINGLE_BITMAP")]
        format: OutputFormat,

        /// Asset name (defaults to the file stem)
        #[arg(long)]
        name: Option<String>,

        /// Write `<identifier>.h` into this directory instead of stdout
        #[arg(long, value_name = "DIR")]
        out: Option<PathBuf>,

        /// Also write the raw packed data to this file
        #[arg(long, value_name = "FILE")]
        bin: Option<PathBuf>,

        /// Byte order for 16-bit elements in --bin output
        #[arg(long, default_value = "big")]
        endian: Endian,

        /// Append a minimal sketch to PLAIN_BYTES output
        #[arg(long)]
        with_sketch: bool,

        /// Target display for sketches (defaults by draw mode)
        #[arg(long, value_enum)]
        display: Option<DisplayArg>,

        /// Hex literals per line
        #[arg(long, default_value_t = DEFAULT_VALUES_PER_LINE)]
        per_line: usize,

        /// Decode the packed data and save what the display will show as PNG
        #[arg(long, value_name = "FILE")]
        preview: Option<PathBuf>,
    },

    /// Encode many PNGs in parallel, one header per input
    Batch {
        /// Input images
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        #[arg(long, default_value = "HORIZONTAL_1BIT")]
        mode: DrawMode,

        #[arg(long, default_value = "ARDUINO_SINGLE_BITMAP")]
        format: OutputFormat,

        /// Output directory
        #[arg(long, value_name = "DIR")]
        out: PathBuf,
    },

    /// List draw modes and output formats
    Modes,

    /// Start the HTTP encoding API
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,

        /// Hex literals per line
        #[arg(long, default_value_t = DEFAULT_VALUES_PER_LINE)]
        per_line: usize,

        /// Largest canvas width or height accepted from clients
        #[arg(long, default_value_t = DEFAULT_MAX_DIMENSION)]
        max_dimension: usize,
    },
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,spritepack=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run() -> Result<(), SpritepackError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Encode {
            input,
            mode,
            format,
            name,
            out,
            bin,
            endian,
            with_sketch,
            display,
            per_line,
            preview: preview_path,
        } => {
            let display = display.map(DisplayArg::profile);

            let buffer = load_png(&input)?;
            let name = name.unwrap_or_else(|| file_stem(&input));
            let generated = codegen::generate(&GenerateRequest {
                buffer: &buffer,
                name: &name,
                draw_mode: mode,
                output_format: format,
                options: EmitOptions {
                    display,
                    values_per_line: per_line,
                    include_sketch: with_sketch,
                    ..Default::default()
                },
            })?;

            let profile = display.unwrap_or_else(|| DisplayProfile::for_mode(mode));
            if format == OutputFormat::ArduinoCode && !profile.fits(buffer.width(), buffer.height()) {
                tracing::warn!(
                    width = buffer.width(),
                    height = buffer.height(),
                    display = profile.name,
                    "asset is larger than the target display"
                );
            }

            match out {
                Some(dir) => {
                    std::fs::create_dir_all(&dir)?;
                    let path = export::write_header(&dir, &generated)?;
                    println!("Wrote {}", path.display());
                }
                None => print!("{}", generated.code),
            }

            if let Some(path) = bin {
                export::write_binary(&path, &generated.packed, endian)?;
            }

            if let Some(path) = preview_path {
                let decoded =
                    preview::unpack(&generated.packed, mode, buffer.width(), buffer.height())?;
                std::fs::write(&path, preview::render_png(&decoded)?)?;
                tracing::info!(path = %path.display(), "wrote preview");
            }
        }

        Commands::Batch {
            inputs,
            mode,
            format,
            out,
        } => {
            std::fs::create_dir_all(&out)?;

            let buffers = inputs
                .iter()
                .map(|path| load_png(path))
                .collect::<Result<Vec<_>, _>>()?;
            let names: Vec<String> = inputs.iter().map(|p| file_stem(p)).collect();

            let requests: Vec<GenerateRequest<'_>> = buffers
                .iter()
                .zip(&names)
                .map(|(buffer, name)| GenerateRequest {
                    buffer,
                    name: name.as_str(),
                    draw_mode: mode,
                    output_format: format,
                    options: EmitOptions::default(),
                })
                .collect();

            let mut failed = 0;
            for (input, result) in inputs.iter().zip(export::generate_batch(&requests)) {
                match result.and_then(|g| export::write_header(&out, &g)) {
                    Ok(path) => println!("{} -> {}", input.display(), path.display()),
                    Err(e) => {
                        failed += 1;
                        eprintln!("{}: {}", input.display(), e);
                    }
                }
            }

            if failed > 0 {
                return Err(SpritepackError::BatchFailed {
                    failed,
                    total: inputs.len(),
                });
            }
        }

        Commands::Modes => {
            println!("Draw modes:");
            for mode in DrawMode::ALL {
                println!(
                    "  {:<22} {:<8} {}",
                    mode.name(),
                    mode.alias(),
                    mode.element_type().c_type()
                );
            }
            println!("\nOutput formats:");
            for format in OutputFormat::ALL {
                println!("  {:<22} {}", format.name(), format.alias());
            }
        }

        Commands::Serve {
            listen,
            per_line,
            max_dimension,
        } => {
            let config = ServerConfig {
                listen_addr: listen,
                values_per_line: per_line,
                max_dimension,
            };

            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(server::serve(config))?;
        }
    }

    Ok(())
}

/// Decode an image file into an RGBA pixel buffer.
fn load_png(path: &Path) -> Result<PixelBuffer, SpritepackError> {
    let img = image::open(path)
        .map_err(|e| SpritepackError::Image(format!("Failed to load {}: {}", path.display(), e)))?
        .to_rgba8();
    PixelBuffer::from_image(&img)
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
