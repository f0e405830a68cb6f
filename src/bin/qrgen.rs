use clap::Parser;
use rust_qrgen::render::{self, RenderConfig};
use rust_qrgen::{Charset, ECLevel, EncodeOptions, EncodingMode, MaskPattern, QrEncoder};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "qrgen", version, about = "Generate QR code symbols")]
struct Cli {
    /// Text payload to encode
    text: String,

    /// Error correction level: low, medium, quartile, high
    #[arg(long, default_value = "low")]
    ec: String,

    /// Mask pattern id (0-7)
    #[arg(long, default_value_t = 0)]
    mask: u8,

    /// Force an encoding mode: numeric, alphanumeric, byte
    #[arg(long)]
    mode: Option<String>,

    /// Byte-mode charset: utf-8, latin-1
    #[arg(long, default_value = "utf-8")]
    charset: String,

    /// Write a PNG to this path
    #[arg(long)]
    out: Option<PathBuf>,

    /// Write an SVG to this path
    #[arg(long)]
    svg: Option<PathBuf>,

    /// Module size in pixels for raster output
    #[arg(long, default_value_t = 8)]
    module_size: u32,

    /// Quiet zone width in modules
    #[arg(long, default_value_t = 4)]
    quiet_zone: u32,
}

fn parse_ec(name: &str) -> Option<ECLevel> {
    match name.to_ascii_lowercase().as_str() {
        "low" | "l" => Some(ECLevel::L),
        "medium" | "m" => Some(ECLevel::M),
        "quartile" | "q" => Some(ECLevel::Q),
        "high" | "h" => Some(ECLevel::H),
        _ => None,
    }
}

fn parse_mode(name: &str) -> Option<EncodingMode> {
    match name.to_ascii_lowercase().as_str() {
        "numeric" => Some(EncodingMode::Numeric),
        "alphanumeric" => Some(EncodingMode::Alphanumeric),
        "byte" => Some(EncodingMode::Byte),
        _ => None,
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();

    let Some(ec_level) = parse_ec(&cli.ec) else {
        eprintln!("unrecognized error correction level: {}", cli.ec);
        return ExitCode::from(2);
    };
    let Some(mask_pattern) = MaskPattern::from_bits(cli.mask) else {
        eprintln!("mask pattern id must be 0-7, got {}", cli.mask);
        return ExitCode::from(2);
    };
    let mode = match &cli.mode {
        Some(name) => match parse_mode(name) {
            Some(mode) => Some(mode),
            None => {
                eprintln!("unrecognized encoding mode: {name}");
                return ExitCode::from(2);
            }
        },
        None => None,
    };
    let Some(charset) = Charset::from_name(&cli.charset) else {
        eprintln!("unsupported charset: {}", cli.charset);
        return ExitCode::from(2);
    };

    let options = EncodeOptions {
        ec_level,
        mask_pattern,
        mode,
        charset,
    };
    let qr = match QrEncoder::new(options).encode(&cli.text) {
        Ok(qr) => qr,
        Err(err) => {
            eprintln!("encoding failed: {err}");
            return ExitCode::FAILURE;
        }
    };
    println!(
        "version={} size={}x{} ec={:?} mask={} mode={:?}",
        qr.version().number(),
        qr.size(),
        qr.size(),
        qr.error_correction(),
        qr.mask_pattern().id(),
        qr.mode()
    );

    if let Some(path) = &cli.svg {
        let svg = render::to_svg_string(&qr, cli.quiet_zone);
        if let Err(err) = std::fs::write(path, svg) {
            eprintln!("failed to write {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
        println!("wrote {}", path.display());
    }

    if let Some(path) = &cli.out {
        let config = match RenderConfig::new(cli.module_size, cli.quiet_zone) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("{err}");
                return ExitCode::from(2);
            }
        };
        let image = render::to_image(&qr, &config);
        if let Err(err) = image.save(path) {
            eprintln!("failed to write {}: {err}", path.display());
            return ExitCode::FAILURE;
        }
        println!("wrote {}", path.display());
    } else if cli.svg.is_none() {
        print!("{}", render::to_ascii(&qr, cli.quiet_zone.min(2)));
    }

    ExitCode::SUCCESS
}
