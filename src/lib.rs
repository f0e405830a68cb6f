//! RustQRGen - fast QR code generation library
//!
//! A pure Rust QR code generator (ISO/IEC 18004, Model 2): mode selection
//! and bit packing, Reed-Solomon error correction over GF(256), BCH format
//! and version metadata, structural layout and masked zig-zag placement,
//! with rasterization glue on top.
//!
//! Encoding is synchronous and pure: payload in, module matrix out. The
//! lookup tables are immutable after first use, so any number of encodes
//! may run concurrently.

#![warn(missing_docs)]
#![allow(clippy::missing_docs_in_private_items)]

/// QR code encoding pipeline (modes, version, Reed-Solomon, placement)
pub mod encoder;
/// Error taxonomy for encoding and rendering
pub mod error;
/// Core data structures (ModuleMatrix, Version, ECLevel, MaskPattern)
pub mod models;
/// Rendering glue (raster image, SVG, terminal output)
pub mod render;

pub use encoder::{Charset, EncodeOptions, EncodingMode, QrEncoder};
pub use error::EncodeError;
pub use models::{ECLevel, MaskPattern, ModuleMatrix, QRCode, Version};

/// Encode a payload into a QR symbol with default mode detection and
/// UTF-8 byte-mode charset.
///
/// # Example
/// ```
/// use rust_qrgen::{ECLevel, MaskPattern};
///
/// let qr = rust_qrgen::encode("HELLO WORLD", ECLevel::Q, MaskPattern::Pattern2).unwrap();
/// assert_eq!(qr.version().number(), 1);
/// assert_eq!(qr.size(), 21);
/// ```
pub fn encode(
    payload: &str,
    ec_level: ECLevel,
    mask_pattern: MaskPattern,
) -> Result<QRCode, EncodeError> {
    let options = EncodeOptions {
        ec_level,
        mask_pattern,
        ..EncodeOptions::default()
    };
    QrEncoder::new(options).encode(payload)
}

/// Encode a payload with full control over mode override and charset
pub fn encode_with_options(payload: &str, options: EncodeOptions) -> Result<QRCode, EncodeError> {
    QrEncoder::new(options).encode(payload)
}
