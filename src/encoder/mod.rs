//! QR code encoding pipeline
//!
//! This module contains all the logic for turning a payload into a module
//! matrix:
//! - Mode selection and bit packing (numeric, alphanumeric, byte)
//! - Version resolution against the capacity table
//! - Reed-Solomon error correction and block interleaving
//! - BCH-protected format and version metadata
//! - Structural layout and masked zig-zag placement

/// BCH-protected metadata strings (format and version info values)
pub mod bch;
/// MSB-first bit stream writer
pub mod bitstream;
/// Format information placement
pub mod format;
/// Structural pattern layout with reserved-area tracking
pub mod function_patterns;
/// Data mode encoders (numeric, alphanumeric, byte)
pub mod modes;
/// Zig-zag data placement under the XOR mask
pub mod placement;
/// Reed-Solomon codeword generation over GF(256)
pub mod reed_solomon;
/// QR specification tables (EC blocks, module counts, alignment)
pub mod tables;
/// Version resolution and version info placement
pub mod version;

pub use modes::{Charset, EncodingMode};

use crate::error::EncodeError;
use crate::models::{ECLevel, MaskPattern, QRCode, Version};
use bitstream::BitWriter;
use format::FormatInfo;
use log::debug;
use modes::{alphanumeric::AlphanumericEncoder, byte::ByteEncoder, numeric::NumericEncoder};

/// Immutable encoding configuration, validated before the pipeline runs.
///
/// `mode` requests an encoding mode explicitly; it is honored only when it
/// can represent the payload, otherwise autodetection wins.
#[derive(Debug, Clone)]
pub struct EncodeOptions {
    /// Error correction strength
    pub ec_level: ECLevel,
    /// Mask pattern applied to the data modules (caller-selected)
    pub mask_pattern: MaskPattern,
    /// Optional encoding mode override
    pub mode: Option<EncodingMode>,
    /// Charset for byte-mode payloads
    pub charset: Charset,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            ec_level: ECLevel::L,
            mask_pattern: MaskPattern::Pattern0,
            mode: None,
            charset: Charset::Utf8,
        }
    }
}

/// QR symbol encoder; one instance can encode any number of payloads
pub struct QrEncoder {
    options: EncodeOptions,
}

impl QrEncoder {
    /// Create an encoder with the given options
    pub fn new(options: EncodeOptions) -> Self {
        Self { options }
    }

    /// Run the full pipeline: classify, resolve, pack, protect, place
    pub fn encode(&self, payload: &str) -> Result<QRCode, EncodeError> {
        let options = &self.options;
        let mode = self.effective_mode(payload);

        // Byte mode counts octets, not characters, so the payload is
        // materialized before version resolution.
        let octets = match mode {
            EncodingMode::Byte => ByteEncoder::encode_payload(payload, options.charset)?,
            _ => Vec::new(),
        };
        let length = match mode {
            EncodingMode::Byte => octets.len(),
            _ => payload.chars().count(),
        };

        let ver = version::resolve(length, mode, options.ec_level)?;

        let mut writer = BitWriter::new();
        writer.append_bits(mode.indicator(), 4);
        writer.append_bits(length as u32, mode.length_field_bits(ver));
        match mode {
            EncodingMode::Numeric => NumericEncoder::write(payload, &mut writer),
            EncodingMode::Alphanumeric => AlphanumericEncoder::write(payload, &mut writer),
            EncodingMode::Byte => ByteEncoder::write(&octets, &mut writer),
        }

        let data = finalize_bitstream(writer, ver, options.ec_level);
        let codewords = reed_solomon::interleave_blocks(&data, ver, options.ec_level);
        debug!(
            "version {} at {:?}: {} data + {} ec codewords",
            ver.number(),
            options.ec_level,
            data.len(),
            codewords.len() - data.len()
        );

        let mut matrix = function_patterns::build_structure(ver);
        placement::place_codewords(&mut matrix, &codewords, options.mask_pattern);
        FormatInfo::draw(&mut matrix, options.ec_level, options.mask_pattern);

        Ok(QRCode::new(
            matrix,
            ver,
            options.ec_level,
            options.mask_pattern,
            mode,
        ))
    }

    /// Requested mode when it can carry the payload, detected mode otherwise
    fn effective_mode(&self, payload: &str) -> EncodingMode {
        let detected = EncodingMode::classify(payload);
        match self.options.mode {
            Some(requested) if requested.can_encode(payload) => requested,
            Some(requested) => {
                debug!("requested {requested:?} cannot represent payload, using {detected:?}");
                detected
            }
            None => detected,
        }
    }
}

/// Standard stream completion: up to four terminator zero bits, zero-fill
/// to the byte boundary, then alternating 0xEC/0x11 pad codewords up to
/// the exact data codeword capacity.
fn finalize_bitstream(mut writer: BitWriter, ver: Version, ec_level: ECLevel) -> Vec<u8> {
    let capacity_bits = tables::num_data_codewords(ver, ec_level) * 8;
    debug_assert!(writer.len() <= capacity_bits);

    writer.append_bits(0, (capacity_bits - writer.len()).min(4));
    let partial = writer.len() % 8;
    if partial != 0 {
        writer.append_bits(0, 8 - partial);
    }
    let mut pad_even = true;
    while writer.len() < capacity_bits {
        writer.append_bits(if pad_even { 0xEC } else { 0x11 }, 8);
        pad_even = !pad_even;
    }
    writer.into_bytes()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Version;

    #[test]
    fn test_finalize_pads_to_capacity() {
        // "HELLO WORLD" at v1-Q: terminator + pads land on the reference
        let mut writer = BitWriter::new();
        writer.append_bits(0b0010, 4);
        writer.append_bits(11, 9);
        AlphanumericEncoder::write("HELLO WORLD", &mut writer);
        let data = finalize_bitstream(writer, Version::new(1).unwrap(), ECLevel::Q);
        assert_eq!(
            data,
            vec![0x20, 0x5B, 0x0B, 0x78, 0xD1, 0x72, 0xDC, 0x4D, 0x43, 0x40, 0xEC, 0x11, 0xEC]
        );
    }

    #[test]
    fn test_mode_override_honored_when_representable() {
        let encoder = QrEncoder::new(EncodeOptions {
            mode: Some(EncodingMode::Byte),
            ..EncodeOptions::default()
        });
        let qr = encoder.encode("12345").unwrap();
        assert_eq!(qr.mode(), EncodingMode::Byte);
    }

    #[test]
    fn test_mode_override_falls_back_to_detected() {
        let encoder = QrEncoder::new(EncodeOptions {
            mode: Some(EncodingMode::Numeric),
            ..EncodeOptions::default()
        });
        let qr = encoder.encode("Test").unwrap();
        assert_eq!(qr.mode(), EncodingMode::Byte);
    }

    #[test]
    fn test_exact_fit_payload_is_accepted() {
        // v1-L byte capacity is exactly 17 octets
        let payload = "a".repeat(17);
        let encoder = QrEncoder::new(EncodeOptions::default());
        let qr = encoder.encode(&payload).unwrap();
        assert_eq!(qr.version().number(), 1);
    }
}
