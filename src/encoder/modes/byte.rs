/// Byte mode encoder (Mode 0100) for 8-bit data
use crate::encoder::bitstream::BitWriter;
use crate::error::EncodeError;
use std::fmt;

/// Charset used to turn the payload into byte-mode octets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    /// UTF-8 (default; what modern readers assume)
    #[default]
    Utf8,
    /// ISO-8859-1, the charset historically implied by the standard
    Latin1,
}

impl Charset {
    /// Canonical name, also accepted by the CLI
    pub fn name(self) -> &'static str {
        match self {
            Charset::Utf8 => "utf-8",
            Charset::Latin1 => "latin-1",
        }
    }

    /// Parse a charset name; None for anything unsupported
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Some(Charset::Utf8),
            "latin-1" | "latin1" | "iso-8859-1" => Some(Charset::Latin1),
            _ => None,
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Byte payload packer
pub struct ByteEncoder;

impl ByteEncoder {
    /// Materialize the payload as octets in the requested charset.
    /// The character count field of byte mode counts these octets, so this
    /// runs before version resolution.
    pub fn encode_payload(payload: &str, charset: Charset) -> Result<Vec<u8>, EncodeError> {
        match charset {
            Charset::Utf8 => Ok(payload.as_bytes().to_vec()),
            Charset::Latin1 => payload
                .chars()
                .map(|c| {
                    u8::try_from(c as u32).map_err(|_| EncodeError::InvalidCharacter {
                        character: c,
                        charset,
                    })
                })
                .collect(),
        }
    }

    /// Append each octet verbatim, 8 bits per byte
    pub fn write(bytes: &[u8], out: &mut BitWriter) {
        for &byte in bytes {
            out.append_bits(u32::from(byte), 8);
        }
    }
}
