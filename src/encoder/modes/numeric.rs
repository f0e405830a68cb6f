/// Numeric mode encoder (Mode 0001)
/// Groups of 3 digits = 10 bits, 2 digits = 7 bits, 1 digit = 4 bits
use crate::encoder::bitstream::BitWriter;

/// Numeric payload packer
pub struct NumericEncoder;

impl NumericEncoder {
    /// Pack an all-digit payload into the bit stream.
    /// Classification guarantees the payload is ASCII digits; anything
    /// else is a contract violation upstream.
    pub fn write(payload: &str, out: &mut BitWriter) {
        for group in payload.as_bytes().chunks(3) {
            let mut value: u32 = 0;
            for &digit in group {
                debug_assert!(digit.is_ascii_digit(), "non-digit reached numeric packing");
                value = value * 10 + u32::from(digit - b'0');
            }
            let bits = match group.len() {
                3 => 10,
                2 => 7,
                _ => 4,
            };
            out.append_bits(value, bits);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_groups() {
        let mut out = BitWriter::new();
        NumericEncoder::write("1017", &mut out);
        // 101 -> 0001100101 (10 bits), 7 -> 0111 (4 bits)
        assert_eq!(out.len(), 14);
        assert_eq!(out.into_bytes(), vec![0x19, 0x5C]);
    }

    #[test]
    fn test_two_digit_remainder() {
        let mut out = BitWriter::new();
        NumericEncoder::write("12", &mut out);
        assert_eq!(out.len(), 7);
        // 12 -> 0001100, left-aligned in the byte
        assert_eq!(out.into_bytes(), vec![0b0001100_0]);
    }

    #[test]
    fn test_empty_payload() {
        let mut out = BitWriter::new();
        NumericEncoder::write("", &mut out);
        assert_eq!(out.len(), 0);
    }
}
