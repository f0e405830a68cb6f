/// BCH-protected metadata strings for format and version info.
///
/// Both strings carry a short data field followed by the remainder of a
/// polynomial division over GF(2): BCH(15,5) for format info, BCH(18,6)
/// for version info. The generator is aligned to the operand's current
/// highest set bit before every XOR step.
use crate::models::{ECLevel, MaskPattern, Version};

/// Generator polynomial for the format string, x^10+x^8+x^5+x^4+x^2+x+1
const FORMAT_GENERATOR: u32 = 0b101_0011_0111;
/// Fixed XOR applied to the finished format string so it is never all-zero
const FORMAT_MASK: u32 = 0b101_0100_0001_0010;
/// Generator polynomial for the version string, x^12+x^11+x^10+x^9+x^8+x^5+x^2+1
const VERSION_GENERATOR: u32 = 0b1_1111_0010_0101;

/// BCH string computation for format and version info
pub struct BchEncoder;

impl BchEncoder {
    /// 15-bit format string: [ec bits (2) | mask id (3) | BCH remainder (10)],
    /// XORed with the fixed format mask
    pub fn format_info(ec_level: ECLevel, mask: MaskPattern) -> u16 {
        let data = (u32::from(ec_level.format_bits()) << 3) | u32::from(mask.id());
        let remainder = Self::remainder(data << 10, FORMAT_GENERATOR);
        (((data << 10) | remainder) ^ FORMAT_MASK) as u16
    }

    /// 18-bit version string: [version (6) | BCH remainder (12)], no final
    /// mask. Only meaningful for versions 7 and up.
    pub fn version_info(version: Version) -> u32 {
        debug_assert!(version.number() >= 7);
        let data = u32::from(version.number());
        let remainder = Self::remainder(data << 12, VERSION_GENERATOR);
        (data << 12) | remainder
    }

    /// GF(2) polynomial remainder: XOR the generator, left-aligned to the
    /// operand's highest set bit, until the operand is shorter than the
    /// generator.
    fn remainder(mut value: u32, generator: u32) -> u32 {
        let generator_len = 32 - generator.leading_zeros();
        loop {
            let value_len = 32 - value.leading_zeros();
            if value_len < generator_len {
                return value;
            }
            value ^= generator << (value_len - generator_len);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_reference_constants() {
        // ISO/IEC 18004 Annex C: M/0 is the bare mask constant, L/0 and
        // H/7 are spot values from the published table
        assert_eq!(
            BchEncoder::format_info(ECLevel::M, MaskPattern::Pattern0),
            0x5412
        );
        assert_eq!(
            BchEncoder::format_info(ECLevel::L, MaskPattern::Pattern0),
            0x77C4
        );
        assert_eq!(
            BchEncoder::format_info(ECLevel::H, MaskPattern::Pattern7),
            0x083B
        );
    }

    #[test]
    fn test_version_reference_constants() {
        assert_eq!(
            BchEncoder::version_info(Version::new(7).unwrap()),
            0x07C94
        );
        assert_eq!(
            BchEncoder::version_info(Version::new(8).unwrap()),
            0x085BC
        );
        assert_eq!(
            BchEncoder::version_info(Version::new(40).unwrap()),
            0x28C69
        );
    }

    #[test]
    fn test_remainder_is_short_enough() {
        for ec in [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H] {
            for id in 0..8 {
                let mask = MaskPattern::from_bits(id).unwrap();
                let value = BchEncoder::format_info(ec, mask);
                assert!(value < 1 << 15);
            }
        }
    }
}
