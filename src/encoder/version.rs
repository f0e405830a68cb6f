/// Version resolution and version information placement.
///
/// The character capacity table (mode x version x EC level) is derived
/// once from the standard block tables and cached process-wide; `resolve`
/// scans it ascending for the smallest version that fits.
use crate::encoder::bch::BchEncoder;
use crate::encoder::modes::EncodingMode;
use crate::encoder::tables::num_data_codewords;
use crate::error::EncodeError;
use crate::models::{ECLevel, ModuleMatrix, Version};
use log::debug;
use std::sync::OnceLock;

/// capacity[mode][version - 1][ec_level]
static CAPACITY: OnceLock<[[[u16; 4]; 40]; 3]> = OnceLock::new();

fn capacity_table() -> &'static [[[u16; 4]; 40]; 3] {
    CAPACITY.get_or_init(|| {
        let mut table = [[[0u16; 4]; 40]; 3];
        let modes = [
            EncodingMode::Numeric,
            EncodingMode::Alphanumeric,
            EncodingMode::Byte,
        ];
        let levels = [ECLevel::L, ECLevel::M, ECLevel::Q, ECLevel::H];
        for number in 1..=40u8 {
            let version = Version::new_unchecked(number);
            for mode in modes {
                for ec_level in levels {
                    let data_bits = 8 * num_data_codewords(version, ec_level);
                    let header = 4 + mode.length_field_bits(version);
                    let payload_bits = data_bits.saturating_sub(header);
                    table[mode.index()][number as usize - 1][ec_level.index()] =
                        max_characters(mode, payload_bits) as u16;
                }
            }
        }
        table
    })
}

/// Largest character count whose packed form fits in `bits`
fn max_characters(mode: EncodingMode, bits: usize) -> usize {
    match mode {
        EncodingMode::Numeric => {
            let mut chars = (bits / 10) * 3;
            match bits % 10 {
                7..=9 => chars += 2,
                4..=6 => chars += 1,
                _ => {}
            }
            chars
        }
        EncodingMode::Alphanumeric => {
            let mut chars = (bits / 11) * 2;
            if bits % 11 >= 6 {
                chars += 1;
            }
            chars
        }
        EncodingMode::Byte => bits / 8,
    }
}

/// Maximum encodable characters for a capacity cell
pub fn capacity(version: Version, mode: EncodingMode, ec_level: ECLevel) -> usize {
    capacity_table()[mode.index()][version.number() as usize - 1][ec_level.index()] as usize
}

/// Smallest version whose capacity cell fits `length` characters
/// (octets for byte mode). Fails with CapacityExceeded past version 40.
pub fn resolve(
    length: usize,
    mode: EncodingMode,
    ec_level: ECLevel,
) -> Result<Version, EncodeError> {
    for number in 1..=40u8 {
        let version = Version::new_unchecked(number);
        if capacity(version, mode, ec_level) >= length {
            debug!("resolved {length} {mode:?} characters at {ec_level:?} to version {number}");
            return Ok(version);
        }
    }
    Err(EncodeError::CapacityExceeded { length, ec_level })
}

/// Version information blocks, present on versions 7 and up
pub struct VersionInfo;

impl VersionInfo {
    /// Draw the two 6x3 version info blocks (below the top-right finder
    /// and right of the bottom-left finder). Bit i of the BCH(18,6) string
    /// lands at (size-11 + i%3, i/3) and its transposed mirror.
    pub fn draw(matrix: &mut ModuleMatrix, version: Version) {
        if version.number() < 7 {
            return;
        }
        let bits = BchEncoder::version_info(version);
        let size = matrix.size();
        for i in 0..18 {
            let bit = (bits >> i) & 1 == 1;
            let a = size - 11 + i % 3;
            let b = i / 3;
            matrix.set_function(a, b, bit);
            matrix.set_function(b, a, bit);
        }
    }
}
