use crate::models::{ECLevel, Version};

/// Block structure for one (version, EC level) cell
pub struct EcBlockInfo {
    /// Number of Reed-Solomon blocks the data is split into
    pub num_blocks: usize,
    /// Error correction codewords appended to each block
    pub ecc_per_block: usize,
}

// Tables from the QR Code specification (Model 2).
// Index: [ec_level][version]
const ECC_CODEWORDS_PER_BLOCK: [[i8; 41]; 4] = [
    [
        -1, 7, 10, 15, 20, 26, 18, 20, 24, 30, 18, 20, 24, 26, 30, 22, 24, 28, 30, 28, 28, 28, 28,
        30, 30, 26, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Low
    [
        -1, 10, 16, 26, 18, 24, 16, 18, 22, 22, 26, 30, 22, 22, 24, 24, 28, 28, 26, 26, 26, 26, 28,
        28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28, 28,
    ], // Medium
    [
        -1, 13, 22, 18, 26, 18, 24, 18, 22, 20, 24, 28, 26, 24, 20, 30, 24, 28, 28, 26, 30, 28, 30,
        30, 30, 30, 28, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // Quartile
    [
        -1, 17, 28, 22, 16, 22, 28, 26, 26, 24, 28, 24, 28, 22, 24, 24, 30, 28, 28, 26, 28, 30, 24,
        30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30, 30,
    ], // High
];

const NUM_ERROR_CORRECTION_BLOCKS: [[i8; 41]; 4] = [
    [
        -1, 1, 1, 1, 1, 1, 2, 2, 2, 2, 4, 4, 4, 4, 4, 6, 6, 6, 6, 7, 8, 8, 9, 9, 10, 12, 12, 12,
        13, 14, 15, 16, 17, 18, 19, 19, 20, 21, 22, 24, 25,
    ], // Low
    [
        -1, 1, 1, 1, 2, 2, 4, 4, 4, 5, 5, 5, 8, 9, 9, 10, 10, 11, 13, 14, 16, 17, 17, 18, 20, 21,
        23, 25, 26, 28, 29, 31, 33, 35, 37, 38, 40, 43, 45, 47, 49,
    ], // Medium
    [
        -1, 1, 1, 2, 2, 4, 4, 6, 6, 8, 8, 8, 10, 12, 16, 12, 17, 16, 18, 21, 20, 23, 23, 25, 27,
        29, 34, 34, 35, 38, 40, 43, 45, 48, 51, 53, 56, 59, 62, 65, 68,
    ], // Quartile
    [
        -1, 1, 1, 2, 4, 4, 4, 5, 6, 8, 8, 11, 11, 16, 16, 18, 16, 19, 21, 25, 25, 25, 34, 30, 32,
        35, 37, 40, 42, 45, 48, 51, 54, 57, 60, 63, 66, 70, 74, 77, 81,
    ], // High
];

/// Block structure for a version and EC level
pub fn ec_block_info(version: Version, ec_level: ECLevel) -> EcBlockInfo {
    let idx = ec_level.index();
    let ver = version.number() as usize;
    EcBlockInfo {
        num_blocks: NUM_ERROR_CORRECTION_BLOCKS[idx][ver] as usize,
        ecc_per_block: ECC_CODEWORDS_PER_BLOCK[idx][ver] as usize,
    }
}

/// Raw module count available to codeword bits once every structural
/// region (finder, separator, timing, alignment, format, version, dark
/// module) is subtracted. Not always a multiple of 8; the leftover 0-7
/// bits become zero-filled remainder modules.
pub fn num_raw_data_modules(version: Version) -> usize {
    let ver = version.number() as usize;
    let mut result = (16 * ver + 128) * ver + 64;
    if ver >= 2 {
        let num_align = ver / 7 + 2;
        result -= (25 * num_align - 10) * num_align - 55;
        if ver >= 7 {
            result -= 36;
        }
    }
    result
}

/// Total codewords (data + error correction) in the symbol
pub fn num_total_codewords(version: Version) -> usize {
    num_raw_data_modules(version) / 8
}

/// Data codewords available before error correction is appended
pub fn num_data_codewords(version: Version, ec_level: ECLevel) -> usize {
    let info = ec_block_info(version, ec_level);
    num_total_codewords(version) - info.num_blocks * info.ecc_per_block
}

/// Alignment pattern center coordinates for a version, ascending.
/// Used for both axes; the three finder corners are skipped at placement.
pub fn alignment_pattern_positions(version: Version) -> Vec<usize> {
    let ver = version.number() as usize;
    if ver == 1 {
        return Vec::new();
    }
    let num_align = ver / 7 + 2;
    let step = if ver == 32 {
        26
    } else {
        (ver * 4 + num_align * 2 + 1) / (num_align * 2 - 2) * 2
    };
    let mut tail = Vec::with_capacity(num_align - 1);
    let mut pos = (version.size() - 7) as isize;
    for _ in 0..num_align - 1 {
        tail.push(pos as usize);
        pos -= step as isize;
    }
    tail.reverse();
    let mut positions = Vec::with_capacity(num_align);
    positions.push(6);
    positions.extend(tail);
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(n: u8) -> Version {
        Version::new(n).unwrap()
    }

    #[test]
    fn test_raw_data_modules() {
        assert_eq!(num_raw_data_modules(v(1)), 208);
        assert_eq!(num_raw_data_modules(v(2)), 359);
        assert_eq!(num_raw_data_modules(v(7)), 1568);
    }

    #[test]
    fn test_codeword_counts() {
        assert_eq!(num_total_codewords(v(1)), 26);
        assert_eq!(num_data_codewords(v(1), ECLevel::L), 19);
        assert_eq!(num_data_codewords(v(1), ECLevel::Q), 13);
        assert_eq!(num_total_codewords(v(2)), 44);
        assert_eq!(num_data_codewords(v(2), ECLevel::L), 34);
        // v5-Q: 4 blocks of 18 ECC codewords
        let info = ec_block_info(v(5), ECLevel::Q);
        assert_eq!(info.num_blocks, 4);
        assert_eq!(info.ecc_per_block, 18);
    }

    #[test]
    fn test_alignment_positions_match_standard_table() {
        assert!(alignment_pattern_positions(v(1)).is_empty());
        assert_eq!(alignment_pattern_positions(v(2)), vec![6, 18]);
        assert_eq!(alignment_pattern_positions(v(7)), vec![6, 22, 38]);
        assert_eq!(alignment_pattern_positions(v(14)), vec![6, 26, 46, 66]);
        assert_eq!(alignment_pattern_positions(v(21)), vec![6, 28, 50, 72, 94]);
        assert_eq!(
            alignment_pattern_positions(v(32)),
            vec![6, 34, 60, 86, 112, 138]
        );
        assert_eq!(
            alignment_pattern_positions(v(40)),
            vec![6, 30, 58, 86, 114, 142, 170]
        );
    }

    #[test]
    fn test_alignment_positions_end_at_fixed_offset() {
        for ver in 2..=40 {
            let positions = alignment_pattern_positions(v(ver));
            assert_eq!(positions[0], 6);
            assert_eq!(positions[positions.len() - 1], v(ver).size() - 7);
        }
    }
}
