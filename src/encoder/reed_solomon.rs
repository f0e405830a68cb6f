/// Reed-Solomon error correction codeword generation.
/// QR codes use RS over GF(256) with primitive polynomial x^8 + x^4 + x^3 + x^2 + 1
use crate::encoder::tables::{ec_block_info, num_data_codewords, num_total_codewords};
use crate::models::{ECLevel, Version};
use log::trace;
use std::sync::OnceLock;

struct GfTables {
    log: [u8; 256],
    exp: [u8; 255],
}

static GF_TABLES: OnceLock<GfTables> = OnceLock::new();

/// GF(256) field operations over lazily built log/antilog tables
pub struct Gf256;

impl Gf256 {
    fn tables() -> &'static GfTables {
        GF_TABLES.get_or_init(|| {
            let mut log = [0u8; 256];
            let mut exp = [0u8; 255];
            let mut value: u16 = 1;
            for i in 0..255 {
                exp[i] = value as u8;
                log[value as usize] = i as u8;
                value <<= 1;
                if value & 0x100 != 0 {
                    value ^= 0x11D;
                }
            }
            GfTables { log, exp }
        })
    }

    /// Field multiplication; zero annihilates
    pub fn mul(a: u8, b: u8) -> u8 {
        if a == 0 || b == 0 {
            return 0;
        }
        let tables = Self::tables();
        let log_a = tables.log[a as usize] as usize;
        let log_b = tables.log[b as usize] as usize;
        tables.exp[(log_a + log_b) % 255]
    }

    /// alpha^i for i in 0..255
    pub fn exp(i: usize) -> u8 {
        Self::tables().exp[i % 255]
    }
}

/// Reed-Solomon encoder for a fixed error correction codeword count.
///
/// Holds the generator polynomial coefficients from x^(degree-1) down to
/// x^0 (the monic leading term is implicit). Roots are alpha^0 ..
/// alpha^(degree-1).
pub struct ReedSolomonEncoder {
    coefficients: Vec<u8>,
}

impl ReedSolomonEncoder {
    /// Build the generator polynomial for `degree` EC codewords
    pub fn new(degree: usize) -> Self {
        debug_assert!((1..=254).contains(&degree));
        let mut coefficients = vec![0u8; degree];
        coefficients[degree - 1] = 1;
        // Multiply by (x - alpha^i) for each successive root
        let mut root: u8 = 1;
        for _ in 0..degree {
            for j in 0..degree {
                coefficients[j] = Gf256::mul(coefficients[j], root);
                if j + 1 < degree {
                    coefficients[j] ^= coefficients[j + 1];
                }
            }
            root = Gf256::mul(root, 0x02);
        }
        Self { coefficients }
    }

    /// Polynomial division remainder: the EC codewords for `data`.
    ///
    /// An ecCount-length register starts at zero; each data byte XORed with
    /// the register head gives the feedback factor, the register shifts
    /// left, and each cell absorbs generator[cell] * feedback.
    pub fn remainder(&self, data: &[u8]) -> Vec<u8> {
        let degree = self.coefficients.len();
        let mut register = vec![0u8; degree];
        for &byte in data {
            let feedback = byte ^ register[0];
            register.rotate_left(1);
            register[degree - 1] = 0;
            if feedback != 0 {
                for (cell, &coefficient) in register.iter_mut().zip(&self.coefficients) {
                    *cell ^= Gf256::mul(coefficient, feedback);
                }
            }
        }
        register
    }
}

/// Split data codewords into the standard block structure, append EC
/// codewords per block, and emit the column-interleaved sequence the
/// placement stage consumes.
pub fn interleave_blocks(data: &[u8], version: Version, ec_level: ECLevel) -> Vec<u8> {
    debug_assert_eq!(data.len(), num_data_codewords(version, ec_level));
    let info = ec_block_info(version, ec_level);
    let total = num_total_codewords(version);
    let num_short_blocks = info.num_blocks - total % info.num_blocks;
    let short_data_len = total / info.num_blocks - info.ecc_per_block;

    let rs = ReedSolomonEncoder::new(info.ecc_per_block);
    let mut blocks = Vec::with_capacity(info.num_blocks);
    let mut offset = 0;
    for i in 0..info.num_blocks {
        let len = short_data_len + usize::from(i >= num_short_blocks);
        let block = &data[offset..offset + len];
        offset += len;
        blocks.push((block, rs.remainder(block)));
    }
    debug_assert_eq!(offset, data.len());
    trace!(
        "split {} data codewords into {} blocks ({} short), {} ecc each",
        data.len(),
        info.num_blocks,
        num_short_blocks,
        info.ecc_per_block
    );

    let mut result = Vec::with_capacity(total);
    for column in 0..=short_data_len {
        for (block, _) in &blocks {
            if column < block.len() {
                result.push(block[column]);
            }
        }
    }
    for column in 0..info.ecc_per_block {
        for (_, ecc) in &blocks {
            result.push(ecc[column]);
        }
    }
    debug_assert_eq!(result.len(), total);
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gf256_basic() {
        // 0 * anything = 0
        assert_eq!(Gf256::mul(0, 5), 0);
        assert_eq!(Gf256::mul(5, 0), 0);
        // alpha^1 = 2, alpha^8 folds through the primitive polynomial
        assert_eq!(Gf256::exp(0), 1);
        assert_eq!(Gf256::exp(1), 2);
        assert_eq!(Gf256::exp(8), 0x1D);
        // (x+1)(x^2+x+1) = x^3+1
        assert_eq!(Gf256::mul(3, 7), 9);
        // the multiplicative group has order 255
        assert_eq!(Gf256::exp(255), 1);
    }

    #[test]
    fn test_remainder_length_and_zero_data() {
        let rs = ReedSolomonEncoder::new(10);
        let ecc = rs.remainder(&[0u8; 16]);
        assert_eq!(ecc.len(), 10);
        assert!(ecc.iter().all(|&b| b == 0));
    }

    #[test]
    fn test_known_ecc_vector() {
        // "HELLO WORLD" v1-Q data codewords and their published ECC
        let data = [
            0x20, 0x5B, 0x0B, 0x78, 0xD1, 0x72, 0xDC, 0x4D, 0x43, 0x40, 0xEC, 0x11, 0xEC,
        ];
        let rs = ReedSolomonEncoder::new(13);
        assert_eq!(
            rs.remainder(&data),
            vec![168, 72, 22, 82, 217, 54, 156, 0, 46, 15, 180, 122, 16]
        );
    }

    #[test]
    fn test_single_block_interleave_appends_ecc() {
        let version = Version::new(1).unwrap();
        let data: Vec<u8> = (0..19).collect();
        let sequence = interleave_blocks(&data, version, ECLevel::L);
        assert_eq!(sequence.len(), 26);
        assert_eq!(&sequence[..19], &data[..]);
    }

    #[test]
    fn test_multi_block_interleave_shape() {
        // v4-M: 2 blocks of 32 data codewords, 18 ecc each
        let version = Version::new(4).unwrap();
        let data: Vec<u8> = (0..64).map(|i| i as u8).collect();
        let sequence = interleave_blocks(&data, version, ECLevel::M);
        assert_eq!(sequence.len(), 100);
        // column interleave: d0[0], d1[0], d0[1], d1[1], ...
        assert_eq!(sequence[0], data[0]);
        assert_eq!(sequence[1], data[32]);
        assert_eq!(sequence[2], data[1]);
    }
}
