/// Format information placement.
///
/// The 15-bit format string (EC level + mask id, BCH protected) appears
/// twice: wrapped around the top-left finder, and split between the
/// top-right and bottom-left finders. The timing row/column is skipped by
/// construction of the coordinates.
use crate::encoder::bch::BchEncoder;
use crate::models::{ECLevel, MaskPattern, ModuleMatrix};

/// Format information writer
pub struct FormatInfo;

impl FormatInfo {
    /// Draw both format string copies and the fixed dark module
    pub fn draw(matrix: &mut ModuleMatrix, ec_level: ECLevel, mask: MaskPattern) {
        let bits = u32::from(BchEncoder::format_info(ec_level, mask));
        let bit = |i: usize| (bits >> i) & 1 == 1;
        let size = matrix.size();

        // first copy, around the top-left finder
        for i in 0..6 {
            matrix.set_function(8, i, bit(i));
        }
        matrix.set_function(8, 7, bit(6));
        matrix.set_function(8, 8, bit(7));
        matrix.set_function(7, 8, bit(8));
        for i in 9..15 {
            matrix.set_function(14 - i, 8, bit(i));
        }

        // second copy, split across the other two finders
        for i in 0..8 {
            matrix.set_function(size - 1 - i, 8, bit(i));
        }
        for i in 8..15 {
            matrix.set_function(8, size - 15 + i, bit(i));
        }

        // dark module, always set
        matrix.set_function(8, size - 8, true);
    }
}
