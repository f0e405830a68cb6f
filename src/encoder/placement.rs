/// Codeword bit placement under the XOR mask.
///
/// Canonical zig-zag: two-module column pairs from the right edge moving
/// left, alternating vertical direction each pair, skipping the vertical
/// timing column entirely. Reserved modules consume no bits. Versions
/// whose data area is not a multiple of 8 bits leave up to 7 trailing
/// zero-filled remainder modules.
use crate::models::{MaskPattern, ModuleMatrix};
use log::trace;

/// Place the interleaved codeword sequence into the matrix, XOR-masking
/// every data module with the mask predicate.
///
/// Panics when bits consumed disagree with the codeword length or more
/// than 7 modules are left over; either means the capacity tables and the
/// structural layout drifted apart, and emitting a symbol would produce
/// undecodable output.
pub fn place_codewords(matrix: &mut ModuleMatrix, codewords: &[u8], mask: MaskPattern) {
    let size = matrix.size() as i32;
    let total_bits = codewords.len() * 8;
    let mut bit_index = 0usize;
    let mut leftover = 0usize;

    let mut right = size - 1;
    while right >= 1 {
        if right == 6 {
            right = 5;
        }
        let upward = ((right + 1) & 2) == 0;
        for vert in 0..size {
            for j in 0..2 {
                let x = (right - j) as usize;
                let y = (if upward { size - 1 - vert } else { vert }) as usize;
                if matrix.is_reserved(x, y) {
                    continue;
                }
                let bit = if bit_index < total_bits {
                    let byte = codewords[bit_index / 8];
                    let value = (byte >> (7 - bit_index % 8)) & 1 == 1;
                    bit_index += 1;
                    value
                } else {
                    // zero-filled remainder module
                    leftover += 1;
                    false
                };
                matrix.set_data(x, y, bit ^ mask.is_masked(y, x));
            }
        }
        right -= 2;
    }

    assert_eq!(
        bit_index, total_bits,
        "placement consumed {bit_index} bits for {total_bits} codeword bits"
    );
    assert!(
        leftover < 8,
        "{leftover} modules left unfilled; capacity table and layout disagree"
    );
    trace!("placed {total_bits} bits with {leftover} remainder modules");
}
