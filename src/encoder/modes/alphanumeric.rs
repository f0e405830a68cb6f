/// Alphanumeric mode encoder (Mode 0010)
/// Pairs = 11 bits (first * 45 + second), lone trailing char = 6 bits
use crate::encoder::bitstream::BitWriter;

/// Alphanumeric character set: 0-9, A-Z, space, $%*+-./:
pub const ALPHANUMERIC_CHARSET: &str = "0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ $%*+-./:";

/// Value of a character in the alphanumeric table, None when outside it
pub fn char_value(c: char) -> Option<u32> {
    match c {
        '0'..='9' => Some(c as u32 - '0' as u32),
        'A'..='Z' => Some(c as u32 - 'A' as u32 + 10),
        ' ' => Some(36),
        '$' => Some(37),
        '%' => Some(38),
        '*' => Some(39),
        '+' => Some(40),
        '-' => Some(41),
        '.' => Some(42),
        '/' => Some(43),
        ':' => Some(44),
        _ => None,
    }
}

/// Alphanumeric payload packer
pub struct AlphanumericEncoder;

impl AlphanumericEncoder {
    /// Pack a payload from the 45-character set into the bit stream.
    /// Classification guarantees every character is in the table.
    pub fn write(payload: &str, out: &mut BitWriter) {
        let values: Vec<u32> = payload
            .chars()
            .map(|c| {
                debug_assert!(
                    char_value(c).is_some(),
                    "character {c:?} reached alphanumeric packing"
                );
                char_value(c).unwrap_or(0)
            })
            .collect();
        for pair in values.chunks(2) {
            match pair {
                [first, second] => out.append_bits(first * 45 + second, 11),
                [lone] => out.append_bits(*lone, 6),
                _ => unreachable!(),
            }
        }
    }
}
