/// Structural pattern layout: finder, separator, timing, alignment, dark
/// module and version info regions, with every touched cell marked
/// reserved so placement skips it.
use crate::encoder::tables::alignment_pattern_positions;
use crate::encoder::version::VersionInfo;
use crate::models::{ModuleMatrix, Version};

/// Build the structural skeleton for a version. Format strips are
/// reserved here (as light placeholders); their values are drawn by
/// `FormatInfo` once the mask is known.
pub fn build_structure(version: Version) -> ModuleMatrix {
    let size = version.size();
    let mut matrix = ModuleMatrix::new(size);
    draw_finder_patterns(&mut matrix);
    reserve_format_areas(&mut matrix);
    draw_timing_patterns(&mut matrix);
    draw_alignment_patterns(&mut matrix, version);
    VersionInfo::draw(&mut matrix, version);
    // dark module
    matrix.set_function(8, size - 8, true);
    matrix
}

/// 7x7 finder at three corners: dark ring, light inner ring, dark 3x3
/// core, plus the one-module light separator. A single ring-distance rule
/// covers all of it: light exactly at distances 2 and 4 from the center.
fn draw_finder_patterns(matrix: &mut ModuleMatrix) {
    let size = matrix.size() as i32;
    for (cx, cy) in [(3, 3), (size - 4, 3), (3, size - 4)] {
        for dy in -4..=4 {
            for dx in -4..=4 {
                let x = cx + dx;
                let y = cy + dy;
                if x < 0 || y < 0 || x >= size || y >= size {
                    continue;
                }
                let distance = dx.abs().max(dy.abs());
                matrix.set_function(x as usize, y as usize, distance != 2 && distance != 4);
            }
        }
    }
}

/// Reserve both format strips so data placement never touches them
fn reserve_format_areas(matrix: &mut ModuleMatrix) {
    let size = matrix.size();
    for i in 0..9 {
        if i != 6 {
            matrix.set_function(8, i, false);
            matrix.set_function(i, 8, false);
        }
    }
    for i in 0..8 {
        matrix.set_function(size - 1 - i, 8, false);
        matrix.set_function(8, size - 1 - i, false);
    }
}

/// Alternating timing lines along row 6 and column 6
fn draw_timing_patterns(matrix: &mut ModuleMatrix) {
    let size = matrix.size();
    for i in 8..size - 8 {
        matrix.set_function(i, 6, i % 2 == 0);
        matrix.set_function(6, i, i % 2 == 0);
    }
}

/// 5x5 alignment patterns at every coordinate pair of the version's
/// table, skipping the three pairs that would sit on a finder pattern.
/// Centers on the timing lines coincide with the timing alternation.
fn draw_alignment_patterns(matrix: &mut ModuleMatrix, version: Version) {
    let positions = alignment_pattern_positions(version);
    let count = positions.len();
    for (i, &cy) in positions.iter().enumerate() {
        for (j, &cx) in positions.iter().enumerate() {
            let on_finder = (i == 0 && j == 0)
                || (i == 0 && j == count - 1)
                || (i == count - 1 && j == 0);
            if on_finder {
                continue;
            }
            for dy in -2i32..=2 {
                for dx in -2i32..=2 {
                    let distance = dx.abs().max(dy.abs());
                    matrix.set_function(
                        (cx as i32 + dx) as usize,
                        (cy as i32 + dy) as usize,
                        distance != 1,
                    );
                }
            }
        }
    }
}
