//! Skill footprint geometry.
//!
//! Pure functions: `footprint` produces the raw width x height rectangle
//! around a center (positions may fall off the board), and
//! `filter_in_bounds` is the single gate that discards off-board cells.

use crate::board::Position;
use crate::heroes::SkillShape;

/// The raw footprint of a cast: exactly `width * height` signed positions.
/// The rectangle is anchored so its start is `center - half` in each axis,
/// with the half measured by floor division.
pub fn footprint(center: Position, shape: SkillShape) -> Vec<(i32, i32)> {
    let start_row = center.0 as i32 - (shape.height / 2) as i32;
    let start_col = center.1 as i32 - (shape.width / 2) as i32;

    let mut area = Vec::with_capacity(shape.width * shape.height);
    for r in 0..shape.height as i32 {
        for c in 0..shape.width as i32 {
            area.push((start_row + r, start_col + c));
        }
    }
    area
}

/// Keep only positions inside a `size` x `size` board.
pub fn filter_in_bounds(positions: &[(i32, i32)], size: usize) -> Vec<Position> {
    positions
        .iter()
        .filter(|&&(row, col)| {
            row >= 0 && row < size as i32 && col >= 0 && col < size as i32
        })
        .map(|&(row, col)| (row as usize, col as usize))
        .collect()
}
