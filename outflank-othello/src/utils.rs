//! Miscellaneous project utilities.

use itertools::Itertools;
use std::fmt::{self, Formatter};
use std::iter::Iterator;

/// Glyph drawn for an empty cell.
pub const EMPTY_GLYPH: char = ' ';

/// The column letter shown above column `col` ('A' for 0).
pub fn column_letter(col: usize) -> char {
    (b'A'..=b'Z')
        .nth(col)
        .map(char::from)
        .unwrap_or('?')
}

/// Format `size * size` characters into a lettered, ruled grid.
/// `piece_iter` must yield exactly `size * size` items in row-major order.
pub fn format_grid<T: Iterator<Item = char>>(
    size: usize,
    mut piece_iter: T,
    f: &mut Formatter,
) -> fmt::Result {
    let rule = format!("  {}=", "====".repeat(size));

    write!(f, "    {}", (0..size).map(column_letter).join("   "))?;
    write!(f, "\n{}", rule)?;

    for row in 0..size {
        write!(f, "\n{} |", row + 1)?;
        for _ in 0..size {
            write!(f, " {} |", piece_iter.next().ok_or(fmt::Error)?)?;
        }
        write!(f, "\n{}", rule)?;
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}
