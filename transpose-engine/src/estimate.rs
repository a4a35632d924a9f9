//! Row-count estimation during the first pass.
//!
//! The window planner has to size its buffers before end-of-file is reached,
//! so the total row count is projected from file-position progress.
//! Over-estimating only narrows the window more than necessary; under-
//! estimating risks blowing the memory budget, so ties favor more rows.

/// Fraction of the file below which the observed average row length is
/// considered too unstable to extrapolate from.
const STABLE_FRACTION: f64 = 0.25;

/// Project the eventual total row count from partial progress.
///
/// `fpos` is the current read position, `fsize` the total input size,
/// `rows_seen` the rows fully read so far, and `longest_row` the longest
/// line length seen so far (including its line feed). Early in the file the
/// estimate is the conservative lower bound `fsize / longest_row`; once a
/// quarter of the file has been seen, the running average row length is
/// extrapolated instead.
pub fn estimate_rows(fpos: u64, fsize: u64, rows_seen: usize, longest_row: usize) -> usize {
    if fsize == 0 || fpos == 0 || longest_row == 0 {
        return rows_seen;
    }
    let seen_frac = fpos as f64 / fsize as f64;
    if seen_frac < STABLE_FRACTION {
        ((fsize / longest_row as u64) as usize).max(rows_seen)
    } else {
        ((rows_seen as f64 * fsize as f64 / fpos as f64) as usize).max(rows_seen)
    }
}
