//! Error types for transpose-engine.

use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, TransposeError>;

/// Fatal conditions for a transposition run.
///
/// The engine never retries: offset bookkeeping assumes every seek and read
/// succeeded exactly as requested, so the first failure aborts the run.
/// Output lines already flushed by earlier windows stay on disk.
#[derive(Error, Debug)]
pub enum TransposeError {
    /// A row's field count disagrees with the column count established by
    /// the first row of the file.
    #[error("row {row}: expected {expected} columns, found {observed}")]
    ColumnCountMismatch {
        row: usize,
        expected: usize,
        observed: usize,
    },

    /// A windowed read hit end-of-row before producing the expected number
    /// of fields. On pass >= 1 this means the row index drifted out of sync
    /// with the bytes actually consumed.
    #[error("row {row}: ran out of fields on pass {pass} ({got} of {expected})")]
    ShortRow {
        row: usize,
        pass: u32,
        expected: usize,
        got: usize,
    },

    /// I/O failure on the input or output stream. The caller owns the file
    /// handles and attaches the offending path.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
