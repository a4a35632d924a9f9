//! Transpose Engine - Out-of-core transposition of space-separated text
//! matrices.
//!
//! Transposes a `rows x cols` matrix stored as text (rows delimited by line
//! feeds, fields by single spaces) while keeping resident memory under a
//! fixed budget regardless of matrix size. The input is swept in passes:
//! the first pass scans sequentially, discovers the column count, records
//! per-row byte offsets and estimates the row count; later passes seek back
//! through the rows and read only the current window of columns. Within a
//! window the first column streams straight to the output and the rest are
//! buffered, then flushed as complete output lines.
//!
//! # Usage
//! ```ignore
//! use transpose_engine::{TransposeConfig, Transposer};
//!
//! let input = std::fs::File::open("matrix.txt")?;
//! let output = std::io::BufWriter::new(std::fs::File::create("matrix.txt.transposed")?);
//! let stats = Transposer::new(input, output, TransposeConfig::default()).run()?;
//! println!("{} passes", stats.passes);
//! ```

pub mod config;
pub mod driver;
pub mod error;
pub mod estimate;
pub mod index;
pub mod split;
pub mod window;

// Re-exports
pub use config::{TransposeConfig, DEFAULT_MEM_BUDGET};
pub use driver::{TransposeStats, Transposer};
pub use error::{Result, TransposeError};
pub use window::ColWindow;
