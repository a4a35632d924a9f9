//! Column windowing under a fixed memory budget.
//!
//! A window is the contiguous range of source columns one pass processes.
//! The planner computes how many of them fit in the budget given the worst
//! cell width seen and the (estimated) row count; the cell buffer holds the
//! collected cells for every buffered destination row of the current window.

use tracing::debug;

/// Empirical safety factor for per-value bookkeeping overhead not captured
/// by raw byte counts (allocation headers, vector capacity slack).
const FUDGE: f64 = 1.67;

/// Half-open range `[start, stop)` of source column indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColWindow {
    pub start: usize,
    pub stop: usize,
}

impl ColWindow {
    pub fn new(start: usize, stop: usize) -> Self {
        Self { start, stop }
    }

    pub fn width(&self) -> usize {
        self.stop - self.start
    }
}

/// Decides how many source columns a window may hold.
///
/// `keep_n` counts the window's streamed first column plus its buffered
/// columns. Within a run it only ever shrinks: growing mid-pass would
/// require re-admitting columns whose buffered data was already purged.
#[derive(Debug)]
pub struct WindowPlanner {
    budget: u64,
    keep_n: usize,
    bytes_per_row: u64,
}

impl WindowPlanner {
    pub fn new(budget: u64) -> Self {
        Self {
            budget,
            keep_n: usize::MAX,
            bytes_per_row: 0,
        }
    }

    /// Called once the column count is discovered; initially keep them all.
    pub fn init_cols(&mut self, cols: usize) {
        self.keep_n = cols;
    }

    /// Maximum window width for the next pass (streamed column included).
    pub fn keep_n(&self) -> usize {
        self.keep_n
    }

    /// Estimated bytes per buffered destination row from the last `plan`.
    pub fn bytes_per_row(&self) -> u64 {
        self.bytes_per_row
    }

    /// Recompute the window for the current worst-case cell width and row
    /// count estimate. Returns the (possibly shrunk) window; the caller is
    /// responsible for purging buffered columns that fell outside it.
    ///
    /// One buffered cell costs the longest cell width plus one separator or
    /// line terminator. The `+ 1` on the fit accounts for the window's first
    /// column, which streams straight to the output and occupies no buffer.
    pub fn plan(&mut self, window: ColWindow, longest_cell: usize, est_rows: usize) -> ColWindow {
        let bytes_per_row = (longest_cell as u64 + 1) * est_rows as u64;
        self.bytes_per_row = bytes_per_row;
        let fit = (self.budget as f64 / bytes_per_row as f64 / FUDGE) as usize;
        let new_keep = self.keep_n.min(fit + 1);
        if new_keep >= self.keep_n {
            return window;
        }
        debug!(
            old = self.keep_n,
            new = new_keep,
            bytes_per_row,
            longest_cell,
            est_rows,
            "window narrowed to stay in budget"
        );
        self.keep_n = new_keep;
        ColWindow::new(window.start, window.stop.min(window.start + new_keep))
    }
}

/// Per-window collection of output rows under construction.
///
/// Indexed by source column (destination row) number; the window's first
/// column is streamed and never lands here. Purged entries are not lost,
/// only deferred to a later pass that re-reads them.
#[derive(Debug, Default)]
pub struct CellBuffer {
    base: usize,
    rows: Vec<Vec<Vec<u8>>>,
}

impl CellBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start collecting for a fresh window; drops any previous contents.
    pub fn reset(&mut self, window: ColWindow) {
        self.base = window.start + 1;
        self.rows.clear();
        self.rows
            .resize(window.width().saturating_sub(1), Vec::new());
    }

    /// Purge every destination row at or beyond `stop` after a shrink.
    pub fn truncate(&mut self, stop: usize) {
        let keep = stop.saturating_sub(self.base);
        if keep < self.rows.len() {
            debug!(purged = self.rows.len() - keep, "purging buffered columns");
            self.rows.truncate(keep);
        }
    }

    /// Append one cell to the destination row for source column `col`.
    pub fn push(&mut self, col: usize, cell: &[u8]) {
        self.rows[col - self.base].push(cell.to_vec());
    }

    /// Cells collected so far for source column `col`, in source row order.
    pub fn row(&self, col: usize) -> &[Vec<u8>] {
        &self.rows[col - self.base]
    }

    pub fn clear(&mut self) {
        self.rows.clear();
    }
}
