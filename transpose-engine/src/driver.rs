//! Pass driver and output emitter.
//!
//! A run is a sequence of passes over the input, each covering one
//! contiguous window of source columns:
//!
//! - Pass 0 scans sequentially: it discovers the column count from the
//!   first row, validates every later row against it, records each row's
//!   byte offset, and keeps re-planning the window as worse cell widths
//!   and better row-count estimates come in.
//! - Every later pass seeks to each row's stored offset and reads just
//!   enough bytes for the window's fields; no discovery happens.
//!
//! Within a pass, the window's first column streams straight to the output
//! as rows are read (its whole destination row is known the moment a source
//! row is read); the remaining columns collect in the cell buffer and are
//! written out as complete lines once the sweep finishes. Consumed fields
//! advance their row's offset, so the next pass resumes without re-scanning.

use std::io::{BufRead, BufReader, Read, Seek, SeekFrom, Write};

use tracing::{debug, warn};

use crate::config::TransposeConfig;
use crate::error::{Result, TransposeError};
use crate::estimate::estimate_rows;
use crate::index::RowIndex;
use crate::split::{split_all, split_n, SEPARATOR};
use crate::window::{CellBuffer, ColWindow, WindowPlanner};

/// Recompute the window this often even when the worst cell width has not
/// grown; the file position keeps advancing, so the row estimate drifts.
const REPLAN_EVERY: usize = 1000;
/// Row cadence for scan progress diagnostics.
const PROGRESS_EVERY: usize = 10_000;

/// Summary of a completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransposeStats {
    /// Rows in the input (columns per output line).
    pub rows: usize,
    /// Columns in the input (lines in the output).
    pub cols: usize,
    /// Total passes over the input, the initial scan included.
    pub passes: u32,
    /// Longest cell observed, separator excluded.
    pub longest_cell: usize,
    /// True when the budget could not cover even one buffered destination
    /// row and the run fell back to streaming one column per pass.
    pub degraded: bool,
}

/// Out-of-core transposer for space-separated text matrices.
///
/// Reads a `rows x cols` matrix from a seekable input and writes its
/// `cols x rows` transpose to a sequential output, holding at most the
/// configured budget's worth of cells in memory at a time.
pub struct Transposer<R: Read + Seek, W: Write> {
    input: BufReader<R>,
    output: W,
    index: RowIndex,
    buffer: CellBuffer,
    planner: WindowPlanner,
    rows: usize,
    longest_cell: usize,
    longest_row: usize,
    file_size: u64,
    degraded: bool,
    mem_budget: u64,
}

impl<R: Read + Seek, W: Write> Transposer<R, W> {
    pub fn new(input: R, output: W, config: TransposeConfig) -> Self {
        Self {
            input: BufReader::new(input),
            output,
            index: RowIndex::new(),
            buffer: CellBuffer::new(),
            planner: WindowPlanner::new(config.mem_budget),
            rows: 0,
            longest_cell: 0,
            longest_row: 0,
            file_size: 0,
            degraded: false,
            mem_budget: config.mem_budget,
        }
    }

    /// Run passes until every source column has been emitted.
    pub fn run(mut self) -> Result<TransposeStats> {
        let Some((mut window, cols)) = self.scan_pass()? else {
            // Empty input is a valid 0x0 matrix; the output stays empty.
            self.output.flush()?;
            return Ok(TransposeStats {
                rows: 0,
                cols: 0,
                passes: 1,
                longest_cell: 0,
                degraded: false,
            });
        };
        let mut passes = 1;
        while window.stop < cols {
            window = self.window_pass(passes, window.stop, cols)?;
            passes += 1;
        }
        self.output.flush()?;
        Ok(TransposeStats {
            rows: self.rows,
            cols,
            passes,
            longest_cell: self.longest_cell,
            degraded: self.degraded,
        })
    }

    /// Pass 0: sequential scan with discovery, offset recording and
    /// adaptive window planning. Returns the window this pass covered and
    /// the discovered column count, or `None` for an empty input.
    fn scan_pass(&mut self) -> Result<Option<(ColWindow, usize)>> {
        self.file_size = self.input.seek(SeekFrom::End(0))?;
        self.input.seek(SeekFrom::Start(0))?;
        self.index.record(0, 0);

        let mut pos: u64 = 0;
        let mut row: usize = 0;
        let mut cols: usize = 0;
        let mut window: Option<ColWindow> = None;
        let mut line: Vec<u8> = Vec::new();

        loop {
            line.clear();
            let n = self.input.read_until(b'\n', &mut line)?;
            if n == 0 {
                break; // eof; a missing final line feed ends the row as usual
            }

            // Leading separators are stripped and charged to the row's
            // offset so later passes land on the first field directly.
            let lead = line.iter().take_while(|&&b| b == SEPARATOR).count();
            if lead > 0 {
                self.index.advance(row, lead as u64);
            }

            let fields = split_all(&line[lead..]);
            let mut w = match window {
                None => {
                    cols = fields.len();
                    self.planner.init_cols(cols);
                    let w0 = ColWindow::new(0, cols);
                    self.buffer.reset(w0);
                    w0
                }
                Some(w) => {
                    if fields.len() != cols {
                        return Err(TransposeError::ColumnCountMismatch {
                            row,
                            expected: cols,
                            observed: fields.len(),
                        });
                    }
                    w
                }
            };

            pos += n as u64;
            if n > self.longest_row {
                self.longest_row = n;
            }
            let widest = fields.iter().map(|f| f.len()).max().unwrap_or(0);
            let grew = widest > self.longest_cell;
            if grew {
                self.longest_cell = widest;
            }
            if grew || (row + 1) % REPLAN_EVERY == 0 {
                let est = estimate_rows(pos, self.file_size, row + 1, self.longest_row);
                let planned = self.planner.plan(w, self.longest_cell, est);
                if planned.stop < w.stop {
                    self.buffer.truncate(planned.stop);
                }
                w = planned;
            }
            window = Some(w);

            self.index.record(row + 1, pos);
            self.stash(row, w, &fields)?;
            row += 1;
            if row % PROGRESS_EVERY == 0 {
                debug!(rows = row, "scanning");
            }
        }

        self.rows = row;
        let Some(w) = window else {
            return Ok(None);
        };
        self.dump_kept(w)?;

        // Re-plan with the true row count; later passes use the result.
        let _ = self.planner.plan(w, self.longest_cell, self.rows);
        if cols > 1 && self.planner.keep_n() == 1 {
            self.degraded = true;
            warn!(
                budget = self.mem_budget,
                bytes_per_row = self.planner.bytes_per_row(),
                "memory budget below one buffered output row; streaming one column per pass"
            );
        }
        Ok(Some((w, cols)))
    }

    /// Pass >= 1: seek-and-read sweep over one window of source columns.
    fn window_pass(&mut self, pass: u32, start: usize, cols: usize) -> Result<ColWindow> {
        let window = ColWindow::new(start, cols.min(start + self.planner.keep_n()));
        let width = window.width();
        let need_bytes = (self.longest_cell + 1) * width;
        self.buffer.reset(window);
        debug!(pass, start = window.start, stop = window.stop, "windowed pass");

        let mut chunk = vec![0u8; need_bytes];
        for row in 0..self.rows {
            self.input.seek(SeekFrom::Start(self.index.get(row)))?;
            let got = read_up_to(&mut self.input, &mut chunk)?;
            let fields =
                split_n(&chunk[..got], width).map_err(|e| TransposeError::ShortRow {
                    row,
                    pass,
                    expected: width,
                    got: e.produced,
                })?;
            self.stash(row, window, &fields)?;
        }
        self.dump_kept(window)?;
        Ok(window)
    }

    /// Emit one source row's contribution to the current window: stream the
    /// first column's cell, buffer the rest. `fields` may carry more than
    /// the window's worth during pass 0; the excess is ignored.
    fn stash(&mut self, row: usize, window: ColWindow, fields: &[&[u8]]) -> Result<()> {
        if row > 0 {
            self.output.write_all(&[SEPARATOR])?;
        }
        let streamed = fields[0];
        self.output.write_all(streamed)?;
        self.index.advance(row, streamed.len() as u64 + 1);
        for (i, cell) in fields
            .iter()
            .enumerate()
            .skip(1)
            .take(window.width().saturating_sub(1))
        {
            self.buffer.push(window.start + i, cell);
        }
        Ok(())
    }

    /// Close the streamed column's output line, then write each buffered
    /// destination row as one complete line and discard the buffer. Every
    /// emitted cell advances its source row's offset past the consumed text
    /// plus one separator (or the line feed, for a row's last field).
    fn dump_kept(&mut self, window: ColWindow) -> Result<()> {
        self.output.write_all(b"\n")?;
        let last = self.rows - 1;
        for col in window.start + 1..window.stop {
            for (x, cell) in self.buffer.row(col).iter().enumerate() {
                self.output.write_all(cell)?;
                self.output
                    .write_all(if x == last { b"\n" } else { b" " })?;
                self.index.advance(x, cell.len() as u64 + 1);
            }
        }
        self.buffer.clear();
        Ok(())
    }
}

/// Fill `buf` from `r`, stopping early only at end of input.
fn read_up_to<R: Read>(r: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = r.read(&mut buf[filled..])?;
        if n == 0 {
            break;
        }
        filled += n;
    }
    Ok(filled)
}
