//! Synthetic matrix generator.
//!
//! Produces test fixtures for the transposer: cell values are sums of
//! arbitrary functions along the two edges, printed at a precision that
//! depends on the value, so cell widths vary irregularly and exercise the
//! window re-planning. `--transposed` emits the column-major orientation
//! for comparing against a transposed run.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};

pub fn run(rows: usize, cols: usize, transposed: bool, output: Option<&str>) -> Result<()> {
    let mut writer: Box<dyn Write> = match output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("Failed to create output: {path}"))?,
        )),
        None => Box::new(io::stdout().lock()),
    };
    emit(&mut writer, rows, cols, transposed)?;
    writer.flush()?;
    Ok(())
}

fn emit<W: Write>(w: &mut W, rows: usize, cols: usize, transposed: bool) -> Result<()> {
    let edge_x: Vec<f64> = (0..cols).map(|x| (x as f64).cos()).collect();
    let edge_y: Vec<f64> = (0..rows).map(|y| (y as f64).tan()).collect();

    if transposed {
        for x in 0..cols {
            for y in 0..rows {
                let end = if y + 1 == rows { "\n" } else { " " };
                write!(w, "{}{}", format_cell(edge_x[x] + edge_y[y]), end)?;
            }
        }
    } else {
        for y in 0..rows {
            for x in 0..cols {
                let end = if x + 1 == cols { "\n" } else { " " };
                write!(w, "{}{}", format_cell(edge_x[x] + edge_y[y]), end)?;
            }
        }
    }
    Ok(())
}

/// Precision varies with the value, purely to make cell lengths irregular.
fn format_cell(val: f64) -> String {
    if val > 3.0 {
        format!("{val:.0}")
    } else if val > 1.2 {
        format!("{val:.3}")
    } else {
        format!("{val:.5}")
    }
}
