//! Transpose subcommand: wires files to the engine and reports the outcome.

use anyhow::{Context, Result};
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::PathBuf;
use transpose_engine::{TransposeConfig, Transposer};

use crate::common::{default_output_path, parse_budget};

/// Run the transposition: open input for random-access read, output for
/// sequential write, and sweep until every source column is emitted.
pub fn run(
    input: &str,
    output: Option<&str>,
    budget: Option<&str>,
    config_path: Option<&str>,
) -> Result<()> {
    let config = load_run_config(config_path, budget)?;
    let out_path = match output {
        Some(p) => PathBuf::from(p),
        None => default_output_path(input)?,
    };

    let fd_in = File::open(input).with_context(|| format!("Failed to open input: {input}"))?;
    let fd_out = File::create(&out_path)
        .with_context(|| format!("Failed to create output: {}", out_path.display()))?;

    let stats = Transposer::new(fd_in, BufWriter::new(fd_out), config)
        .run()
        .with_context(|| format!("Transposing {input}"))?;

    println!(
        "Transposed {}x{} -> {}x{} in {} pass(es) (longest cell: {} bytes)",
        stats.rows, stats.cols, stats.cols, stats.rows, stats.passes, stats.longest_cell
    );
    if stats.degraded {
        println!("Note: budget too small to buffer one output row; ran streaming-only");
    }
    println!("Output: {}", out_path.display());

    Ok(())
}

/// Optional JSON config file, with `--budget` taking precedence.
fn load_run_config(config_path: Option<&str>, budget: Option<&str>) -> Result<TransposeConfig> {
    let mut config = match config_path {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {path}"))?;
            serde_json::from_str(&json).with_context(|| format!("Failed to parse config: {path}"))?
        }
        None => TransposeConfig::default(),
    };
    if let Some(b) = budget {
        config.mem_budget = parse_budget(b)?;
    }
    Ok(config)
}
