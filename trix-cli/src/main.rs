//! trix - Transpose large space-separated text matrices with bounded memory.

use clap::{Parser, Subcommand};

mod common;
mod generate;
mod sizes;
mod transpose;

#[derive(Parser)]
#[command(name = "trix")]
#[command(about = "Out-of-core transposition of space-separated text matrices")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Transpose a matrix file with a bounded memory budget
    Transpose {
        /// Path to the input matrix
        #[arg(short, long)]
        input: String,

        /// Output path (default: input base name + ".transposed")
        #[arg(short, long)]
        output: Option<String>,

        /// Cell-buffer memory budget, e.g. "64MiB", "512KiB" or plain bytes
        #[arg(short, long)]
        budget: Option<String>,

        /// Path to a JSON run config (optional)
        #[arg(short, long)]
        config: Option<String>,
    },

    /// Generate a synthetic matrix with irregular cell widths
    Generate {
        /// Number of rows
        #[arg(long, default_value_t = 10)]
        rows: usize,

        /// Number of columns
        #[arg(long, default_value_t = 8)]
        cols: usize,

        /// Emit the column-major orientation instead
        #[arg(short = 'T', long)]
        transposed: bool,

        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Report per-line byte sizes of a matrix file
    Sizes {
        /// Path to the file to inspect
        #[arg(short, long)]
        input: String,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Transpose {
            input,
            output,
            budget,
            config,
        } => transpose::run(
            &input,
            output.as_deref(),
            budget.as_deref(),
            config.as_deref(),
        ),
        Commands::Generate {
            rows,
            cols,
            transposed,
            output,
        } => generate::run(rows, cols, transposed, output.as_deref()),
        Commands::Sizes { input } => sizes::run(&input),
    }
}
