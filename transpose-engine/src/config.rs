//! Run configuration for the transposition engine.

use serde::{Deserialize, Serialize};

/// Default cell-buffer ceiling: 100 MiB.
pub const DEFAULT_MEM_BUDGET: u64 = 100 * 1024 * 1024;

/// Configuration for a transposition run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransposeConfig {
    /// Ceiling, in bytes, on the cell buffer's estimated footprint
    /// (longest observed cell width times buffered destination rows).
    /// The row index and other bookkeeping are deliberately not counted.
    #[serde(default = "default_mem_budget")]
    pub mem_budget: u64,
}

fn default_mem_budget() -> u64 {
    DEFAULT_MEM_BUDGET
}

impl Default for TransposeConfig {
    fn default() -> Self {
        Self {
            mem_budget: DEFAULT_MEM_BUDGET,
        }
    }
}
