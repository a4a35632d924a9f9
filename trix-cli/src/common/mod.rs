//! Shared helpers for the trix subcommands.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Parse a memory budget: plain bytes ("1048576"), or with a binary suffix
/// ("512KiB", "64MiB", "1GiB").
pub fn parse_budget(s: &str) -> Result<u64> {
    let s = s.trim();
    let (digits, multiplier) = if let Some(d) = s.strip_suffix("GiB") {
        (d, 1u64 << 30)
    } else if let Some(d) = s.strip_suffix("MiB") {
        (d, 1u64 << 20)
    } else if let Some(d) = s.strip_suffix("KiB") {
        (d, 1u64 << 10)
    } else if let Some(d) = s.strip_suffix('B') {
        (d, 1)
    } else {
        (s, 1)
    };
    let n: u64 = digits
        .trim()
        .parse()
        .with_context(|| format!("Invalid budget: {s}"))?;
    let budget = n
        .checked_mul(multiplier)
        .with_context(|| format!("Budget overflows: {s}"))?;
    if budget == 0 {
        bail!("Budget must be non-zero");
    }
    Ok(budget)
}

/// Default output path: the input's base name with ".transposed" appended,
/// placed in the current directory. The input file itself is never touched.
pub fn default_output_path(input: &str) -> Result<PathBuf> {
    let name = Path::new(input)
        .file_name()
        .with_context(|| format!("Input has no file name: {input}"))?;
    let mut out = name.to_os_string();
    out.push(".transposed");
    Ok(PathBuf::from(out))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_budget_plain_bytes() {
        assert_eq!(parse_budget("1048576").unwrap(), 1 << 20);
        assert_eq!(parse_budget("42").unwrap(), 42);
    }

    #[test]
    fn test_parse_budget_suffixes() {
        assert_eq!(parse_budget("512KiB").unwrap(), 512 << 10);
        assert_eq!(parse_budget("64MiB").unwrap(), 64 << 20);
        assert_eq!(parse_budget("1GiB").unwrap(), 1 << 30);
        assert_eq!(parse_budget("100B").unwrap(), 100);
    }

    #[test]
    fn test_parse_budget_allows_inner_whitespace() {
        assert_eq!(parse_budget(" 8 MiB ").unwrap(), 8 << 20);
    }

    #[test]
    fn test_parse_budget_rejects_garbage() {
        assert!(parse_budget("lots").is_err());
        assert!(parse_budget("").is_err());
        assert!(parse_budget("0").is_err());
    }

    #[test]
    fn test_default_output_path_uses_base_name() {
        let out = default_output_path("/data/big/matrix.txt").unwrap();
        assert_eq!(out, PathBuf::from("matrix.txt.transposed"));
    }

    #[test]
    fn test_default_output_path_relative_input() {
        let out = default_output_path("matrix.txt").unwrap();
        assert_eq!(out, PathBuf::from("matrix.txt.transposed"));
    }
}
