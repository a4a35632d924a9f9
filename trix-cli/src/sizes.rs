//! Per-line byte-size report.
//!
//! Prints each line's byte length (line feed included) and the running
//! total; useful for manually checking the longest/shortest-row figures the
//! transposer derives from the same file. Not used by the engine.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

pub fn run(input: &str) -> Result<()> {
    let file = File::open(input).with_context(|| format!("Failed to open input: {input}"))?;
    eprintln!("# sizes include \\n");
    let stdout = io::stdout();
    let mut out = stdout.lock();
    report(BufReader::new(file), &mut out)
}

fn report<R: BufRead, W: Write>(mut reader: R, out: &mut W) -> Result<()> {
    let mut line = Vec::new();
    let mut total: u64 = 0;
    loop {
        line.clear();
        let n = reader.read_until(b'\n', &mut line)?;
        if n == 0 {
            break;
        }
        total += n as u64;
        write!(out, "{n:3} ({total:4}): ")?;
        out.write_all(&line)?;
        if line.last() != Some(&b'\n') {
            out.write_all(b"\n")?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_report_lengths_and_running_total() {
        let mut out = Vec::new();
        report(Cursor::new(b"ab c\nd\n".to_vec()), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "  5 (   5): ab c\n  2 (   7): d\n");
    }

    #[test]
    fn test_report_missing_final_newline() {
        let mut out = Vec::new();
        report(Cursor::new(b"abc".to_vec()), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "  3 (   3): abc\n");
    }

    #[test]
    fn test_report_empty_input() {
        let mut out = Vec::new();
        report(Cursor::new(Vec::new()), &mut out).unwrap();
        assert!(out.is_empty());
    }
}
