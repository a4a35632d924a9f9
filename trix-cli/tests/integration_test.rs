//! Integration tests for the trix binary.

use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn trix() -> Command {
    Command::new(env!("CARGO_BIN_EXE_trix"))
}

#[test]
fn test_transpose_concrete_scenario() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("matrix.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "1 22 333\n4 55 666\n").unwrap();

    let out = trix()
        .args([
            "transpose",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to run trix");

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(out.status.success(), "transpose failed: {stdout}");
    assert!(stdout.contains("Transposed 2x3 -> 3x2"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "1 4\n22 55\n333 666\n");
}

#[test]
fn test_generate_then_transpose_round_trip() {
    let dir = TempDir::new().unwrap();
    let matrix = dir.path().join("matrix.txt");
    let once = dir.path().join("once.txt");
    let twice = dir.path().join("twice.txt");

    let out = trix()
        .args([
            "generate",
            "--rows",
            "12",
            "--cols",
            "7",
            "--output",
            matrix.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to run trix generate");
    assert!(out.status.success());

    // A budget this small forces several passes.
    for (src, dst) in [(&matrix, &once), (&once, &twice)] {
        let out = trix()
            .args([
                "transpose",
                "--input",
                src.to_str().unwrap(),
                "--output",
                dst.to_str().unwrap(),
                "--budget",
                "200",
            ])
            .output()
            .expect("Failed to run trix transpose");
        assert!(
            out.status.success(),
            "stderr: {}",
            String::from_utf8_lossy(&out.stderr)
        );
    }

    assert_eq!(fs::read(&matrix).unwrap(), fs::read(&twice).unwrap());
}

#[test]
fn test_generate_transposed_matches_transposed_run() {
    let dir = TempDir::new().unwrap();
    let normal = dir.path().join("normal.txt");
    let swapped = dir.path().join("swapped.txt");
    let transposed = dir.path().join("normal.transposed");

    for (path, extra) in [(&normal, None), (&swapped, Some("--transposed"))] {
        let mut args = vec![
            "generate",
            "--rows",
            "10",
            "--cols",
            "8",
            "--output",
            path.to_str().unwrap(),
        ];
        args.extend(extra);
        let out = trix().args(&args).output().expect("Failed to run trix generate");
        assert!(out.status.success());
    }

    let out = trix()
        .args([
            "transpose",
            "--input",
            normal.to_str().unwrap(),
            "--output",
            transposed.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to run trix transpose");
    assert!(out.status.success());

    assert_eq!(fs::read(&transposed).unwrap(), fs::read(&swapped).unwrap());
}

#[test]
fn test_transpose_default_output_path() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("matrix.txt");
    fs::write(&input, "a b\nc d\n").unwrap();

    let out = trix()
        .current_dir(dir.path())
        .args(["transpose", "--input", input.to_str().unwrap()])
        .output()
        .expect("Failed to run trix");
    assert!(out.status.success());

    let produced = dir.path().join("matrix.txt.transposed");
    assert_eq!(fs::read_to_string(&produced).unwrap(), "a c\nb d\n");
    // Input untouched.
    assert_eq!(fs::read_to_string(&input).unwrap(), "a b\nc d\n");
}

#[test]
fn test_ragged_matrix_rejected() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("ragged.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "1 2 3\n4 5\n").unwrap();

    let out = trix()
        .args([
            "transpose",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ])
        .output()
        .expect("Failed to run trix");

    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("row 1"), "stderr: {stderr}");
    assert!(stderr.contains("expected 3"), "stderr: {stderr}");
    assert!(stderr.contains("found 2"), "stderr: {stderr}");
}

#[test]
fn test_invalid_budget_rejected() {
    let out = trix()
        .args(["transpose", "--input", "whatever.txt", "--budget", "plenty"])
        .output()
        .expect("Failed to run trix");
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("Invalid budget"));
}

#[test]
fn test_sizes_report() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("matrix.txt");
    fs::write(&input, "1 22 333\n4 55 666\n").unwrap();

    let out = trix()
        .args(["sizes", "--input", input.to_str().unwrap()])
        .output()
        .expect("Failed to run trix sizes");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert_eq!(stdout, "  9 (   9): 1 22 333\n  9 (  18): 4 55 666\n");
    assert!(String::from_utf8_lossy(&out.stderr).contains("sizes include"));
}
