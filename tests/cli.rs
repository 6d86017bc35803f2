//! End-to-end checks of the two binaries' exit codes and outputs.

use std::fs;
use std::process::Command;

use tempfile::tempdir;

#[test]
fn test_xxd_missing_input_exits_nonzero() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("missing.bin");
    let output = dir.path().join("missing.h");

    let result = Command::new(env!("CARGO_BIN_EXE_xxd"))
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();

    assert_eq!(result.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&result.stderr).contains("not found"));
    assert!(!output.exists());
}

#[test]
fn test_xxd_embeds_file() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("hello.txt");
    let output = dir.path().join("hello.h");
    fs::write(&input, b"hi").unwrap();

    let status = Command::new(env!("CARGO_BIN_EXE_xxd"))
        .arg(&input)
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "static uint8_t hello_txt[] = {\n  0x68, 0x69, 0x00\n};\n"
    );
}

#[test]
fn test_gen_color_consts_writes_header() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("color_consts.h");

    let status = Command::new(env!("CARGO_BIN_EXE_gen_color_consts"))
        .arg(&output)
        .status()
        .unwrap();

    assert!(status.success());
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("static const float color_ltable[] = {"));
    assert!(text.contains("} color_consts_t;"));
}

#[test]
fn test_gen_color_consts_bad_path_fails() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("no").join("such").join("color_consts.h");

    let status = Command::new(env!("CARGO_BIN_EXE_gen_color_consts"))
        .arg(&output)
        .status()
        .unwrap();

    assert_eq!(status.code(), Some(1));
    assert!(!output.exists());
}

#[test]
fn test_xxd_verbose_reports_progress() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("shader.cl");
    let output = dir.path().join("shader.h");
    fs::write(&input, b"kernel").unwrap();

    let result = Command::new(env!("CARGO_BIN_EXE_xxd"))
        .arg("--verbose")
        .arg(&input)
        .arg(&output)
        .output()
        .unwrap();

    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Embedded 6 bytes as shader_cl"), "stderr: {}", stderr);
    assert!(stderr.contains("Done!"), "stderr: {}", stderr);
    assert!(result.stdout.is_empty());
}

#[test]
fn test_gen_color_consts_verbose_reports_progress() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("color_consts.h");

    let result = Command::new(env!("CARGO_BIN_EXE_gen_color_consts"))
        .arg("-v")
        .arg(&output)
        .output()
        .unwrap();

    assert!(result.status.success());
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Writing: "), "stderr: {}", stderr);
    assert!(stderr.contains("Done!"), "stderr: {}", stderr);
    assert!(output.exists());
}

#[test]
fn test_quiet_runs_write_nothing_to_stderr() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("color_consts.h");

    let result = Command::new(env!("CARGO_BIN_EXE_gen_color_consts"))
        .arg(&output)
        .output()
        .unwrap();

    assert!(result.status.success());
    assert!(result.stderr.is_empty());
}
