//! Integration tests for the `convert-ascii-to-png` binary.
//!
//! Exact dimensions are asserted with `--builtin-font`, which does not depend
//! on the fonts installed on the machine.

#![allow(deprecated)] // cargo_bin deprecation, replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;

const CAT: &str = "  /\\_/\\\n ( o.o )\n  > ^ <\n";

fn convert_ascii_to_png() -> Command {
    Command::cargo_bin("convert-ascii-to-png")
        .expect("binary 'convert-ascii-to-png' should be built")
}

/// Fresh per-test directory under cargo's integration-test scratch space
fn scratch(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join(name);
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

// ─── Arguments ───────────────────────────────

#[test]
fn no_args_prints_usage_and_exits_1() {
    convert_ascii_to_png()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage: convert-ascii-to-png"));
}

#[test]
fn single_arg_exits_1() {
    convert_ascii_to_png()
        .arg("only-input.txt")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn non_numeric_font_size_exits_1() {
    let dir = scratch("bad_font_size");
    let input = dir.join("cat.txt");
    fs::write(&input, CAT).unwrap();

    convert_ascii_to_png()
        .arg(&input)
        .arg(dir.join("cat.png"))
        .arg("huge")
        .assert()
        .code(1);
    assert!(!dir.join("cat.png").exists());
}

#[test]
fn help_flag_succeeds() {
    convert_ascii_to_png()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: convert-ascii-to-png"))
        .stdout(predicate::str::contains("--padding"));
}

// ─── Conversion ──────────────────────────────

#[test]
fn missing_input_exits_1() {
    let dir = scratch("missing_input");
    let input = dir.join("nope.txt");
    let output = dir.join("nope.png");

    convert_ascii_to_png()
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: File not found:"));
    assert!(!output.exists());
}

#[test]
fn converts_cat_with_builtin_font() {
    let dir = scratch("cat_builtin");
    let input = dir.join("cat.txt");
    let output = dir.join("cat.png");
    fs::write(&input, format!("\n\n{CAT}\n   \n")).unwrap();

    convert_ascii_to_png()
        .arg(&input)
        .arg(&output)
        .arg("--builtin-font")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created "))
        .stdout(predicate::str::contains("(104x64)"));

    let png = image::open(&output).unwrap().to_rgba8();
    assert_eq!(png.dimensions(), (104, 64));
    assert_eq!(png.get_pixel(0, 0)[3], 0);
    assert!(png.pixels().any(|p| p.0 == [255, 255, 255, 255]));
}

#[test]
fn custom_padding() {
    let dir = scratch("padding");
    let input = dir.join("cat.txt");
    let output = dir.join("cat.png");
    fs::write(&input, CAT).unwrap();

    convert_ascii_to_png()
        .args([input.as_os_str(), output.as_os_str()])
        .args(["--builtin-font", "--padding", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(64x24)"));
}

#[test]
fn converts_with_system_fonts() {
    let dir = scratch("system_fonts");
    let input = dir.join("cat.txt");
    let output = dir.join("cat.png");
    fs::write(&input, CAT).unwrap();

    convert_ascii_to_png()
        .arg(&input)
        .arg(&output)
        .arg("24")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^Created .*cat\.png \(\d+x\d+\)\n$").unwrap());
    assert!(output.exists());
}

#[test]
fn unusable_font_falls_back_to_builtin() {
    let dir = scratch("bad_font");
    let input = dir.join("cat.txt");
    let output = dir.join("cat.png");
    let font = dir.join("broken.ttf");
    fs::write(&input, CAT).unwrap();
    fs::write(&font, b"not a font").unwrap();

    convert_ascii_to_png()
        .arg(&input)
        .arg(&output)
        .arg("--font")
        .arg(&font)
        .assert()
        .success()
        .stdout(predicate::str::contains("(104x64)"));
}

#[test]
fn whitespace_only_input_exits_1_without_output() {
    let dir = scratch("blank");
    let input = dir.join("blank.txt");
    let output = dir.join("blank.png");
    fs::write(&input, "  \n\t\n\n").unwrap();

    convert_ascii_to_png()
        .arg(&input)
        .arg(&output)
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Error: No content in ASCII file"));
    assert!(!output.exists());
}

#[test]
fn repeated_runs_match() {
    let dir = scratch("repeat");
    let input = dir.join("cat.txt");
    fs::write(&input, CAT).unwrap();

    for name in ["a.png", "b.png"] {
        convert_ascii_to_png()
            .arg(&input)
            .arg(dir.join(name))
            .arg("--builtin-font")
            .assert()
            .success();
    }
    assert_eq!(
        fs::read(dir.join("a.png")).unwrap(),
        fs::read(dir.join("b.png")).unwrap()
    );
}
