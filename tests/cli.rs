use std::{
    path::Path,
    process::{Command, Output},
};

use image::{Rgba, RgbaImage};
use tilemap_padder::image::{read_png, write_png};

fn padder(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tilemap-padder"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run tilemap-padder")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp paths are utf-8")
}

fn checker_sheet(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        Rgba([(x * 7 % 256) as u8, (y * 11 % 256) as u8, ((x + y) % 256) as u8, 255])
    })
}

#[test]
fn pads_two_tile_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.png");
    let output = dir.path().join("sheet_padding.png");
    let sheet = checker_sheet(64, 32);
    write_png(&input, &sheet).unwrap();

    let out = padder(&[
        "-w",
        "32",
        "-h",
        "32",
        "-p",
        "2",
        "-i",
        path_str(&input),
        "-o",
        path_str(&output),
    ]);
    assert!(
        out.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&out.stderr)
    );

    let padded = read_png(&output).unwrap();
    assert_eq!(padded.dimensions(), (72, 36));
    assert_eq!(padded.get_pixel(2, 2), sheet.get_pixel(0, 0));
    assert_eq!(padded.get_pixel(0, 2), sheet.get_pixel(0, 0));
    assert_eq!(padded.get_pixel(38, 0), sheet.get_pixel(32, 0));
    assert_eq!(padded.get_pixel(71, 35)[3], 0);
}

#[test]
fn missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out.png");

    let out = padder(&[
        "-w",
        "32",
        "-h",
        "32",
        "-p",
        "0",
        "-i",
        path_str(&dir.path().join("nope.png")),
        "-o",
        path_str(&output),
    ]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: "), "stderr: {}", stderr);
    assert!(stderr.contains("nope.png"), "stderr: {}", stderr);
    assert!(!output.exists());
}

#[test]
fn invalid_png_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("broken.png");
    let output = dir.path().join("out.png");
    std::fs::write(&input, b"this is not an image").unwrap();

    let out = padder(&[
        "--tile-width",
        "8",
        "--tile-height",
        "8",
        "--padding",
        "1",
        "--input",
        path_str(&input),
        "--output",
        path_str(&output),
    ]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error: cannot decode"));
    assert!(!output.exists());
}

#[test]
fn huge_padding_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sheet.png");
    let output = dir.path().join("out.png");
    write_png(&input, &checker_sheet(4, 4)).unwrap();

    let out = padder(&[
        "-w",
        "4",
        "-h",
        "4",
        "-p",
        "2147483648",
        "-i",
        path_str(&input),
        "-o",
        path_str(&output),
    ]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: "), "stderr: {}", stderr);
    assert!(stderr.contains("too large"), "stderr: {}", stderr);
    assert!(!output.exists());
}

#[test]
fn tile_larger_than_image_leaves_empty_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("small.png");
    let output = dir.path().join("out.png");
    write_png(&input, &checker_sheet(8, 8)).unwrap();

    let out = padder(&[
        "-w",
        "16",
        "-h",
        "16",
        "-p",
        "1",
        "-i",
        path_str(&input),
        "-o",
        path_str(&output),
    ]);
    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Error: cannot encode"), "stderr: {}", stderr);
    // 作ったファイルは消さずに残る
    assert!(output.exists());
}

#[test]
fn missing_flags_exit_with_one() {
    let out = padder(&["-i", "a.png", "-o", "b.png"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("Error: "));
}

#[test]
fn help_is_long_only() {
    let out = padder(&["--help"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("--tile-width"));
    assert!(stdout.contains("--tile-height"));
    assert!(stdout.contains("adds padding to tilemaps"));
}

#[test]
fn padding_generated_sheet() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("generated.png");
    let output = dir.path().join("generated_padding.png");

    let status = Command::new(env!("CARGO_BIN_EXE_gen_sheet"))
        .args([
            "--across",
            "3",
            "--down",
            "2",
            "--tile-width",
            "8",
            "--tile-height",
            "4",
            "-o",
            path_str(&input),
        ])
        .status()
        .unwrap();
    assert!(status.success());

    let out = padder(&[
        "-w",
        "8",
        "-h",
        "4",
        "-p",
        "1",
        "--corners",
        "extend",
        "-i",
        path_str(&input),
        "-o",
        path_str(&output),
    ]);
    assert!(out.status.success());

    let sheet = read_png(&input).unwrap();
    let padded = read_png(&output).unwrap();
    assert_eq!(padded.dimensions(), (3 * 10, 2 * 6));
    // 拡張モードでは四隅もタイルの角で埋まり, 透明なピクセルは残らない
    assert!(padded.pixels().all(|px| px[3] == 255));
    assert_eq!(padded.get_pixel(0, 0), sheet.get_pixel(0, 0));
    assert_eq!(padded.get_pixel(29, 11), sheet.get_pixel(23, 7));
}
