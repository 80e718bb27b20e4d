//! Tests for the `bi` command-line tool.

mod common;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::process::{Command, Output};

use bi::{Format, Image};
use common::fixtures;
use pretty_assertions::assert_eq;

fn run(args: &[&str], dir: &Path) -> Output {
    Command::new(env!("CARGO_BIN_EXE_bi"))
        .args(args)
        .current_dir(dir)
        .env_remove("BI_CONFIG")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run bi binary")
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn write_fixture_png(path: &Path, image: &Image) {
    let file = File::create(path).unwrap();
    bi::raster::write_png(BufWriter::new(file), image).unwrap();
}

#[test]
fn test_encode_decode_hex_roundtrip() {
    let dir = tempfile::tempdir().unwrap();
    let image = fixtures::truncated(&fixtures::gradient(9, 4));
    write_fixture_png(&dir.path().join("in.png"), &image);

    assert_success(&run(
        &["encode", "-i", "in.png", "-o", "out.bi", "-m", "hex"],
        dir.path(),
    ));
    let stream = std::fs::read(dir.path().join("out.bi")).unwrap();
    common::assert_stream_shape(&stream, "bi,hex", 9, 4);

    assert_success(&run(&["decode", "-i", "out.bi", "-o", "back.png"], dir.path()));
    let back = bi::raster::read_png(File::open(dir.path().join("back.png")).unwrap()).unwrap();
    assert_eq!(back, image);
}

#[test]
fn test_biz_extension_compresses() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_png(&dir.path().join("in.png"), &fixtures::gradient(6, 6));

    assert_success(&run(&["encode", "-i", "in.png", "-o", "out.biz"], dir.path()));
    let stream = std::fs::read(dir.path().join("out.biz")).unwrap();
    assert_eq!(Format::detect(&stream), Some(Format::Compressed));

    let output = run(&["info", "out.biz"], dir.path());
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Format: compressed"), "{stdout}");
    assert!(stdout.contains("Model:  v1"), "{stdout}");
    assert!(stdout.contains("Width:  6"), "{stdout}");
}

#[test]
fn test_config_file_sets_default_model() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("bi.yaml"), "model: hex\n").unwrap();
    write_fixture_png(&dir.path().join("in.png"), &fixtures::gradient(2, 2));

    assert_success(&run(
        &["--config", "bi.yaml", "encode", "-i", "in.png", "-o", "out.bi"],
        dir.path(),
    ));
    let stream = std::fs::read(dir.path().join("out.bi")).unwrap();
    assert!(stream.starts_with(b"bi,hex\n"));
}

#[test]
fn test_unknown_model_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_fixture_png(&dir.path().join("in.png"), &fixtures::gradient(2, 2));

    let output = run(
        &["encode", "-i", "in.png", "-o", "out.bi", "-m", "cmyk"],
        dir.path(),
    );
    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown color model"));
}

#[test]
fn test_models_lists_builtins() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&["models"], dir.path());
    assert_success(&output);
    assert_eq!(String::from_utf8_lossy(&output.stdout), "hex\nv1\n");
}

#[test]
fn test_info_accepts_crlf_wrapper_line() {
    let dir = tempfile::tempdir().unwrap();
    let mut compressed = Vec::new();
    bi::encode_compressed(
        &mut compressed,
        &fixtures::gradient(3, 2),
        &bi::HexModel,
        flate2::Compression::default(),
    )
    .unwrap();
    let mut crlf = b"biz\r\n".to_vec();
    crlf.extend_from_slice(&compressed[4..]);
    std::fs::write(dir.path().join("crlf.biz"), crlf).unwrap();

    let output = run(&["info", "crlf.biz"], dir.path());
    assert_success(&output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Format: compressed"), "{stdout}");
    assert!(stdout.contains("Width:  3"), "{stdout}");
}
