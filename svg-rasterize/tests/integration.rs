//! Pipes a small polygon stream through the built `svg-rasterize` binary
//! and checks the PNG it writes, mirroring `svg-compile`'s
//! `tests/integration.rs` pattern of driving the built binary end to end.

use std::io::Write;
use std::process::{Command, Stdio};

/// Runs `svg-rasterize` with `polygons` on stdin inside a scratch
/// directory (so parallel tests don't race on `out.png`/`debug.png` in the
/// crate's own working directory), returning that directory.
fn run_rasterize(polygons: &str, args: &[&str]) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "svg-rasterize-test-{}-{}",
        std::process::id(),
        args.join("_")
    ));
    std::fs::create_dir_all(&dir).unwrap();

    let mut child = Command::new(env!("CARGO_BIN_EXE_svg-rasterize"))
        .args(args)
        .current_dir(&dir)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn svg-rasterize");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(polygons.as_bytes())
        .unwrap();

    let output = child.wait_with_output().expect("svg-rasterize did not exit");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    dir
}

const RED_SQUARE: &str = "\
0xFF0000 4
0 0
10 0
10 10
0 10
";

#[test]
fn writes_out_png_with_expected_dimensions() {
    let dir = run_rasterize(RED_SQUARE, &[]);
    let bytes = std::fs::read(dir.join("out.png")).unwrap();

    let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    let mut reader = decoder.read_info().unwrap();
    let info = reader.info();
    assert_eq!(info.width, 900);
    assert_eq!(info.height, 900);
}

#[test]
fn scale_argument_multiplies_canvas_dimensions() {
    let dir = run_rasterize(RED_SQUARE, &["2"]);
    let bytes = std::fs::read(dir.join("out.png")).unwrap();

    let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    let mut reader = decoder.read_info().unwrap();
    let info = reader.info();
    assert_eq!(info.width, 1800);
    assert_eq!(info.height, 1800);
}

#[test]
fn pixel_inside_the_square_is_opaque_red() {
    let dir = run_rasterize(RED_SQUARE, &[]);
    let bytes = std::fs::read(dir.join("out.png")).unwrap();

    let decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    let mut reader = decoder.read_info().unwrap();
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).unwrap();
    let rgba = &buf[..info.buffer_size()];

    let width = info.width as usize;
    let idx = (5 * width + 5) * 4;
    assert_eq!(&rgba[idx..idx + 4], &[255, 0, 0, 255]);

    // well outside the 10x10 square, on a 900x900 canvas.
    let idx_outside = (500 * width + 500) * 4;
    assert_eq!(&rgba[idx_outside..idx_outside + 4], &[0, 0, 0, 0]);
}

#[test]
fn debug_mode_writes_debug_png_instead_of_out_png() {
    let dir = run_rasterize(RED_SQUARE, &["1", "1", "1"]);
    assert!(dir.join("debug.png").exists());
    assert!(!dir.join("out.png").exists());
}
