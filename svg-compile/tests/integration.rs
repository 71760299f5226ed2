//! End-to-end tests that spawn the built `svg-compile` binary and pipe an
//! SVG document through it, driving the built binary with
//! `std::process::Command`.

use std::io::Write;
use std::process::{Command, Stdio};

fn run_compile(svg: &str) -> String {
    let mut child = Command::new(env!("CARGO_BIN_EXE_svg-compile"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn svg-compile");

    child
        .stdin
        .take()
        .unwrap()
        .write_all(svg.as_bytes())
        .unwrap();

    let output = child.wait_with_output().expect("svg-compile did not exit");
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn red_square_emits_fill_color_and_path_instructions() {
    let out = run_compile(r#"<svg><path fill="#f00" d="M0 0 L10 0 L10 10 L0 10 z"/></svg>"#);
    assert!(out.contains("4 fill_color"));
    assert!(out.contains("0xFF0000"));
    assert!(out.contains("7 begin_path"));
    assert!(out.contains("21 fill_and_stroke"));
}

#[test]
fn nested_group_matrix_brackets_its_children() {
    let out = run_compile(
        r#"<svg><g transform="matrix(2 0 0 2 10 10)"><path fill="#00ff00" d="M0 0 L5 0 L5 5 L0 5 z"/></g></svg>"#,
    );
    let push_idx = out.find("5 push_matrix").unwrap();
    let pop_idx = out.find("6 pop_matrix").unwrap();
    let path_idx = out.find("7 begin_path").unwrap();
    assert!(push_idx < path_idx && path_idx < pop_idx);
}

#[test]
fn unrecognized_path_command_is_a_fatal_error() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_svg-compile"))
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"<svg><path d="M0 0 Q5 5 10 10"/></svg>"#)
        .unwrap();
    let output = child.wait_with_output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}
