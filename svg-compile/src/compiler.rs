// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::Write;

use svg_pipeline_types::{parse_svg_color, write_instruction, Instruction};

use crate::error::Error;
use crate::path_data::compile_path_data;

/// Walks the document from its root `<svg>` element, emitting instructions in document order.
pub fn compile<W: Write>(doc: &roxmltree::Document, out: &mut W) -> Result<(), Error> {
    walk_node(doc.root_element(), out)
}

fn walk_node<W: Write>(node: roxmltree::Node, out: &mut W) -> Result<(), Error> {
    let tag = node.tag_name().name();
    let recognized = matches!(tag, "svg" | "g" | "path");

    if !recognized {
        log::warn!("unknown element <{}>, skipping its paint commands", tag);
        for child in node.children().filter(|n| n.is_element()) {
            walk_node(child, out)?;
        }
        return Ok(());
    }

    write_instruction(out, Instruction::Save)?;

    // Attribute emission order mirrors the original compiler's flat
    // strcmp chain: fill, stroke, stroke-width, transform, d.
    if let Some(fill) = node.attribute("fill") {
        write_instruction(out, Instruction::FillColor(parse_svg_color(fill)))?;
    }
    if let Some(stroke) = node.attribute("stroke") {
        write_instruction(out, Instruction::StrokeColor(parse_svg_color(stroke)))?;
    }
    if let Some(width) = node.attribute("stroke-width") {
        match width.trim().parse::<f32>() {
            Ok(w) => write_instruction(out, Instruction::StrokeWidth(w))?,
            Err(_) => log::warn!("invalid stroke-width {:?}, ignoring", width),
        }
    }

    let mut pushed_matrix = false;
    if let Some(transform) = node.attribute("transform") {
        match parse_matrix_transform(transform)? {
            Some(m) => {
                write_instruction(out, Instruction::PushMatrix(m))?;
                pushed_matrix = true;
            }
            None => log::warn!(
                "transform {:?} is not a matrix(...) function, ignoring",
                transform
            ),
        }
    }

    if tag == "path" {
        write_instruction(out, Instruction::BeginPath)?;
        if let Some(d) = node.attribute("d") {
            for instr in compile_path_data(d)? {
                write_instruction(out, instr)?;
            }
        }
        write_instruction(out, Instruction::FillAndStroke)?;
    }

    for child in node.children().filter(|n| n.is_element()) {
        walk_node(child, out)?;
    }

    if pushed_matrix {
        write_instruction(out, Instruction::PopMatrix)?;
    }
    write_instruction(out, Instruction::Restore)?;

    Ok(())
}

/// Extracts the six matrix components from a `transform` attribute if (and
/// only if) its first function is `matrix(...)`; every other transform
/// function (`translate`, `scale`, `rotate`, ...) is silently ignored, by
/// design.
fn parse_matrix_transform(s: &str) -> Result<Option<[f32; 6]>, Error> {
    let mut parser = svgtypes::TransformListParser::from(s);
    match parser.next() {
        Some(Ok(svgtypes::TransformListToken::Matrix { a, b, c, d, e, f })) => {
            Ok(Some([a as f32, b as f32, c as f32, d as f32, e as f32, f as f32]))
        }
        Some(Ok(_)) => Ok(None),
        Some(Err(e)) => Err(Error::Transform(e)),
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile_svg(src: &str) -> String {
        let doc = roxmltree::Document::parse(src).unwrap();
        let mut buf = Vec::new();
        compile(&doc, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn wraps_every_element_in_save_restore() {
        let out = compile_svg(r#"<svg><path fill="#f00" d="M0 0 L1 1 z"/></svg>"#);
        let save_count = out.matches("0 save").count();
        let restore_count = out.matches("1 restore").count();
        assert_eq!(save_count, 2); // svg + path
        assert_eq!(restore_count, 2);
    }

    #[test]
    fn matrix_transform_is_pushed_and_popped() {
        let out = compile_svg(
            r#"<svg><g transform="matrix(2 0 0 2 10 10)"><path fill="#0f0" d="M0 0 L1 1 z"/></g></svg>"#,
        );
        assert!(out.contains("5 push_matrix"));
        assert!(out.contains("6 pop_matrix"));
    }

    #[test]
    fn non_matrix_transform_is_dropped() {
        let out = compile_svg(r#"<svg><g transform="translate(5 5)"><path fill="#000" d="M0 0 L1 1 z"/></g></svg>"#);
        assert!(!out.contains("push_matrix"));
    }

    #[test]
    fn unknown_element_still_recurses_into_children() {
        let out = compile_svg(r#"<svg><defs><path fill="#000" d="M0 0 L1 1 z"/></defs></svg>"#);
        // the <defs> itself gets no save/restore pair, but its <path> child does.
        assert_eq!(out.matches("7 begin_path").count(), 1);
    }
}
