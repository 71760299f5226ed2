// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svg_pipeline_types::{Instruction, Point};
use svgtypes::{PathParser, PathSegment};

use crate::error::Error;

/// Compiles a `d` attribute's path data into drawing instructions.
///
/// `svgtypes::PathParser` already implements SVG's implicit-repetition rule
/// (a command letter followed by further coordinate tuples repeats the same
/// command), so each [`PathSegment`] it yields maps to exactly one
/// instruction here — no extra expansion needed.
pub fn compile_path_data(d: &str) -> Result<Vec<Instruction>, Error> {
    let mut out = Vec::new();
    for segment in PathParser::from(d) {
        let segment = segment.map_err(Error::PathData)?;
        out.push(compile_segment(segment)?);
    }
    Ok(out)
}

fn compile_segment(segment: PathSegment) -> Result<Instruction, Error> {
    let instr = match segment {
        PathSegment::MoveTo { abs, x, y } => {
            let p = Point::new(x as f32, y as f32);
            if abs {
                Instruction::MoveTo(p)
            } else {
                Instruction::MoveToRel(p)
            }
        }
        PathSegment::LineTo { abs, x, y } => {
            let p = Point::new(x as f32, y as f32);
            if abs {
                Instruction::LineTo(p)
            } else {
                Instruction::LineToRel(p)
            }
        }
        PathSegment::HorizontalLineTo { abs, x } => {
            if abs {
                Instruction::HLineTo(x as f32)
            } else {
                Instruction::HLineToRel(x as f32)
            }
        }
        PathSegment::VerticalLineTo { abs, y } => {
            if abs {
                Instruction::VLineTo(y as f32)
            } else {
                Instruction::VLineToRel(y as f32)
            }
        }
        PathSegment::CurveTo {
            abs,
            x1,
            y1,
            x2,
            y2,
            x,
            y,
        } => {
            let c1 = Point::new(x1 as f32, y1 as f32);
            let c2 = Point::new(x2 as f32, y2 as f32);
            let end = Point::new(x as f32, y as f32);
            if abs {
                Instruction::CurveTo { c1, c2, end }
            } else {
                Instruction::CurveToRel { c1, c2, end }
            }
        }
        PathSegment::SmoothCurveTo { abs, x2, y2, x, y } => {
            let c2 = Point::new(x2 as f32, y2 as f32);
            let end = Point::new(x as f32, y as f32);
            if abs {
                Instruction::SCurveTo { c2, end }
            } else {
                Instruction::SCurveToRel { c2, end }
            }
        }
        PathSegment::ClosePath { .. } => Instruction::ClosePath,
        PathSegment::Quadratic { .. } | PathSegment::SmoothQuadratic { .. } => {
            return Err(Error::UnsupportedPathCommand('Q'))
        }
        PathSegment::EllipticalArc { .. } => return Err(Error::UnsupportedPathCommand('A')),
    };
    Ok(instr)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn implicit_repetition_expands_to_one_instruction_per_tuple() {
        let instrs = compile_path_data("M0 0 L10 0 10 10 0 10 z").unwrap();
        // 1 move_to + 3 line_to (implicit repeat of the L command) + 1 close_path
        assert_eq!(instrs.len(), 5);
    }

    #[test]
    fn rejects_arcs() {
        let err = compile_path_data("M0 0 A5 5 0 0 1 10 10").unwrap_err();
        assert!(matches!(err, Error::UnsupportedPathCommand('A')));
    }
}
