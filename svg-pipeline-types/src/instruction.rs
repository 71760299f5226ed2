// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::{BufRead, Write};

use crate::color::{read_color, write_color};
use crate::{read_floats, read_line, write_floats, Error, Point, RgbColor};

/// One record of the compiler -> interpreter instruction stream.
///
/// A closed tagged union: a single `match` on the opcode dispatches every
/// variant, including the absolute/relative pairs, which share a handler in
/// the interpreter rather than getting separate polymorphism.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Instruction {
    Save,
    Restore,
    StrokeWidth(f32),
    StrokeColor(RgbColor),
    FillColor(RgbColor),
    /// `push_matrix a b c d e f`, matching the SVG `matrix(a,b,c,d,e,f)` convention.
    PushMatrix([f32; 6]),
    PopMatrix,
    BeginPath,
    MoveTo(Point),
    MoveToRel(Point),
    LineTo(Point),
    LineToRel(Point),
    VLineTo(f32),
    VLineToRel(f32),
    HLineTo(f32),
    HLineToRel(f32),
    CurveTo { c1: Point, c2: Point, end: Point },
    CurveToRel { c1: Point, c2: Point, end: Point },
    SCurveTo { c2: Point, end: Point },
    SCurveToRel { c2: Point, end: Point },
    ClosePath,
    FillAndStroke,
}

impl Instruction {
    /// The stable small integer assigned to this instruction kind.
    pub fn opcode(self) -> u32 {
        match self {
            Instruction::Save => 0,
            Instruction::Restore => 1,
            Instruction::StrokeWidth(_) => 2,
            Instruction::StrokeColor(_) => 3,
            Instruction::FillColor(_) => 4,
            Instruction::PushMatrix(_) => 5,
            Instruction::PopMatrix => 6,
            Instruction::BeginPath => 7,
            Instruction::MoveTo(_) => 8,
            Instruction::MoveToRel(_) => 9,
            Instruction::LineTo(_) => 10,
            Instruction::LineToRel(_) => 11,
            Instruction::VLineTo(_) => 12,
            Instruction::VLineToRel(_) => 13,
            Instruction::HLineTo(_) => 14,
            Instruction::HLineToRel(_) => 15,
            Instruction::CurveTo { .. } => 16,
            Instruction::CurveToRel { .. } => 17,
            Instruction::SCurveTo { .. } => 18,
            Instruction::SCurveToRel { .. } => 19,
            Instruction::ClosePath => 20,
            Instruction::FillAndStroke => 21,
        }
    }

    /// The human-readable label the compiler writes after the opcode; the
    /// interpreter never reads this back, it only skips the line.
    pub fn label(self) -> &'static str {
        match self {
            Instruction::Save => "save",
            Instruction::Restore => "restore",
            Instruction::StrokeWidth(_) => "stroke_width",
            Instruction::StrokeColor(_) => "stroke_color",
            Instruction::FillColor(_) => "fill_color",
            Instruction::PushMatrix(_) => "push_matrix",
            Instruction::PopMatrix => "pop_matrix",
            Instruction::BeginPath => "begin_path",
            Instruction::MoveTo(_) => "move_to",
            Instruction::MoveToRel(_) => "move_to_d",
            Instruction::LineTo(_) => "line_to",
            Instruction::LineToRel(_) => "line_to_d",
            Instruction::VLineTo(_) => "v_line_to",
            Instruction::VLineToRel(_) => "v_line_to_d",
            Instruction::HLineTo(_) => "h_line_to",
            Instruction::HLineToRel(_) => "h_line_to_d",
            Instruction::CurveTo { .. } => "curve_to",
            Instruction::CurveToRel { .. } => "curve_to_d",
            Instruction::SCurveTo { .. } => "s_curve_to",
            Instruction::SCurveToRel { .. } => "s_curve_to_d",
            Instruction::ClosePath => "close_path",
            Instruction::FillAndStroke => "fill_and_stroke",
        }
    }
}

/// Reads one instruction record, or `None` at EOF.
pub fn read_instruction<R: BufRead>(r: &mut R) -> Result<Option<Instruction>, Error> {
    let header = match read_line(r)? {
        Some(h) => h,
        None => return Ok(None),
    };
    if header.trim().is_empty() {
        return read_instruction(r);
    }
    let opcode_str = header
        .split_whitespace()
        .next()
        .ok_or_else(|| Error::MalformedRecord(format!("empty instruction header: {:?}", header)))?;
    let opcode: u32 = opcode_str.parse()?;

    let instr = match opcode {
        0 => Instruction::Save,
        1 => Instruction::Restore,
        2 => Instruction::StrokeWidth(read_floats::<1, _>(r)?[0]),
        3 => Instruction::StrokeColor(read_color(r)?),
        4 => Instruction::FillColor(read_color(r)?),
        5 => Instruction::PushMatrix(read_floats::<6, _>(r)?),
        6 => Instruction::PopMatrix,
        7 => Instruction::BeginPath,
        8 => Instruction::MoveTo(point2(read_floats::<2, _>(r)?)),
        9 => Instruction::MoveToRel(point2(read_floats::<2, _>(r)?)),
        10 => Instruction::LineTo(point2(read_floats::<2, _>(r)?)),
        11 => Instruction::LineToRel(point2(read_floats::<2, _>(r)?)),
        12 => Instruction::VLineTo(read_floats::<1, _>(r)?[0]),
        13 => Instruction::VLineToRel(read_floats::<1, _>(r)?[0]),
        14 => Instruction::HLineTo(read_floats::<1, _>(r)?[0]),
        15 => Instruction::HLineToRel(read_floats::<1, _>(r)?[0]),
        16 => {
            let v = read_floats::<6, _>(r)?;
            Instruction::CurveTo {
                c1: Point::new(v[0], v[1]),
                c2: Point::new(v[2], v[3]),
                end: Point::new(v[4], v[5]),
            }
        }
        17 => {
            let v = read_floats::<6, _>(r)?;
            Instruction::CurveToRel {
                c1: Point::new(v[0], v[1]),
                c2: Point::new(v[2], v[3]),
                end: Point::new(v[4], v[5]),
            }
        }
        18 => {
            let v = read_floats::<4, _>(r)?;
            Instruction::SCurveTo {
                c2: Point::new(v[0], v[1]),
                end: Point::new(v[2], v[3]),
            }
        }
        19 => {
            let v = read_floats::<4, _>(r)?;
            Instruction::SCurveToRel {
                c2: Point::new(v[0], v[1]),
                end: Point::new(v[2], v[3]),
            }
        }
        20 => Instruction::ClosePath,
        21 => Instruction::FillAndStroke,
        other => return Err(Error::UnknownOpcode(other)),
    };
    Ok(Some(instr))
}

fn point2(v: [f32; 2]) -> Point {
    Point::new(v[0], v[1])
}

/// Writes one instruction record: `<opcode> <label>` then its payload line, if any.
pub fn write_instruction<W: Write>(w: &mut W, instr: Instruction) -> std::io::Result<()> {
    writeln!(w, "{} {}", instr.opcode(), instr.label())?;
    match instr {
        Instruction::Save
        | Instruction::Restore
        | Instruction::PopMatrix
        | Instruction::BeginPath
        | Instruction::ClosePath
        | Instruction::FillAndStroke => Ok(()),
        Instruction::StrokeWidth(w_) => write_floats(w, &[w_]),
        Instruction::StrokeColor(c) => write_color(w, c),
        Instruction::FillColor(c) => write_color(w, c),
        Instruction::PushMatrix(v) => write_floats(w, &v),
        Instruction::MoveTo(p) | Instruction::MoveToRel(p) | Instruction::LineTo(p) | Instruction::LineToRel(p) => {
            write_floats(w, &[p.x, p.y])
        }
        Instruction::VLineTo(y) | Instruction::VLineToRel(y) => write_floats(w, &[y]),
        Instruction::HLineTo(x) | Instruction::HLineToRel(x) => write_floats(w, &[x]),
        Instruction::CurveTo { c1, c2, end } | Instruction::CurveToRel { c1, c2, end } => {
            write_floats(w, &[c1.x, c1.y, c2.x, c2.y, end.x, end.y])
        }
        Instruction::SCurveTo { c2, end } | Instruction::SCurveToRel { c2, end } => {
            write_floats(w, &[c2.x, c2.y, end.x, end.y])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    #[test]
    fn round_trips_every_instruction_kind() {
        let sample = vec![
            Instruction::Save,
            Instruction::Restore,
            Instruction::StrokeWidth(2.5),
            Instruction::StrokeColor(RgbColor::rgb(0, 0, 0)),
            Instruction::FillColor(RgbColor::NONE),
            Instruction::PushMatrix([1.0, 0.0, 0.0, 1.0, 10.0, 20.0]),
            Instruction::PopMatrix,
            Instruction::BeginPath,
            Instruction::MoveTo(Point::new(1.0, 2.0)),
            Instruction::LineToRel(Point::new(-1.0, 0.5)),
            Instruction::VLineTo(4.0),
            Instruction::HLineToRel(-3.0),
            Instruction::CurveTo {
                c1: Point::new(0.0, 10.0),
                c2: Point::new(10.0, 10.0),
                end: Point::new(10.0, 0.0),
            },
            Instruction::SCurveToRel {
                c2: Point::new(1.0, 1.0),
                end: Point::new(2.0, 2.0),
            },
            Instruction::ClosePath,
            Instruction::FillAndStroke,
        ];

        let mut buf = Vec::new();
        for &i in &sample {
            write_instruction(&mut buf, i).unwrap();
        }

        let mut reader = BufReader::new(Cursor::new(buf));
        for &expected in &sample {
            let got = read_instruction(&mut reader).unwrap().unwrap();
            assert_eq!(got, expected);
        }
        assert!(read_instruction(&mut reader).unwrap().is_none());
    }

    #[test]
    fn unknown_opcode_is_an_error() {
        let mut reader = BufReader::new(Cursor::new(b"999 bogus\n".to_vec()));
        assert!(matches!(
            read_instruction(&mut reader),
            Err(Error::UnknownOpcode(999))
        ));
    }
}
