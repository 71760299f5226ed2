// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Shared types for the `svg-compile` -> `svg-interpret` -> `svg-rasterize` pipeline.
//!
//! This crate owns the two text wire formats the pipeline passes between
//! process boundaries (the instruction stream and the polygon stream) plus
//! the small parsing helpers (colors, line records) every stage needs so
//! none of the three binaries reimplement line-record parsing.

#![forbid(unsafe_code)]
#![warn(missing_debug_implementations)]

use std::fmt;
use std::io::{self, BufRead, Write};

mod color;
mod instruction;
mod point;
mod polygon;

pub use color::{parse_svg_color, RgbColor};
pub use instruction::Instruction;
pub use point::Point;
pub use polygon::{read_polygon, write_polygon, Polygon};

/// Every error a pipeline stage can hit while reading or writing a wire record.
#[derive(Debug)]
pub enum Error {
    /// Underlying stream I/O failure.
    Io(io::Error),
    /// A payload line didn't contain the expected number of fields.
    MalformedRecord(String),
    /// A number on a payload line wasn't a valid float.
    ParseFloat(std::num::ParseFloatError),
    /// A number on a payload line wasn't a valid integer.
    ParseInt(std::num::ParseIntError),
    /// The instruction stream's opcode field wasn't one this version knows.
    UnknownOpcode(u32),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O error: {}", e),
            Error::MalformedRecord(s) => write!(f, "malformed record: {}", s),
            Error::ParseFloat(e) => write!(f, "invalid number: {}", e),
            Error::ParseInt(e) => write!(f, "invalid integer: {}", e),
            Error::UnknownOpcode(n) => write!(f, "unknown opcode {}", n),
        }
    }
}

impl std::error::Error for Error {}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<std::num::ParseFloatError> for Error {
    fn from(e: std::num::ParseFloatError) -> Self {
        Error::ParseFloat(e)
    }
}

impl From<std::num::ParseIntError> for Error {
    fn from(e: std::num::ParseIntError) -> Self {
        Error::ParseInt(e)
    }
}

/// Reads one payload line and splits it into exactly `N` whitespace-separated floats.
pub(crate) fn read_floats<const N: usize, R: BufRead>(r: &mut R) -> Result<[f32; N], Error> {
    let mut line = String::new();
    r.read_line(&mut line)?;
    let mut out = [0f32; N];
    let mut fields = line.split_whitespace();
    for slot in out.iter_mut() {
        let field = fields
            .next()
            .ok_or_else(|| Error::MalformedRecord(format!("expected {} floats, line: {:?}", N, line)))?;
        *slot = field.parse()?;
    }
    Ok(out)
}

/// Writes a single payload line of space-separated floats.
pub(crate) fn write_floats<W: Write>(w: &mut W, values: &[f32]) -> io::Result<()> {
    let mut line = String::new();
    for (i, v) in values.iter().enumerate() {
        if i > 0 {
            line.push(' ');
        }
        line.push_str(&v.to_string());
    }
    line.push('\n');
    w.write_all(line.as_bytes())
}

/// Reads one line and returns it with the trailing newline stripped, or `None` at EOF.
pub(crate) fn read_line<R: BufRead>(r: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    let n = r.read_line(&mut line)?;
    if n == 0 {
        return Ok(None);
    }
    while line.ends_with('\n') || line.ends_with('\r') {
        line.pop();
    }
    Ok(Some(line))
}
