// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::{BufRead, Write};

use crate::{read_line, Error, Point};

/// One record of the interpreter -> rasterizer polygon stream: a
/// flat color and its vertices in device coordinates. The wire format
/// carries every polygon regardless of vertex count; the "fewer than two
/// vertices are discarded" rule is the rasterizer's concern, not the
/// stream's.
#[derive(Clone, PartialEq, Debug)]
pub struct Polygon {
    pub color: u32,
    pub vertices: Vec<Point>,
}

/// Reads one polygon record (header line + its vertex lines), or `None` at EOF.
pub fn read_polygon<R: BufRead>(r: &mut R) -> Result<Option<Polygon>, Error> {
    let header = match read_line(r)? {
        Some(h) => h,
        None => return Ok(None),
    };
    if header.trim().is_empty() {
        return read_polygon(r);
    }

    let mut fields = header.split_whitespace();
    let color_str = fields
        .next()
        .ok_or_else(|| Error::MalformedRecord(format!("empty polygon header: {:?}", header)))?;
    let count_str = fields.next().ok_or_else(|| {
        Error::MalformedRecord(format!("polygon header missing vertex count: {:?}", header))
    })?;

    let color = color_str
        .strip_prefix("0x")
        .or_else(|| color_str.strip_prefix("0X"))
        .ok_or_else(|| Error::MalformedRecord(format!("polygon color not 0x-prefixed: {:?}", color_str)))
        .and_then(|hex| u32::from_str_radix(hex, 16).map_err(|_| {
            Error::MalformedRecord(format!("bad polygon color hex: {:?}", color_str))
        }))?;
    let count: usize = count_str.parse()?;

    let mut vertices = Vec::with_capacity(count);
    for _ in 0..count {
        let line = read_line(r)?.ok_or_else(|| {
            Error::MalformedRecord("polygon stream truncated before all vertices were read".to_string())
        })?;
        let mut parts = line.split_whitespace();
        let x: f32 = parts
            .next()
            .ok_or_else(|| Error::MalformedRecord(format!("vertex line missing x: {:?}", line)))?
            .parse()?;
        let y: f32 = parts
            .next()
            .ok_or_else(|| Error::MalformedRecord(format!("vertex line missing y: {:?}", line)))?
            .parse()?;
        vertices.push(Point::new(x, y));
    }

    Ok(Some(Polygon { color, vertices }))
}

/// Writes one polygon record: a `<color> <count>` header then one `<x> <y>` line per vertex.
pub fn write_polygon<W: Write>(w: &mut W, color: u32, vertices: &[Point]) -> std::io::Result<()> {
    writeln!(w, "0x{:06X} {}", color, vertices.len())?;
    for v in vertices {
        writeln!(w, "{} {}", v.x, v.y)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    #[test]
    fn round_trips_a_polygon() {
        let verts = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0), Point::new(10.0, 10.0)];
        let mut buf = Vec::new();
        write_polygon(&mut buf, 0x00ff00, &verts).unwrap();

        let mut reader = BufReader::new(Cursor::new(buf));
        let got = read_polygon(&mut reader).unwrap().unwrap();
        assert_eq!(got.color, 0x00ff00);
        assert_eq!(got.vertices, verts);
        assert!(read_polygon(&mut reader).unwrap().is_none());
    }

    #[test]
    fn eof_between_polygons_is_clean() {
        let mut reader = BufReader::new(Cursor::new(b"".to_vec()));
        assert!(read_polygon(&mut reader).unwrap().is_none());
    }
}
