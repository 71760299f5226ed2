// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::io::{BufRead, Write};

use crate::{read_line, Error};

/// An unsigned 24-bit `0xRRGGBB` color, or the sentinel meaning "do not paint".
///
/// The sentinel is encoded as `-1` on the wire, matching the
/// interpreter's `Style.fill_color` / `Style.stroke_color` fields.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct RgbColor(i32);

impl RgbColor {
    pub const NONE: RgbColor = RgbColor(-1);

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        RgbColor(((r as i32) << 16) | ((g as i32) << 8) | b as i32)
    }

    pub fn from_hex24(v: u32) -> Self {
        RgbColor((v & 0x00FF_FFFF) as i32)
    }

    pub fn is_none(self) -> bool {
        self.0 < 0
    }

    /// The 24-bit value, or `None` if this is the NONE sentinel.
    pub fn hex24(self) -> Option<u32> {
        if self.is_none() {
            None
        } else {
            Some(self.0 as u32)
        }
    }
}

/// Parses an SVG presentation-attribute color string.
///
/// `#RGB` expands by digit doubling; `#RRGGBB` is taken verbatim; hex digits
/// are case-insensitive. Any other string (including named colors, which
/// this pipeline does not support) silently degrades to [`RgbColor::NONE`]
/// unknown color strings silently degrade to NONE.
pub fn parse_svg_color(s: &str) -> RgbColor {
    let s = s.trim();
    let Some(hex) = s.strip_prefix('#') else {
        return RgbColor::NONE;
    };

    let expanded = match hex.len() {
        3 => {
            let mut out = String::with_capacity(6);
            for c in hex.chars() {
                out.push(c);
                out.push(c);
            }
            out
        }
        6 => hex.to_string(),
        _ => return RgbColor::NONE,
    };

    match u32::from_str_radix(&expanded, 16) {
        Ok(v) => RgbColor::from_hex24(v),
        Err(_) => RgbColor::NONE,
    }
}

/// Reads a color payload line: either `-1` (NONE) or a `0x`-prefixed 24-bit hex int.
pub(crate) fn read_color<R: BufRead>(r: &mut R) -> Result<RgbColor, Error> {
    let line = read_line(r)?
        .ok_or_else(|| Error::MalformedRecord("expected a color payload, got EOF".to_string()))?;
    let token = line
        .split_whitespace()
        .next()
        .ok_or_else(|| Error::MalformedRecord(format!("empty color payload: {:?}", line)))?;

    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        let v = u32::from_str_radix(hex, 16)
            .map_err(|_| Error::MalformedRecord(format!("bad hex color: {:?}", token)))?;
        Ok(RgbColor::from_hex24(v))
    } else {
        let v: i32 = token.parse()?;
        if v < 0 {
            Ok(RgbColor::NONE)
        } else {
            Ok(RgbColor::from_hex24(v as u32))
        }
    }
}

pub(crate) fn write_color<W: Write>(w: &mut W, c: RgbColor) -> std::io::Result<()> {
    match c.hex24() {
        Some(v) => writeln!(w, "0x{:06X}", v),
        None => writeln!(w, "-1"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_hex_expands_by_digit_doubling() {
        assert_eq!(parse_svg_color("#abc"), RgbColor::rgb(0xaa, 0xbb, 0xcc));
        assert_eq!(parse_svg_color("#ABC"), RgbColor::rgb(0xaa, 0xbb, 0xcc));
    }

    #[test]
    fn long_hex_is_taken_verbatim() {
        assert_eq!(parse_svg_color("#ff0000"), RgbColor::rgb(0xff, 0x00, 0x00));
    }

    #[test]
    fn unknown_strings_degrade_to_none() {
        assert_eq!(parse_svg_color("red"), RgbColor::NONE);
        assert_eq!(parse_svg_color("none"), RgbColor::NONE);
        assert_eq!(parse_svg_color(""), RgbColor::NONE);
    }

    #[test]
    fn color_round_trips_for_every_rgb24_value() {
        // a sample across the space, not an exhaustive 16M-iteration grid.
        for &(r, g, b) in &[(0, 0, 0), (255, 255, 255), (18, 52, 86), (1, 2, 3)] {
            let hex = format!("#{:02x}{:02x}{:02x}", r, g, b);
            assert_eq!(parse_svg_color(&hex), RgbColor::rgb(r, g, b));
        }
    }
}
