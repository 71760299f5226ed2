// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

/// Splits a `0xRRGGBB` polygon color into straight RGB floats in
/// `[0, 1]`, the form [`crate::framebuffer::Framebuffer::put_pixel`] expects.
pub fn hex_to_straight_rgb(hex: u32) -> [f32; 3] {
    let rgb = rgb::RGB8 {
        r: (hex >> 16) as u8,
        g: (hex >> 8) as u8,
        b: hex as u8,
    };
    [rgb.r as f32 / 255.0, rgb.g as f32 / 255.0, rgb.b as f32 / 255.0]
}
