// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svg_pipeline_types::RgbColor;

/// A style frame. `push`/`save` duplicates the top; `pop`/`restore` discards it.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Style {
    pub fill_color: RgbColor,
    pub stroke_color: RgbColor,
    pub stroke_width: f32,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            fill_color: RgbColor::rgb(0, 0, 0),
            stroke_color: RgbColor::NONE,
            stroke_width: 1.0,
        }
    }
}
