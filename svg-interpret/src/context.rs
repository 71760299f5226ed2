// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svg_pipeline_types::{Point, RgbColor};

use crate::bezier::flatten_cubic;
use crate::error::Error;
use crate::matrix::{effective_transform, Matrix3};
use crate::style::Style;
use crate::stroke;

/// Number of vertices in the regular polygon approximating a round stroke
/// joint. Kept as a distinct knob from the Bezier sampling rate and not
/// independently exposed on the CLI.
pub const JOINT_SIDES: u32 = 10;

/// The interpreter's drawing state: a style stack, a transform stack,
/// the current path, and the smooth-curve reflection point, as explicit
/// owned sequences rather than process-wide globals.
#[derive(Debug)]
pub struct Context {
    styles: Vec<Style>,
    transforms: Vec<Matrix3>,
    path: Vec<Point>,
    control: Point,
}

impl Default for Context {
    fn default() -> Self {
        Context {
            styles: vec![Style::default()],
            transforms: Vec::new(),
            path: Vec::new(),
            control: Point::zero(),
        }
    }
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    fn style(&self) -> Style {
        *self
            .styles
            .last()
            .expect("style stack always keeps its root frame")
    }

    fn style_mut(&mut self) -> &mut Style {
        self.styles
            .last_mut()
            .expect("style stack always keeps its root frame")
    }

    pub fn save(&mut self) {
        self.styles.push(self.style());
    }

    pub fn restore(&mut self) -> Result<(), Error> {
        if self.styles.len() <= 1 {
            return Err(Error::RestoreUnderflow);
        }
        self.styles.pop();
        Ok(())
    }

    pub fn set_stroke_width(&mut self, w: f32) {
        self.style_mut().stroke_width = w;
    }

    pub fn set_stroke_color(&mut self, c: RgbColor) {
        self.style_mut().stroke_color = c;
    }

    pub fn set_fill_color(&mut self, c: RgbColor) {
        self.style_mut().fill_color = c;
    }

    pub fn push_matrix(&mut self, m: Matrix3) {
        self.transforms.push(m);
    }

    pub fn pop_matrix(&mut self) -> Result<(), Error> {
        self.transforms.pop().map(|_| ()).ok_or(Error::PopMatrixUnderflow)
    }

    pub fn begin_path(&mut self) {
        self.path.clear();
        self.path.push(Point::zero());
        self.control = Point::zero();
    }

    fn current_point(&self) -> Result<Point, Error> {
        self.path.last().copied().ok_or(Error::EmptyPath)
    }

    fn set_current_point(&mut self, p: Point) -> Result<(), Error> {
        let slot = self.path.last_mut().ok_or(Error::EmptyPath)?;
        *slot = p;
        Ok(())
    }

    pub fn move_to(&mut self, p: Point) -> Result<(), Error> {
        self.set_current_point(p)?;
        self.control = p;
        Ok(())
    }

    pub fn move_to_rel(&mut self, d: Point) -> Result<(), Error> {
        let p = self.current_point()?.add(d);
        self.move_to(p)
    }

    fn append_vertex(&mut self, p: Point) -> Result<(), Error> {
        self.current_point()?; // fatal if begin_path never ran
        self.path.push(p);
        self.control = p;
        Ok(())
    }

    pub fn line_to(&mut self, p: Point) -> Result<(), Error> {
        self.append_vertex(p)
    }

    pub fn line_to_rel(&mut self, d: Point) -> Result<(), Error> {
        let p = self.current_point()?.add(d);
        self.append_vertex(p)
    }

    pub fn h_line_to(&mut self, x: f32) -> Result<(), Error> {
        let cur = self.current_point()?;
        self.append_vertex(Point::new(x, cur.y))
    }

    pub fn h_line_to_rel(&mut self, dx: f32) -> Result<(), Error> {
        let cur = self.current_point()?;
        self.append_vertex(Point::new(cur.x + dx, cur.y))
    }

    pub fn v_line_to(&mut self, y: f32) -> Result<(), Error> {
        let cur = self.current_point()?;
        self.append_vertex(Point::new(cur.x, y))
    }

    pub fn v_line_to_rel(&mut self, dy: f32) -> Result<(), Error> {
        let cur = self.current_point()?;
        self.append_vertex(Point::new(cur.x, cur.y + dy))
    }

    fn append_bezier(&mut self, p0: Point, c1: Point, c2: Point, end: Point, samples: u32) {
        for p in flatten_cubic(p0, c1, c2, end, samples) {
            self.path.push(p);
        }
        // reflection of c2 about end.
        self.control = Point::new(end.x + (end.x - c2.x), end.y + (end.y - c2.y));
    }

    pub fn curve_to(&mut self, c1: Point, c2: Point, end: Point, samples: u32) -> Result<(), Error> {
        let p0 = self.current_point()?;
        self.append_bezier(p0, c1, c2, end, samples);
        Ok(())
    }

    pub fn curve_to_rel(&mut self, c1: Point, c2: Point, end: Point, samples: u32) -> Result<(), Error> {
        let p0 = self.current_point()?;
        self.append_bezier(p0, p0.add(c1), p0.add(c2), p0.add(end), samples);
        Ok(())
    }

    pub fn s_curve_to(&mut self, c2: Point, end: Point, samples: u32) -> Result<(), Error> {
        let p0 = self.current_point()?;
        let c1 = self.control;
        self.append_bezier(p0, c1, c2, end, samples);
        Ok(())
    }

    pub fn s_curve_to_rel(&mut self, c2: Point, end: Point, samples: u32) -> Result<(), Error> {
        let p0 = self.current_point()?;
        let c1 = self.control;
        self.append_bezier(p0, c1, p0.add(c2), p0.add(end), samples);
        Ok(())
    }

    pub fn close_path(&mut self) -> Result<(), Error> {
        let first = *self.path.first().ok_or(Error::EmptyPath)?;
        self.path.push(first);
        Ok(())
    }

    /// Applies the accumulated transform to every path vertex in place, then
    /// returns the fill polygon (if any) followed by the stroke polygons (if
    /// any) — fill before stroke, since the stroke is rasterized after the fill.
    /// Does not clear the path.
    pub fn fill_and_stroke(&mut self) -> Vec<(RgbColor, Vec<Point>)> {
        let xform = effective_transform(&self.transforms);
        for v in self.path.iter_mut() {
            *v = xform.apply(*v);
        }

        let style = self.style();
        let mut out = Vec::new();
        if !style.fill_color.is_none() && self.path.len() >= 2 {
            out.push((style.fill_color, self.path.clone()));
        }
        if !style.stroke_color.is_none() && style.stroke_width > 0.0 && self.path.len() >= 2 {
            out.extend(stroke::tessellate(&self.path, style.stroke_width, JOINT_SIDES).into_iter().map(|verts| (style.stroke_color, verts)));
        }
        out
    }
}
