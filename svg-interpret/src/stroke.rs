// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::f32::consts::PI;

use svg_pipeline_types::Point;

/// Tessellates a (already transform-applied) polyline into the stroke
/// polygons: one quad per segment plus one joint-gon per
/// interior vertex. Returns vertex lists only — the caller attaches the
/// stroke color, since every polygon here shares it.
pub fn tessellate(path: &[Point], stroke_width: f32, joint_sides: u32) -> Vec<Vec<Point>> {
    let r = stroke_width / 2.0;
    let mut out = Vec::new();

    for pair in path.windows(2) {
        if let Some(quad) = segment_quad(pair[0], pair[1], r) {
            out.push(quad);
        }
    }

    for v in &path[1..path.len().saturating_sub(1)] {
        out.push(joint_polygon(*v, r, joint_sides));
    }

    out
}

/// The four-vertex quad for one stroke segment: `a + n*r, a - n*r, b - n*r,
/// b + n*r`, where `n` is `(b - a)` rotated 90 degrees CCW and normalized.
/// `None` for zero-length segments.
fn segment_quad(a: Point, b: Point, r: f32) -> Option<Vec<Point>> {
    let d = b.sub(a);
    let len = d.length();
    if len == 0.0 {
        return None;
    }
    let n = Point::new(-d.y / len, d.x / len).scale(r);
    Some(vec![a.add(n), a.sub(n), b.sub(n), b.add(n)])
}

/// A regular `sides`-gon centered at `v` with radius `r`, approximating a
/// round line join.
fn joint_polygon(v: Point, r: f32, sides: u32) -> Vec<Point> {
    (0..sides)
        .map(|i| {
            let theta = (2.0 * PI / sides as f32) * i as f32;
            Point::new(v.x + r * theta.cos(), v.y + r * theta.sin())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_length_segment_is_skipped() {
        let path = vec![Point::new(1.0, 1.0), Point::new(1.0, 1.0), Point::new(5.0, 1.0)];
        let quads = tessellate(&path, 2.0, 10);
        // one zero-length segment skipped, one real segment kept, one interior joint.
        let segment_quads = quads.iter().filter(|q| q.len() == 4).count();
        assert_eq!(segment_quads, 1);
    }

    #[test]
    fn straight_segment_quad_has_perpendicular_offset() {
        let path = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
        let quads = tessellate(&path, 2.0, 10);
        assert_eq!(quads.len(), 1);
        let q = &quads[0];
        assert_eq!(q.len(), 4);
        assert_eq!(q[0], Point::new(0.0, 1.0));
        assert_eq!(q[1], Point::new(0.0, -1.0));
        assert_eq!(q[2], Point::new(10.0, -1.0));
        assert_eq!(q[3], Point::new(10.0, 1.0));
    }

    #[test]
    fn interior_vertices_get_a_joint_gon_endpoints_do_not() {
        let path = vec![
            Point::new(0.0, 0.0),
            Point::new(5.0, 0.0),
            Point::new(5.0, 5.0),
        ];
        let quads = tessellate(&path, 2.0, 10);
        let joints = quads.iter().filter(|q| q.len() == 10).count();
        assert_eq!(joints, 1);
    }
}
