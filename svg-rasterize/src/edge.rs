// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svg_pipeline_types::Point;

/// One side of a polygon, in the rasterizer's device coordinate space.
///
/// Invariant: `y_start <= y_end`. `winding` is `+1` if the original vertex
/// order went from higher y to lower y, `-1` otherwise — a ray cast
/// rightward crosses an upward edge and a downward edge with opposite
/// contributions. `x_at_y_start` doubles as the edge's "current x" once the
/// active-edge scan starts advancing it by `dx_dy` per scanline.
#[derive(Clone, Copy, Debug)]
pub struct Edge {
    pub y_start: f32,
    pub y_end: f32,
    pub x_at_y_start: f32,
    pub dx_dy: f32,
    pub winding: i32,
}

/// Builds one edge per consecutive vertex pair, including the wrap-around
/// from the last vertex to the first. Degenerate horizontal edges
/// (`y_a == y_b`) are still produced here and only discarded once the
/// active-edge scan advances past them — callers that want them
/// pre-filtered use [`Edge`]'s `y_end > y_start` invariant check.
pub fn build_edges(vertices: &[Point]) -> Vec<Edge> {
    let n = vertices.len();
    let mut edges = Vec::with_capacity(n);
    for i in 0..n {
        let a = vertices[i];
        let b = vertices[(i + 1) % n];

        if a.y == b.y {
            edges.push(Edge {
                y_start: a.y,
                y_end: a.y,
                x_at_y_start: a.x,
                dx_dy: 0.0,
                winding: 1,
            });
            continue;
        }

        let winding = if a.y > b.y { 1 } else { -1 };
        let (y_start, y_end, x_at_y_start) = if a.y < b.y { (a.y, b.y, a.x) } else { (b.y, a.y, b.x) };
        let dx_dy = (b.x - a.x) / (b.y - a.y);

        edges.push(Edge {
            y_start,
            y_end,
            x_at_y_start,
            dx_dy,
            winding,
        });
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convex_square_produces_four_edges_with_opposite_windings() {
        let verts = vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
            Point::new(0.0, 10.0),
        ];
        let edges = build_edges(&verts);
        assert_eq!(edges.len(), 4);
        let non_degenerate: Vec<_> = edges.iter().filter(|e| e.y_end > e.y_start).collect();
        assert_eq!(non_degenerate.len(), 2);
        assert!(non_degenerate.iter().any(|e| e.winding == 1));
        assert!(non_degenerate.iter().any(|e| e.winding == -1));
    }

    #[test]
    fn y_start_is_always_the_smaller_y() {
        let verts = vec![Point::new(0.0, 10.0), Point::new(5.0, 0.0), Point::new(10.0, 10.0)];
        let edges = build_edges(&verts);
        for e in &edges {
            assert!(e.y_start <= e.y_end);
        }
    }
}
