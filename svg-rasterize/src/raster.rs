// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use svg_pipeline_types::Point;

use crate::edge::{build_edges, Edge};

/// Runs the scanline active-edge algorithm over one polygon's vertices and
/// calls `plot(x, y, coverage)` for every (pixel column, scanline) pair that
/// falls inside a non-zero-winding span.
///
/// `plot` receives `coverage` already clamped to `[0, 1]` — the 1-D overlap
/// of the pixel's `[x-0.5, x+0.5]` box with the filled span. Callers are
/// responsible for compositing.
pub fn scan_fill<F: FnMut(i32, i32, f32)>(vertices: &[Point], mut plot: F) {
    let mut edges = build_edges(vertices);
    // Degenerate horizontal edges never cross a scanline; drop them up
    // front rather than carrying them through a no-op active-list cycle.
    edges.retain(|e| e.y_end > e.y_start);
    if edges.is_empty() {
        return;
    }
    edges.sort_by(|a, b| a.y_start.partial_cmp(&b.y_start).unwrap());

    let mut y = edges[0].y_start.ceil() as i32 - 1;
    let mut active: Vec<Edge> = Vec::new();
    let mut next = 0usize;

    loop {
        if active.is_empty() && next >= edges.len() {
            break;
        }

        active.sort_by(|a, b| a.x_at_y_start.partial_cmp(&b.x_at_y_start).unwrap());

        let mut winding = 0i32;
        for i in 0..active.len() {
            if winding != 0 {
                fill_span(active[i - 1].x_at_y_start, active[i].x_at_y_start, y, &mut plot);
            }
            winding += active[i].winding;
        }

        y += 1;
        let y_f = y as f32;
        active.retain(|e| e.y_end > y_f);
        for e in active.iter_mut() {
            e.x_at_y_start += e.dx_dy;
        }
        while next < edges.len() && edges[next].y_start <= y_f {
            let mut e = edges[next];
            e.x_at_y_start += e.dx_dy * (y_f - e.y_start);
            next += 1;
            if e.y_end > y_f {
                active.push(e);
            }
        }
    }
}

/// Box-filter horizontal antialiasing: for a span
/// `[x_l, x_r]` on scanline `y`, each touched pixel column gets the overlap
/// of its `[x-0.5, x+0.5]` box with the span.
fn fill_span<F: FnMut(i32, i32, f32)>(x_l: f32, x_r: f32, y: i32, plot: &mut F) {
    if x_r <= x_l {
        return;
    }
    let xi_start = (x_l - 0.5).ceil() as i32;
    let xi_end = (x_r + 0.5).ceil() as i32;
    for xi in xi_start..xi_end {
        let pixel_l = xi as f32 - 0.5;
        let pixel_r = xi as f32 + 0.5;
        let overlap = (pixel_r.min(x_r) - pixel_l.max(x_l)).clamp(0.0, 1.0);
        if overlap > 0.0 {
            plot(xi, y, overlap);
        }
    }
}
