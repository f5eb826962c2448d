// File: crates/forecast-render-skia/src/spline.rs
// Summary: Cubic control points for a tensioned line through category points.
// Notes:
// - Same construction browser line charts use for `tension`: each point's
//   handles run parallel to the chord between its neighbours, split in
//   proportion to the neighbouring segment lengths.

use crate::geometry::{clamp, RectF};

pub type Pt = (f32, f32);

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Handles {
    pub prev: Pt,
    pub next: Pt,
}

fn dist(a: Pt, b: Pt) -> f32 {
    ((b.0 - a.0).powi(2) + (b.1 - a.1).powi(2)).sqrt()
}

pub fn handles(prev: Pt, cur: Pt, next: Pt, tension: f32) -> Handles {
    let d01 = dist(prev, cur);
    let d12 = dist(cur, next);
    let mut s01 = d01 / (d01 + d12);
    let mut s12 = d12 / (d01 + d12);
    if !s01.is_finite() { s01 = 0.0; }
    if !s12.is_finite() { s12 = 0.0; }
    let fa = tension * s01;
    let fb = tension * s12;
    let (dx, dy) = (next.0 - prev.0, next.1 - prev.1);
    Handles {
        prev: (cur.0 - fa * dx, cur.1 - fa * dy),
        next: (cur.0 + fb * dx, cur.1 + fb * dy),
    }
}

/// Handles for every point of a contiguous run; endpoints use themselves as
/// the missing neighbour. Handles are kept inside `area`.
pub fn run_handles(points: &[Pt], tension: f32, area: RectF) -> Vec<Handles> {
    let keep = |p: Pt| (clamp(p.0, area.left, area.right), clamp(p.1, area.top, area.bottom));
    (0..points.len())
        .map(|i| {
            let cur = points[i];
            let prev = if i == 0 { cur } else { points[i - 1] };
            let next = points.get(i + 1).copied().unwrap_or(cur);
            let h = handles(prev, cur, next, tension);
            Handles { prev: keep(h.prev), next: keep(h.next) }
        })
        .collect()
}
