use hm_core::{Curve, Point2f};

/// Index of the curve vertex closest to `query`.
///
/// On exact distance ties the lowest index wins.
pub fn nearest_vertex(curve: &Curve, query: Point2f) -> usize {
    let mut best = 0usize;
    let mut best_d2 = f32::INFINITY;

    for (i, &p) in curve.points().iter().enumerate() {
        let d2 = p.distance_sq(query);
        if d2 < best_d2 {
            best_d2 = d2;
            best = i;
        }
    }

    best
}

/// Nearest-vertex index for every query point, sorted ascending.
///
/// Queries are matched independently. Duplicates are retained: two query
/// points snapping to the same vertex contribute two entries.
pub fn nearest_vertices(curve: &Curve, queries: &[Point2f]) -> Vec<usize> {
    let mut out: Vec<usize> = queries.iter().map(|&q| nearest_vertex(curve, q)).collect();
    out.sort_unstable();
    out
}
