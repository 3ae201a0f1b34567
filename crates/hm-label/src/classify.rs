use hm_core::{Curve, Point2f};
use hm_match::nearest_vertices;

use crate::arc::{Arc, ArcKind, LabelColor, Surface, arc_length};

/// Extract one color's labeled arcs from a closed perimeter.
///
/// Color points are snapped to perimeter vertices and walked pairwise into
/// half-open candidate spans; the final span wraps from the last color index
/// back to the first, closing the loop. A span is kept only if it contains at
/// least one snapped boundary-marker index; unmarked spans are color points
/// that do not delimit an actual labeled extent and are discarded. Adjacent
/// kept spans share an endpoint by construction and are coalesced into
/// maximal arcs, wrapping across index 0 where needed.
///
/// An empty `color_points` set (annotation absent for this unit) yields an
/// empty result.
pub fn extract_color_arcs(
    perimeter: &Curve,
    surface: Surface,
    color: LabelColor,
    color_points: &[Point2f],
    markers: &[Point2f],
) -> Vec<Arc> {
    let n = perimeter.points().len();
    if color_points.is_empty() {
        return Vec::new();
    }

    let color_idx = nearest_vertices(perimeter, color_points);
    let marker_idx = nearest_vertices(perimeter, markers);

    let m = color_idx.len();
    let mut kept: Vec<(usize, usize)> = Vec::with_capacity(m);
    for t in 0..m - 1 {
        let start = color_idx[t];
        let len = color_idx[t + 1] - color_idx[t];
        if len > 0 && span_has_marker(start, len, n, &marker_idx) {
            kept.push((start, len));
        }
    }

    // Wraparound span from the last color index back through 0 to the first.
    // When only one distinct index exists it covers the whole perimeter.
    let wrap_start = color_idx[m - 1];
    let wrap_len = color_idx[0] + n - color_idx[m - 1];
    if span_has_marker(wrap_start, wrap_len, n, &marker_idx) {
        kept.push((wrap_start, wrap_len));
    }

    coalesce(kept, n, surface, ArcKind::from(color))
}

fn span_has_marker(start: usize, len: usize, n: usize, marker_idx: &[usize]) -> bool {
    marker_idx.iter().any(|&m| (m + n - start) % n < len)
}

/// Merge adjacent spans into maximal arcs and stamp them with per-color
/// sequence numbers. Spans arrive in perimeter-walk order; the last span may
/// rejoin the first through index 0.
fn coalesce(spans: Vec<(usize, usize)>, n: usize, surface: Surface, kind: ArcKind) -> Vec<Arc> {
    let mut merged: Vec<(usize, usize)> = Vec::with_capacity(spans.len());
    for (start, len) in spans {
        match merged.last_mut() {
            Some((s, l)) if (*s + *l) % n == start && *l < n => *l += len,
            _ => merged.push((start, len)),
        }
    }

    if merged.len() > 1 {
        let (first_start, first_len) = merged[0];
        let (last_start, last_len) = merged[merged.len() - 1];
        if (last_start + last_len) % n == first_start {
            merged[0] = (last_start, last_len + first_len);
            merged.pop();
        }
    }

    merged
        .into_iter()
        .enumerate()
        .map(|(i, (start, len))| Arc {
            surface,
            kind,
            seq: i + 1,
            start,
            len: len.min(n),
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IndexClass {
    Both,
    RedOnly,
    GreenOnly,
}

fn index_class(red: bool, green: bool) -> Option<IndexClass> {
    match (red, green) {
        (true, true) => Some(IndexClass::Both),
        (true, false) => Some(IndexClass::RedOnly),
        (false, true) => Some(IndexClass::GreenOnly),
        (false, false) => None,
    }
}

fn membership(n: usize, arcs: &[Arc]) -> Vec<bool> {
    let mut mask = vec![false; n];
    for arc in arcs {
        for k in 0..arc.len.min(n) {
            mask[(arc.start + k) % n] = true;
        }
    }
    mask
}

/// Re-partition a perimeter into double- and single-labeled runs.
///
/// Every vertex index is classified against the red and green arc sets:
/// double where both colors are present, single where exactly one is,
/// nothing where neither. Maximal same-class runs become output arcs in
/// perimeter order with per-kind sequence numbers starting at 1. A red-only
/// run meeting a green-only run yields two single arcs, not one. The scan is
/// linear over `0..n`, so a labeled region crossing index 0 yields one run
/// ending at `n` and one starting at 0.
pub fn classify_runs(
    perimeter: &Curve,
    surface: Surface,
    red_arcs: &[Arc],
    green_arcs: &[Arc],
) -> Vec<Arc> {
    let n = perimeter.points().len();
    let in_red = membership(n, red_arcs);
    let in_green = membership(n, green_arcs);

    let mut runs = Vec::new();
    let mut double_seq = 0usize;
    let mut single_seq = 0usize;

    let mut i = 0usize;
    while i < n {
        let Some(class) = index_class(in_red[i], in_green[i]) else {
            i += 1;
            continue;
        };

        let start = i;
        while i < n && index_class(in_red[i], in_green[i]) == Some(class) {
            i += 1;
        }

        let (kind, seq) = if class == IndexClass::Both {
            double_seq += 1;
            (ArcKind::Double, double_seq)
        } else {
            single_seq += 1;
            (ArcKind::Single, single_seq)
        };

        runs.push(Arc {
            surface,
            kind,
            seq,
            start,
            len: i - start,
        });
    }

    runs
}

/// Summed double- and single-labeled lengths of classified runs.
pub fn labeled_lengths(perimeter: &Curve, runs: &[Arc]) -> (f32, f32) {
    let mut double_len = 0.0f32;
    let mut single_len = 0.0f32;
    for run in runs {
        match run.kind {
            ArcKind::Double => double_len += arc_length(perimeter, run),
            ArcKind::Single => single_len += arc_length(perimeter, run),
            _ => {}
        }
    }
    (double_len, single_len)
}

/// Complete a run sequence into a full perimeter partition by filling the
/// gaps with [`ArcKind::Unlabeled`] arcs.
///
/// `runs` must be non-wrapping and ordered by start index, as produced by
/// [`classify_runs`].
pub fn with_unlabeled_gaps(n: usize, surface: Surface, runs: &[Arc]) -> Vec<Arc> {
    let mut out = Vec::with_capacity(2 * runs.len() + 1);
    let mut unlabeled_seq = 0usize;
    let mut cursor = 0usize;

    for run in runs {
        if run.start > cursor {
            unlabeled_seq += 1;
            out.push(Arc {
                surface,
                kind: ArcKind::Unlabeled,
                seq: unlabeled_seq,
                start: cursor,
                len: run.start - cursor,
            });
        }
        out.push(*run);
        cursor = run.start + run.len;
    }

    if cursor < n {
        unlabeled_seq += 1;
        out.push(Arc {
            surface,
            kind: ArcKind::Unlabeled,
            seq: unlabeled_seq,
            start: cursor,
            len: n - cursor,
        });
    }

    out
}

#[cfg(test)]
mod tests {
    use hm_core::{Curve, Point2f};

    use crate::arc::{Arc, ArcKind, LabelColor, Surface, arc_length};

    use super::{classify_runs, extract_color_arcs, labeled_lengths, with_unlabeled_gaps};

    const PS: Surface = Surface::Periosteal;

    fn ring(n: usize) -> Curve {
        let pts = (0..n)
            .map(|i| {
                let a = core::f32::consts::TAU * i as f32 / n as f32;
                Point2f::new(50.0 * a.cos(), 50.0 * a.sin())
            })
            .collect();
        Curve::closed(pts).expect("valid ring")
    }

    fn at(curve: &Curve, indices: &[usize]) -> Vec<Point2f> {
        indices.iter().map(|&i| curve.point(i)).collect()
    }

    fn red_arc(start: usize, len: usize, seq: usize) -> Arc {
        Arc {
            surface: PS,
            kind: ArcKind::Red,
            seq,
            start,
            len,
        }
    }

    fn green_arc(start: usize, len: usize, seq: usize) -> Arc {
        Arc {
            surface: PS,
            kind: ArcKind::Green,
            seq,
            start,
            len,
        }
    }

    #[test]
    fn marker_anchored_spans_merge_into_one_arc() {
        // Scenario: color points at vertices {2, 5, 9}, markers at {3, 8}.
        // Spans [2,5) and [5,9) both contain a marker and merge; the
        // wraparound span [9,2) contains none and is discarded.
        let ring = ring(12);
        let arcs = extract_color_arcs(
            &ring,
            PS,
            LabelColor::Red,
            &at(&ring, &[2, 5, 9]),
            &at(&ring, &[3, 8]),
        );

        assert_eq!(arcs, vec![red_arc(2, 7, 1)]);
        assert_eq!(arcs[0].end(12), 9);
    }

    #[test]
    fn unmarked_spans_are_discarded() {
        let ring = ring(12);
        let arcs = extract_color_arcs(
            &ring,
            PS,
            LabelColor::Red,
            &at(&ring, &[2, 5, 9]),
            &at(&ring, &[3]),
        );

        assert_eq!(arcs, vec![red_arc(2, 3, 1)]);
    }

    #[test]
    fn no_markers_means_no_arcs() {
        let ring = ring(12);
        let arcs = extract_color_arcs(&ring, PS, LabelColor::Green, &at(&ring, &[2, 5, 9]), &[]);
        assert!(arcs.is_empty());
    }

    #[test]
    fn absent_annotation_yields_no_arcs() {
        let ring = ring(12);
        let arcs = extract_color_arcs(&ring, PS, LabelColor::Green, &[], &at(&ring, &[3]));
        assert!(arcs.is_empty());
    }

    #[test]
    fn wraparound_span_is_kept_when_marked() {
        let ring = ring(12);
        let arcs = extract_color_arcs(
            &ring,
            PS,
            LabelColor::Red,
            &at(&ring, &[2, 5, 9]),
            &at(&ring, &[10]),
        );

        assert_eq!(arcs, vec![red_arc(9, 5, 1)]);
        assert_eq!(arcs[0].end(12), 2);
    }

    #[test]
    fn coalescing_crosses_index_zero() {
        // [2,5) and the wraparound [9,2) survive; they meet at vertex 2 and
        // must come back as one arc covering [9,5).
        let ring = ring(12);
        let arcs = extract_color_arcs(
            &ring,
            PS,
            LabelColor::Red,
            &at(&ring, &[2, 5, 9]),
            &at(&ring, &[3, 10]),
        );

        assert_eq!(arcs, vec![red_arc(9, 8, 1)]);
    }

    #[test]
    fn fully_marked_perimeter_yields_one_full_arc() {
        let ring = ring(12);
        let arcs = extract_color_arcs(
            &ring,
            PS,
            LabelColor::Red,
            &at(&ring, &[2, 5, 9]),
            &at(&ring, &[3, 6, 10]),
        );

        assert_eq!(arcs, vec![red_arc(2, 12, 1)]);
    }

    #[test]
    fn single_color_point_spans_whole_perimeter() {
        let ring = ring(12);
        let arcs = extract_color_arcs(
            &ring,
            PS,
            LabelColor::Red,
            &at(&ring, &[4]),
            &at(&ring, &[7]),
        );

        assert_eq!(arcs, vec![red_arc(4, 12, 1)]);
    }

    #[test]
    fn disjoint_marked_spans_stay_separate_arcs() {
        let ring = ring(16);
        let arcs = extract_color_arcs(
            &ring,
            PS,
            LabelColor::Green,
            &at(&ring, &[1, 4, 8, 12]),
            &at(&ring, &[2, 9]),
        );

        assert_eq!(
            arcs,
            vec![
                Arc {
                    surface: PS,
                    kind: ArcKind::Green,
                    seq: 1,
                    start: 1,
                    len: 3,
                },
                Arc {
                    surface: PS,
                    kind: ArcKind::Green,
                    seq: 2,
                    start: 8,
                    len: 4,
                },
            ]
        );
    }

    #[test]
    fn overlapping_color_sets_classify_single_double_single() {
        // Red covers {0..3}, green covers {2..5}: single [0,2), double [2,4),
        // single [4,6), nothing beyond.
        let ring = ring(12);
        let runs = classify_runs(&ring, PS, &[red_arc(0, 4, 1)], &[green_arc(2, 4, 1)]);

        assert_eq!(
            runs,
            vec![
                Arc {
                    surface: PS,
                    kind: ArcKind::Single,
                    seq: 1,
                    start: 0,
                    len: 2,
                },
                Arc {
                    surface: PS,
                    kind: ArcKind::Double,
                    seq: 1,
                    start: 2,
                    len: 2,
                },
                Arc {
                    surface: PS,
                    kind: ArcKind::Single,
                    seq: 2,
                    start: 4,
                    len: 2,
                },
            ]
        );
    }

    #[test]
    fn one_color_absent_yields_only_single_runs() {
        let ring = ring(12);
        let runs = classify_runs(&ring, PS, &[red_arc(3, 5, 1)], &[]);

        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].kind, ArcKind::Single);
        assert_eq!((runs[0].start, runs[0].len), (3, 5));

        let (double_len, single_len) = labeled_lengths(&ring, &runs);
        assert_eq!(double_len, 0.0);
        assert!((single_len - arc_length(&ring, &red_arc(3, 5, 1))).abs() < 1e-5);
    }

    #[test]
    fn touching_runs_of_different_colors_stay_separate() {
        let ring = ring(12);
        let runs = classify_runs(&ring, PS, &[red_arc(0, 2, 1)], &[green_arc(2, 2, 1)]);

        assert_eq!(runs.len(), 2);
        assert_eq!((runs[0].start, runs[0].len, runs[0].seq), (0, 2, 1));
        assert_eq!((runs[1].start, runs[1].len, runs[1].seq), (2, 2, 2));
        assert!(runs.iter().all(|r| r.kind == ArcKind::Single));
    }

    #[test]
    fn wrapping_color_arc_splits_at_index_zero() {
        let ring = ring(12);
        let runs = classify_runs(&ring, PS, &[red_arc(10, 4, 1)], &[]);

        assert_eq!(runs.len(), 2);
        assert_eq!((runs[0].start, runs[0].len), (0, 2));
        assert_eq!((runs[1].start, runs[1].len), (10, 2));
    }

    #[test]
    fn runs_partition_the_labeled_index_set() {
        let n = 24;
        let ring = ring(n);
        let red = [red_arc(2, 6, 1), red_arc(14, 4, 2)];
        let green = [green_arc(5, 8, 1), green_arc(20, 2, 2)];
        let runs = classify_runs(&ring, PS, &red, &green);

        let mut covered = vec![0usize; n];
        for run in &runs {
            for k in 0..run.len {
                covered[(run.start + k) % n] += 1;
            }
        }

        for i in 0..n {
            let labeled = red.iter().any(|a| a.contains(i, n))
                || green.iter().any(|a| a.contains(i, n));
            assert_eq!(covered[i], usize::from(labeled), "index {i}");
        }
    }

    #[test]
    fn unlabeled_gaps_complete_the_partition() {
        let n = 12;
        let ring = ring(n);
        let runs = classify_runs(&ring, PS, &[red_arc(0, 4, 1)], &[green_arc(2, 4, 1)]);
        let full = with_unlabeled_gaps(n, PS, &runs);

        let mut covered = vec![0usize; n];
        let mut total_len = 0.0f32;
        for arc in &full {
            for k in 0..arc.len {
                covered[(arc.start + k) % n] += 1;
            }
            total_len += arc_length(&ring, arc);
        }

        assert!(covered.iter().all(|&c| c == 1));
        assert!((total_len - ring.length()).abs() < 1e-4);
        assert_eq!(full.last().map(|a| a.kind), Some(ArcKind::Unlabeled));
    }

    #[test]
    fn end_to_end_extraction_and_classification() {
        let ring = ring(20);
        let red = extract_color_arcs(
            &ring,
            PS,
            LabelColor::Red,
            &at(&ring, &[2, 6, 10]),
            &at(&ring, &[4, 8]),
        );
        let green = extract_color_arcs(
            &ring,
            PS,
            LabelColor::Green,
            &at(&ring, &[8, 12]),
            &at(&ring, &[9]),
        );

        assert_eq!(red, vec![red_arc(2, 8, 1)]);
        assert_eq!(green, vec![green_arc(8, 4, 1)]);

        let runs = classify_runs(&ring, PS, &red, &green);
        let kinds: Vec<ArcKind> = runs.iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![ArcKind::Single, ArcKind::Double, ArcKind::Single]);
        assert_eq!((runs[0].start, runs[0].len), (2, 6));
        assert_eq!((runs[1].start, runs[1].len), (8, 2));
        assert_eq!((runs[2].start, runs[2].len), (10, 2));
    }
}
