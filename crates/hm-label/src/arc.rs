use hm_core::Curve;

/// Anatomical surface a perimeter belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Periosteal,
    Endosteal,
}

/// Fluorochrome color of one label annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelColor {
    Red,
    Green,
}

/// Classification of a perimeter arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArcKind {
    Unlabeled,
    Red,
    Green,
    Double,
    Single,
}

impl From<LabelColor> for ArcKind {
    fn from(color: LabelColor) -> Self {
        match color {
            LabelColor::Red => ArcKind::Red,
            LabelColor::Green => ArcKind::Green,
        }
    }
}

/// Contiguous run of perimeter vertex indices.
///
/// The span starts at vertex `start` and covers `len` vertices, wrapping
/// modulo the perimeter vertex count; `len == n` is the whole perimeter.
/// `seq` counts arcs of the same kind on one perimeter, starting at 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Arc {
    pub surface: Surface,
    pub kind: ArcKind,
    pub seq: usize,
    pub start: usize,
    pub len: usize,
}

impl Arc {
    /// Exclusive end index, wrapped modulo `n`.
    pub fn end(&self, n: usize) -> usize {
        (self.start + self.len) % n
    }

    /// Whether vertex index `i` lies inside the span.
    pub fn contains(&self, i: usize, n: usize) -> bool {
        (i + n - self.start) % n < self.len
    }
}

/// Geometric length of an arc: its `len` consecutive perimeter segments,
/// from the start vertex up to the first vertex past the span. Arc lengths
/// of a full partition therefore sum to the perimeter length.
pub fn arc_length(perimeter: &Curve, arc: &Arc) -> f32 {
    let mut total = 0.0f32;
    for k in 0..arc.len {
        let a = perimeter.point(perimeter.wrap(arc.start + k));
        let b = perimeter.point(perimeter.wrap(arc.start + k + 1));
        total += a.distance(b);
    }
    total
}
