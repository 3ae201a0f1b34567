use hm_core::{Curve, Point2f};
use hm_match::nearest_vertex;

/// Sampling policy for thickness estimation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThicknessConfig {
    /// Test-curve vertex stride between samples.
    pub stride: usize,
    /// Samples trimmed from the budget to keep sampling away from the open
    /// ends, where nearest-vertex correspondence is unstable.
    pub end_margin: usize,
}

impl Default for ThicknessConfig {
    fn default() -> Self {
        Self {
            stride: 2,
            end_margin: 2,
        }
    }
}

/// One local separation measurement between two paired label lines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThicknessSample {
    pub test: Point2f,
    pub reference: Point2f,
    pub distance: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThicknessEstimate {
    pub samples: Vec<ThicknessSample>,
    /// Arithmetic mean of the sample distances; `None` when the test curve
    /// was too short to produce any sample.
    pub mean: Option<f32>,
}

/// Estimate the local separation between two paired curves with the default
/// sampling policy.
pub fn estimate_thickness(a: &Curve, b: &Curve) -> ThicknessEstimate {
    estimate_thickness_with(a, b, ThicknessConfig::default())
}

/// Estimate the local separation between two paired curves.
///
/// The curve with more vertices is the reference; on equal counts `a` stays
/// the reference. The test curve contributes
/// `len(test) / stride - end_margin` samples taken at every `stride`-th
/// vertex from index 0; each is paired with its nearest reference vertex.
pub fn estimate_thickness_with(a: &Curve, b: &Curve, cfg: ThicknessConfig) -> ThicknessEstimate {
    let (reference, test) = if b.points().len() > a.points().len() {
        (b, a)
    } else {
        (a, b)
    };

    let stride = cfg.stride.max(1);
    let num_samples = (test.points().len() / stride).saturating_sub(cfg.end_margin);

    let mut samples = Vec::with_capacity(num_samples);
    let mut sum = 0.0f32;
    for k in 0..num_samples {
        let tp = test.point(k * stride);
        let rp = reference.point(nearest_vertex(reference, tp));
        let d = tp.distance(rp);
        sum += d;
        samples.push(ThicknessSample {
            test: tp,
            reference: rp,
            distance: d,
        });
    }

    let mean = if samples.is_empty() {
        None
    } else {
        Some(sum / samples.len() as f32)
    };

    ThicknessEstimate { samples, mean }
}
