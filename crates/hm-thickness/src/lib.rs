//! Interlabel thickness estimation between two paired open label lines.
//!
//! The denser curve acts as the reference; the sparser one is subsampled and
//! each sampled vertex is paired with its nearest reference vertex. The mean
//! of the pair separations is the surface's representative thickness, the
//! local-rate input for mineral apposition.
//!
//! Sampling deliberately stays clear of the open ends, where nearest-vertex
//! correspondence is unstable; see [`ThicknessConfig`].
//!
//! Curve pairing is the caller's responsibility: the two curves of one
//! surface are expected to arrive already matched.

mod estimator;

pub use estimator::{
    ThicknessConfig, ThicknessEstimate, ThicknessSample, estimate_thickness,
    estimate_thickness_with,
};
