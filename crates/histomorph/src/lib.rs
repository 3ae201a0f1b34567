//! Umbrella crate for the `histomorph` workspace.
//!
//! Re-exports the geometric labeling engine crates and hosts the reporting
//! boundary: per-unit result records, append-only report accumulation, and
//! pixel-to-physical calibration. Everything upstream of the record — image
//! handling, annotation persistence, tabulation — lives outside this
//! workspace.

mod report;

pub use hm_core::*;
pub use hm_label::*;
pub use hm_match::*;
pub use hm_thickness::*;
pub use report::{Calibration, Report, UnitRecord};
