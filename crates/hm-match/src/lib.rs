//! Nearest-vertex correspondence between sparse point annotations and dense
//! sampled curves.
//!
//! Matching is a brute-force scan over every curve vertex. Curves in this
//! domain are a few hundred vertices, so a spatial index buys nothing; any
//! replacement must preserve the tie-break rule below for reproducibility.
//!
//! Tie-break rule:
//! - On exact distance ties the lowest vertex index wins. The scan replaces
//!   its best candidate only on a strictly smaller distance, and the rule is
//!   pinned by a dedicated test.

mod nearest;

pub use nearest::{nearest_vertex, nearest_vertices};
