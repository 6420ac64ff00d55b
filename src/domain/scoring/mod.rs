//! Scoring module - pure functions over preference vectors.
//!
//! # Components
//!
//! - `VectorScorer` - weight application, dot score, match percentage
//! - `CareerRanker` - score, pre-filter, exclude and sort the catalog
//!
//! Dot score drives ranking. Match percentage is computed alongside for
//! display only.

mod career_ranker;
mod vector_scorer;

pub use career_ranker::{CareerRanker, RankedCareer};
pub use vector_scorer::VectorScorer;
