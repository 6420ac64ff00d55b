//! Vector Model - the fixed dimension set and vectors over it.
//!
//! - `Dimension` - named preference axes
//! - `PreferenceVector` - a total mapping from every axis to a real number
//! - `Weights` - a partial mapping contributed by one answer option
//! - `Sign` - apply or retract direction for weights

mod dimension;
mod preference_vector;
mod weights;

pub use dimension::Dimension;
pub use preference_vector::PreferenceVector;
pub use weights::{Sign, Weights};
