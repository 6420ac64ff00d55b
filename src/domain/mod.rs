//! Domain layer containing the matching and exclusion engine.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs, value objects, statuses, errors)
//! - `vector` - Preference dimensions and vectors over them
//! - `scoring` - Dot score, match percentage and catalog ranking
//! - `filter` - Hard-filter taxonomy, collection and exclusion
//! - `catalog` - Questions, options and career records
//! - `quiz` - Quiz session state machine

pub mod catalog;
pub mod filter;
pub mod foundation;
pub mod quiz;
pub mod scoring;
pub mod vector;
