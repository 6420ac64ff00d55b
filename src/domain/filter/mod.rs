//! Hard-Filter Engine - binary exclusion rules.
//!
//! # Components
//!
//! - `HardFilter` - tagged exclusion rule (education, licensure, salary,
//!   dealbreaker, region)
//! - `HardFilterSet` - de-duplicated set of active filters
//! - `FilterEngine` - collection from answers and evaluation against careers
//!
//! A career is excluded if *any* active filter excludes it.

mod filter_engine;
mod filter_set;
mod hard_filter;

pub use filter_engine::FilterEngine;
pub use filter_set::HardFilterSet;
pub use hard_filter::{DealbreakerTrait, EducationLevel, HardFilter};
