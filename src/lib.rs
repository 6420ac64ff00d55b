//! Career Match - preference-vector career matching
//!
//! A quiz turns answers into a preference vector and a set of hard filters.
//! Careers are excluded by any active filter, then ranked by dot product
//! against the vector with a cosine-based match percentage for display.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
