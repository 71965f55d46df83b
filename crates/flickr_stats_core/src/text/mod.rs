//! Tag text helpers shared by the aggregations.
//!
//! # Responsibility
//! - Split tag strings into tokens exactly on single spaces.
//! - Classify tokens as ASCII alphanumeric.
//! - Provide the string comparator used for sorted tag output.

pub mod tokens;
