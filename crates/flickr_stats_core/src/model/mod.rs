//! Photo metadata model for Flickr public feeds.
//!
//! # Responsibility
//! - Define the record shape every aggregation reads.
//! - Decode feed JSON text into records, reporting missing fields by index.
//!
//! # Invariants
//! - Records are immutable once decoded; aggregations only borrow them.
//! - Every decoded record has `title`, `tags` and `date_taken`.

pub mod photo;
