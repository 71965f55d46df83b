//! Combined summary of every aggregation.

use super::aggregate::{
    alpha_numeric_tags_uniq, avg_title_length, image_count, non_alpha_numeric_tags,
    oldest_photo_title,
};
use super::rank::tag_at_rank;
use super::StatsResult;
use crate::model::photo::PhotoRecord;
use log::info;
use serde::Serialize;
use std::time::Instant;

/// All aggregation results for one record collection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsReport {
    pub image_count: usize,
    pub alpha_numeric_tags: Vec<String>,
    pub non_alpha_numeric_tags: Vec<String>,
    /// Unrounded mean; rounding is a presentation concern.
    pub avg_title_length: f64,
    pub tag_rank: usize,
    pub tag_at_rank: String,
    pub oldest_photo_title: String,
}

impl StatsReport {
    /// Runs every aggregation; the first failure aborts the report.
    pub fn build(records: &[PhotoRecord], tag_rank: usize) -> StatsResult<Self> {
        let started_at = Instant::now();
        let report = Self {
            image_count: image_count(records),
            alpha_numeric_tags: alpha_numeric_tags_uniq(records),
            non_alpha_numeric_tags: non_alpha_numeric_tags(records),
            avg_title_length: avg_title_length(records)?,
            tag_rank,
            tag_at_rank: tag_at_rank(records, tag_rank)?,
            oldest_photo_title: oldest_photo_title(records)?,
        };
        info!(
            "event=stats_report module=stats status=ok records={} duration_ms={}",
            report.image_count,
            started_at.elapsed().as_millis()
        );
        Ok(report)
    }
}
