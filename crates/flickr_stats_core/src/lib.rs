//! Descriptive statistics over Flickr photo feeds.
//! Aggregations are pure functions over already-decoded records.

pub mod logging;
pub mod model;
pub mod stats;
pub mod text;

pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::photo::{parse_feed, FlickrFeed, ModelError, ModelResult, PhotoRecord};
pub use stats::aggregate::{
    alpha_numeric_tags_uniq, avg_title_length, image_count, non_alpha_numeric_tags,
    oldest_photo_title,
};
pub use stats::date::parse_date_taken;
pub use stats::extract::{flickr_image_data, flickr_tags, flickr_titles};
pub use stats::rank::{common_tag_by_rank, tag_at_rank, tag_frequencies, TagFrequency};
pub use stats::report::StatsReport;
pub use stats::{StatsError, StatsResult};
pub use text::tokens::{combine_string_array, compare_strings, is_alpha_numeric};
