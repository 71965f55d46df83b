//! Field projections over the feed.

use crate::model::photo::{FlickrFeed, PhotoRecord};
use crate::text::tokens::combine_string_array;

/// Returns the feed's record collection.
pub fn flickr_image_data(feed: &FlickrFeed) -> &[PhotoRecord] {
    &feed.items
}

/// All tag tokens of all records, in record then tag order, duplicates kept.
pub fn flickr_tags(records: &[PhotoRecord]) -> Vec<String> {
    let tags = records
        .iter()
        .map(|record| record.tags.as_str())
        .collect::<Vec<&str>>();
    combine_string_array(tags.as_slice())
}

/// Titles in record order.
pub fn flickr_titles(records: &[PhotoRecord]) -> Vec<&str> {
    records.iter().map(|record| record.title.as_str()).collect()
}
