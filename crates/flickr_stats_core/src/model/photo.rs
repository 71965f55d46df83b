//! Photo record and feed document.
//!
//! # Responsibility
//! - Hold the three fields the stats layer consumes.
//! - Turn feed JSON into a `FlickrFeed` without substituting defaults.
//!
//! # Invariants
//! - `FlickrFeed::items` keeps document order.
//! - Unknown feed fields (`link`, `media`, `author`, ...) are ignored.

use log::{debug, warn};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Fields every feed item must carry.
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "tags", "date_taken"];

/// Result type for feed decoding.
pub type ModelResult<T> = Result<T, ModelError>;

/// Feed decoding error.
#[derive(Debug)]
pub enum ModelError {
    /// Input is not JSON, or a field has the wrong type.
    Json(serde_json::Error),
    /// Document has no `items` array.
    MissingItems,
    /// Item at `index` lacks a string `field`.
    MissingField { index: usize, field: &'static str },
}

impl Display for ModelError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json(err) => write!(f, "invalid feed json: {err}"),
            Self::MissingItems => write!(f, "feed document has no `items` array"),
            Self::MissingField { index, field } => {
                write!(f, "feed item {index} is missing string field `{field}`")
            }
        }
    }
}

impl Error for ModelError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Json(err) => Some(err),
            Self::MissingItems | Self::MissingField { .. } => None,
        }
    }
}

impl From<serde_json::Error> for ModelError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

/// Metadata of one photo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub title: String,
    /// Space separated tag words, e.g. `"dog puppy beach"`.
    pub tags: String,
    /// Capture time as published by the feed, e.g. `2016-06-26T12:36:06-08:00`.
    pub date_taken: String,
}

impl PhotoRecord {
    pub fn new(
        title: impl Into<String>,
        tags: impl Into<String>,
        date_taken: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            tags: tags.into(),
            date_taken: date_taken.into(),
        }
    }
}

/// Feed document; only `items` is consumed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlickrFeed {
    pub items: Vec<PhotoRecord>,
}

impl FlickrFeed {
    pub fn new(items: Vec<PhotoRecord>) -> Self {
        Self { items }
    }
}

/// Decodes feed JSON text.
///
/// Required fields are checked on the raw value first so a missing field is
/// reported with its item index instead of a generic serde message.
///
/// # Errors
/// - `ModelError::Json` for malformed JSON.
/// - `ModelError::MissingItems` when `items` is absent or not an array.
/// - `ModelError::MissingField` for the first item lacking a required field.
pub fn parse_feed(text: &str) -> ModelResult<FlickrFeed> {
    let document: Value = serde_json::from_str(text)?;
    let items = document
        .get("items")
        .and_then(Value::as_array)
        .ok_or(ModelError::MissingItems)?;

    for (index, item) in items.iter().enumerate() {
        if let Some(field) = first_missing_field(item) {
            warn!(
                "event=feed_parse module=model status=error error_code=missing_field index={} field={}",
                index, field
            );
            return Err(ModelError::MissingField { index, field });
        }
    }

    let feed: FlickrFeed = serde_json::from_value(document)?;
    debug!(
        "event=feed_parse module=model status=ok items={}",
        feed.items.len()
    );
    Ok(feed)
}

fn first_missing_field(item: &Value) -> Option<&'static str> {
    REQUIRED_FIELDS
        .into_iter()
        .find(|field| !item.get(*field).is_some_and(Value::is_string))
}
