use chrono::{NaiveDate, NaiveDateTime};

use crate::error::ModelError;
use crate::media_type::MediaTypeName;

/// Layout of `TakenAtLocal` timestamps. The trailing `Z` is part of the
/// server's format only; the value is local wall-clock time.
pub const LOCAL_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// A single item of the gallery, as presented to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GalleryMedia {
    pub uid: String,
    pub media_type: MediaTypeName,
    /// When the item was taken, in the local time of the place it was
    /// taken at.
    pub taken_at_local: NaiveDateTime,
    pub title: String,
    /// Hash of the primary file, used to build preview URLs.
    pub hash: String,
    pub width: u32,
    pub height: u32,
}

impl GalleryMedia {
    /// Local calendar day the item was taken on.
    pub fn taken_on_local(&self) -> NaiveDate {
        self.taken_at_local.date()
    }

    /// Whether the item was taken strictly before the given local day.
    pub fn is_taken_before(&self, day: NaiveDate) -> bool {
        self.taken_on_local() < day
    }
}

/// Parses a `TakenAtLocal` value.
pub fn parse_local_timestamp(raw: &str) -> Result<NaiveDateTime, ModelError> {
    NaiveDateTime::parse_from_str(raw.trim(), LOCAL_TIMESTAMP_FORMAT)
        .map_err(|_| ModelError::InvalidTimestamp(raw.to_string()))
}
