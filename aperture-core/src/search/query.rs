//! Compiles a [`SearchConfig`] into the PhotoPrism search query dialect.
//!
//! The server parses the string term by term and later terms win over
//! earlier ones, so the user's free text always goes first and the filters
//! derived from the config follow in a fixed order.

use chrono::{NaiveDate, NaiveTime};

use super::config::SearchConfig;

/// Date layout the server expects in `before:` and `after:` terms.
pub const PHOTOPRISM_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const TYPE_OR_SEPARATOR: &str = "|";
const ID_AND_SEPARATOR: &str = "&";
const MATCH_NOTHING_TYPE: &str = "nothing";

impl SearchConfig {
    /// PhotoPrism query for the search request, or `None` if there are no
    /// search criteria at all.
    ///
    /// The `before:` term is only approximate: results must be post-filtered
    /// by their local taken-at date to be exact.
    pub fn photoprism_query(&self) -> Option<String> {
        compile(self)
    }
}

/// Builds the query string for `config`. Pure: equal configs always produce
/// equal strings.
pub fn compile(config: &SearchConfig) -> Option<String> {
    let mut terms: Vec<String> = Vec::new();

    if !config.user_query.trim().is_empty() {
        terms.push(config.user_query.clone());
    }

    if let Some(media_types) = &config.media_types {
        if media_types.is_empty() {
            terms.push(format!("type:{MATCH_NOTHING_TYPE}"));
        } else {
            let joined = media_types
                .iter()
                .map(|kind| kind.as_str())
                .collect::<Vec<_>>()
                .join(TYPE_OR_SEPARATOR);
            terms.push(format!("type:{joined}"));
        }
    }

    if let Some(before_local) = config.before_local {
        terms.push(format!(
            "before:\"{}\"",
            format_photoprism_date(redundant_before(before_local))
        ));
    }

    terms.push(format!("public:{}", !config.include_private));

    if let Some(album_uid) = &config.album_uid {
        terms.push(format!("album:{album_uid}"));
    }

    let subject_uids = config
        .person_ids
        .iter()
        .filter(|person| person.is_subject())
        .map(|person| person.as_str())
        .collect::<Vec<_>>();
    if !subject_uids.is_empty() {
        terms.push(format!("subject:{}", subject_uids.join(ID_AND_SEPARATOR)));
    }

    let face_ids = config
        .person_ids
        .iter()
        .filter(|person| person.is_face())
        .map(|person| person.as_str())
        .collect::<Vec<_>>();
    if !face_ids.is_empty() {
        terms.push(format!("face:{}", face_ids.join(ID_AND_SEPARATOR)));
    }

    let query = terms.join(" ");
    let query = query.trim();
    (!query.is_empty()).then(|| query.to_string())
}

/// The server's `before:` ignores the time of day and compares against the
/// UTC taken-at time rather than the local one. Asking for one extra day
/// keeps every item of the requested local day range in the response; the
/// surplus is removed by post-filtering.
fn redundant_before(before_local: NaiveDate) -> NaiveDate {
    before_local.succ_opt().unwrap_or(before_local)
}

pub fn format_photoprism_date(day: NaiveDate) -> String {
    day.and_time(NaiveTime::MIN)
        .format(PHOTOPRISM_DATE_FORMAT)
        .to_string()
}
