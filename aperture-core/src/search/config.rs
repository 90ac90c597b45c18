use std::collections::BTreeSet;

use aperture_model::{MediaTypeName, PersonId};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Structured search criteria for the gallery.
///
/// A plain value: it is built from UI state or a saved bookmark, compiled
/// into a server query once per search, and thrown away. Two configs are the
/// same search exactly when they compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Media types to limit the search to.
    ///
    /// `None` means there is no limit. An empty set allows nothing, so the
    /// search finds nothing.
    pub media_types: Option<BTreeSet<MediaTypeName>>,
    pub album_uid: Option<String>,
    /// Subjects and faces that must all be present on an item.
    /// Empty means no person filter.
    pub person_ids: BTreeSet<PersonId>,
    /// Local day to find media taken before (exclusive).
    pub before_local: Option<NaiveDate>,
    pub user_query: String,
    pub include_private: bool,
}

impl SearchConfig {
    pub const DEFAULT: SearchConfig = SearchConfig {
        media_types: None,
        album_uid: None,
        person_ids: BTreeSet::new(),
        before_local: None,
        user_query: String::new(),
        include_private: false,
    };

    /// Returns a config that doesn't go beyond the allowed media types, or
    /// the config itself if there is no specific allowance.
    ///
    /// `allowed` must be either `None` (all types are allowed) or non-empty.
    ///
    /// # Panics
    ///
    /// Panics if `allowed` is `Some` empty set.
    pub fn with_only_allowed_media_types(
        self,
        allowed: Option<&BTreeSet<MediaTypeName>>,
    ) -> Self {
        assert!(
            allowed.is_none_or(|allowed| !allowed.is_empty()),
            "The set of allowed types must either be None or not empty"
        );

        let Some(allowed) = allowed else {
            return self;
        };

        let media_types = match self.media_types {
            Some(current) => current.intersection(allowed).copied().collect(),
            None => allowed.clone(),
        };

        Self {
            media_types: Some(media_types),
            ..self
        }
    }

    pub fn with_user_query(mut self, user_query: impl Into<String>) -> Self {
        self.user_query = user_query.into();
        self
    }

    pub fn with_media_types(
        mut self,
        media_types: impl IntoIterator<Item = MediaTypeName>,
    ) -> Self {
        self.media_types = Some(media_types.into_iter().collect());
        self
    }

    pub fn in_album(mut self, album_uid: impl Into<String>) -> Self {
        self.album_uid = Some(album_uid.into());
        self
    }

    pub fn with_person(mut self, person: PersonId) -> Self {
        self.person_ids.insert(person);
        self
    }

    pub fn taken_before(mut self, day: NaiveDate) -> Self {
        self.before_local = Some(day);
        self
    }

    pub fn including_private(mut self, include_private: bool) -> Self {
        self.include_private = include_private;
        self
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use MediaTypeName::*;

    fn types(items: &[MediaTypeName]) -> BTreeSet<MediaTypeName> {
        items.iter().copied().collect()
    }

    #[test]
    fn no_allowance_keeps_config_unchanged() {
        let config = SearchConfig::DEFAULT.with_media_types([Video]);
        assert_eq!(
            config.clone().with_only_allowed_media_types(None),
            config
        );
    }

    #[test]
    fn unrestricted_config_takes_the_allowed_types() {
        let allowed = types(&[Image, Raw]);
        let narrowed = SearchConfig::DEFAULT
            .with_only_allowed_media_types(Some(&allowed));
        assert_eq!(narrowed.media_types, Some(allowed));
    }

    #[test]
    fn restricted_config_is_intersected() {
        let config = SearchConfig::DEFAULT.with_media_types([Image, Raw, Live]);
        let allowed = types(&[Raw, Live, Video]);
        let narrowed = config.with_only_allowed_media_types(Some(&allowed));
        assert_eq!(narrowed.media_types, Some(types(&[Raw, Live])));
    }

    #[test]
    fn disjoint_intersection_allows_nothing() {
        let config = SearchConfig::DEFAULT.with_media_types([Image]);
        let narrowed =
            config.with_only_allowed_media_types(Some(&types(&[Video])));
        assert_eq!(narrowed.media_types, Some(BTreeSet::new()));
    }

    #[test]
    fn narrowing_is_idempotent() {
        let allowed = types(&[Image, Video]);
        let base = SearchConfig::DEFAULT
            .in_album("aq8i2cp3l5whnjbm")
            .with_user_query("sunset");

        for config in [
            base.clone(),
            base.clone().with_media_types([Video, Text]),
            base.clone().with_media_types(std::iter::empty()),
        ] {
            let once = config.with_only_allowed_media_types(Some(&allowed));
            let twice = once.clone().with_only_allowed_media_types(Some(&allowed));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn narrowing_leaves_other_fields_alone() {
        let config = SearchConfig::DEFAULT
            .in_album("aq8i2cp3l5whnjbm")
            .with_person(PersonId::subject("jrwn2zp1ax8bjh5g"))
            .taken_before(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
            .with_user_query("beach")
            .including_private(true);
        let narrowed = config
            .clone()
            .with_only_allowed_media_types(Some(&types(&[Image])));

        assert_eq!(
            SearchConfig {
                media_types: None,
                ..narrowed
            },
            config
        );
    }

    #[test]
    #[should_panic(expected = "must either be None or not empty")]
    fn empty_allowance_is_a_programming_error() {
        let _ = SearchConfig::DEFAULT
            .with_only_allowed_media_types(Some(&BTreeSet::new()));
    }

    #[test]
    fn default_is_the_blank_public_search() {
        let config = SearchConfig::default();
        assert_eq!(config, SearchConfig::DEFAULT);
        assert!(config.media_types.is_none());
        assert!(config.person_ids.is_empty());
        assert!(!config.include_private);
    }
}
