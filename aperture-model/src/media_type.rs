use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

/// Media type names as the server spells them in `type:` filters and in the
/// `Type` field of search results.
///
/// The declaration order is the iteration order of ordered sets, which makes
/// compiled `type:` terms stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MediaTypeName {
    Image,
    Raw,
    Animated,
    Live,
    Video,
    Vector,
    Sidecar,
    Text,
    /// Response-only: a type this client does not know. The server has no
    /// `type:other` filter, so it is never parsed from filter input.
    Other,
}

impl MediaTypeName {
    pub const ALL: [Self; 9] = [
        Self::Image,
        Self::Raw,
        Self::Animated,
        Self::Live,
        Self::Video,
        Self::Vector,
        Self::Sidecar,
        Self::Text,
        Self::Other,
    ];

    /// Types that can be used in a `type:` filter.
    pub const FILTERABLE: [Self; 8] = [
        Self::Image,
        Self::Raw,
        Self::Animated,
        Self::Live,
        Self::Video,
        Self::Vector,
        Self::Sidecar,
        Self::Text,
    ];

    /// Wire value of the type.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Raw => "raw",
            Self::Animated => "animated",
            Self::Live => "live",
            Self::Video => "video",
            Self::Vector => "vector",
            Self::Sidecar => "sidecar",
            Self::Text => "text",
            Self::Other => "other",
        }
    }

    /// Whether items of this type are played rather than shown as a still.
    pub fn is_playable(self) -> bool {
        matches!(self, Self::Animated | Self::Live | Self::Video)
    }

    pub fn is_filterable(self) -> bool {
        self != Self::Other
    }
}

impl Display for MediaTypeName {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parses filter input, so only [`MediaTypeName::FILTERABLE`] names are
/// accepted.
impl FromStr for MediaTypeName {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase();
        Self::FILTERABLE
            .into_iter()
            .find(|kind| kind.as_str() == normalized)
            .ok_or_else(|| ModelError::InvalidMediaType(s.to_string()))
    }
}
