use std::fmt::{Display, Formatter};
use std::str::FromStr;

use crate::error::ModelError;

const SUBJECT_UID_LEN: usize = 16;
const SUBJECT_UID_PREFIX: char = 'j';
const FACE_ID_LEN: usize = 32;

/// Identifier of a person to filter by.
///
/// The server knows two disjoint kinds: named subjects (people the user has
/// tagged) and unnamed face clusters. They are filtered by different terms,
/// so the kind travels with the identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "id"))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PersonId {
    Subject(String),
    Face(String),
}

impl PersonId {
    pub fn subject(uid: impl Into<String>) -> Self {
        Self::Subject(uid.into())
    }

    pub fn face(id: impl Into<String>) -> Self {
        Self::Face(id.into())
    }

    /// Classifies a raw server identifier.
    ///
    /// Subject UIDs are 16 characters long and start with `j`, face IDs are
    /// 32 characters long.
    pub fn parse(raw: &str) -> Result<Self, ModelError> {
        let raw = raw.trim();
        if is_subject_uid(raw) {
            Ok(Self::Subject(raw.to_string()))
        } else if is_face_id(raw) {
            Ok(Self::Face(raw.to_string()))
        } else {
            Err(ModelError::InvalidPersonId(raw.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Subject(uid) => uid,
            Self::Face(id) => id,
        }
    }

    pub fn is_subject(&self) -> bool {
        matches!(self, Self::Subject(_))
    }

    pub fn is_face(&self) -> bool {
        matches!(self, Self::Face(_))
    }
}

pub fn is_subject_uid(raw: &str) -> bool {
    raw.chars().count() == SUBJECT_UID_LEN
        && raw.starts_with(SUBJECT_UID_PREFIX)
}

pub fn is_face_id(raw: &str) -> bool {
    raw.chars().count() == FACE_ID_LEN
}

impl Display for PersonId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PersonId {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
