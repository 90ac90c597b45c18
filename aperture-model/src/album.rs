/// An album, folder, or other container the gallery can be scoped to.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Album {
    pub uid: String,
    pub title: String,
    /// Server-side album type, e.g. `album`, `folder`, `moment`.
    pub album_type: String,
    pub favorite: bool,
    /// Folder path for `folder` albums, empty otherwise.
    pub path: String,
    pub thumbnail_hash: String,
    pub thumbnail_url: String,
}

impl Album {
    pub fn is_folder(&self) -> bool {
        self.album_type == "folder"
    }
}
