use std::fmt::{Debug, Display, Formatter};

/// Thumbnail variants the server renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThumbnailSize {
    Tile100,
    Tile224,
    Tile500,
    Fit720,
    Fit1280,
    Fit1920,
}

impl ThumbnailSize {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tile100 => "tile_100",
            Self::Tile224 => "tile_224",
            Self::Tile500 => "tile_500",
            Self::Fit720 => "fit_720",
            Self::Fit1280 => "fit_1280",
            Self::Fit1920 => "fit_1920",
        }
    }
}

impl Display for ThumbnailSize {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub trait MediaPreviewUrlFactory: Send + Sync + Debug {
    fn thumbnail_url(&self, hash: &str, size: ThumbnailSize) -> String;
}

/// Preview URLs authorized by the session's preview token.
#[derive(Debug, Clone)]
pub struct PhotoPrismPreviewUrlFactory {
    api_url: String,
    preview_token: String,
}

impl PhotoPrismPreviewUrlFactory {
    /// `api_url` is the `<root>/api` base, see
    /// [`ApiClient::api_url`](crate::api::ApiClient::api_url).
    pub fn new(
        api_url: impl Into<String>,
        preview_token: impl Into<String>,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            preview_token: preview_token.into(),
        }
    }
}

impl MediaPreviewUrlFactory for PhotoPrismPreviewUrlFactory {
    fn thumbnail_url(&self, hash: &str, size: ThumbnailSize) -> String {
        format!(
            "{}/v1/t/{}/{}/{}",
            self.api_url, hash, self.preview_token, size
        )
    }
}
