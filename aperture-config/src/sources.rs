use std::path::PathBuf;

use aperture_model::MediaTypeName;
use serde::{Deserialize, Serialize};

/// Raw configuration as defined in a TOML file.
#[derive(Debug, Default, Clone, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct FileConfig {
    #[serde(default)]
    pub api: FileApiConfig,
    #[serde(default)]
    pub gallery: FileGalleryConfig,
    #[serde(default)]
    pub logging: FileLoggingConfig,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileApiConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview_token: Option<String>,
    /// Humantime duration such as `30s` or `1m 30s`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileGalleryConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_page_limit: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub album_types: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_media_types: Option<Vec<MediaTypeName>>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct FileLoggingConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

/// Environment-derived configuration values.
#[derive(Debug, Default, Clone)]
pub struct EnvConfig {
    pub config_path: Option<PathBuf>,
    pub api_url: Option<String>,
    pub session_id: Option<String>,
    pub preview_token: Option<String>,
    pub request_timeout: Option<String>,
    pub page_limit: Option<usize>,
    pub log: Option<String>,
}

impl EnvConfig {
    pub fn gather() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads the same keys as [`gather`](Self::gather) through `lookup`.
    /// Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |key: &str| {
            lookup(key).filter(|value| !value.trim().is_empty())
        };

        Self {
            config_path: var("APERTURE_CONFIG").map(PathBuf::from),
            api_url: var("APERTURE_API_URL"),
            session_id: var("APERTURE_SESSION_ID"),
            preview_token: var("APERTURE_PREVIEW_TOKEN"),
            request_timeout: var("APERTURE_REQUEST_TIMEOUT"),
            page_limit: var("APERTURE_PAGE_LIMIT")
                .and_then(|s| s.trim().parse().ok()),
            log: var("APERTURE_LOG"),
        }
    }
}
