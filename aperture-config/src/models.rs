use std::collections::BTreeSet;
use std::path::PathBuf;
use std::time::Duration;

use aperture_model::MediaTypeName;
use url::Url;

use crate::loader::error::ConfigLoadError;

pub const DEFAULT_PREVIEW_TOKEN: &str = "public";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
pub const DEFAULT_PAGE_LIMIT: usize = 80;
pub const DEFAULT_ALBUM_PAGE_LIMIT: usize = 30;
pub const DEFAULT_ALBUM_TYPES: [&str; 2] = ["album", "folder"];
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub gallery: GalleryConfig,
    pub logging: LoggingConfig,
    pub metadata: ConfigMetadata,
}

impl Config {
    /// Server root URL, for commands that talk to the server.
    pub fn api_url(&self) -> Result<&Url, ConfigLoadError> {
        self.api.url.as_ref().ok_or(ConfigLoadError::MissingApiUrl)
    }
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub url: Option<Url>,
    pub session_id: Option<String>,
    pub preview_token: String,
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            url: None,
            session_id: None,
            preview_token: DEFAULT_PREVIEW_TOKEN.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GalleryConfig {
    pub page_limit: usize,
    pub album_page_limit: usize,
    pub album_types: Vec<String>,
    /// Media types this client can show; `None` allows every type.
    pub allowed_media_types: Option<BTreeSet<MediaTypeName>>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_limit: DEFAULT_PAGE_LIMIT,
            album_page_limit: DEFAULT_ALBUM_PAGE_LIMIT,
            album_types: DEFAULT_ALBUM_TYPES
                .iter()
                .map(|t| t.to_string())
                .collect(),
            allowed_media_types: None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directives.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ConfigMetadata {
    pub config_path: Option<PathBuf>,
    pub env_file_loaded: bool,
}
