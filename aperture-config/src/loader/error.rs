use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("configuration file missing: {path}")]
    MissingConfig { path: PathBuf },
    #[error("failed to read configuration {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse configuration {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
    #[error(
        "no PhotoPrism URL configured; set APERTURE_API_URL or [api].url"
    )]
    MissingApiUrl,
    #[error("invalid PhotoPrism URL '{url}'")]
    InvalidApiUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("unsupported scheme '{scheme}' in PhotoPrism URL '{url}'")]
    UnsupportedScheme { url: String, scheme: String },
    #[error("invalid request timeout '{value}'")]
    InvalidDuration {
        value: String,
        #[source]
        source: humantime::DurationError,
    },
    #[error("{field} must be greater than zero")]
    ZeroPageLimit { field: &'static str },
    #[error("allowed_media_types must list at least one type when set")]
    EmptyAllowedMediaTypes,
    #[error("'{0}' cannot be used as a media type filter")]
    UnfilterableMediaType(aperture_model::MediaTypeName),
    #[error("album_types must list at least one album type")]
    EmptyAlbumTypes,
    #[error("album_types must not contain blank entries")]
    BlankAlbumType,
    #[error(transparent)]
    EnvFile(#[from] dotenvy::Error),
}
