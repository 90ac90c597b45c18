pub mod error;

use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use tracing::{debug, warn};
use url::Url;

use self::error::ConfigLoadError;
use crate::models::{
    ApiConfig, Config, ConfigMetadata, GalleryConfig, LoggingConfig,
};
use crate::sources::{EnvConfig, FileConfig};

const DEFAULT_CONFIG_LOCATIONS: [&str; 2] =
    ["aperture.toml", "config/aperture.toml"];

#[derive(Debug, Default, Clone)]
pub struct ConfigLoaderOptions {
    pub config_path: Option<PathBuf>,
    pub env_file: Option<PathBuf>,
}

#[derive(Debug, Default)]
pub struct ConfigLoader {
    options: ConfigLoaderOptions,
}

#[derive(Debug)]
pub struct ConfigLoad {
    pub config: Config,
    /// Notes about the sources used, for the caller to log once logging
    /// is set up.
    pub warnings: Vec<String>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: ConfigLoaderOptions) -> Self {
        Self { options }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.config_path = Some(path.into());
        self
    }

    pub fn with_env_file<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.options.env_file = Some(path.into());
        self
    }

    /// Loads `.env` into the process environment, then resolves the
    /// configuration from the file and the environment.
    pub fn load(&self) -> Result<ConfigLoad, ConfigLoadError> {
        let env_file_loaded = match &self.options.env_file {
            Some(path) => dotenvy::from_path(path).map(|_| true).or_else(
                |err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                },
            )?,
            None => {
                dotenvy::dotenv().map(|_| true).or_else(|err| match err {
                    dotenvy::Error::Io(_) => Ok(false),
                    _ => Err(err),
                })?
            }
        };

        let mut load = self.load_with_env(EnvConfig::gather())?;
        load.config.metadata.env_file_loaded = env_file_loaded;
        Ok(load)
    }

    /// Resolves the configuration against an already gathered environment.
    /// No `.env` file is read.
    pub fn load_with_env(
        &self,
        env: EnvConfig,
    ) -> Result<ConfigLoad, ConfigLoadError> {
        let mut warnings = Vec::new();

        let (file_config, config_path) = self.load_file_config(&env)?;
        if config_path.is_none() {
            debug!("no aperture.toml found; using environment and defaults");
        }

        let config = compose_config(
            file_config.unwrap_or_default(),
            env,
            config_path,
        )?;
        let plain_http = config
            .api
            .url
            .as_ref()
            .is_some_and(|url| url.scheme() == "http");
        if plain_http && config.api.session_id.is_some() {
            warnings.push(
                "session id will be sent over plain http; use an https URL"
                    .to_string(),
            );
        }
        debug!(
            config_path = ?config.metadata.config_path,
            api_url = config.api.url.as_ref().map(Url::as_str),
            "configuration resolved"
        );

        Ok(ConfigLoad { config, warnings })
    }

    fn load_file_config(
        &self,
        env: &EnvConfig,
    ) -> Result<(Option<FileConfig>, Option<PathBuf>), ConfigLoadError> {
        // A path named explicitly or through APERTURE_CONFIG must exist.
        let requested = self
            .options
            .config_path
            .clone()
            .or_else(|| env.config_path.clone());

        let path = match requested {
            Some(path) if !path.exists() => {
                return Err(ConfigLoadError::MissingConfig { path });
            }
            Some(path) => path,
            None => match DEFAULT_CONFIG_LOCATIONS
                .iter()
                .map(PathBuf::from)
                .find(|candidate| candidate.exists())
            {
                Some(path) => path,
                None => return Ok((None, None)),
            },
        };

        let contents = fs::read_to_string(&path).map_err(|source| {
            ConfigLoadError::Io {
                path: path.clone(),
                source,
            }
        })?;
        let file_config: FileConfig =
            toml::from_str(&contents).map_err(|source| {
                ConfigLoadError::Parse {
                    path: path.clone(),
                    source,
                }
            })?;

        Ok((Some(file_config), Some(path)))
    }
}

fn compose_config(
    file: FileConfig,
    env: EnvConfig,
    config_path: Option<PathBuf>,
) -> Result<Config, ConfigLoadError> {
    let FileConfig {
        api: file_api,
        gallery: file_gallery,
        logging: file_logging,
    } = file;
    let defaults = ApiConfig::default();

    let url = env
        .api_url
        .or(file_api.url)
        .map(|raw| parse_api_url(&raw))
        .transpose()?;

    let request_timeout = env
        .request_timeout
        .or(file_api.request_timeout)
        .map(|raw| parse_duration(&raw))
        .transpose()?
        .unwrap_or(defaults.request_timeout);

    let api = ApiConfig {
        url,
        session_id: env.session_id.or(file_api.session_id),
        preview_token: env
            .preview_token
            .or(file_api.preview_token)
            .unwrap_or(defaults.preview_token),
        request_timeout,
    };

    let gallery_defaults = GalleryConfig::default();
    let gallery = GalleryConfig {
        page_limit: env
            .page_limit
            .or(file_gallery.page_limit)
            .unwrap_or(gallery_defaults.page_limit),
        album_page_limit: file_gallery
            .album_page_limit
            .unwrap_or(gallery_defaults.album_page_limit),
        album_types: file_gallery
            .album_types
            .unwrap_or(gallery_defaults.album_types),
        allowed_media_types: file_gallery
            .allowed_media_types
            .map(|types| types.into_iter().collect::<BTreeSet<_>>()),
    };

    let logging = LoggingConfig {
        filter: env
            .log
            .or(file_logging.filter)
            .unwrap_or_else(|| LoggingConfig::default().filter),
    };

    validate_gallery(&gallery)?;
    if api.session_id.is_none() {
        debug!("no session id configured; only public content is visible");
    }

    Ok(Config {
        api,
        gallery,
        logging,
        metadata: ConfigMetadata {
            config_path,
            env_file_loaded: false,
        },
    })
}

fn validate_gallery(gallery: &GalleryConfig) -> Result<(), ConfigLoadError> {
    if gallery.page_limit == 0 {
        return Err(ConfigLoadError::ZeroPageLimit {
            field: "page_limit",
        });
    }
    if gallery.album_page_limit == 0 {
        return Err(ConfigLoadError::ZeroPageLimit {
            field: "album_page_limit",
        });
    }
    if gallery
        .allowed_media_types
        .as_ref()
        .is_some_and(BTreeSet::is_empty)
    {
        return Err(ConfigLoadError::EmptyAllowedMediaTypes);
    }
    if let Some(kind) = gallery
        .allowed_media_types
        .iter()
        .flatten()
        .find(|kind| !kind.is_filterable())
    {
        return Err(ConfigLoadError::UnfilterableMediaType(*kind));
    }
    if gallery.album_types.is_empty() {
        return Err(ConfigLoadError::EmptyAlbumTypes);
    }
    // A blank type lists albums of every type.
    if gallery.album_types.iter().any(|t| t.trim().is_empty()) {
        return Err(ConfigLoadError::BlankAlbumType);
    }
    Ok(())
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigLoadError> {
    let trimmed = raw.trim();
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        warn!(url = trimmed, "API URL has no scheme; assuming http");
        format!("http://{trimmed}")
    };

    let url = Url::parse(&candidate).map_err(|source| {
        ConfigLoadError::InvalidApiUrl {
            url: raw.to_string(),
            source,
        }
    })?;

    // Url lowercases the scheme, so `HTTPS://` lands here as `https`.
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ConfigLoadError::UnsupportedScheme {
            url: raw.to_string(),
            scheme: scheme.to_string(),
        }),
    }
}

fn parse_duration(raw: &str) -> Result<Duration, ConfigLoadError> {
    humantime::parse_duration(raw.trim()).map_err(|source| {
        ConfigLoadError::InvalidDuration {
            value: raw.to_string(),
            source,
        }
    })
}
