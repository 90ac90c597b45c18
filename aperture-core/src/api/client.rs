use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, info, warn};
use url::Url;

use super::service::PhotoPrismService;
use super::types::{
    AlbumsRequest, PhotoPrismAlbum, PhotoPrismPhoto, PhotosRequest,
};
use crate::error::ApiError;

const SESSION_HEADER: &str = "X-Session-ID";

/// HTTP client for the PhotoPrism REST API.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    /// Server root, always ending with `/`.
    root_url: Url,
    session_id: Option<String>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("root_url", &self.root_url.as_str())
            .field("has_session", &self.session_id.is_some())
            .finish()
    }
}

impl ApiClient {
    /// Creates a client for the server at `root_url`, e.g.
    /// `https://photos.example.com` or `localhost:2342`.
    pub fn new(
        root_url: &str,
        session_id: Option<String>,
        timeout: Duration,
    ) -> Result<Self, ApiError> {
        let root_url = normalize_root_url(root_url)?;
        let client = Client::builder().timeout(timeout).build()?;

        info!(
            root_url = root_url.as_str(),
            has_session = session_id.is_some(),
            "Creating PhotoPrism API client"
        );

        Ok(Self {
            client,
            root_url,
            session_id,
        })
    }

    pub fn root_url(&self) -> &Url {
        &self.root_url
    }

    /// Base of all API endpoints, `<root>/api`. Preview and download URLs
    /// hang off it.
    pub fn api_url(&self) -> String {
        format!("{}api", self.root_url)
    }

    /// Absolute URL of a `v1` endpoint.
    pub fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        let path = path.trim_start_matches('/');
        Ok(self.root_url.join(&format!("api/v1/{path}"))?)
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match &self.session_id {
            Some(session_id) => builder.header(SESSION_HEADER, session_id),
            None => builder,
        }
    }

    async fn get_json<Q, T>(&self, path: &str, query: &Q) -> Result<T, ApiError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(url = url.as_str(), "GET");

        let request = self.authorize(self.client.get(url).query(query));
        let response = request.send().await?;

        match response.status() {
            status if status.is_success() => {
                let body = response.text().await?;
                Ok(serde_json::from_str(&body)?)
            }
            StatusCode::UNAUTHORIZED => {
                warn!(path, "PhotoPrism rejected the session");
                Err(ApiError::Unauthorized)
            }
            status => {
                let body = response
                    .text()
                    .await
                    .unwrap_or_else(|_| "Unknown error".to_string());
                Err(ApiError::Status {
                    status: status.as_u16(),
                    body,
                })
            }
        }
    }
}

#[async_trait]
impl PhotoPrismService for ApiClient {
    async fn get_albums(
        &self,
        request: AlbumsRequest,
    ) -> Result<Vec<PhotoPrismAlbum>, ApiError> {
        self.get_json("albums", &request).await
    }

    async fn search_photos(
        &self,
        request: PhotosRequest,
    ) -> Result<Vec<PhotoPrismPhoto>, ApiError> {
        self.get_json("photos", &request).await
    }
}

/// Many users type `localhost:2342` or paste a URL with a trailing slash;
/// both are accepted. The result always ends with `/` so that relative
/// joins keep any sub-path the server is mounted under.
fn normalize_root_url(raw: &str) -> Result<Url, ApiError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let with_scheme = if has_http_scheme(trimmed) {
        trimmed.to_string()
    } else {
        let normalized = format!("http://{trimmed}");
        warn!("Normalized server URL from '{}' to '{}'", raw, normalized);
        normalized
    };

    Ok(Url::parse(&format!("{with_scheme}/"))?)
}

/// Whether `raw` starts with `http://` or `https://`, in any case.
pub fn has_http_scheme(raw: &str) -> bool {
    raw.split_once("://").is_some_and(|(scheme, _)| {
        scheme.eq_ignore_ascii_case("http")
            || scheme.eq_ignore_ascii_case("https")
    })
}
