//! Seam between repositories and the HTTP transport.

use async_trait::async_trait;
use std::fmt::Debug;

use super::types::{
    AlbumsRequest, PhotoPrismAlbum, PhotoPrismPhoto, PhotosRequest,
};
use crate::error::ApiError;

/// Listing endpoints of a PhotoPrism server.
#[async_trait]
pub trait PhotoPrismService: Send + Sync + Debug {
    /// One count/offset page of albums of a single type.
    async fn get_albums(
        &self,
        request: AlbumsRequest,
    ) -> Result<Vec<PhotoPrismAlbum>, ApiError>;

    /// One count/offset page of search results.
    async fn search_photos(
        &self,
        request: PhotosRequest,
    ) -> Result<Vec<PhotoPrismPhoto>, ApiError>;
}
