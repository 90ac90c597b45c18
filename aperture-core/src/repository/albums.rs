use std::sync::Arc;

use aperture_model::Album;
use async_trait::async_trait;
use futures::future::try_join_all;
use tracing::debug;

use super::collection::CollectionRepository;
use crate::api::{
    AlbumsRequest, PhotoPrismAlbum, PhotoPrismOrder, PhotoPrismService,
};
use crate::error::{RepositoryError, Result};
use crate::paging::{DataPage, PagedCollectionLoader, offset_from_cursor};
use crate::urls::{MediaPreviewUrlFactory, ThumbnailSize};

pub const DEFAULT_ALBUM_PAGE_LIMIT: usize = 30;

/// Albums the gallery content can be filtered by, combined from several
/// album types in the given order, e.g. `["album", "folder"]`.
#[derive(Debug, Clone)]
pub struct AlbumsRepository {
    service: Arc<dyn PhotoPrismService>,
    preview_url_factory: Arc<dyn MediaPreviewUrlFactory>,
    types: Vec<String>,
    page_limit: usize,
}

impl AlbumsRepository {
    pub fn new(
        service: Arc<dyn PhotoPrismService>,
        preview_url_factory: Arc<dyn MediaPreviewUrlFactory>,
        types: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            service,
            preview_url_factory,
            types: types.into_iter().map(Into::into).collect(),
            page_limit: DEFAULT_ALBUM_PAGE_LIMIT,
        }
    }

    pub fn with_page_limit(mut self, page_limit: usize) -> Self {
        self.page_limit = page_limit.max(1);
        self
    }

    pub fn types(&self) -> &[String] {
        &self.types
    }

    async fn albums_of_type(&self, album_type: &str) -> Result<Vec<Album>> {
        let page_limit = self.page_limit;
        let service = Arc::clone(&self.service);
        let owned_type = album_type.to_string();

        let loader = PagedCollectionLoader::new(move |cursor: Option<String>| {
            let service = Arc::clone(&service);
            let album_type = owned_type.clone();
            async move {
                let offset = offset_from_cursor(cursor.as_deref())?;
                let items = service
                    .get_albums(AlbumsRequest {
                        count: page_limit,
                        offset,
                        order: PhotoPrismOrder::Favorites,
                        album_type,
                        q: None,
                    })
                    .await?;

                Ok::<_, RepositoryError>(DataPage::from_offset(
                    items, offset, page_limit,
                ))
            }
        });

        let albums = loader.load_all().await?;
        debug!(album_type, count = albums.len(), "albums loaded");

        Ok(albums
            .into_iter()
            .map(|source| self.to_album(source))
            .collect())
    }

    fn to_album(&self, source: PhotoPrismAlbum) -> Album {
        let thumbnail_url = self
            .preview_url_factory
            .thumbnail_url(&source.thumb, ThumbnailSize::Tile500);

        Album {
            uid: source.uid,
            title: source.title,
            album_type: source.album_type,
            favorite: source.favorite,
            path: source.path,
            thumbnail_hash: source.thumb,
            thumbnail_url,
        }
    }
}

#[async_trait]
impl CollectionRepository for AlbumsRepository {
    type Item = Album;

    /// Types are loaded concurrently, each through its own sequential page
    /// run, and concatenated in type order. Any failure fails the whole
    /// collection.
    async fn fetch_collection(&self) -> Result<Vec<Album>> {
        let per_type =
            try_join_all(self.types.iter().map(|t| self.albums_of_type(t)))
                .await?;

        Ok(per_type.into_iter().flatten().collect())
    }
}
