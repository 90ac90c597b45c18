use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use aperture_model::GalleryMedia;
use futures::{Stream, StreamExt};
use tracing::debug;

use crate::api::{PhotoPrismOrder, PhotoPrismService, PhotosRequest};
use crate::error::{RepositoryError, Result};
use crate::paging::{DataPage, PagedCollectionLoader, offset_from_cursor};
use crate::search::SearchConfig;

pub const DEFAULT_GALLERY_PAGE_LIMIT: usize = 80;

type PageFuture =
    Pin<Box<dyn Future<Output = Result<DataPage<GalleryMedia>>> + Send>>;
type PageProvider = Box<dyn FnMut(Option<String>) -> PageFuture + Send>;

/// Gallery content matching one search.
///
/// The query is compiled once on construction. The server's date filter is
/// approximate, so every page is post-filtered by the items' local taken-at
/// day before it reaches the caller. Whether a page is the last one is
/// decided from the unfiltered server page.
#[derive(Debug, Clone)]
pub struct GalleryMediaRepository {
    service: Arc<dyn PhotoPrismService>,
    search_config: SearchConfig,
    query: Option<String>,
    page_limit: usize,
    order: PhotoPrismOrder,
}

impl GalleryMediaRepository {
    pub fn new(
        service: Arc<dyn PhotoPrismService>,
        search_config: SearchConfig,
    ) -> Self {
        let query = search_config.photoprism_query();
        debug!(query = query.as_deref(), "compiled gallery search");

        Self {
            service,
            search_config,
            query,
            page_limit: DEFAULT_GALLERY_PAGE_LIMIT,
            order: PhotoPrismOrder::Newest,
        }
    }

    pub fn with_page_limit(mut self, page_limit: usize) -> Self {
        self.page_limit = page_limit.max(1);
        self
    }

    pub fn with_order(mut self, order: PhotoPrismOrder) -> Self {
        self.order = order;
        self
    }

    pub fn search_config(&self) -> &SearchConfig {
        &self.search_config
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    fn loader(&self) -> PagedCollectionLoader<PageProvider> {
        let service = Arc::clone(&self.service);
        let query = self.query.clone();
        let page_limit = self.page_limit;
        let order = self.order;
        let before_local = self.search_config.before_local;

        let provider: PageProvider =
            Box::new(move |cursor: Option<String>| -> PageFuture {
                let service = Arc::clone(&service);
                let query = query.clone();
                Box::pin(async move {
                    let offset = offset_from_cursor(cursor.as_deref())?;
                    let photos = service
                        .search_photos(PhotosRequest {
                            count: page_limit,
                            offset,
                            order,
                            q: query,
                            merged: true,
                        })
                        .await?;

                    let mut page =
                        DataPage::from_offset(photos, offset, page_limit)
                            .try_map_items(|photo| {
                                GalleryMedia::try_from(photo).map_err(
                                    |source| RepositoryError::InvalidEntity {
                                        entity: "photo",
                                        source,
                                    },
                                )
                            })?;

                    if let Some(before_local) = before_local {
                        page.items
                            .retain(|media| media.is_taken_before(before_local));
                    }

                    Ok(page)
                })
            });

        PagedCollectionLoader::new(provider)
    }

    /// Lazily fetched, post-filtered pages.
    pub fn pages(
        &self,
    ) -> impl Stream<Item = Result<DataPage<GalleryMedia>>> + Send + use<> {
        self.loader().into_pages()
    }

    /// All matching media, in server order.
    pub async fn load_all(&self) -> Result<Vec<GalleryMedia>> {
        self.loader().load_all().await
    }

    /// At most `limit` matching media; stops requesting pages once enough
    /// have been collected.
    pub async fn load_first(&self, limit: usize) -> Result<Vec<GalleryMedia>> {
        let mut collected = Vec::new();
        let pages = self.pages();
        futures::pin_mut!(pages);

        while collected.len() < limit {
            match pages.next().await {
                Some(page) => collected.extend(page?.items),
                None => break,
            }
        }

        collected.truncate(limit);
        Ok(collected)
    }
}
