use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::Result;

/// A remote collection that is always fetched as a whole.
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    type Item: Send + Sync;

    async fn fetch_collection(&self) -> Result<Vec<Self::Item>>;
}

/// Caches a [`CollectionRepository`] and coalesces overlapping loads.
///
/// Callers arriving while a load is in flight wait for it and get its result
/// instead of starting their own fetch. A failed load leaves nothing cached.
pub struct SimpleCollectionRepository<R: CollectionRepository> {
    source: R,
    cache: Mutex<Option<Arc<Vec<R::Item>>>>,
}

impl<R> std::fmt::Debug for SimpleCollectionRepository<R>
where
    R: CollectionRepository + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleCollectionRepository")
            .field("source", &self.source)
            .field(
                "cached",
                &self
                    .cache
                    .try_lock()
                    .map(|cache| cache.as_ref().map(|items| items.len()))
                    .ok(),
            )
            .finish()
    }
}

impl<R: CollectionRepository> SimpleCollectionRepository<R> {
    pub fn new(source: R) -> Self {
        Self {
            source,
            cache: Mutex::new(None),
        }
    }

    /// Cached collection, loading it first if there is none.
    pub async fn items(&self) -> Result<Arc<Vec<R::Item>>> {
        let mut cache = self.cache.lock().await;
        if let Some(items) = cache.as_ref() {
            return Ok(Arc::clone(items));
        }

        let items = Arc::new(self.source.fetch_collection().await?);
        debug!(count = items.len(), "collection loaded");
        *cache = Some(Arc::clone(&items));
        Ok(items)
    }

    /// Reloads the collection even if it is cached.
    pub async fn update(&self) -> Result<Arc<Vec<R::Item>>> {
        let mut cache = self.cache.lock().await;
        *cache = None;

        let items = Arc::new(self.source.fetch_collection().await?);
        debug!(count = items.len(), "collection reloaded");
        *cache = Some(Arc::clone(&items));
        Ok(items)
    }

    /// Drops the cached collection; the next [`items`](Self::items) call
    /// fetches it again.
    pub async fn invalidate(&self) {
        self.cache.lock().await.take();
    }

    pub async fn cached(&self) -> Option<Arc<Vec<R::Item>>> {
        self.cache.lock().await.clone()
    }

    pub fn source(&self) -> &R {
        &self.source
    }
}
