use std::future::Future;

use futures::{Stream, StreamExt};
use tracing::debug;

use super::page::DataPage;

/// Drives a cursor-paginated source until it reports its last page.
///
/// The page provider receives `None` for the first page and the previous
/// page's `next_cursor` afterwards. Fetches are strictly sequential since
/// each cursor is only known once the previous fetch resolves. The loader
/// keeps no state between runs and never retries: the first error ends the
/// run and is handed to the caller as is.
///
/// A provider that never reports a last page makes the run endless.
///
/// Dropping the returned future or stream cancels the in-flight fetch and no
/// further pages are requested.
#[derive(Debug, Clone)]
pub struct PagedCollectionLoader<F> {
    page_provider: F,
}

impl<F, Fut, T, E> PagedCollectionLoader<F>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<DataPage<T>, E>>,
{
    pub fn new(page_provider: F) -> Self {
        Self { page_provider }
    }

    /// Lazily fetched pages, for callers that may stop early.
    ///
    /// Ends after the last page or right after the first error.
    pub fn into_pages(self) -> impl Stream<Item = Result<DataPage<T>, E>> {
        let mut page_provider = self.page_provider;

        async_stream::stream! {
            let mut cursor: Option<String> = None;
            let mut fetched = 0usize;

            loop {
                match page_provider(cursor.take()).await {
                    Ok(page) => {
                        fetched += 1;
                        debug!(
                            page = fetched,
                            items = page.items.len(),
                            is_last = page.is_last,
                            "fetched collection page"
                        );

                        let next_cursor =
                            (!page.is_last).then(|| page.next_cursor.clone());
                        yield Ok(page);

                        match next_cursor {
                            Some(next) => cursor = Some(next),
                            None => break,
                        }
                    }
                    Err(err) => {
                        debug!(page = fetched + 1, "collection page fetch failed");
                        yield Err(err);
                        break;
                    }
                }
            }
        }
    }

    /// Loads every page and concatenates the items in fetch order.
    ///
    /// All or nothing: on error the items fetched so far are discarded.
    pub async fn load_all(self) -> Result<Vec<T>, E> {
        let pages = self.into_pages();
        futures::pin_mut!(pages);

        let mut items = Vec::new();
        while let Some(page) = pages.next().await {
            items.extend(page?.items);
        }

        Ok(items)
    }
}

/// Shorthand for [`PagedCollectionLoader::load_all`].
pub async fn load_all<F, Fut, T, E>(page_provider: F) -> Result<Vec<T>, E>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<DataPage<T>, E>>,
{
    PagedCollectionLoader::new(page_provider).load_all().await
}
