use std::sync::Arc;

use aperture_core::api::PhotoPrismOrder;
use aperture_core::{
    AlbumsRepository, ApiError, CollectionRepository,
    PhotoPrismPreviewUrlFactory, RepositoryError, SimpleCollectionRepository,
};

use crate::support::{FakePhotoPrism, albums};

mod support;

fn repository(service: Arc<FakePhotoPrism>) -> AlbumsRepository {
    AlbumsRepository::new(
        service,
        Arc::new(PhotoPrismPreviewUrlFactory::new(
            "https://photos.example.com/api",
            "public",
        )),
        ["album", "folder"],
    )
}

#[tokio::test]
async fn concatenates_types_in_order() {
    let service = Arc::new(
        FakePhotoPrism::new()
            .with_albums("album", albums("a", "album", 35))
            .with_albums("folder", albums("f", "folder", 2)),
    );

    let loaded = repository(service.clone()).fetch_collection().await.unwrap();

    assert_eq!(loaded.len(), 37);
    assert!(loaded[..35].iter().all(|album| album.album_type == "album"));
    assert!(loaded[35..].iter().all(|album| album.album_type == "folder"));
    assert_eq!(loaded[0].uid, "a0");
    assert_eq!(loaded[34].uid, "a34");
    assert_eq!(loaded[35].uid, "f0");
}

#[tokio::test]
async fn pages_each_type_by_favorites() {
    let service = Arc::new(
        FakePhotoPrism::new()
            .with_albums("album", albums("a", "album", 60))
            .with_albums("folder", albums("f", "folder", 5)),
    );

    repository(service.clone()).fetch_collection().await.unwrap();

    let requests = service.album_requests();
    let album_offsets: Vec<usize> = requests
        .iter()
        .filter(|request| request.album_type == "album")
        .map(|request| request.offset)
        .collect();
    let folder_offsets: Vec<usize> = requests
        .iter()
        .filter(|request| request.album_type == "folder")
        .map(|request| request.offset)
        .collect();

    // A full page is never taken as the last one.
    assert_eq!(album_offsets, vec![0, 30, 60]);
    assert_eq!(folder_offsets, vec![0]);
    assert!(requests.iter().all(|request| request.count == 30
        && request.order == PhotoPrismOrder::Favorites
        && request.q.is_none()));
}

#[tokio::test]
async fn builds_thumbnail_urls_from_the_cover_hash() {
    let service = Arc::new(
        FakePhotoPrism::new().with_albums("album", albums("a", "album", 1)),
    );

    let loaded = repository(service).fetch_collection().await.unwrap();

    assert_eq!(loaded[0].thumbnail_hash, "thumb-a0");
    assert_eq!(
        loaded[0].thumbnail_url,
        "https://photos.example.com/api/v1/t/thumb-a0/public/tile_500"
    );
}

#[tokio::test]
async fn any_failing_type_fails_the_collection() {
    let service = Arc::new(
        FakePhotoPrism::new()
            .with_albums("album", albums("a", "album", 3))
            .with_albums("folder", albums("f", "folder", 3))
            .failing_on_call(2),
    );
    let cached = SimpleCollectionRepository::new(repository(service));

    let error = cached.items().await.unwrap_err();

    assert!(matches!(
        error,
        RepositoryError::Api(ApiError::Status { status: 500, .. })
    ));
    assert!(cached.cached().await.is_none());
}

#[tokio::test]
async fn cached_collection_is_fetched_once() {
    let service = Arc::new(
        FakePhotoPrism::new().with_albums("album", albums("a", "album", 3)),
    );
    let cached = SimpleCollectionRepository::new(repository(service.clone()));

    let (first, second) = tokio::join!(cached.items(), cached.items());

    assert_eq!(first.unwrap().len(), 3);
    assert_eq!(second.unwrap().len(), 3);
    // One page per type.
    assert_eq!(service.calls(), 2);
}
