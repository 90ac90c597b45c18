#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use aperture_core::ApiError;
use aperture_core::api::{
    AlbumsRequest, PhotoPrismAlbum, PhotoPrismPhoto, PhotoPrismService,
    PhotosRequest,
};
use async_trait::async_trait;

/// In-memory PhotoPrism serving count/offset slices of fixed listings.
#[derive(Debug, Default)]
pub struct FakePhotoPrism {
    albums: HashMap<String, Vec<PhotoPrismAlbum>>,
    photos: Vec<PhotoPrismPhoto>,
    fail_on_call: Option<usize>,
    calls: AtomicUsize,
    album_requests: Mutex<Vec<AlbumsRequest>>,
    photo_requests: Mutex<Vec<PhotosRequest>>,
}

impl FakePhotoPrism {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_albums(
        mut self,
        album_type: &str,
        albums: Vec<PhotoPrismAlbum>,
    ) -> Self {
        self.albums.insert(album_type.to_string(), albums);
        self
    }

    pub fn with_photos(mut self, photos: Vec<PhotoPrismPhoto>) -> Self {
        self.photos = photos;
        self
    }

    /// Fails the `call`-th request (1-based) counting both endpoints.
    pub fn failing_on_call(mut self, call: usize) -> Self {
        self.fail_on_call = Some(call);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn album_requests(&self) -> Vec<AlbumsRequest> {
        self.album_requests.lock().unwrap().clone()
    }

    pub fn photo_requests(&self) -> Vec<PhotosRequest> {
        self.photo_requests.lock().unwrap().clone()
    }

    fn register_call(&self) -> Result<(), ApiError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_call == Some(call) {
            return Err(ApiError::Status {
                status: 500,
                body: "boom".to_string(),
            });
        }
        Ok(())
    }
}

fn slice<T: Clone>(items: &[T], offset: usize, count: usize) -> Vec<T> {
    items.iter().skip(offset).take(count).cloned().collect()
}

#[async_trait]
impl PhotoPrismService for FakePhotoPrism {
    async fn get_albums(
        &self,
        request: AlbumsRequest,
    ) -> Result<Vec<PhotoPrismAlbum>, ApiError> {
        self.album_requests.lock().unwrap().push(request.clone());
        self.register_call()?;

        Ok(self
            .albums
            .get(&request.album_type)
            .map(|albums| slice(albums, request.offset, request.count))
            .unwrap_or_default())
    }

    async fn search_photos(
        &self,
        request: PhotosRequest,
    ) -> Result<Vec<PhotoPrismPhoto>, ApiError> {
        self.photo_requests.lock().unwrap().push(request.clone());
        self.register_call()?;

        Ok(slice(&self.photos, request.offset, request.count))
    }
}

pub fn album(uid: &str, album_type: &str) -> PhotoPrismAlbum {
    PhotoPrismAlbum {
        uid: uid.to_string(),
        title: format!("Album {uid}"),
        album_type: album_type.to_string(),
        favorite: false,
        path: String::new(),
        thumb: format!("thumb-{uid}"),
    }
}

pub fn albums(
    prefix: &str,
    album_type: &str,
    count: usize,
) -> Vec<PhotoPrismAlbum> {
    (0..count)
        .map(|i| album(&format!("{prefix}{i}"), album_type))
        .collect()
}

pub fn photo(uid: &str, taken_at_local: &str) -> PhotoPrismPhoto {
    PhotoPrismPhoto {
        uid: uid.to_string(),
        media_type: "image".to_string(),
        taken_at_local: taken_at_local.to_string(),
        title: String::new(),
        hash: format!("hash-{uid}"),
        width: 4032,
        height: 3024,
    }
}

/// `count` photos, one per day counting back from 2023-05-31.
pub fn photos(count: usize) -> Vec<PhotoPrismPhoto> {
    (0..count)
        .map(|i| {
            let day = chrono::NaiveDate::from_ymd_opt(2023, 5, 31).unwrap()
                - chrono::Days::new(i as u64);
            photo(
                &format!("p{i}"),
                &format!("{}T12:00:00Z", day.format("%Y-%m-%d")),
            )
        })
        .collect()
}
