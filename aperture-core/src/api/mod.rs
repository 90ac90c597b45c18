//! PhotoPrism REST API access.

pub mod client;
pub mod service;
pub mod types;

pub use client::ApiClient;
pub use service::PhotoPrismService;
pub use types::{
    AlbumsRequest, PhotoPrismAlbum, PhotoPrismOrder, PhotoPrismPhoto,
    PhotosRequest,
};
