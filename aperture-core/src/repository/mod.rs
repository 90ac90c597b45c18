//! Repositories turning API pages into the gallery's collections.

pub mod albums;
pub mod collection;
pub mod gallery_media;

pub use albums::{AlbumsRepository, DEFAULT_ALBUM_PAGE_LIMIT};
pub use collection::{CollectionRepository, SimpleCollectionRepository};
pub use gallery_media::{DEFAULT_GALLERY_PAGE_LIMIT, GalleryMediaRepository};
