//! # Aperture Core
//!
//! Core library for the Aperture gallery client. It turns a gallery search
//! into a PhotoPrism query and loads paginated server collections.
//!
//! ## Overview
//!
//! - **Search**: [`SearchConfig`] describes what to show and compiles into
//!   the server's search language with [`search::compile`]
//! - **Paging**: [`PagedCollectionLoader`] drives any cursor-paginated
//!   source until its last page
//! - **API access**: [`ApiClient`] talks to the PhotoPrism REST API behind
//!   the [`PhotoPrismService`] trait
//! - **Repositories**: albums and gallery media loaded through the pieces
//!   above
//!
//! ## Examples
//!
//! ```
//! use aperture_core::SearchConfig;
//! use aperture_model::MediaTypeName;
//!
//! let config = SearchConfig::default()
//!     .with_user_query("cat")
//!     .with_media_types([MediaTypeName::Image]);
//!
//! assert_eq!(
//!     config.photoprism_query().as_deref(),
//!     Some("cat type:image public:true")
//! );
//! ```
#![allow(missing_docs)]

pub mod api;
pub mod error;
pub mod paging;
pub mod repository;
pub mod search;
pub mod urls;

pub use api::{ApiClient, PhotoPrismService};
pub use error::{ApiError, PagingError, RepositoryError, Result};
pub use paging::{DataPage, PagedCollectionLoader};
pub use repository::{
    AlbumsRepository, CollectionRepository, GalleryMediaRepository,
    SimpleCollectionRepository,
};
pub use search::SearchConfig;
pub use urls::{
    MediaPreviewUrlFactory, PhotoPrismPreviewUrlFactory, ThumbnailSize,
};
