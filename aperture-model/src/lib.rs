//! Core data model definitions shared across Aperture crates.
#![allow(missing_docs)]

pub use ::chrono;

pub mod album;
pub mod error;
pub mod media;
pub mod media_type;
pub mod person;

pub use album::Album;
pub use error::{ModelError, Result as ModelResult};
pub use media::GalleryMedia;
pub use media_type::MediaTypeName;
pub use person::PersonId;
