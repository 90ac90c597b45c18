//! Configuration for Aperture clients.
//!
//! Settings come from an optional `aperture.toml`, overridden by
//! `APERTURE_*` environment variables, with a `.env` file loaded into the
//! environment first.
#![allow(missing_docs)]

pub mod loader;
pub mod models;
pub mod sources;

pub use loader::{ConfigLoad, ConfigLoader, ConfigLoaderOptions};
pub use loader::error::ConfigLoadError;
pub use models::{
    ApiConfig, Config, ConfigMetadata, GalleryConfig, LoggingConfig,
};
pub use sources::{EnvConfig, FileConfig};
