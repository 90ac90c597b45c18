pub mod config;
pub mod query;

pub use config::SearchConfig;
pub use query::{PHOTOPRISM_DATE_FORMAT, compile, format_photoprism_date};
