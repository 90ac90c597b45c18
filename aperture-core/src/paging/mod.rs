pub mod loader;
pub mod offset;
pub mod page;

pub use loader::{PagedCollectionLoader, load_all};
pub use offset::offset_from_cursor;
pub use page::DataPage;
