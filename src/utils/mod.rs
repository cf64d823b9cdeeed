// Utils compartidos

pub mod browser;
pub mod constants;
pub mod format;
pub mod storage;

pub use constants::*;
pub use format::{display_or_none, format_price, truncate_description};
pub use storage::{BrowserStorage, MemoryStorage, StorageError, TokenStorage};
