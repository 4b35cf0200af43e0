pub mod cache_entry;
pub mod display_frame;
pub mod symbol_entry;

pub use cache_entry::CacheEntry;
pub use display_frame::DisplayFrame;
pub use symbol_entry::SymbolEntry;
