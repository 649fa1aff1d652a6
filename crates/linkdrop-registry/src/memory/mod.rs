//! In-memory registry backend.

pub mod store;

pub use store::MemoryEntryRegistry;
