//! Core traits defined in `linkdrop-core` and implemented by other crates.

pub mod registry;
pub mod scheduler;

pub use registry::{EntryRegistry, Retention};
pub use scheduler::ExpiryScheduler;
