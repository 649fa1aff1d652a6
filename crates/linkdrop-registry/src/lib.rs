//! # linkdrop-registry
//!
//! Share-entry state for Linkdrop:
//!
//! - **memory**: [`MemoryEntryRegistry`], a sharded in-process map with
//!   per-token exclusion for check-and-increment accounting
//! - **expiry**: [`TokioExpiryScheduler`], one tokio timer task per entry that
//!   removes it once its TTL elapses
//!
//! Nothing here survives a process restart.

pub mod expiry;
pub mod memory;

pub use expiry::TokioExpiryScheduler;
pub use memory::MemoryEntryRegistry;
