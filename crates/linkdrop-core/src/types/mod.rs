//! Core type definitions used across the Linkdrop workspace.

pub mod share;

pub use share::{EntryKind, ShareEntry};
