//! # linkdrop-core
//!
//! Core crate for Linkdrop. Contains the configuration schemas, the
//! share-entry data model, the registry and expiry-scheduler traits,
//! and the unified error system.
//!
//! This crate has **no** internal dependencies on other Linkdrop crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
