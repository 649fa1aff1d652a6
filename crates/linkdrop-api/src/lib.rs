//! # linkdrop-api
//!
//! HTTP transport for Linkdrop built on Axum.
//!
//! Translates requests into share registration and access decisions, and
//! decisions into responses: file streams, directory listings, and
//! 403/404 errors.

pub mod download;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod listing;
pub mod middleware;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
