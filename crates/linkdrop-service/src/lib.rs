//! # linkdrop-service
//!
//! Business logic for Linkdrop. Services own the registry and scheduler
//! handles and are shared with the HTTP layer behind `Arc`s.

pub mod path;
pub mod roots;
pub mod share;

pub use roots::RootsService;
pub use share::{AccessService, Decision, LinkService, RegisterShare, RegisteredShare, ShareService};
