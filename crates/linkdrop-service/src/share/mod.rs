//! Share links: token minting, registration, and access.

pub mod access;
pub mod link;
pub mod service;

pub use access::{AccessService, Decision};
pub use link::LinkService;
pub use service::{RegisterShare, RegisteredShare, ShareService};
