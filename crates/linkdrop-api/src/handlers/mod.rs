//! HTTP handlers grouped by concern.

pub mod access;
pub mod health;
pub mod roots;
pub mod share;
