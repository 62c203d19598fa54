//! Data models for the weather proxy.
//!
//! `api` holds the public request/response shapes, `upstream` the provider
//! payloads they are derived from.

pub mod api;
pub mod upstream;

pub use api::*;
pub use upstream::*;
