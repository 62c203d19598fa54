//! Custom middleware implementations for the API.

pub mod headers;
pub mod metrics;
pub mod request_id;

pub use headers::*;
pub use metrics::*;
pub use request_id::*;
