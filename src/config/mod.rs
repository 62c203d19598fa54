//! Configuration structures and loading utilities.
//!
//! Every structure loads from environment variables with `from_env()` and
//! falls back to the values of its `Default` implementation.

pub mod headers;
pub mod metrics;
pub mod server;
pub mod upstream;

pub use headers::*;
pub use metrics::*;
pub use server::*;
pub use upstream::*;
