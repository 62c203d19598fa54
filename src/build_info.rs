//! Build metadata emitted by the build script.

/// Short git commit of the build, or "unknown" outside a git checkout
pub fn commit() -> &'static str {
    option_env!("VERGEN_GIT_SHA").unwrap_or("unknown")
}

/// RFC 3339 build timestamp, or "unknown" when metadata generation failed
pub fn build_time() -> &'static str {
    option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown")
}

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
