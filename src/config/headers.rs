//! Response header configuration: CORS plus a small hardening set.

use std::env;

/// Configuration for the response headers middleware
#[derive(Clone, Debug)]
pub struct ResponseHeadersConfig {
    /// Value of `Access-Control-Allow-Origin`
    pub allow_origin: String,
    pub content_type_options: bool,
    pub referrer_policy: String,
}

impl Default for ResponseHeadersConfig {
    fn default() -> Self {
        Self {
            allow_origin: "*".to_string(),
            content_type_options: true,
            referrer_policy: "no-referrer".to_string(),
        }
    }
}

impl ResponseHeadersConfig {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let allow_origin = env::var("CORS_ALLOW_ORIGIN").unwrap_or_else(|_| "*".to_string());

        let content_type_options = env::var("X_CONTENT_TYPE_OPTIONS")
            .map(|v| v.to_lowercase() == "true")
            .unwrap_or(true);

        let referrer_policy =
            env::var("REFERRER_POLICY").unwrap_or_else(|_| "no-referrer".to_string());

        Self {
            allow_origin,
            content_type_options,
            referrer_policy,
        }
    }
}
