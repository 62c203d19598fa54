//! HTTP request inspection helpers.

use actix_web::HttpRequest;

/// Client address, honouring `Forwarded` / `X-Forwarded-For` when present
pub fn client_ip(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .unwrap_or("unknown")
        .to_string()
}

pub fn user_agent(req: &HttpRequest) -> Option<String> {
    req.headers()
        .get("User-Agent")
        .and_then(|h| h.to_str().ok())
        .map(str::to_string)
}

/// Label for paths that matched no resource
pub const UNMATCHED_ROUTE: &str = "unmatched";

/// Route pattern of the matched resource, or [`UNMATCHED_ROUTE`].
///
/// Raw request paths are never used as labels.
pub fn route_label(req: &HttpRequest) -> String {
    req.match_pattern()
        .unwrap_or_else(|| UNMATCHED_ROUTE.to_string())
}
