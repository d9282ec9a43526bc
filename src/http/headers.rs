//! Fixed response headers module
//!
//! Every response leaving the server carries the same CORS and
//! cross-origin isolation header set, regardless of method, status code,
//! or path. COOP/COEP make served pages cross-origin isolated, which
//! browsers require before exposing `SharedArrayBuffer` to WebAssembly.

use hyper::header::{HeaderMap, HeaderName, HeaderValue};

/// Headers appended to every response. Values are exact.
pub const FIXED_HEADERS: &[(&str, &str)] = &[
    ("access-control-allow-origin", "*"),
    ("access-control-allow-methods", "GET, POST, OPTIONS"),
    ("access-control-allow-headers", "Content-Type"),
    ("cross-origin-embedder-policy", "require-corp"),
    ("cross-origin-opener-policy", "same-origin"),
];

/// Insert the fixed header set, replacing any equal-named header the inner
/// handler already queued.
pub fn apply_isolation_headers(headers: &mut HeaderMap) {
    for &(name, value) in FIXED_HEADERS {
        headers.insert(
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        );
    }
}
