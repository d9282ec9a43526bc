//! HTTP response building module
//!
//! Builders for the response shapes the server produces, decoupled from
//! path resolution. Builders never panic; if header assembly fails they
//! fall back to a bare response and log the error.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

/// Build a 200 response carrying a file's bytes.
///
/// HEAD requests keep the headers, including Content-Length, but send an
/// empty body.
pub fn build_file_response(
    data: Vec<u8>,
    content_type: &str,
    is_head: bool,
) -> Response<Full<Bytes>> {
    let content_length = data.len();
    let body = if is_head { Bytes::new() } else { Bytes::from(data) };

    Response::builder()
        .status(200)
        .header("Content-Type", content_type)
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("200", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a generated HTML response (directory listings).
pub fn build_html_response(content: String, is_head: bool) -> Response<Full<Bytes>> {
    let content_length = content.len();
    let body = if is_head {
        Bytes::new()
    } else {
        Bytes::from(content)
    };

    Response::builder()
        .status(200)
        .header("Content-Type", "text/html; charset=utf-8")
        .header("Content-Length", content_length)
        .body(Full::new(body))
        .unwrap_or_else(|e| {
            log_build_error("HTML", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build 404 Not Found response
pub fn build_404_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(404)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("404 Not Found")))
        .unwrap_or_else(|e| {
            log_build_error("404", &e);
            Response::new(Full::new(Bytes::from("404 Not Found")))
        })
}

/// Build 403 Forbidden response
pub fn build_403_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(403)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("403 Forbidden")))
        .unwrap_or_else(|e| {
            log_build_error("403", &e);
            Response::new(Full::new(Bytes::from("403 Forbidden")))
        })
}

/// Build 405 Method Not Allowed response
pub fn build_405_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(405)
        .header("Content-Type", "text/plain")
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::from("405 Method Not Allowed")))
        .unwrap_or_else(|e| {
            log_build_error("405", &e);
            Response::new(Full::new(Bytes::from("405 Method Not Allowed")))
        })
}

/// Build the response to an OPTIONS preflight: 204 with an empty body.
///
/// The CORS headers preflight clients look for are appended by the router
/// along with every other response.
pub fn build_options_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(204)
        .header("Allow", "GET, HEAD, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap_or_else(|e| {
            log_build_error("OPTIONS", &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Build a 301 redirect, used for directory requests missing the trailing
/// slash.
pub fn build_redirect_response(target: &str) -> Response<Full<Bytes>> {
    Response::builder()
        .status(301)
        .header("Location", target)
        .header("Content-Type", "text/plain")
        .body(Full::new(Bytes::from("Redirecting...")))
        .unwrap_or_else(|e| {
            log_build_error("301", &e);
            Response::new(Full::new(Bytes::from("Redirecting...")))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_response_carries_length_and_type() {
        let response = build_file_response(b"hello".to_vec(), "text/plain", false);
        assert_eq!(response.status(), 200);
        assert_eq!(response.headers()["Content-Type"], "text/plain");
        assert_eq!(response.headers()["Content-Length"], "5");
    }

    #[test]
    fn test_head_keeps_length_drops_body() {
        let response = build_file_response(b"hello".to_vec(), "text/plain", true);
        assert_eq!(response.headers()["Content-Length"], "5");

        let body = collect_body(response);
        assert!(body.is_empty());
    }

    #[test]
    fn test_error_statuses() {
        assert_eq!(build_404_response().status(), 404);
        assert_eq!(build_403_response().status(), 403);
        assert_eq!(build_405_response().status(), 405);
        assert_eq!(build_405_response().headers()["Allow"], "GET, HEAD, OPTIONS");
    }

    #[test]
    fn test_options_is_no_content() {
        let response = build_options_response();
        assert_eq!(response.status(), 204);
        assert_eq!(response.headers()["Allow"], "GET, HEAD, OPTIONS");
    }

    #[test]
    fn test_redirect_sets_location() {
        let response = build_redirect_response("/docs/");
        assert_eq!(response.status(), 301);
        assert_eq!(response.headers()["Location"], "/docs/");
    }

    fn collect_body(response: Response<Full<Bytes>>) -> Bytes {
        use http_body_util::BodyExt;

        let runtime = tokio::runtime::Builder::new_current_thread()
            .build()
            .unwrap();
        runtime
            .block_on(response.into_body().collect())
            .unwrap()
            .to_bytes()
    }
}
