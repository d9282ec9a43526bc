//! Request routing dispatch module
//!
//! Entry point for HTTP request processing: method validation, dispatch to
//! static file resolution, and the composition boundary where the fixed
//! CORS/isolation header set is appended to every outgoing response.

use crate::config::ServeConfig;
use crate::handler::static_files;
use crate::http;
use crate::logger;
use http_body_util::Full;
use hyper::body::{Body as _, Bytes};
use hyper::{Method, Request, Response};
use std::convert::Infallible;
use std::net::SocketAddr;

/// Request context encapsulating information needed for request processing
pub struct RequestContext<'a> {
    pub path: &'a str,
    pub is_head: bool,
}

/// Main entry point for HTTP request handling.
///
/// Every response leaving this function carries the fixed header set,
/// whatever its method, status code, or path. The request body is never
/// read, so any body type works.
pub async fn handle_request<B>(
    req: Request<B>,
    config: &ServeConfig,
    peer_addr: SocketAddr,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    let mut response = dispatch(&method, &path, config).await;
    http::apply_isolation_headers(response.headers_mut());

    logger::log_access(
        &peer_addr,
        method.as_str(),
        &path,
        response.status().as_u16(),
        response.body().size_hint().exact(),
    );

    Ok(response)
}

/// Dispatch by method: GET/HEAD hit the filesystem, OPTIONS is answered
/// for preflight, everything else is rejected.
async fn dispatch(method: &Method, path: &str, config: &ServeConfig) -> Response<Full<Bytes>> {
    match *method {
        Method::GET | Method::HEAD => {
            let ctx = RequestContext {
                path,
                is_head: *method == Method::HEAD,
            };
            static_files::serve_path(&ctx, config).await
        }
        Method::OPTIONS => http::build_options_response(),
        _ => {
            logger::log_warning(&format!("Method not allowed: {method}"));
            http::build_405_response()
        }
    }
}
