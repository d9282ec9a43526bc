//! Cross-origin-isolated static file server.
//!
//! Serves files from a fixed root directory over HTTP/1.1, attaching CORS
//! and cross-origin isolation headers (COOP/COEP) to every response so that
//! WebAssembly modules using shared memory can run in browsers. WebAssembly
//! and JavaScript files are served with explicit MIME types regardless of
//! what default inference would produce.

pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
pub mod server;
