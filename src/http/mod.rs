//! HTTP protocol layer module
//!
//! MIME resolution, the fixed response header set, and response builders,
//! decoupled from path resolution and business logic.

pub mod headers;
pub mod mime;
pub mod response;

// Re-export commonly used functions
pub use headers::apply_isolation_headers;
pub use response::{
    build_403_response, build_404_response, build_405_response, build_file_response,
    build_html_response, build_options_response, build_redirect_response,
};
