//! Logger module
//!
//! Stdout/stderr logging for the server: startup banner, access log lines
//! in Common Log Format, and error/warning output.

use chrono::Local;
use std::net::SocketAddr;
use std::path::Path;

use crate::config::PORT;

/// Print the startup banner with the listening URL and exit instructions.
pub fn log_server_start(root: &Path) {
    println!("======================================");
    println!("Server running at http://localhost:{PORT}/");
    println!("Serving directory: {}", root.display());
    println!("Press Ctrl+C to stop the server");
    println!("======================================\n");
}

/// Log one request in Common Log Format.
///
/// `body_bytes` is `None` when the response body size is unknown; it is
/// printed as `-` per the format.
pub fn log_access(
    peer_addr: &SocketAddr,
    method: &str,
    path: &str,
    status: u16,
    body_bytes: Option<u64>,
) {
    let bytes = body_bytes.map_or_else(|| "-".to_string(), |b| b.to_string());
    println!(
        "{} - - [{}] \"{} {} HTTP/1.1\" {} {}",
        peer_addr.ip(),
        Local::now().format("%d/%b/%Y:%H:%M:%S %z"),
        method,
        path,
        status,
        bytes
    );
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    eprintln!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    eprintln!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    eprintln!("[WARN] {message}");
}

pub fn log_server_stop() {
    println!("\nServer stopped");
}
