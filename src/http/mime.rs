//! MIME type resolution module
//!
//! Returns the Content-Type for a file path. WebAssembly and JavaScript
//! go through an explicit override table that wins over default inference:
//! browsers refuse to compile streamed wasm, and to run module scripts,
//! served with a generic type.

use std::path::Path;

/// Extension overrides consulted before default inference.
pub const MIME_OVERRIDES: &[(&str, &str)] = &[
    ("wasm", "application/wasm"),
    ("js", "application/javascript"),
];

/// Resolve the Content-Type for a file path.
///
/// # Examples
/// ```
/// use isoserve::http::mime::content_type_for;
/// use std::path::Path;
/// assert_eq!(content_type_for(Path::new("module.wasm")), "application/wasm");
/// assert_eq!(content_type_for(Path::new("page.html")), "text/html");
/// assert_eq!(content_type_for(Path::new("blob")), "application/octet-stream");
/// ```
#[must_use]
pub fn content_type_for(path: &Path) -> &'static str {
    let extension = path.extension().and_then(|e| e.to_str());
    if let Some(ext) = extension {
        if let Some((_, mime)) = MIME_OVERRIDES.iter().find(|(name, _)| *name == ext) {
            return mime;
        }
    }
    default_content_type(extension)
}

/// Default extension-to-type inference, used when no override applies.
fn default_content_type(extension: Option<&str>) -> &'static str {
    match extension {
        // Text
        Some("html" | "htm") => "text/html",
        Some("css") => "text/css",
        Some("txt" | "md") => "text/plain",
        Some("xml") => "application/xml",
        Some("mjs") => "application/javascript",
        Some("json") => "application/json",

        // Images
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("ico") => "image/x-icon",
        Some("webp") => "image/webp",

        // Fonts
        Some("woff") => "font/woff",
        Some("woff2") => "font/woff2",
        Some("ttf") => "font/ttf",
        Some("otf") => "font/otf",

        // Documents
        Some("pdf") => "application/pdf",
        Some("zip") => "application/zip",
        Some("gz" | "gzip") => "application/gzip",
        Some("tar") => "application/x-tar",

        // Default
        _ => "application/octet-stream",
    }
}
