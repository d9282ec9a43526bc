//! Static file serving module
//!
//! Resolves request paths against the configured root directory and builds
//! file, directory listing, and redirect responses.

use crate::config::{ServeConfig, INDEX_FILES};
use crate::handler::router::RequestContext;
use crate::http::{self, mime};
use crate::logger;
use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Serve a request path relative to the configured root.
pub async fn serve_path(ctx: &RequestContext<'_>, config: &ServeConfig) -> Response<Full<Bytes>> {
    let Some(file_path) = resolve_path(ctx.path, &config.root) else {
        return http::build_404_response();
    };

    if file_path.is_dir() {
        return serve_directory(ctx, &file_path).await;
    }

    serve_file(ctx, &file_path).await
}

/// Map a request path onto the root directory.
///
/// The joined path is canonicalized and must stay under the canonical
/// root, so `..` segments can never escape it. Paths that fail to
/// canonicalize (usually missing files) resolve to `None` and surface as
/// 404s.
fn resolve_path(request_path: &str, root: &Path) -> Option<PathBuf> {
    let relative = request_path.trim_start_matches('/');
    let joined = root.join(relative);

    let canonical = joined.canonicalize().ok()?;
    if !canonical.starts_with(root) {
        logger::log_warning(&format!("Path traversal attempt blocked: {request_path}"));
        return None;
    }
    Some(canonical)
}

/// Serve a directory: redirect to the slash-terminated form, then try
/// index files, then fall back to a generated listing.
async fn serve_directory(ctx: &RequestContext<'_>, dir: &Path) -> Response<Full<Bytes>> {
    // Relative links inside the page only resolve against the
    // slash-terminated URL.
    if !ctx.path.ends_with('/') {
        return http::build_redirect_response(&format!("{}/", ctx.path));
    }

    for index_file in INDEX_FILES {
        let index_path = dir.join(index_file);
        if index_path.is_file() {
            return serve_file(ctx, &index_path).await;
        }
    }

    match build_listing(ctx.path, dir).await {
        Ok(html) => http::build_html_response(html, ctx.is_head),
        Err(e) => {
            logger::log_error(&format!(
                "Failed to list directory '{}': {e}",
                dir.display()
            ));
            http::build_404_response()
        }
    }
}

/// Read a file and build the 200 response for it.
async fn serve_file(ctx: &RequestContext<'_>, file_path: &Path) -> Response<Full<Bytes>> {
    match fs::read(file_path).await {
        Ok(content) => {
            let content_type = mime::content_type_for(file_path);
            http::build_file_response(content, content_type, ctx.is_head)
        }
        Err(e) if e.kind() == ErrorKind::PermissionDenied => {
            logger::log_warning(&format!(
                "Permission denied reading '{}'",
                file_path.display()
            ));
            http::build_403_response()
        }
        Err(e) => {
            // Missing files are ordinary 404s; anything else gets logged.
            if e.kind() != ErrorKind::NotFound {
                logger::log_error(&format!(
                    "Failed to read file '{}': {e}",
                    file_path.display()
                ));
            }
            http::build_404_response()
        }
    }
}

/// Generate an HTML index for a directory: entries sorted by name,
/// directories suffixed with a slash.
async fn build_listing(request_path: &str, dir: &Path) -> std::io::Result<String> {
    let mut entries = Vec::new();
    let mut read_dir = fs::read_dir(dir).await?;
    while let Some(entry) = read_dir.next_entry().await? {
        let mut name = entry.file_name().to_string_lossy().into_owned();
        if entry.file_type().await?.is_dir() {
            name.push('/');
        }
        entries.push(name);
    }
    entries.sort();

    let title = format!("Directory listing for {request_path}");
    let escaped_title = escape_html(&title);

    let mut html = String::new();
    html.push_str("<!DOCTYPE HTML>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>{escaped_title}</title>\n"));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>{escaped_title}</h1>\n<hr>\n<ul>\n"));
    for name in &entries {
        let escaped = escape_html(name);
        html.push_str(&format!("<li><a href=\"{escaped}\">{escaped}</a></li>\n"));
    }
    html.push_str("</ul>\n<hr>\n</body>\n</html>\n");
    Ok(html)
}

/// Minimal HTML escaping for listing entries.
fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            other => escaped.push(other),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs as std_fs;

    #[test]
    fn test_resolve_path_stays_under_root() {
        let dir = tempfile::tempdir().unwrap();
        std_fs::write(dir.path().join("page.html"), "x").unwrap();
        let root = dir.path().canonicalize().unwrap();

        let resolved = resolve_path("/page.html", &root).unwrap();
        assert!(resolved.starts_with(&root));
        assert!(resolved.ends_with("page.html"));
    }

    #[test]
    fn test_resolve_path_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().canonicalize().unwrap();
        assert!(resolve_path("/missing.txt", &root).is_none());
    }

    #[test]
    fn test_resolve_path_blocks_traversal() {
        let outer = tempfile::tempdir().unwrap();
        let root = outer.path().join("site");
        std_fs::create_dir(&root).unwrap();
        std_fs::write(outer.path().join("secret.txt"), "secret").unwrap();
        let root = root.canonicalize().unwrap();

        assert!(resolve_path("/../secret.txt", &root).is_none());
        assert!(resolve_path("/a/../../secret.txt", &root).is_none());
    }

    #[tokio::test]
    async fn test_listing_sorted_with_dir_suffix() {
        let dir = tempfile::tempdir().unwrap();
        std_fs::write(dir.path().join("b.txt"), "b").unwrap();
        std_fs::write(dir.path().join("a.txt"), "a").unwrap();
        std_fs::create_dir(dir.path().join("sub")).unwrap();

        let html = build_listing("/files/", dir.path()).await.unwrap();
        assert!(html.contains("Directory listing for /files/"));
        assert!(html.contains("<a href=\"a.txt\">a.txt</a>"));
        assert!(html.contains("<a href=\"sub/\">sub/</a>"));

        let a = html.find("a.txt").unwrap();
        let b = html.find("b.txt").unwrap();
        assert!(a < b);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("a&b"), "a&amp;b");
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("plain.txt"), "plain.txt");
    }
}
