//! Serve configuration module
//!
//! The port is fixed at compile time and the root directory is resolved
//! once at startup; nothing here changes after the listener starts
//! accepting connections.

use std::io;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

/// Fixed listening port. Not overridable at runtime.
pub const PORT: u16 = 8000;

/// Index files tried, in order, when a directory is requested.
pub const INDEX_FILES: &[&str] = &["index.html", "index.htm"];

/// Immutable serve configuration, built once at startup and passed
/// explicitly into the request handler.
#[derive(Debug, Clone)]
pub struct ServeConfig {
    /// Canonicalized root directory every request path is resolved against.
    pub root: PathBuf,
}

impl ServeConfig {
    /// Resolve the configuration for the running binary.
    ///
    /// The root is the directory containing the server executable, so file
    /// resolution is anchored there regardless of where the server was
    /// invoked from.
    pub fn resolve() -> io::Result<Self> {
        let exe = std::env::current_exe()?;
        let root = exe.parent().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "executable has no parent directory",
            )
        })?;
        Self::with_root(root)
    }

    /// Build a configuration serving an explicit root directory.
    pub fn with_root(root: impl AsRef<Path>) -> io::Result<Self> {
        Ok(Self {
            root: root.as_ref().canonicalize()?,
        })
    }

    /// Address the listener binds: all interfaces, fixed port.
    #[must_use]
    pub fn socket_addr() -> SocketAddr {
        SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), PORT)
    }
}
