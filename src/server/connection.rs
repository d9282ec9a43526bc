// Connection handling module
// Serves a single accepted TCP connection to completion

use std::net::SocketAddr;
use std::sync::Arc;

use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use tokio::net::TcpStream;

use crate::config::ServeConfig;
use crate::handler;
use crate::logger;

/// Serve one connection until the peer closes.
///
/// Keep-alive is disabled: the accept loop awaits this function before
/// accepting the next connection, and a held-open connection would stall
/// every other client.
pub async fn serve_connection(stream: TcpStream, peer_addr: SocketAddr, config: Arc<ServeConfig>) {
    let io = TokioIo::new(stream);

    let mut builder = http1::Builder::new();
    builder.keep_alive(false);

    let conn = builder.serve_connection(
        io,
        service_fn(move |req| {
            let config = Arc::clone(&config);
            async move { handler::handle_request(req, &config, peer_addr).await }
        }),
    );

    // A peer disconnecting mid-response lands here; log it and move on.
    if let Err(err) = conn.await {
        logger::log_connection_error(&err);
    }
}
