use std::sync::Arc;

use isoserve::config::ServeConfig;
use isoserve::logger;
use isoserve::server;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServeConfig::resolve()?;

    // Single-threaded runtime: requests are served strictly in arrival
    // order, one at a time.
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run(config))
}

async fn run(config: ServeConfig) -> Result<(), Box<dyn std::error::Error>> {
    let addr = ServeConfig::socket_addr();
    let listener = server::bind_listener(addr).map_err(|e| {
        logger::log_error(&format!("Failed to bind {addr}: {e}"));
        e
    })?;

    logger::log_server_start(&config.root);

    let config = Arc::new(config);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        // Awaited inline: the next connection is not
                        // accepted until this one is fully served.
                        server::serve_connection(stream, peer_addr, Arc::clone(&config)).await;
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = tokio::signal::ctrl_c() => {
                logger::log_server_stop();
                break;
            }
        }
    }

    Ok(())
}
