// Listener construction module
// Builds the TCP listener handed to the accept loop

use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

/// Create the listening socket for `addr`.
///
/// The socket is built through `socket2` so `SO_REUSEADDR` can be set
/// before binding; a restart right after an interrupt would otherwise hit
/// the old socket still in TIME_WAIT. Bind failure is returned to the
/// caller, where it is fatal — the server never retries.
pub fn bind_listener(addr: std::net::SocketAddr) -> std::io::Result<TcpListener> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;

    // Non-blocking mode for async compatibility
    socket.set_nonblocking(true)?;

    socket.bind(&addr.into())?;
    socket.listen(128)?;

    // Convert socket2::Socket to std::net::TcpListener, then to tokio::net::TcpListener
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bind_ephemeral_port() {
        let listener = bind_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = listener.local_addr().unwrap();
        assert_ne!(addr.port(), 0);
    }

    #[tokio::test]
    async fn test_second_bind_on_same_port_fails() {
        let first = bind_listener("127.0.0.1:0".parse().unwrap()).unwrap();
        let addr = first.local_addr().unwrap();

        assert!(bind_listener(addr).is_err());
    }
}
