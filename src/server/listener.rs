// Listener module
// Creates the listening endpoint the single connection is accepted from

use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::net::TcpListener;

use crate::error::SetupError;

/// Create a `TcpListener` bound to `addr` with the given backlog.
///
/// Each step maps to its own [`SetupError`] variant. On failure the socket
/// is dropped, so no half-configured endpoint survives.
///
/// `SO_REUSEPORT` is deliberately left off: a port held by another listener
/// must fail to bind.
///
/// Must be called from within a Tokio runtime.
pub fn create_listener(addr: SocketAddr, backlog: i32) -> Result<TcpListener, SetupError> {
    // Create socket with appropriate domain (IPv4 or IPv6)
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket =
        Socket::new(domain, Type::STREAM, Some(Protocol::TCP)).map_err(SetupError::Socket)?;

    // Allows rebinding while a previous run's connection sits in TIME_WAIT
    #[cfg(unix)]
    socket.set_reuse_address(true).map_err(SetupError::Socket)?;

    // Set non-blocking mode for async compatibility
    socket.set_nonblocking(true).map_err(SetupError::Socket)?;

    socket.bind(&addr.into()).map_err(SetupError::Bind)?;
    socket.listen(backlog).map_err(SetupError::Listen)?;

    // Convert socket2::Socket to std::net::TcpListener, then to tokio::net::TcpListener
    let std_listener: std::net::TcpListener = socket.into();
    TcpListener::from_std(std_listener).map_err(SetupError::Runtime)
}
