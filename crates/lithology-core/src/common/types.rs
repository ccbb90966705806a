//! Constants shared by the server and its clients.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

/// Port the server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 7777;

/// Default listen address, all interfaces on [`DEFAULT_PORT`].
pub const DEFAULT_SERVER_ADDR: SocketAddr =
    SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, DEFAULT_PORT));

/// Default endpoint used by clients, loopback on [`DEFAULT_PORT`].
pub fn default_endpoint() -> String {
    format!("http://{}:{DEFAULT_PORT}", Ipv4Addr::LOCALHOST)
}
