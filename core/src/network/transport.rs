//! The socket-level operations a probe is made of.
//!
//! [`Transport`] splits a connect probe into its three resource-acquiring
//! steps so each one can fail on its own and be substituted in tests. Every
//! value handed out (resolved endpoint, socket, connection) is owned, so it is
//! released when dropped on whichever path leaves the probe.

use std::io;
use std::net::{SocketAddr, SocketAddrV4};

use async_trait::async_trait;
use portr_common::network::target::TargetHost;
use tokio::net::{TcpSocket, TcpStream};

#[async_trait]
pub trait Transport: Send + Sync {
    type Socket: Send;
    type Connection: Send;

    /// Resolves the host to the first IPv4 TCP endpoint for `port`.
    async fn resolve(&self, host: &TargetHost, port: u16) -> io::Result<SocketAddrV4>;

    /// Creates an unconnected socket able to reach `addr`.
    fn open_socket(&self, addr: &SocketAddrV4) -> io::Result<Self::Socket>;

    /// Consumes the socket and attempts the handshake.
    async fn connect(
        &self,
        socket: Self::Socket,
        addr: SocketAddrV4,
    ) -> io::Result<Self::Connection>;
}

/// Plain TCP over the tokio reactor.
#[derive(Debug, Clone, Copy, Default)]
pub struct TcpTransport;

#[async_trait]
impl Transport for TcpTransport {
    type Socket = TcpSocket;
    type Connection = TcpStream;

    async fn resolve(&self, host: &TargetHost, port: u16) -> io::Result<SocketAddrV4> {
        match host {
            TargetHost::Ipv4(addr) => Ok(SocketAddrV4::new(*addr, port)),
            TargetHost::Hostname(name) => {
                let candidates = tokio::net::lookup_host((name.as_str(), port)).await?;
                first_ipv4(candidates).ok_or_else(|| {
                    io::Error::new(
                        io::ErrorKind::NotFound,
                        format!("no IPv4 address found for {name}"),
                    )
                })
            }
        }
    }

    fn open_socket(&self, _addr: &SocketAddrV4) -> io::Result<TcpSocket> {
        TcpSocket::new_v4()
    }

    async fn connect(&self, socket: TcpSocket, addr: SocketAddrV4) -> io::Result<TcpStream> {
        socket.connect(SocketAddr::V4(addr)).await
    }
}

/// Picks the first IPv4 candidate; the rest are not attempted.
pub fn first_ipv4<I>(candidates: I) -> Option<SocketAddrV4>
where
    I: IntoIterator<Item = SocketAddr>,
{
    candidates.into_iter().find_map(|addr| match addr {
        SocketAddr::V4(v4) => Some(v4),
        SocketAddr::V6(_) => None,
    })
}
