//! # Port Probe
//!
//! Determines whether one TCP port on one host accepts connections.
//!
//! A probe runs three steps, each of which can end it early:
//! 1. **Resolve** the host and port to the first IPv4 endpoint
//!    (failure: [`PortStatus::ResolutionError`], no socket is created).
//! 2. **Open** an IPv4 TCP socket (failure: [`PortStatus::SocketError`]).
//! 3. **Connect**, bounded by the configured timeout
//!    (success: [`PortStatus::Open`], anything else: [`PortStatus::Closed`]).
//!
//! Every resource is an owned value scoped to [`PortProbe::probe`], so it is
//! released exactly once on every path out of it. There are no retries and no
//! state carried between calls.
//!
//! [`PortStatus::ResolutionError`]: portr_common::network::outcome::PortStatus::ResolutionError
//! [`PortStatus::SocketError`]: portr_common::network::outcome::PortStatus::SocketError
//! [`PortStatus::Open`]: portr_common::network::outcome::PortStatus::Open
//! [`PortStatus::Closed`]: portr_common::network::outcome::PortStatus::Closed

use std::time::{Duration, Instant};

use portr_common::network::outcome::PortOutcome;
use portr_common::network::target::TargetHost;
use tracing::debug;

use crate::network::tcp::{self, Handshake};
use crate::network::transport::{TcpTransport, Transport};

pub struct PortProbe<T = TcpTransport> {
    transport: T,
    connect_timeout: Option<Duration>,
}

impl PortProbe<TcpTransport> {
    /// A probe over real TCP sockets. `None` leaves the connect bound to the OS.
    pub fn new(connect_timeout: Option<Duration>) -> Self {
        Self::with_transport(TcpTransport, connect_timeout)
    }
}

impl<T: Transport> PortProbe<T> {
    pub fn with_transport(transport: T, connect_timeout: Option<Duration>) -> Self {
        Self {
            transport,
            connect_timeout,
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub async fn probe(&self, host: &TargetHost, port: u32) -> PortOutcome {
        let started: Instant = Instant::now();

        let Ok(tcp_port) = u16::try_from(port) else {
            debug!("{host}:{port} rejected, port is above 65535");
            return PortOutcome::resolution_error(
                port,
                format!("resolution error: service not supported for port {port}"),
                started.elapsed(),
            );
        };

        let addr = match self.transport.resolve(host, tcp_port).await {
            Ok(addr) => addr,
            Err(e) => {
                debug!("resolving {host}:{port} failed: {e}");
                return PortOutcome::resolution_error(
                    port,
                    format!("resolution error: {e}"),
                    started.elapsed(),
                );
            }
        };

        let socket = match self.transport.open_socket(&addr) {
            Ok(socket) => socket,
            Err(e) => {
                debug!("opening socket for {addr} failed: {e}");
                return PortOutcome::socket_error(
                    port,
                    format!("socket error: {e}"),
                    started.elapsed(),
                );
            }
        };

        match tcp::handshake(&self.transport, socket, addr, self.connect_timeout).await {
            Handshake::Established => {
                debug!("{addr} accepted the handshake");
                PortOutcome::open(port, started.elapsed())
            }
            Handshake::Failed(e) => {
                debug!("{addr} refused the handshake: {e}");
                PortOutcome::closed(port, e.to_string(), started.elapsed())
            }
            Handshake::TimedOut => {
                debug!("{addr} did not answer within {:?}", self.connect_timeout);
                PortOutcome::closed(port, "timed out", started.elapsed())
            }
        }
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
