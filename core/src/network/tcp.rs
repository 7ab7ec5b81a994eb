use std::io;
use std::net::SocketAddrV4;
use std::time::Duration;

use tokio::time::timeout;

use crate::network::transport::Transport;

#[derive(Debug)]
pub enum Handshake {
    Established,
    Failed(io::Error),
    TimedOut,
}

/// Attempts a full TCP handshake on `socket`, consuming it.
///
/// With `limit` set the attempt is abandoned once it elapses; `None` waits for
/// the operating system to give up. The socket, or the connection it turned
/// into, is dropped before this returns.
pub async fn handshake<T: Transport>(
    transport: &T,
    socket: T::Socket,
    addr: SocketAddrV4,
    limit: Option<Duration>,
) -> Handshake {
    let attempt = transport.connect(socket, addr);

    let result = match limit {
        Some(limit) => match timeout(limit, attempt).await {
            Ok(result) => result,
            Err(_elapsed) => return Handshake::TimedOut,
        },
        None => attempt.await,
    };

    match result {
        Ok(_connection) => Handshake::Established,
        Err(e) => Handshake::Failed(e),
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
