use std::io;
use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use portr_common::network::target::TargetHost;
use portr_core::network::transport::{TcpTransport, Transport};
use tokio::net::{TcpListener, TcpSocket, TcpStream};

/// Binds a loopback listener on an OS-assigned port.
pub async fn loopback_listener() -> (TcpListener, u16) {
    let listener = TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
        .await
        .expect("bind loopback listener");
    let port = listener.local_addr().expect("listener address").port();
    (listener, port)
}

/// A loopback port that was just bound and released, so nothing listens on it.
pub async fn released_port() -> u16 {
    let (listener, port) = loopback_listener().await;
    drop(listener);
    port
}

pub fn localhost() -> TargetHost {
    TargetHost::Ipv4(Ipv4Addr::LOCALHOST)
}

/// Real TCP sockets, wrapped so the number still alive can be checked.
#[derive(Default)]
pub struct TrackingTransport {
    inner: TcpTransport,
    live: Arc<AtomicUsize>,
    opened: AtomicUsize,
}

impl TrackingTransport {
    pub fn live_sockets(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    pub fn sockets_opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

/// Counts as one live socket until dropped.
struct LiveGuard(Arc<AtomicUsize>);

impl LiveGuard {
    fn new(live: &Arc<AtomicUsize>) -> Self {
        live.fetch_add(1, Ordering::SeqCst);
        Self(Arc::clone(live))
    }
}

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

pub struct TrackedSocket {
    socket: TcpSocket,
    guard: LiveGuard,
}

/// A connection keeps the guard of the socket it was made from.
pub struct TrackedConnection {
    _stream: TcpStream,
    _guard: LiveGuard,
}

#[async_trait]
impl Transport for TrackingTransport {
    type Socket = TrackedSocket;
    type Connection = TrackedConnection;

    async fn resolve(&self, host: &TargetHost, port: u16) -> io::Result<SocketAddrV4> {
        self.inner.resolve(host, port).await
    }

    fn open_socket(&self, addr: &SocketAddrV4) -> io::Result<TrackedSocket> {
        let socket = self.inner.open_socket(addr)?;
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(TrackedSocket {
            socket,
            guard: LiveGuard::new(&self.live),
        })
    }

    async fn connect(
        &self,
        tracked: TrackedSocket,
        addr: SocketAddrV4,
    ) -> io::Result<TrackedConnection> {
        let TrackedSocket { socket, guard } = tracked;
        let stream = socket.connect(SocketAddr::V4(addr)).await?;
        Ok(TrackedConnection {
            _stream: stream,
            _guard: guard,
        })
    }
}
