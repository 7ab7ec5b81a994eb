//! In-memory [`Transport`] that counts the sockets it hands out.

use std::io;
use std::net::{Ipv4Addr, SocketAddrV4};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use portr_common::network::target::TargetHost;

use crate::network::transport::Transport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MockBehavior {
    Open,
    Refuse,
    Stall,
    FailResolve,
    FailSocket,
}

type PortRule<T> = Box<dyn Fn(u16) -> T + Send + Sync>;

pub(crate) struct MockTransport {
    rule: PortRule<MockBehavior>,
    delay: PortRule<Duration>,
    live: Arc<AtomicUsize>,
    peak: Arc<AtomicUsize>,
    opened: AtomicUsize,
    resolved: AtomicUsize,
}

impl MockTransport {
    pub(crate) fn new(behavior: MockBehavior) -> Self {
        Self::per_port(move |_| behavior)
    }

    pub(crate) fn per_port<F>(rule: F) -> Self
    where
        F: Fn(u16) -> MockBehavior + Send + Sync + 'static,
    {
        Self {
            rule: Box::new(rule),
            delay: Box::new(|_| Duration::ZERO),
            live: Arc::new(AtomicUsize::new(0)),
            peak: Arc::new(AtomicUsize::new(0)),
            opened: AtomicUsize::new(0),
            resolved: AtomicUsize::new(0),
        }
    }

    /// Delays each connect attempt by a per-port amount.
    pub(crate) fn with_delay<F>(mut self, delay: F) -> Self
    where
        F: Fn(u16) -> Duration + Send + Sync + 'static,
    {
        self.delay = Box::new(delay);
        self
    }

    pub(crate) fn live_sockets(&self) -> usize {
        self.live.load(Ordering::SeqCst)
    }

    pub(crate) fn peak_sockets(&self) -> usize {
        self.peak.load(Ordering::SeqCst)
    }

    pub(crate) fn sockets_opened(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    pub(crate) fn resolutions(&self) -> usize {
        self.resolved.load(Ordering::SeqCst)
    }
}

pub(crate) struct MockSocket {
    live: Arc<AtomicUsize>,
}

impl Drop for MockSocket {
    fn drop(&mut self) {
        self.live.fetch_sub(1, Ordering::SeqCst);
    }
}

pub(crate) struct MockConnection {
    _socket: MockSocket,
}

#[async_trait]
impl Transport for MockTransport {
    type Socket = MockSocket;
    type Connection = MockConnection;

    async fn resolve(&self, _host: &TargetHost, port: u16) -> io::Result<SocketAddrV4> {
        self.resolved.fetch_add(1, Ordering::SeqCst);
        match (self.rule)(port) {
            MockBehavior::FailResolve => Err(io::Error::new(
                io::ErrorKind::NotFound,
                "name or service not known",
            )),
            _ => Ok(SocketAddrV4::new(Ipv4Addr::new(192, 0, 2, 1), port)),
        }
    }

    fn open_socket(&self, addr: &SocketAddrV4) -> io::Result<MockSocket> {
        if (self.rule)(addr.port()) == MockBehavior::FailSocket {
            return Err(io::Error::other("too many open files"));
        }
        let now = self.live.fetch_add(1, Ordering::SeqCst) + 1;
        self.peak.fetch_max(now, Ordering::SeqCst);
        self.opened.fetch_add(1, Ordering::SeqCst);
        Ok(MockSocket {
            live: Arc::clone(&self.live),
        })
    }

    async fn connect(&self, socket: MockSocket, addr: SocketAddrV4) -> io::Result<MockConnection> {
        let delay = (self.delay)(addr.port());
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }

        match (self.rule)(addr.port()) {
            MockBehavior::Open => Ok(MockConnection { _socket: socket }),
            MockBehavior::Stall => std::future::pending().await,
            _ => Err(io::Error::new(
                io::ErrorKind::ConnectionRefused,
                "connection refused",
            )),
        }
    }
}
