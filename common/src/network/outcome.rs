use std::fmt;
use std::time::Duration;

/// Classification of a single probed port.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortStatus {
    /// The TCP handshake completed.
    Open,
    /// The handshake was refused, unreachable or timed out.
    Closed,
    /// The host and port could not be turned into an IPv4 endpoint.
    ResolutionError,
    /// No socket could be created for the endpoint.
    SocketError,
}

impl PortStatus {
    /// `true` for failures of the scanning machinery rather than of the target.
    pub fn is_error(&self) -> bool {
        matches!(self, PortStatus::ResolutionError | PortStatus::SocketError)
    }
}

impl fmt::Display for PortStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortStatus::Open => write!(f, "open"),
            PortStatus::Closed => write!(f, "closed"),
            PortStatus::ResolutionError => write!(f, "resolution error"),
            PortStatus::SocketError => write!(f, "socket error"),
        }
    }
}

/// Result of probing one port. Produced once per port and not retained by the scanner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortOutcome {
    pub port: u32,
    pub status: PortStatus,
    /// Cause of a non-open status, as reported by the resolver or the OS.
    pub diagnostic: Option<String>,
    /// Time spent on this port, resolution included.
    pub elapsed: Duration,
}

impl PortOutcome {
    pub fn open(port: u32, elapsed: Duration) -> Self {
        Self {
            port,
            status: PortStatus::Open,
            diagnostic: None,
            elapsed,
        }
    }

    pub fn closed(port: u32, reason: impl Into<String>, elapsed: Duration) -> Self {
        Self::with_diagnostic(port, PortStatus::Closed, reason, elapsed)
    }

    pub fn resolution_error(port: u32, reason: impl Into<String>, elapsed: Duration) -> Self {
        Self::with_diagnostic(port, PortStatus::ResolutionError, reason, elapsed)
    }

    pub fn socket_error(port: u32, reason: impl Into<String>, elapsed: Duration) -> Self {
        Self::with_diagnostic(port, PortStatus::SocketError, reason, elapsed)
    }

    fn with_diagnostic(
        port: u32,
        status: PortStatus,
        reason: impl Into<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            port,
            status,
            diagnostic: Some(reason.into()),
            elapsed,
        }
    }

    pub fn is_open(&self) -> bool {
        self.status == PortStatus::Open
    }
}
