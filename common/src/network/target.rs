//! # Scan Target Model
//!
//! Defines what a scan is pointed at: one host and an inclusive port range.
//!
//! The host can be:
//! * A dotted-quad IPv4 address (e.g., `192.168.1.5`).
//! * A hostname, accepted only when it starts with `www.` and resolved
//!   at probe time.

use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::network::range::PortRange;
use crate::network::validate;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetHost {
    Ipv4(Ipv4Addr),
    Hostname(String),
}

impl FromStr for TargetHost {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match validate::resolve_address(s)? {
            Some(addr) => Ok(TargetHost::Ipv4(addr)),
            None => Ok(TargetHost::Hostname(s.to_string())),
        }
    }
}

impl fmt::Display for TargetHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetHost::Ipv4(addr) => write!(f, "{addr}"),
            TargetHost::Hostname(name) => write!(f, "{name}"),
        }
    }
}

/// A validated scan request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanTarget {
    pub host: TargetHost,
    pub start_port: u32,
    pub end_port: u32,
}

impl ScanTarget {
    /// Validates the positional arguments `address start_port end_port`.
    ///
    /// Checks run in the order the user sees them reported: argument count,
    /// address, port digits, then range ordering. Arguments past the third
    /// are ignored.
    pub fn from_args<S: AsRef<str>>(args: &[S]) -> Result<Self, ValidationError> {
        let [address, start, end, ..] = args else {
            return Err(ValidationError::NotEnoughArgs);
        };
        let (address, start, end) = (address.as_ref(), start.as_ref(), end.as_ref());

        let host: TargetHost = address.parse()?;

        validate::validate_port_tokens(start, end)?;
        let start_port: u32 = validate::parse_port(start);
        let end_port: u32 = validate::parse_port(end);
        validate::validate_range(start_port, end_port)?;

        Ok(Self {
            host,
            start_port,
            end_port,
        })
    }

    pub fn ports(&self) -> PortRange {
        PortRange::new(self.start_port, self.end_port)
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
