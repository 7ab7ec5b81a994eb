//! Scanning engine for `portr`.
//!
//! * [`network`]: the socket-level seam ([`network::transport::Transport`]) and
//!   the bounded TCP handshake.
//! * [`engine`]: probes a single `(host, port)` pair and classifies it.
//! * [`scanner`]: drives the engine across a port range and reports outcomes
//!   in ascending port order.

pub mod engine;
pub mod network;
pub mod scanner;
