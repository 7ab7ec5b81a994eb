//! Shared models for `portr`: scan configuration, validated scan targets,
//! per-port outcomes and the input validation rules that produce targets.

pub mod config;
pub mod error;
pub mod network;
