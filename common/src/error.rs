//! Input validation errors.
//!
//! Every variant of [`ValidationError`] is fatal: it is reported to the user
//! and the process exits before any socket is opened.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("expected an address, a start port and an end port")]
    NotEnoughArgs,

    #[error("Invalid ip_address: {value}")]
    InvalidAddress { value: String, fault: AddressFault },

    #[error("Port numbers must be numbers\nInvalid port numbers: {start} {end}")]
    NonNumericPort { start: String, end: String },

    #[error("Usage: start_port {start} must be less than end_port {end}!")]
    PortRangeInverted { start: u32, end: u32 },
}

/// Why a dotted-quad address was rejected. `index` is the 0-based token position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressFault {
    #[error("ip_address cannot be empty")]
    Empty,

    #[error("ip_address cannot end in a dot")]
    TrailingDot,

    #[error("A valid ip address consists of numbers and dots. Invalid ip_address portion: '{token}'")]
    NonDigit { index: usize, token: String },

    #[error("Invalid ip_address portion: {token} (xxx.xxx.xxx.xxx, xxx = 0-255)")]
    OutOfRange { index: usize, token: String },

    #[error("ip_address must have 4 portions separated by dots, found {0}")]
    TokenCount(usize),
}

impl ValidationError {
    /// The token-level cause, when the address was the failing argument.
    pub fn address_fault(&self) -> Option<&AddressFault> {
        match self {
            ValidationError::InvalidAddress { fault, .. } => Some(fault),
            _ => None,
        }
    }
}
