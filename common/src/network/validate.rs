//! # Input Validation
//!
//! Pure checks run on the raw command line before any network resource is
//! touched. Nothing here performs I/O or mutates its input.
//!
//! * [`validate_address`] accepts a dotted-quad IPv4 address, or any string
//!   starting with `www.` which is passed through as a hostname.
//! * [`validate_port_token`] only checks that a port is made of decimal digits.
//! * [`validate_range`] checks the ordering of the converted port numbers.

use std::net::Ipv4Addr;

use crate::error::{AddressFault, ValidationError};

/// Prefix that marks an address argument as a hostname to be resolved later.
pub const HOSTNAME_PREFIX: &str = "www.";

const OCTET_COUNT: usize = 4;

/// Returns `true` if `s` is passed through as a hostname instead of being parsed.
pub fn is_hostname(s: &str) -> bool {
    s.starts_with(HOSTNAME_PREFIX)
}

pub fn validate_address(s: &str) -> Result<(), ValidationError> {
    resolve_address(s).map(|_| ())
}

/// Runs [`validate_address`] and keeps the parsed address.
///
/// Returns `None` for a `www.` hostname, which is only resolved at probe time.
pub fn resolve_address(s: &str) -> Result<Option<Ipv4Addr>, ValidationError> {
    if is_hostname(s) {
        return Ok(None);
    }
    parse_dotted_quad(s)
        .map(Some)
        .map_err(|fault| invalid_address(s, fault))
}

/// Parses a dotted-quad into an address, reporting the first offending token.
///
/// Unlike [`Ipv4Addr`]'s `FromStr`, octets with leading zeros (`010`) are accepted
/// and read as decimal.
pub fn parse_dotted_quad(s: &str) -> Result<Ipv4Addr, AddressFault> {
    if s.is_empty() {
        return Err(AddressFault::Empty);
    }
    if s.ends_with('.') {
        return Err(AddressFault::TrailingDot);
    }

    let mut octets: Vec<u8> = Vec::with_capacity(OCTET_COUNT);
    for (index, token) in s.split('.').enumerate() {
        octets.push(parse_octet(index, token)?);
    }

    let octets: [u8; OCTET_COUNT] = octets
        .try_into()
        .map_err(|rest: Vec<u8>| AddressFault::TokenCount(rest.len()))?;

    Ok(Ipv4Addr::from(octets))
}

fn parse_octet(index: usize, token: &str) -> Result<u8, AddressFault> {
    if !is_all_digits(token) {
        return Err(AddressFault::NonDigit {
            index,
            token: token.to_string(),
        });
    }

    // Digits only at this point, so the sole failure left is magnitude.
    token.parse::<u8>().map_err(|_| AddressFault::OutOfRange {
        index,
        token: token.to_string(),
    })
}

pub fn validate_port_token(s: &str) -> Result<(), ValidationError> {
    if is_all_digits(s) {
        Ok(())
    } else {
        Err(ValidationError::NonNumericPort {
            start: s.to_string(),
            end: String::new(),
        })
    }
}

/// Validates both port arguments, reporting them together as the CLI does.
pub fn validate_port_tokens(start: &str, end: &str) -> Result<(), ValidationError> {
    if validate_port_token(start).is_err() || validate_port_token(end).is_err() {
        return Err(ValidationError::NonNumericPort {
            start: start.to_string(),
            end: end.to_string(),
        });
    }
    Ok(())
}

/// Converts a token that already passed [`validate_port_token`].
///
/// No upper bound is enforced here; digit runs too long for a `u32` saturate.
pub fn parse_port(s: &str) -> u32 {
    s.parse::<u32>().unwrap_or(u32::MAX)
}

pub fn validate_range(start_port: u32, end_port: u32) -> Result<(), ValidationError> {
    if start_port > end_port {
        return Err(ValidationError::PortRangeInverted {
            start: start_port,
            end: end_port,
        });
    }
    Ok(())
}

fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

fn invalid_address(value: &str, fault: AddressFault) -> ValidationError {
    ValidationError::InvalidAddress {
        value: value.to_string(),
        fault,
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
