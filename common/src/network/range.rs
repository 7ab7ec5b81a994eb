use std::ops::RangeInclusive;

/// An inclusive, ascending range of port numbers.
///
/// Ports are `u32` because validation only checks digits; anything above
/// 65535 is left for the probe to reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PortRange {
    pub start_port: u32,
    pub end_port: u32,
}

impl PortRange {
    pub fn new(start_port: u32, end_port: u32) -> Self {
        Self {
            start_port,
            end_port,
        }
    }

    pub fn to_iter(&self) -> RangeInclusive<u32> {
        self.start_port..=self.end_port
    }

    /// Number of ports covered; zero if the bounds are inverted.
    pub fn len(&self) -> u64 {
        if self.start_port > self.end_port {
            return 0;
        }
        u64::from(self.end_port - self.start_port) + 1
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
