use std::time::Duration;

pub const DEFAULT_CONNECT_TIMEOUT_MS: u64 = 3_000;

/// Connect timeout applied to every probe unless overridden.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(DEFAULT_CONNECT_TIMEOUT_MS);

/// Number of probes in flight at once unless overridden.
pub const DEFAULT_CONCURRENCY: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Hides the banner printed before a scan.
    pub no_banner: bool,

    /// 0 prints everything, 1 hides banner, headers and summary,
    /// 2 additionally hides closed ports.
    pub quiet: u8,

    /// Only report ports that accepted the handshake.
    pub only_open: bool,

    /// Upper bound on a single connect attempt.
    ///
    /// `None` leaves the bound to the operating system's connect timeout.
    pub connect_timeout: Option<Duration>,

    /// Maximum number of probes in flight. Results are still reported in port order.
    pub concurrency: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            no_banner: false,
            quiet: 0,
            only_open: false,
            connect_timeout: Some(DEFAULT_CONNECT_TIMEOUT),
            concurrency: DEFAULT_CONCURRENCY,
        }
    }
}

impl Config {
    /// Builds the timeout setting from a millisecond count, where 0 means "use the OS default".
    pub fn timeout_from_millis(millis: u64) -> Option<Duration> {
        match millis {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }
}
