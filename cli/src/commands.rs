pub mod scan;

use clap::{ArgAction, Parser};
use portr_common::config::{self, Config};

#[derive(Parser)]
#[command(name = "portr")]
#[command(version, about = "A TCP connect port scanner.")]
pub struct CommandLine {
    /// Target IPv4 address, or a hostname starting with "www."
    #[arg(allow_hyphen_values = true)]
    pub address: Option<String>,

    /// First port of the range (inclusive)
    #[arg(allow_hyphen_values = true)]
    pub start_port: Option<String>,

    /// Last port of the range (inclusive)
    #[arg(allow_hyphen_values = true)]
    pub end_port: Option<String>,

    #[arg(hide = true, allow_hyphen_values = true)]
    pub extra: Vec<String>,

    /// Connect timeout per port in milliseconds, 0 uses the OS default
    #[arg(short, long, value_name = "MS", default_value_t = config::DEFAULT_CONNECT_TIMEOUT_MS)]
    pub timeout: u64,

    /// Number of ports probed at once
    #[arg(
        short,
        long,
        value_name = "N",
        default_value_t = config::DEFAULT_CONCURRENCY,
        value_parser = parse_concurrency
    )]
    pub concurrency: usize,

    /// Reduce output, repeat to hide closed ports as well
    #[arg(short, long, action = ArgAction::Count)]
    pub quiet: u8,

    /// Only print open ports
    #[arg(long)]
    pub open: bool,

    /// Do not print the banner
    #[arg(long)]
    pub no_banner: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// The positional arguments that were given, in order.
    pub fn positionals(&self) -> Vec<&str> {
        [&self.address, &self.start_port, &self.end_port]
            .into_iter()
            .map_while(|arg| arg.as_deref())
            .collect()
    }

    pub fn to_config(&self) -> Config {
        Config {
            no_banner: self.no_banner,
            quiet: self.quiet,
            only_open: self.open,
            connect_timeout: Config::timeout_from_millis(self.timeout),
            concurrency: self.concurrency,
        }
    }
}

fn parse_concurrency(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}
