mod commands;
mod terminal;

use std::process::ExitCode;

use commands::CommandLine;
use commands::scan::{self, exit_codes};
use terminal::logging;

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    if let Err(e) = logging::init_logging() {
        eprintln!("Error: failed to initialize logging: {e:#}");
        return ExitCode::from(exit_codes::ERROR);
    }

    let cfg = commands.to_config();
    let code: u8 = scan::scan(&commands.positionals(), &cfg).await;

    ExitCode::from(code)
}
