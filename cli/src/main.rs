mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, scan};
use portscan_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    logging::init(commands.verbose);

    let cfg = Config {
        verbose: commands.verbose,
        sort: commands.sort,
    };

    match scan::scan(&commands.range, &commands.ports, &cfg).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print::failure(&e);
            ExitCode::FAILURE
        }
    }
}
