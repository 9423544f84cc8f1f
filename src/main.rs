//! `env-switch` - switch between multiple `.env` configurations

use clap::Parser;

use envswitch::cli::{self, Cli};
use envswitch::error::ExitCode;
use envswitch::observability::init_logging;

fn main() {
    let cli = Cli::parse();

    if !cli.quiet {
        init_logging(cli.log_format, cli.verbose, cli.color);
    }

    match cli::run(&cli) {
        Ok(_) => std::process::exit(ExitCode::SUCCESS),
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
