use std::process::ExitCode;

use clap::Parser;
use marketplace::{app, config::Config, logging};

fn main() -> ExitCode {
    let config = Config::parse();
    logging::init_logging(&config);

    if let Err(err) = app::run(&config) {
        tracing::error!(error = %err, "marketplace stopped");
        eprintln!("error: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
