use std::process::ExitCode;

use clap::Parser;

use corserve::cli::Cli;
use corserve::{logger, Error, Server, ServerConfig, Settings};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            logger::log_error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let settings = Settings::load(cli.port)?;
    let cfg = ServerConfig::from_settings(&settings)?;

    // Worker threads default to the number of CPU cores
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let server = Server::bind(cfg)?;
        server.run().await
    })
}
