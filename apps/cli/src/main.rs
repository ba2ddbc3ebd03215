mod commands;
mod config;
mod main_lib;

use std::process::ExitCode;

use clap::Parser;

use commands::Command;
use config::Config;
use main_lib::{build_state, init_tracing};

#[derive(Debug, Parser)]
#[command(name = "fundledger", version, about = "Demo fund investment ledger")]
struct Cli {
    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();
    let config = Config::from_env()?;
    init_tracing(&config.log_format);
    let state = build_state(&config).await?;

    match commands::run(&state, cli.command, cli.json).await {
        Ok(output) => {
            println!("{}", output);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            tracing::debug!("Command failed: {:?}", err);
            eprintln!("error [{}]: {}", err.code(), err);
            Ok(ExitCode::FAILURE)
        }
    }
}
