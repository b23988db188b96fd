use anyhow::Result;
use clap::Parser;
use colored::*;
use is_terminal::IsTerminal;
use log::{debug, error, info};

use graph_search_cli::api::CommandError;
use graph_search_cli::cli::{Cli, Commands};
use graph_search_cli::commands;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.no_color || !std::io::stderr().is_terminal() {
        colored::control::set_override(false);
    }

    if let Err(e) = init_logger(&cli) {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }

    info!("Starting graph-search-cli");
    let verbose = cli.verbose || cli.debug;

    match run(cli).await {
        Ok(()) => {
            if verbose {
                eprintln!("{}", "DONE".green());
            }
        }
        Err(e) => {
            if let Some(CommandError { code: Some(code), .. }) = e.downcast_ref::<CommandError>() {
                error!("Service error code: {}", code);
            }
            debug!("{:?}", e);
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            std::process::exit(1);
        }
    }
}

/// Log to stderr by default, or pipe into `--log-file` (truncated on each run)
fn init_logger(cli: &Cli) -> Result<()> {
    let mut builder = env_logger::Builder::from_default_env();

    if let Some(level) = cli.log_level() {
        builder.filter_level(level);
    }

    if let Some(path) = &cli.log_file {
        let log_file = std::fs::OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)?;
        builder.target(env_logger::Target::Pipe(Box::new(log_file)));
    }

    builder.init();
    Ok(())
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Auth(auth_args) => commands::auth_command(auth_args.command).await,
        Commands::Search(search_args) => {
            commands::search_command(search_args.command, cli.env).await
        }
    }
}
