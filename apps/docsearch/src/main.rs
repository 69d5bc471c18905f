mod cli;
mod command;
mod config;
mod error;

use error::WrapErr;

use clap::CommandFactory;
use clap::Parser;
use tracing::Level;

fn main() -> error::Result<()> {
    color_eyre::install()?;
    let command_line = cli::Cli::parse();
    init_tracing(command_line.verbose);

    let cfg = config::Config::load().context("Load configuration error")?;

    if let Some(command) = command_line.command {
        let cmd: Box<dyn command::Command> = match command {
            cli::Commands::Query {
                query,
                index,
                category,
                limit,
                json,
            } => Box::new(command::QueryCommand::new(
                cfg, index, query, category, limit, json,
            )),
            cli::Commands::Stats { index } => Box::new(command::StatsCommand::new(cfg, index)),
        };
        cmd.execute()?;
    } else {
        cli::Cli::command().print_help()?;
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}
