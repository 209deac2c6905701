mod config;
mod pairs;
mod schedule;
mod sheet;
mod utils;

use std::env;
use std::io;
use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use config::ConfigError;
use log::LevelFilter;
use thiserror::Error;

#[derive(Debug, Parser)]
#[clap(version, about)]
pub struct Args {
    /// Increase the log level. Can be given multiple times.
    #[clap(short, long, action = ArgAction::Count)]
    verbose: u8,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the court sheets for the teams in a roster file.
    Schedule { path: PathBuf },
    /// Enter the teams on the terminal and print their court sheets.
    Enter {
        #[clap(short, long)]
        title: Option<String>,
    },
    /// Print the rounds and the order of play for a number of teams.
    Pairs { teams: usize },
}

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Schedule(#[from] court_schedule_core::Error),
    #[error(transparent)]
    Io(#[from] io::Error),
}

fn main() {
    let args = Args::parse();

    init_logger(args.verbose);

    let res = match args.command {
        Command::Schedule { path } => schedule::from_file(&path),
        Command::Enter { title } => schedule::enter(title),
        Command::Pairs { teams } => pairs::run(teams),
    };

    if let Err(err) = res {
        log::error!("{}", err);
        process::exit(1);
    }
}

fn init_logger(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);

    if let Ok(filters) = env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }

    builder.init();
}
