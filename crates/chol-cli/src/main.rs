use std::error::Error;

use clap::{Parser, Subcommand};
use commands::{
    decompose::{self, DecomposeArgs},
    generate::{self, GenerateArgs},
    selftest::{self, SelftestArgs},
};
use env_logger::Env;

mod commands;
mod config;
mod matrix_io;

#[derive(Parser, Debug)]
#[command(name = "chol32", version, about = "Cholesky factorization of 32x32 SPD matrices")]
struct Cli {
    /// Log at debug level.
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Factor a matrix read from JSON and write the factor and a report.
    Decompose(DecomposeArgs),
    /// Write a generated fixture matrix as JSON.
    Generate(GenerateArgs),
    /// Run the built-in acceptance scenarios.
    Selftest(SelftestArgs),
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();

    match cli.command {
        Command::Decompose(args) => decompose::run(&args),
        Command::Generate(args) => generate::run(&args),
        Command::Selftest(args) => selftest::run(&args),
    }
}
