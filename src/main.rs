mod cli;

use std::error::Error;

use clap::Parser;
use cli::{Cli, Command};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.cmd {
        Command::Compare(args) => cli::compare::handle_compare_command(args),
        Command::Fmt(args) => cli::fmt::handle_fmt_command(args),
    }
}
