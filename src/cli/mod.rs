pub mod compare;
pub mod fmt;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "jdiff", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Compare two JSON documents and show the differences side by side
    Compare(CompareArgs),

    /// Pretty-print a JSON document in the canonical layout
    Fmt(FmtArgs),
}

#[derive(Debug, Args)]
pub struct CompareArgs {
    /// Path to the left JSON file
    pub file1: PathBuf,

    /// Path to the right JSON file
    pub file2: PathBuf,

    /// Restrict the diff to entries at or below a dot/bracket path,
    /// e.g. `address` or `items[2].name`
    #[arg(short, long)]
    pub under: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "view")]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Highlighted side-by-side view with a summary row
    View,

    /// The raw path-to-kind diff map as JSON
    Json,
}

#[derive(Debug, Args)]
pub struct FmtArgs {
    /// Path to the JSON file to format; reads stdin when omitted
    pub file: Option<PathBuf>,
}
