use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "compares",
    about = "Compare JSON and YAML documents by their top-level keys",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    /// Document encoding; `auto` picks it from the first file's extension
    #[arg(long, global = true, default_value = "auto")]
    pub encoding: EncodingArg,

    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, clap::ValueEnum)]
pub enum EncodingArg {
    Auto,
    Json,
    Yaml,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show top-level keys added, deleted, or changed from X to Y
    Diff(DiffArgs),
    /// Check whether two files are byte-identical
    Eq(EqArgs),
    /// Check a sequence of files for equality, pairwise in order
    Chain(ChainArgs),
}

#[derive(Args)]
pub struct DiffArgs {
    pub x: PathBuf,
    pub y: PathBuf,
}

#[derive(Args)]
pub struct EqArgs {
    pub x: PathBuf,
    pub y: PathBuf,
}

#[derive(Args)]
pub struct ChainArgs {
    pub files: Vec<PathBuf>,
}
