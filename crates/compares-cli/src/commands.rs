use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use colored::Colorize;
use compares::{ChainVerdict, Encoding, KeyDiff};
use serde::Serialize;
use tracing::debug;

use crate::cli::*;

/// Whether the compared inputs matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Equal,
    Different,
}

impl Outcome {
    fn from_equal(equal: bool) -> Self {
        if equal { Outcome::Equal } else { Outcome::Different }
    }

    fn code(self) -> u8 {
        match self {
            Outcome::Equal => 0,
            Outcome::Different => 1,
        }
    }
}

/// Exit status for a failed command, distinct from "inputs differ".
pub const EXIT_ERROR: u8 = 2;

/// Process exit status: 0 equal, 1 different, 2 error.
pub fn exit_status(result: &anyhow::Result<Outcome>) -> u8 {
    match result {
        Ok(outcome) => outcome.code(),
        Err(_) => EXIT_ERROR,
    }
}

/// Per-invocation settings shared by every command.
#[derive(Clone, Copy, Debug)]
pub struct RunOptions {
    pub encoding: EncodingArg,
    pub format: OutputFormat,
}

impl RunOptions {
    /// Resolve the encoding to use for `path`. Unknown extensions fall back to JSON.
    pub fn encoding_for(&self, path: &Path) -> Encoding {
        match self.encoding {
            EncodingArg::Json => Encoding::Json,
            EncodingArg::Yaml => Encoding::Yaml,
            EncodingArg::Auto => Encoding::from_path(path).unwrap_or(Encoding::Json),
        }
    }
}

pub fn run_command(cli: Cli) -> anyhow::Result<Outcome> {
    let opts = RunOptions { encoding: cli.encoding, format: cli.format };
    match cli.command {
        Command::Diff(args) => cmd_diff(&opts, args),
        Command::Eq(args) => cmd_eq(&opts, args),
        Command::Chain(args) => cmd_chain(&opts, args),
    }
}

fn read(path: &Path) -> anyhow::Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("failed to read {}", path.display()))
}

#[derive(Serialize)]
struct DiffReport<'a> {
    equal: bool,
    encoding: Encoding,
    #[serde(flatten)]
    diff: &'a KeyDiff,
}

#[derive(Serialize)]
struct EqReport {
    equal: bool,
}

#[derive(Serialize)]
struct ChainReport<'a> {
    #[serde(flatten)]
    verdict: ChainVerdict,
    files: &'a [PathBuf],
}

fn cmd_diff(opts: &RunOptions, args: DiffArgs) -> anyhow::Result<Outcome> {
    let comparer = opts.encoding_for(&args.x).comparer();
    debug!(
        encoding = %comparer.encoding(),
        x = %args.x.display(),
        y = %args.y.display(),
        "diffing documents"
    );

    let x = read(&args.x)?;
    let y = read(&args.y)?;
    let diff = comparer.compare(Some(x.as_slice()), Some(y.as_slice()))?;

    match opts.format {
        OutputFormat::Json => {
            let report = DiffReport {
                equal: diff.is_equal(),
                encoding: comparer.encoding(),
                diff: &diff,
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => print!("{}", render_diff(&diff)),
    }
    Ok(Outcome::from_equal(diff.is_equal()))
}

fn cmd_eq(opts: &RunOptions, args: EqArgs) -> anyhow::Result<Outcome> {
    let x = read(&args.x)?;
    let y = read(&args.y)?;
    let equal = opts.encoding_for(&args.x).comparer().is_equal(Some(x.as_slice()), Some(y.as_slice()))?;

    match opts.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&EqReport { equal })?),
        OutputFormat::Text if equal => println!("{} Files are identical.", "✓".green().bold()),
        OutputFormat::Text => println!("{} Files differ.", "✗".red().bold()),
    }
    Ok(Outcome::from_equal(equal))
}

fn cmd_chain(opts: &RunOptions, args: ChainArgs) -> anyhow::Result<Outcome> {
    let buffers = args.files.iter().map(|p| read(p)).collect::<anyhow::Result<Vec<_>>>()?;
    let items: Vec<&[u8]> = buffers.iter().map(Vec::as_slice).collect();

    let encoding = args
        .files
        .first()
        .map(|p| opts.encoding_for(p))
        .unwrap_or(Encoding::Json);
    let verdict = encoding.comparer().are_equal(&items)?;
    let all_equal = verdict.equal && verdict.first_divergence == 0;

    match opts.format {
        OutputFormat::Json => {
            let report = ChainReport { verdict, files: &args.files };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => print!("{}", render_chain(&verdict, &args.files)),
    }
    Ok(Outcome::from_equal(all_equal))
}

fn render_diff(diff: &KeyDiff) -> String {
    if diff.is_equal() {
        return format!("{} Documents are equal.\n", "✓".green().bold());
    }

    let mut out = String::new();
    for key in &diff.new_keys {
        out.push_str(&format!("  {} {}\n", "+".green(), key));
    }
    for key in &diff.deleted_keys {
        out.push_str(&format!("  {} {}\n", "-".red(), key));
    }
    for key in &diff.changed_keys {
        out.push_str(&format!("  {} {}\n", "~".yellow(), key));
    }
    out.push_str(&format!(
        "{} new, {} deleted, {} changed\n",
        diff.additions(),
        diff.removals(),
        diff.modifications()
    ));
    out
}

fn render_chain(verdict: &ChainVerdict, files: &[PathBuf]) -> String {
    if verdict.first_divergence == 0 {
        return format!("{} All {} files are identical.\n", "✓".green().bold(), files.len());
    }
    let i = verdict.first_divergence;
    format!(
        "{} {} differs from {} (index {})\n",
        "✗".red().bold(),
        files[i].display().to_string().yellow(),
        files[i - 1].display(),
        i
    )
}
