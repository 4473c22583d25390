use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process;

use clap::{Parser, Subcommand};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use suffixtree::{dot, find_tandem_repeats, find_tandem_repeats_with_rotations, SuffixTree};

#[derive(Parser)]
#[command(name = "suffixtree", about = "Substring search and tandem repeat detection over suffix trees")]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Print all occurrences of a pattern in the file's text
    Search {
        file: PathBuf,
        pattern: String,
    },
    /// Print all branching tandem repeats of the file's text
    Repeats {
        file: PathBuf,
        /// Also derive the non-branching repeats by left rotation
        #[arg(long)]
        rotations: bool,
    },
    /// Dump the suffix tree as a Graphviz digraph
    Dot {
        file: PathBuf,
        /// Output path; stdout when omitted
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Error)]
enum DriverError {
    #[error("failed to read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
    #[error(transparent)]
    BadInput(#[from] suffixtree::Error),
    #[error("failed to write output: {0}")]
    Output(#[from] io::Error),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), DriverError> {
    match cli.cmd {
        Cmd::Search { file, pattern } => {
            let text = read_input(&file)?;
            let tree = SuffixTree::build(&text)?;
            let hits = tree.search(&pattern);

            println!("The input is of length {}", text.len());
            print!("The search returned:");
            for hit in hits {
                print!(" {}", hit);
            }
            println!();
        }
        Cmd::Repeats { file, rotations } => {
            let text = read_input(&file)?;
            let tree = SuffixTree::build(&text)?;
            let branching = find_tandem_repeats(&tree);
            let repeats = if rotations {
                find_tandem_repeats_with_rotations(&tree)
            } else {
                branching.clone()
            };

            for r in &repeats {
                let kind = if branching.contains(r) { "branching" } else { "non-branching" };
                println!("({},{},2) {}", r.offset, r.period, kind);
            }
            println!("{} branching, {} non-branching", branching.len(), repeats.len() - branching.len());
        }
        Cmd::Dot { file, output } => {
            let text = read_input(&file)?;
            let tree = SuffixTree::build(&text)?;
            match output {
                Some(path) => {
                    let mut out = Vec::new();
                    dot::write_dot(&tree, &mut out)?;
                    fs::write(&path, out).map_err(|source| DriverError::Write { path, source })?;
                }
                None => {
                    let stdout = io::stdout();
                    dot::write_dot(&tree, stdout.lock())?;
                }
            }
        }
    }

    Ok(())
}

/// Reads the whole file and strips line-ending noise, the way the reference
/// inputs were prepared.
fn read_input(path: &Path) -> Result<String, DriverError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| DriverError::Read { path: path.to_owned(), source })?;
    Ok(raw.chars().filter(|&c| c != '\r' && c != '\n').collect())
}
