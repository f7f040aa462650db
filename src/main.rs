//! CLI entry point for collector

use std::ffi::OsString;
use std::io::{self, BufWriter};
use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use clap::builder::OsStringValueParser;
use collector::{AggregateWalker, CollectError, FencedFormatter, WalkSummary};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "collector")]
#[command(about = "Print every file in a directory tree as a fenced block, prefixed by its path")]
#[command(version)]
struct Args {
    /// Directory to scan (default: current directory); anything after it is ignored
    #[arg(value_name = "PATH", value_parser = OsStringValueParser::new())]
    paths: Vec<OsString>,
}

impl Args {
    /// First positional argument verbatim, even when empty.
    fn root(&self) -> PathBuf {
        self.paths
            .first()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

fn run(root: &Path) -> Result<WalkSummary, CollectError> {
    let stdout = io::stdout();
    let mut formatter = FencedFormatter::new(BufWriter::new(stdout.lock()));
    formatter.banner(root)?;
    AggregateWalker::default().walk(root, &mut formatter)
}

fn main() {
    // Diagnostics go to stderr; stdout carries only the aggregate.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    if args.paths.len() > 1 {
        tracing::debug!(extra = args.paths.len() - 1, "ignoring arguments after the root");
    }

    if let Err(e) = run(&args.root()) {
        eprintln!("collector: fatal error while scanning: {}", e);
        process::exit(1);
    }
}
