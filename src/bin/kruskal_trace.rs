use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use kruskal_trace::graph::{kruskal, Graph};
use kruskal_trace::render::{RenderOptions, Trace};

#[derive(Debug, Parser)]
#[command(
    name = "kruskal-trace",
    about = "Build a minimum spanning tree with Kruskal's algorithm and explain every step"
)]
struct Cli {
    /// Graph file: vertex count, edge count, then one `u v w` triple per edge.
    #[arg(default_value = "input.txt")]
    input: PathBuf,

    /// Print only the resulting tree and its weight.
    #[arg(long)]
    summary_only: bool,

    /// Raise the log level (-v info, -vv debug, -vvv trace). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let graph = Graph::load(&cli.input)
        .with_context(|| format!("could not read graph from {}", cli.input.display()))?;
    let run = kruskal::run(&graph).context("kruskal's algorithm failed")?;

    let options = RenderOptions {
        steps: !cli.summary_only,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", Trace::new(&run, options)).context("failed to write trace")?;
    out.flush().context("failed to write trace")?;
    Ok(())
}

fn init_logging(verbose: u8) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Use RUST_LOG if set, otherwise the level picked by -v
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kruskal_trace={default_level}")));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(true).compact())
        .with(filter)
        .init();
}
