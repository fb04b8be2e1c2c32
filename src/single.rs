use anyhow::{Context, Result};
use clap::Parser;
use forum_stats::{logging, run_local, Config, Task};
use std::io::{self, BufWriter};

/// Runs a whole job in one process: map, sort by key, reduce.
#[derive(Parser, Debug)]
struct Args {
    /// Aggregation to compute
    #[arg(long, value_enum)]
    task: Task,
    /// Number of tags kept by the top-tags task
    #[arg(long)]
    top_k: Option<usize>,
    /// Treat the first input line as data instead of a header
    #[arg(long)]
    keep_header: bool,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();
    let mut config = Config::from_env()
        .and_then(|c| c.with_top_k(args.top_k))
        .context("reading configuration")?;
    if args.keep_header {
        config.skip_header = false;
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = run_local(args.task, &config, stdin.lock(), &mut out)
        .with_context(|| format!("running {} locally", args.task))?;
    stats.log(&format!("single:{}", args.task));
    Ok(())
}
