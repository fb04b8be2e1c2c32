use anyhow::{Context, Result};
use clap::Parser;
use forum_stats::{logging, run_reduce, Config, Task};
use std::io::{self, BufWriter};

#[derive(Parser, Debug)]
struct Args {
    /// Aggregation to compute
    #[arg(long, value_enum)]
    task: Task,
    /// Number of tags kept by the top-tags task
    #[arg(long)]
    top_k: Option<usize>,
    /// Fail if a key shows up again after its group was flushed
    #[arg(long)]
    verify_sorted: bool,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();
    let mut config = Config::from_env()
        .and_then(|c| c.with_top_k(args.top_k))
        .context("reading configuration")?;
    config.verify_sorted |= args.verify_sorted;

    // input must already be grouped by key (shuffle/sort stage)
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let stats = run_reduce(args.task, &config, stdin.lock(), &mut out)
        .with_context(|| format!("reducing {}", args.task))?;
    stats.log(&format!("reduce:{}", args.task));
    Ok(())
}
