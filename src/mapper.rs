extern crate efflux;

use anyhow::{Context as _, Result};
use clap::Parser;
use efflux::prelude::{Context, Mapper};
use forum_stats::{logging, Config, Error, Pair, Projection, RecordAssembler, RunStats, Task};
use tracing::error;

#[derive(Parser, Debug)]
struct Args {
    /// Aggregation to project records for
    #[arg(long, value_enum)]
    task: Task,
    /// Treat the first input line as data instead of a header
    #[arg(long)]
    keep_header: bool,
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();
    let mut config = Config::from_env().context("reading configuration")?;
    if args.keep_header {
        config.skip_header = false;
    }

    // run the mapping phase on the streaming runtime
    efflux::run_mapper(ForumMapper::new(args.task, &config));
    Ok(())
}

/// Reassembles post records line by line and writes the task's pairs.
struct ForumMapper {
    task: Task,
    projection: Box<dyn Projection>,
    assembler: RecordAssembler,
    pairs: u64,
}

impl ForumMapper {
    fn new(task: Task, config: &Config) -> Self {
        Self {
            task,
            projection: task.projection(),
            assembler: RecordAssembler::new(config.skip_header),
            pairs: 0,
        }
    }
}

// Mapping stage implementation.
impl Mapper for ForumMapper {
    fn map(&mut self, _offset: usize, value: &[u8], ctx: &mut Context) {
        let line = match std::str::from_utf8(value) {
            Ok(line) => line,
            Err(e) => abort(Error::from(e)),
        };
        let Some(record) = self.assembler.push_line(line) else {
            return;
        };

        let mut pairs: Vec<Pair> = Vec::new();
        if let Err(e) = self.projection.project(&record, &mut |pair| pairs.push(pair)) {
            abort(e);
        }
        for pair in pairs {
            // bare keys still go out as "key<TAB>"; the reducer reads up to the tab
            let value = pair.value.as_deref().unwrap_or("");
            ctx.write(pair.key.as_bytes(), value.as_bytes());
            self.pairs += 1;
        }
    }

    fn cleanup(&mut self, _ctx: &mut Context) {
        self.assembler.finish();
        let mut stats = RunStats { pairs: self.pairs, ..RunStats::default() };
        stats.record_assembly(self.assembler.stats());
        stats.log(&format!("map:{}", self.task));
    }
}

/// Bad upstream data ends the job; there is no per-record recovery.
fn abort(err: Error) -> ! {
    error!(error = %err, "mapper failed");
    std::process::exit(1)
}
