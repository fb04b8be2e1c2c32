//! Stage drivers over generic readers and writers.
//!
//! `run_map` and `run_reduce` are the two halves of a streaming job; the
//! external shuffle between them must deliver the mapper output grouped by
//! key. `run_local` stands in for that shuffle with an in-memory stable sort.

use crate::accumulators::{AuthorList, HourHistogram, LengthTracker, OccurrenceCounter, TopK};
use crate::assembler::records;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::groupby::{parse_pair, Accumulator, GroupBy};
use crate::projection::Pair;
use crate::stats::RunStats;
use crate::task::Task;
use std::io::{BufRead, Write};
use tracing::debug;

/// Assembles records from `input` and writes the task's pairs to `out`.
pub fn run_map<R: BufRead, W: Write>(task: Task, config: &Config, input: R, out: &mut W) -> Result<RunStats> {
    let mut stats = RunStats::default();
    let mut write_err = None;
    map_pairs(task, config, input, &mut stats, &mut |pair: Pair| {
        if write_err.is_none() {
            if let Err(e) = writeln!(out, "{pair}") {
                write_err = Some(e);
            }
        }
    })?;
    if let Some(e) = write_err {
        return Err(e.into());
    }
    out.flush()?;
    Ok(stats)
}

fn map_pairs<R: BufRead>(
    task: Task,
    config: &Config,
    input: R,
    stats: &mut RunStats,
    emit: &mut dyn FnMut(Pair),
) -> Result<()> {
    let projection = task.projection();
    let mut pairs = 0u64;
    let mut counting = |pair: Pair| {
        pairs += 1;
        emit(pair);
    };
    let mut stream = records(input, config.skip_header);
    for record in stream.by_ref() {
        projection.project(&record?, &mut counting)?;
    }
    stats.record_assembly(stream.stats());
    stats.pairs += pairs;
    Ok(())
}

/// Reduces key-grouped pair lines from `input`, writing one or more result
/// lines per group to `out`.
pub fn run_reduce<R: BufRead, W: Write>(task: Task, config: &Config, input: R, out: &mut W) -> Result<RunStats> {
    let lines = input.lines().map(|l| l.map_err(Error::from));
    let stats = reduce_lines(task, config, lines, out)?;
    out.flush()?;
    Ok(stats)
}

/// Map, sort by key, reduce, all in memory.
pub fn run_local<R: BufRead, W: Write>(task: Task, config: &Config, input: R, out: &mut W) -> Result<RunStats> {
    let mut map_stats = RunStats::default();
    let mut pairs = Vec::new();
    map_pairs(task, config, input, &mut map_stats, &mut |pair: Pair| pairs.push(pair))?;
    // stable: values keep mapper order within a key
    pairs.sort_by(|a, b| a.key.cmp(&b.key));
    debug!(pairs = pairs.len(), "local shuffle sorted");

    let lines = pairs.into_iter().map(|p| Ok(p.to_string()));
    let reduce_stats = reduce_lines(task, config, lines, out)?;
    out.flush()?;
    Ok(RunStats {
        lines_read: map_stats.lines_read,
        records: map_stats.records,
        malformed: map_stats.malformed,
        pairs: map_stats.pairs,
        skipped_lines: reduce_stats.skipped_lines,
        groups: reduce_stats.groups,
    })
}

fn reduce_lines<I, W>(task: Task, config: &Config, lines: I, out: &mut W) -> Result<RunStats>
where
    I: Iterator<Item = Result<String>>,
    W: Write,
{
    let verify = config.verify_sorted;
    let keyed = task.keyed_values();
    match task {
        Task::BusiestHour => fold_groups::<HourHistogram, _, _>(lines, keyed, verify, |key, hours| {
            for hour in hours {
                writeln!(out, "{key}\t{hour}")?;
            }
            Ok(())
        }),
        Task::Lengths => fold_groups::<LengthTracker, _, _>(lines, keyed, verify, |key, summary| {
            writeln!(out, "{key}\t{summary}")?;
            Ok(())
        }),
        Task::Threads => fold_groups::<AuthorList, _, _>(lines, keyed, verify, |key, authors| {
            writeln!(out, "{key}\t{authors}")?;
            Ok(())
        }),
        Task::TopTags => {
            let mut top = TopK::new(config.top_k);
            let stats = fold_groups::<OccurrenceCounter, _, _>(lines, keyed, verify, |tag, count| {
                top.offer(tag, count);
                Ok(())
            })?;
            for (tag, count) in top.into_sorted() {
                writeln!(out, "{tag}\t{count}")?;
            }
            Ok(stats)
        }
    }
}

fn fold_groups<A, I, F>(lines: I, keyed_values: bool, verify_sorted: bool, mut sink: F) -> Result<RunStats>
where
    A: Accumulator,
    I: Iterator<Item = Result<String>>,
    F: FnMut(&str, A::Output) -> Result<()>,
{
    let mut stats = RunStats::default();
    let mut engine = GroupBy::<A>::new(verify_sorted);
    for line in lines {
        let line = line?;
        stats.lines_read += 1;
        let Some((key, raw)) = parse_pair(&line, keyed_values) else {
            stats.skipped_lines += 1;
            continue;
        };
        let value = A::parse_value(raw)?;
        engine.push(key, value, &mut sink)?;
        stats.pairs += 1;
    }
    stats.groups = engine.finish(&mut sink)?;
    Ok(stats)
}
