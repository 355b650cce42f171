//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use advent_core::{DynSolver, SolverRegistry};
use chrono::TimeDelta;
use itertools::Itertools;
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::sync::mpsc::Sender;
use tracing::{debug, warn};

/// Outcome of one part
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub title: &'static str,
    pub answer: Result<String, ArcExecutorError>,
    /// `None` when the input never got parsed
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// A puzzle and the parts of it to run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub title: &'static str,
    pub parts: RangeInclusive<u8>,
}

pub struct Executor {
    context: RunContext,
    thread_pool: rayon::ThreadPool,
}

/// Everything a worker thread needs, shared by reference
struct RunContext {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        let mut inputs = InputStore::new(&config.input_dir);
        if let (Some(path), Some(year), Some(day)) =
            (&config.input_override, config.year_filter, config.day_filter)
        {
            inputs = inputs.with_override(year, day, path);
        }

        Ok(Self {
            context: RunContext {
                registry,
                inputs,
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    pub fn inputs(&self) -> &InputStore {
        &self.context.inputs
    }

    /// Registered puzzles passing the year, day and part filters, in order
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let ctx = &self.context;
        ctx.registry
            .iter_info()
            .filter(|info| ctx.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| ctx.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                title: info.title,
                parts: filter_parts(ctx.part_filter, info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Run every work item, sending one result per part to `tx`.
    ///
    /// Puzzle failures travel inside the results; the returned error only
    /// reports that results could not be delivered.
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();
        debug!(
            count = work_items.len(),
            mode = ?self.context.parallelize_by,
            "executing work items"
        );
        let ctx = &self.context;

        match ctx.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in &work_items {
                    if let Err(e) = run_work_item(work, &tx, ctx) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.thread_pool.install(|| {
                    by_year
                        .into_par_iter()
                        .map(|items| {
                            let mut err = None;
                            for work in &items {
                                if let Err(e) = run_work_item(work, &tx, ctx) {
                                    err = Some(ArcExecutorError::combine_opt(err, e));
                                }
                            }
                            err
                        })
                        .reduce_with(|err1, err2| match (err1, err2) {
                            (Some(a), Some(b)) => Some(ArcExecutorError::combine(a, b)),
                            (a, b) => a.or(b),
                        })
                        .flatten()
                        .map_or(Ok(()), Err)
                })
            }
            ParallelizeBy::Day | ParallelizeBy::Part => self.thread_pool.install(|| {
                work_items
                    .into_par_iter()
                    .map_with(tx, |tx, work| run_work_item(&work, tx, ctx).err())
                    .reduce_with(|err1, err2| match (err1, err2) {
                        (Some(a), Some(b)) => Some(ArcExecutorError::combine(a, b)),
                        (a, b) => a.or(b),
                    })
                    .flatten()
                    .map_or(Ok(()), Err)
            }),
        }
    }
}

/// Parts to run for a puzzle declaring `max_parts`
#[allow(clippy::reversed_empty_ranges)]
fn filter_parts(part_filter: Option<u8>, max_parts: u8) -> RangeInclusive<u8> {
    match part_filter {
        Some(p) if p <= max_parts => p..=p,
        Some(_) => 1..=0,
        None => 1..=max_parts,
    }
}

fn run_work_item(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    ctx: &RunContext,
) -> Result<(), ArcExecutorError> {
    let input = match ctx.inputs.read(work.year, work.day) {
        Ok(input) => input,
        Err(source) => {
            warn!(year = work.year, day = work.day, "{source}");
            let err = ArcExecutorError::from(ExecutorError::InputRead {
                year: work.year,
                day: work.day,
                source,
            });
            return send_failures(work, None, &err, tx);
        }
    };

    if ctx.parallelize_by == ParallelizeBy::Part {
        run_parts_parallel(work, &input, tx, ctx)
    } else {
        run_parts_in_order(work, &input, tx, ctx)
    }
}

/// Parse once and answer each part from the shared data
fn run_parts_in_order(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    ctx: &RunContext,
) -> Result<(), ArcExecutorError> {
    let mut solver = match ctx.registry.create_solver(work.year, work.day, input) {
        Ok(solver) => solver,
        Err(e) => {
            warn!(year = work.year, day = work.day, "{e}");
            return send_failures(work, None, &ExecutorError::Solver(e).into(), tx);
        }
    };

    for part in work.parts.clone() {
        send(tx, solve_part(work, part, &mut *solver))?;
    }
    Ok(())
}

/// Each part parses its own copy of the input; results are sent in part order
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    ctx: &RunContext,
) -> Result<(), ArcExecutorError> {
    let results: Vec<SolverResult> = work
        .parts
        .clone()
        .into_par_iter()
        .map(
            |part| match ctx.registry.create_solver(work.year, work.day, input) {
                Ok(mut solver) => solve_part(work, part, &mut *solver),
                Err(e) => failure(work, part, None, ExecutorError::Solver(e).into()),
            },
        )
        .collect();

    for result in results {
        send(tx, result)?;
    }
    Ok(())
}

fn solve_part(work: &WorkItem, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    let parse_duration = Some(solver.parse_duration());
    match solver.solve(part) {
        Ok(solved) => {
            debug!(year = work.year, day = work.day, part, "solved");
            SolverResult {
                year: work.year,
                day: work.day,
                part,
                title: work.title,
                solve_duration: solved.duration(),
                answer: Ok(solved.answer),
                parse_duration,
            }
        }
        Err(e) => {
            debug!(year = work.year, day = work.day, part, error = %e, "part failed");
            let err = ExecutorError::Solver(e.into()).into();
            failure(work, part, parse_duration, err)
        }
    }
}

fn failure(
    work: &WorkItem,
    part: u8,
    parse_duration: Option<TimeDelta>,
    err: ArcExecutorError,
) -> SolverResult {
    SolverResult {
        year: work.year,
        day: work.day,
        part,
        title: work.title,
        answer: Err(err),
        parse_duration,
        solve_duration: TimeDelta::zero(),
    }
}

/// One failed result per requested part, all sharing `err`
fn send_failures(
    work: &WorkItem,
    parse_duration: Option<TimeDelta>,
    err: &ArcExecutorError,
    tx: &Sender<SolverResult>,
) -> Result<(), ArcExecutorError> {
    for part in work.parts.clone() {
        send(tx, failure(work, part, parse_duration, err.clone()))?;
    }
    Ok(())
}

fn send(tx: &Sender<SolverResult>, result: SolverResult) -> Result<(), ArcExecutorError> {
    tx.send(result)
        .map_err(|_| ExecutorError::ChannelSend.into())
}
