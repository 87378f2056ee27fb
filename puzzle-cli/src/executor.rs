//! Parallel executor for running solvers

use crate::cli::ParallelizeBy;
use crate::config::Config;
use crate::error::{ArcExecutorError, ExecutorError};
use crate::inputs::InputStore;
use chrono::TimeDelta;
use itertools::Itertools;
use puzzle_solver::{DynSolver, ParseError, SolverError, SolverRegistry};
use rayon::prelude::*;
use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::sync::mpsc::Sender;

/// Result from running one part of one solver
pub struct SolverResult {
    pub year: u16,
    pub day: u8,
    pub part: u8,
    pub answer: Result<String, SolverError>,
    /// Parse timing, when parsing got far enough to be measured
    pub parse_duration: Option<TimeDelta>,
    pub solve_duration: TimeDelta,
}

/// Work item representing a solver to execute
pub struct WorkItem {
    pub year: u16,
    pub day: u8,
    pub parts: RangeInclusive<u8>,
}

/// Parallel executor for running solvers
pub struct Executor {
    shared: ExecutorShared,
    thread_pool: rayon::ThreadPool,
}

/// State shared by all worker tasks
struct ExecutorShared {
    registry: SolverRegistry,
    inputs: InputStore,
    parallelize_by: ParallelizeBy,
    year_filter: Option<u16>,
    day_filter: Option<u8>,
    part_filter: Option<u8>,
}

impl Executor {
    /// Create a new executor from config
    pub fn new(registry: SolverRegistry, config: &Config) -> Result<Self, ExecutorError> {
        let thread_pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.thread_count)
            .build()
            .map_err(|e| ExecutorError::ThreadPool(e.to_string()))?;

        Ok(Self {
            shared: ExecutorShared {
                registry,
                inputs: InputStore::new(config.input_dir.clone()),
                parallelize_by: config.parallelize_by,
                year_filter: config.year_filter,
                day_filter: config.day_filter,
                part_filter: config.part_filter,
            },
            thread_pool,
        })
    }

    /// Collect work items by filtering registry metadata
    pub fn collect_work_items(&self) -> Vec<WorkItem> {
        let cfg = &self.shared;
        cfg.registry
            .storage()
            .iter_info()
            .filter(|info| cfg.year_filter.is_none_or(|y| info.year == y))
            .filter(|info| cfg.day_filter.is_none_or(|d| info.day == d))
            .map(|info| WorkItem {
                year: info.year,
                day: info.day,
                parts: self.filter_parts(info.parts),
            })
            .filter(|w| !w.parts.is_empty())
            .collect()
    }

    /// Paths of input files the given work items need but the store lacks
    pub fn missing_inputs(&self, work_items: &[WorkItem]) -> Vec<PathBuf> {
        work_items
            .iter()
            .filter(|w| !self.shared.inputs.contains(w.year, w.day))
            .map(|w| self.shared.inputs.input_path(w.year, w.day))
            .collect()
    }

    /// Filter parts based on config.part_filter and the solver's max parts
    #[allow(clippy::reversed_empty_ranges)]
    fn filter_parts(&self, max_parts: u8) -> RangeInclusive<u8> {
        match self.shared.part_filter {
            Some(p) if p <= max_parts => p..=p,
            Some(_) => 1..=0, // Empty range - intentional
            None => 1..=max_parts,
        }
    }

    /// Execute all work items and send results to the channel
    pub fn execute(&self, tx: Sender<SolverResult>) -> Result<(), ArcExecutorError> {
        let work_items = self.collect_work_items();

        match self.shared.parallelize_by {
            ParallelizeBy::Sequential => {
                let mut collected_error: Option<ArcExecutorError> = None;
                for work in work_items {
                    if let Err(e) = run_work(&work, &tx, &self.shared) {
                        collected_error = Some(ArcExecutorError::combine_opt(collected_error, e));
                    }
                }
                collected_error.map_or(Ok(()), Err)
            }
            ParallelizeBy::Year => {
                // Group by year; years run in parallel, their days in order.
                let by_year: Vec<Vec<WorkItem>> = work_items
                    .into_iter()
                    .chunk_by(|w| w.year)
                    .into_iter()
                    .map(|(_, group)| group.collect())
                    .collect();

                self.execute_parallel_grouped(by_year, &tx)
            }
            // Day and Part both fan out across all work items; Part
            // additionally fans out within run_work.
            ParallelizeBy::Day | ParallelizeBy::Part => self.execute_parallel(work_items, &tx),
        }
    }

    /// Execute work items in parallel, collecting errors
    fn execute_parallel(
        &self,
        work_items: Vec<WorkItem>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let shared = &self.shared;

        self.thread_pool.install(|| {
            work_items
                .into_par_iter()
                .map(|work| run_work(&work, tx, shared).err())
                .reduce_with(merge_errors)
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }

    /// Execute grouped work items in parallel (for year-level parallelism)
    fn execute_parallel_grouped(
        &self,
        groups: Vec<Vec<WorkItem>>,
        tx: &Sender<SolverResult>,
    ) -> Result<(), ArcExecutorError> {
        let shared = &self.shared;

        self.thread_pool.install(|| {
            groups
                .into_par_iter()
                .map(|items| {
                    let mut err = None;
                    for work in items {
                        if let Err(e) = run_work(&work, tx, shared) {
                            err = Some(ArcExecutorError::combine_opt(err, e))
                        }
                    }
                    err
                })
                .reduce_with(merge_errors)
                .unwrap_or_default()
                .map_or(Ok(()), Err)
        })
    }
}

/// Merge two optional errors without losing either side
fn merge_errors(
    err1: Option<ArcExecutorError>,
    err2: Option<ArcExecutorError>,
) -> Option<ArcExecutorError> {
    match (err1, err2) {
        (Some(e1), Some(e2)) => Some(ArcExecutorError::combine(e1, e2)),
        (e1, e2) => e1.or(e2),
    }
}

/// Run one work item, routing by part-level parallelism
fn run_work(
    work: &WorkItem,
    tx: &Sender<SolverResult>,
    shared: &ExecutorShared,
) -> Result<(), ArcExecutorError> {
    let input = match read_input(work, shared) {
        Ok(input) => input,
        Err(e) => {
            // Report the missing/unreadable input once per expected part.
            let message = e.to_string();
            for part in work.parts.clone() {
                tx.send(input_error_result(work.year, work.day, part, &message))
                    .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    if matches!(shared.parallelize_by, ParallelizeBy::Part) {
        run_parts_parallel(work, &input, tx, shared)
    } else {
        run_parts_sequential(work, &input, tx, shared)
    }
}

/// Solve the parts of one work item in parallel, each on its own instance
fn run_parts_parallel(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    shared: &ExecutorShared,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    work.parts
        .clone()
        .into_par_iter()
        .map(|part| {
            let result = match shared.registry.create_solver(year, day, input) {
                Ok(mut solver) => solve_part(year, day, part, &mut *solver),
                Err(e) => failed_result(year, day, part, e),
            };
            tx.send(result)
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))
                .err()
        })
        .reduce_with(merge_errors)
        .unwrap_or_default()
        .map_or(Ok(()), Err)
}

/// Solve the parts of one work item in order on a single instance, so parts
/// share parsed data and any cached intermediate results
fn run_parts_sequential(
    work: &WorkItem,
    input: &str,
    tx: &Sender<SolverResult>,
    shared: &ExecutorShared,
) -> Result<(), ArcExecutorError> {
    let (year, day) = (work.year, work.day);

    let mut solver = match shared.registry.create_solver(year, day, input) {
        Ok(solver) => solver,
        Err(e) => {
            let message = e.to_string();
            for part in work.parts.clone() {
                tx.send(failed_result(
                    year,
                    day,
                    part,
                    SolverError::Parse(ParseError::Other(message.clone())),
                ))
                .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
            }
            return Ok(());
        }
    };

    for part in work.parts.clone() {
        tx.send(solve_part(year, day, part, &mut *solver))
            .map_err(|_| ArcExecutorError::from(ExecutorError::ChannelSend))?;
    }
    Ok(())
}

/// Read the input for a work item from the store
fn read_input(work: &WorkItem, shared: &ExecutorShared) -> Result<String, ExecutorError> {
    let (year, day) = (work.year, work.day);
    shared
        .inputs
        .get(year, day)
        .map_err(|e| ExecutorError::InputRead {
            year,
            day,
            source: Box::new(e),
        })?
        .ok_or_else(|| ExecutorError::InputRead {
            year,
            day,
            source: Box::new(std::io::Error::other(format!(
                "input file {} not found",
                shared.inputs.input_path(year, day).display()
            ))),
        })
}

/// Solve a single part on an existing instance
fn solve_part(year: u16, day: u8, part: u8, solver: &mut dyn DynSolver) -> SolverResult {
    match solver.solve(part) {
        Ok(result) => SolverResult {
            year,
            day,
            part,
            solve_duration: result.duration(),
            answer: Ok(result.answer),
            parse_duration: Some(solver.parse_duration()),
        },
        Err(e) => SolverResult {
            year,
            day,
            part,
            answer: Err(e.into()),
            parse_duration: Some(solver.parse_duration()),
            solve_duration: TimeDelta::zero(),
        },
    }
}

/// Result for a part whose solver could not be created
fn failed_result(year: u16, day: u8, part: u8, error: SolverError) -> SolverResult {
    SolverResult {
        year,
        day,
        part,
        answer: Err(error),
        parse_duration: None,
        solve_duration: TimeDelta::zero(),
    }
}

/// Result for a part whose input could not be read
fn input_error_result(year: u16, day: u8, part: u8, message: &str) -> SolverResult {
    failed_result(
        year,
        day,
        part,
        SolverError::Parse(ParseError::MissingData(message.to_string())),
    )
}
