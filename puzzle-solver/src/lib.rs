//! Puzzle Solver Library
//!
//! A type-safe framework for hosting line-based puzzle solvers across
//! multiple event years and days. Each solver defines its own input parsing
//! and can produce answers for multiple parts.
//!
//! # Overview
//!
//! This library provides:
//! - Trait-based solver definitions with typed, possibly borrowed shared data
//! - Per-part solving via `PartSolver<N>` with derive-generated dispatch
//! - Timed, type-erased solver instances
//! - A plugin registry keyed by `(year, day)` with tag-based filtering
//!
//! # Quick Example
//!
//! ```
//! use puzzle_solver::{
//!     ParseError, PartSolver, PuzzleParser, PuzzleSolver, RegistryBuilder, SolveError,
//! };
//!
//! #[derive(PuzzleSolver)]
//! #[puzzle_solver(max_parts = 2)]
//! struct Totals;
//!
//! impl PuzzleParser for Totals {
//!     type SharedData<'a> = Vec<i64>;
//!
//!     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
//!         input
//!             .lines()
//!             .map(|line| {
//!                 line.parse()
//!                     .map_err(|_| ParseError::InvalidFormat("Expected integer".to_string()))
//!             })
//!             .collect()
//!     }
//! }
//!
//! impl PartSolver<1> for Totals {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().sum::<i64>().to_string())
//!     }
//! }
//!
//! impl PartSolver<2> for Totals {
//!     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
//!         Ok(shared.iter().product::<i64>().to_string())
//!     }
//! }
//!
//! let registry = RegistryBuilder::new()
//!     .register_solver::<Totals>(2023, 1)
//!     .unwrap()
//!     .build();
//!
//! let mut solver = registry.create_solver(2023, 1, "1\n2\n3").unwrap();
//! assert_eq!(solver.solve(1).unwrap().answer, "6");
//! assert_eq!(solver.solve(2).unwrap().answer, "6");
//! ```
//!
//! # Key Concepts
//!
//! ## Parsing and Solving
//!
//! [`PuzzleParser`] defines the shared data type (a GAT, so data may borrow
//! from the input) and how to produce it. [`PartSolver<N>`] solves one part;
//! `#[derive(PuzzleSolver)]` ties them together into a [`Solver`] impl with
//! part-number dispatch. Parts get `&mut` access to shared data, so
//! intermediate results can be cached between parts.
//!
//! ## Instances and Type Erasure
//!
//! [`SolverInstance`] binds a solver to one input and records parse timing;
//! [`DynSolver`] is the object-safe view the registry and runners work with.
//!
//! ## Plugin Registration
//!
//! `#[derive(AutoRegisterSolver)]` submits a [`SolverPlugin`] through
//! `inventory`; [`RegistryBuilder::register_all_plugins`] collects every
//! submission into a registry, optionally filtered by tag:
//!
//! ```ignore
//! #[derive(PuzzleSolver, AutoRegisterSolver)]
//! #[puzzle_solver(max_parts = 2)]
//! #[puzzle(year = 2023, day = 3, tags = ["2023", "grid"])]
//! struct Day3Solver;
//! ```

mod error;
mod instance;
mod registry;
mod solver;

// Re-export public API
pub use error::{ParseError, RegistrationError, SolveError, SolverError};
pub use instance::{DynSolver, SolveResult, SolverInstance};
pub use registry::{
    FactoryInfo, RegisterableSolver, RegistryBuilder, SolverFactory, SolverPlugin, SolverRegistry,
    SolverStorage, BASE_YEAR, CAPACITY, DAYS_PER_YEAR, MAX_YEARS,
};
pub use solver::{PartSolver, PuzzleParser, Solver, SolverExt};

// Re-export inventory for use by the derive macro
pub use inventory;

// Re-export the derive macros
pub use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};
