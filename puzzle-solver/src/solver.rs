//! Core solver traits

use crate::error::{ParseError, SolveError};

/// Trait for parsing puzzle input into shared data
///
/// Defines the shared data type and the parsing logic for a solver, keeping
/// parsing separate from solving. `SharedData` is a GAT so a solver can
/// either own its parsed data or borrow slices straight out of the input.
///
/// # Example
///
/// ```
/// use puzzle_solver::{ParseError, PuzzleParser};
///
/// struct LineLengths;
///
/// impl PuzzleParser for LineLengths {
///     // Zero-copy: shared data borrows from the input string.
///     type SharedData<'a> = Vec<&'a str>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         Ok(input.lines().collect())
///     }
/// }
/// ```
pub trait PuzzleParser {
    /// The shared data structure holding parsed input and intermediate results.
    ///
    /// Use any ownership strategy:
    /// - `Vec<T>` or custom structs for owned data (supports caching results
    ///   between parts through the `&mut` access `PartSolver` gets)
    /// - `Vec<&'a str>` or `&'a str` for zero-copy borrowed data
    type SharedData<'a>;

    /// Parse the input string into the shared data structure.
    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError>;
}

/// Trait for solving one specific part of a puzzle.
///
/// The const generic `N` is the part number (1, 2, ...). Implementing this
/// trait per part lets the `PuzzleSolver` derive generate the `Solver`
/// dispatch, and makes a missing part a compile-time error rather than a
/// runtime surprise.
///
/// # Example
///
/// ```
/// use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
///
/// struct Totals;
///
/// impl PuzzleParser for Totals {
///     type SharedData<'a> = Vec<i64>;
///
///     fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
///         input
///             .lines()
///             .map(|l| {
///                 l.parse()
///                     .map_err(|_| ParseError::InvalidFormat("bad int".into()))
///             })
///             .collect()
///     }
/// }
///
/// impl PartSolver<1> for Totals {
///     fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
///         Ok(shared.iter().sum::<i64>().to_string())
///     }
/// }
/// ```
pub trait PartSolver<const N: u8>: PuzzleParser {
    /// Solve this part of the puzzle.
    ///
    /// # Arguments
    /// * `shared` - Mutable reference to shared data
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError)` - An error occurred while solving
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError>;
}

/// Core trait that every registered solver must implement.
///
/// Extends `PuzzleParser` to inherit the `SharedData` type and `parse()`.
/// Normally generated by `#[derive(PuzzleSolver)]`, which dispatches each
/// part number to the corresponding `PartSolver` impl; a hand-written impl
/// is equally valid.
///
/// Parts receive `&mut` access to shared data, so a later part can pick up
/// intermediate results cached by an earlier one.
pub trait Solver: PuzzleParser {
    /// Number of parts this solver implements
    const PARTS: u8;

    /// Solve a specific part of the problem
    ///
    /// # Returns
    /// * `Ok(String)` - The answer for this part
    /// * `Err(SolveError::PartNotImplemented)` - The part is not implemented
    /// * `Err(SolveError::SolveFailed)` - An error occurred while solving
    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError>;
}

/// Range-checked solving, blanket-implemented for all solvers.
pub trait SolverExt: Solver {
    /// Like [`Solver::solve_part`], but rejects part numbers outside
    /// `1..=PARTS` with [`SolveError::PartOutOfRange`] before dispatching.
    fn solve_part_checked_range(
        shared: &mut Self::SharedData<'_>,
        part: u8,
    ) -> Result<String, SolveError> {
        if (1..=Self::PARTS).contains(&part) {
            Self::solve_part(shared, part)
        } else {
            Err(SolveError::PartOutOfRange(part))
        }
    }
}

impl<T: Solver + ?Sized> SolverExt for T {}
