use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError, Solver, SolverExt};
use puzzle_solver_macros::PuzzleSolver;

#[derive(PuzzleSolver)]
#[puzzle_solver(max_parts = 2)]
struct TestSolver;

impl PuzzleParser for TestSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

#[test]
fn parts_constant_matches_attribute() {
    assert_eq!(<TestSolver as Solver>::PARTS, 2);
}

#[test]
fn generated_dispatch_reaches_each_part() {
    let mut shared = TestSolver::parse("1\n2\n3").unwrap();

    assert_eq!(TestSolver::solve_part(&mut shared, 1).unwrap(), "6");
    assert_eq!(TestSolver::solve_part(&mut shared, 2).unwrap(), "6");
}

#[test]
fn unknown_part_is_not_implemented() {
    let mut shared = TestSolver::parse("1\n2\n3").unwrap();

    let result = TestSolver::solve_part(&mut shared, 3);
    assert!(matches!(result, Err(SolveError::PartNotImplemented(3))));
}

#[test]
fn checked_range_rejects_out_of_bounds_parts() {
    let mut shared = TestSolver::parse("1\n2\n3").unwrap();

    assert!(matches!(
        TestSolver::solve_part_checked_range(&mut shared, 0),
        Err(SolveError::PartOutOfRange(0))
    ));
    assert!(matches!(
        TestSolver::solve_part_checked_range(&mut shared, 3),
        Err(SolveError::PartOutOfRange(3))
    ));
}
