//! Property-based tests for the PuzzleSolver derive macro
//!
//! Verifies that the generated `Solver` impl is a faithful dispatcher over
//! the hand-written `PartSolver` impls.

use proptest::prelude::*;
use puzzle_solver::{
    ParseError, PartSolver, PuzzleParser, PuzzleSolver, SolveError, Solver,
};

#[derive(PuzzleSolver)]
#[puzzle_solver(max_parts = 2)]
struct TestSolver;

impl PuzzleParser for TestSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .filter(|l| !l.is_empty())
            .map(|l| {
                l.parse()
                    .map_err(|_| ParseError::InvalidFormat("bad int".into()))
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

/// **Property 1: Part dispatch correctness**
///
/// *For any* valid part number N, `Solver::solve_part(shared, N)` produces
/// the same result as calling `PartSolver<N>::solve(shared)` directly.
mod property_1_part_dispatch {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn solve_part_dispatches_to_correct_part_solver(
            numbers in prop::collection::vec(1i32..10, 1..5),
            part in 1u8..=2
        ) {
            let input = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
            let mut shared1 = <TestSolver as PuzzleParser>::parse(&input).unwrap();
            let mut shared2 = <TestSolver as PuzzleParser>::parse(&input).unwrap();

            let dispatched = <TestSolver as Solver>::solve_part(&mut shared1, part);

            let direct = match part {
                1 => <TestSolver as PartSolver<1>>::solve(&mut shared2),
                2 => <TestSolver as PartSolver<2>>::solve(&mut shared2),
                _ => unreachable!(),
            };

            prop_assert_eq!(dispatched.unwrap(), direct.unwrap());
        }
    }
}

/// **Property 2: Invalid part rejection**
///
/// *For any* part number outside `1..=max_parts`, the generated
/// `solve_part` returns `SolveError::PartNotImplemented`.
mod property_2_invalid_part_rejection {
    use super::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn invalid_part_returns_not_implemented(invalid_part in prop_oneof![Just(0u8), 3u8..=255]) {
            let input = "1\n2\n3";
            let mut shared = <TestSolver as PuzzleParser>::parse(input).unwrap();

            let result = <TestSolver as Solver>::solve_part(&mut shared, invalid_part);

            match result {
                Err(SolveError::PartNotImplemented(p)) => prop_assert_eq!(p, invalid_part),
                _ => prop_assert!(false, "Expected PartNotImplemented for part {}", invalid_part),
            }
        }
    }
}

/// **Property 3: Mutations are visible across parts**
///
/// *For any* solver where one part caches into shared data, a later part
/// dispatched through the generated impl observes the cached value.
mod property_3_mutation {
    use super::*;

    #[derive(Debug, Clone)]
    struct MutableData {
        numbers: Vec<i32>,
        cached_sum: Option<i32>,
    }

    #[derive(PuzzleSolver)]
    #[puzzle_solver(max_parts = 2)]
    struct MutatingSolver;

    impl PuzzleParser for MutatingSolver {
        type SharedData<'a> = MutableData;

        fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
            let numbers: Vec<i32> = input
                .lines()
                .filter(|l| !l.is_empty())
                .map(|l| {
                    l.parse()
                        .map_err(|_| ParseError::InvalidFormat("bad int".into()))
                })
                .collect::<Result<_, _>>()?;
            Ok(MutableData {
                numbers,
                cached_sum: None,
            })
        }
    }

    impl PartSolver<1> for MutatingSolver {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let sum: i32 = shared.numbers.iter().sum();
            shared.cached_sum = Some(sum);
            Ok(sum.to_string())
        }
    }

    impl PartSolver<2> for MutatingSolver {
        fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
            let sum = shared.cached_sum.unwrap_or(0);
            Ok((sum * 2).to_string())
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn mutation_is_visible_to_later_parts(numbers in prop::collection::vec(1i32..100, 1..5)) {
            let input = numbers.iter().map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
            let expected_sum: i32 = numbers.iter().sum();

            let mut shared = <MutatingSolver as PuzzleParser>::parse(&input).unwrap();

            let result1 = <MutatingSolver as Solver>::solve_part(&mut shared, 1).unwrap();
            prop_assert_eq!(result1, expected_sum.to_string());
            prop_assert_eq!(shared.cached_sum, Some(expected_sum));

            let result2 = <MutatingSolver as Solver>::solve_part(&mut shared, 2).unwrap();
            prop_assert_eq!(result2, (expected_sum * 2).to_string());
        }
    }
}
