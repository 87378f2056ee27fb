//! Property-based tests for the daily solutions

use proptest::prelude::*;
use puzzle_solver::{PartSolver, PuzzleParser};
use puzzle_solutions::year_2023::{day_1, day_2, day_4};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Lines of plain digits need no word normalization: the value is
    /// always ten times the first digit plus the last.
    #[test]
    fn digit_only_lines_combine_first_and_last(
        lines in prop::collection::vec(prop::collection::vec(0u32..10, 1..8), 1..20)
    ) {
        let input = lines
            .iter()
            .map(|digits| digits.iter().map(|d| d.to_string()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n");
        let expected: u32 = lines
            .iter()
            .map(|digits| digits[0] * 10 + digits[digits.len() - 1])
            .sum();

        let mut shared = <day_1::Solver as PuzzleParser>::parse(&input).unwrap();
        let answer = <day_1::Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        prop_assert_eq!(answer, expected.to_string());
    }

    /// Solving is a pure function of the input text: two fresh parses of the
    /// same rendered games give identical answers for both parts.
    #[test]
    fn game_answers_are_deterministic(
        games in prop::collection::vec(
            prop::collection::vec(
                prop::collection::vec((1u32..30, 0usize..3), 1..4),
                1..4,
            ),
            1..10,
        )
    ) {
        const COLORS: [&str; 3] = ["red", "green", "blue"];
        let input = games
            .iter()
            .enumerate()
            .map(|(i, turns)| {
                let body = turns
                    .iter()
                    .map(|turn| {
                        turn.iter()
                            .map(|&(count, color)| format!("{} {}", count, COLORS[color]))
                            .collect::<Vec<_>>()
                            .join(", ")
                    })
                    .collect::<Vec<_>>()
                    .join("; ");
                format!("Game {}: {}", i + 1, body)
            })
            .collect::<Vec<_>>()
            .join("\n");

        let mut first = <day_2::Solver as PuzzleParser>::parse(&input).unwrap();
        let mut second = <day_2::Solver as PuzzleParser>::parse(&input).unwrap();

        prop_assert_eq!(
            <day_2::Solver as PartSolver<1>>::solve(&mut first).unwrap(),
            <day_2::Solver as PartSolver<1>>::solve(&mut second).unwrap()
        );
        prop_assert_eq!(
            <day_2::Solver as PartSolver<2>>::solve(&mut first).unwrap(),
            <day_2::Solver as PartSolver<2>>::solve(&mut second).unwrap()
        );
    }

    /// Card propagation agrees with a direct simulation over the winning
    /// counts, and every card retains at least its own copy.
    #[test]
    fn card_propagation_matches_simulation(
        winning_counts in prop::collection::vec(0usize..6, 1..30)
    ) {
        // Render a card whose first w current numbers hit the winning set
        // {1..5} and whose fillers never do.
        let input = winning_counts
            .iter()
            .enumerate()
            .map(|(i, &w)| {
                let current = (1..=w)
                    .map(|n| n.to_string())
                    .chain(["100".to_string(), "101".to_string()])
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("Card {}: {} | 1 2 3 4 5", i + 1, current)
            })
            .collect::<Vec<_>>()
            .join("\n");

        let mut expected = vec![1u64; winning_counts.len()];
        for i in 0..winning_counts.len() {
            for j in i + 1..(i + 1 + winning_counts[i]).min(winning_counts.len()) {
                expected[j] += expected[i];
            }
        }
        let expected_total: u64 = expected.iter().sum();

        let mut shared = <day_4::Solver as PuzzleParser>::parse(&input).unwrap();
        let answer = <day_4::Solver as PartSolver<2>>::solve(&mut shared).unwrap();
        prop_assert_eq!(&answer, &expected_total.to_string());
        prop_assert!(expected_total >= winning_counts.len() as u64);
    }
}
