use anyhow::anyhow;
use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};
use std::collections::HashSet;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(year = 2023, day = 4, tags = ["2023", "counting"])]
pub struct Solver;

/// One input line, reduced to what scoring needs: how many of the card's
/// current numbers appear in its winning set, and how many copies of the
/// card exist. `winning_count` is fixed at parse time; `card_count` starts
/// at 1 and accumulates copies propagated by earlier cards.
#[derive(Debug, Clone, Copy)]
pub struct Card {
    winning_count: usize,
    card_count: u64,
}

#[derive(Debug)]
pub struct SharedData {
    cards: Vec<Card>,
    total_copies: Option<u64>,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_card(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|cards| SharedData {
                cards,
                total_copies: None,
            })
    }
}

fn parse_card(line: &str) -> Result<Card, anyhow::Error> {
    // The card id before ':' plays no role in scoring.
    let (_, numbers) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' separator"))?;
    let (current, winning) = numbers
        .split_once('|')
        .ok_or_else(|| anyhow!("missing '|' separator"))?;

    let current = parse_numbers(current)?;
    let winning: HashSet<u32> = parse_numbers(winning)?.into_iter().collect();

    // Duplicates among the current numbers each count on their own.
    let winning_count = current.iter().filter(|n| winning.contains(n)).count();

    Ok(Card {
        winning_count,
        card_count: 1,
    })
}

fn parse_numbers(list: &str) -> Result<Vec<u32>, anyhow::Error> {
    list.split_whitespace()
        .map(|token| {
            token
                .parse()
                .map_err(|_| anyhow!("bad number {:?}", token))
        })
        .collect()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .cards
            .iter()
            .map(|card| match card.winning_count {
                0 => 0,
                w => 1u64 << (w - 1),
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_copies(shared).to_string())
    }
}

/// Forward propagation over the card list. Order is load-bearing: card `i`
/// must have received every copy from cards before it when it propagates its
/// own `card_count` to the next `winning_count` cards (clipped at the end of
/// the list). The total is cached so re-solving cannot propagate twice.
fn total_copies(shared: &mut SharedData) -> u64 {
    if let Some(total) = shared.total_copies {
        return total;
    }

    for i in 0..shared.cards.len() {
        let Card {
            winning_count,
            card_count,
        } = shared.cards[i];
        let end = (i + 1 + winning_count).min(shared.cards.len());
        for copy in &mut shared.cards[i + 1..end] {
            copy.card_count += card_count;
        }
    }

    let total = shared.cards.iter().map(|card| card.card_count).sum();
    shared.total_copies = Some(total);
    total
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11";

    #[test]
    fn winning_counts_from_sample() {
        let shared = <Solver as PuzzleParser>::parse(SAMPLE).unwrap();
        let counts: Vec<_> = shared.cards.iter().map(|c| c.winning_count).collect();
        assert_eq!(counts, [4, 2, 2, 1, 0, 0]);
    }

    #[test]
    fn scores_double_per_extra_match() {
        let mut shared = <Solver as PuzzleParser>::parse(SAMPLE).unwrap();
        let answer = <Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "13");
    }

    #[test]
    fn duplicate_current_numbers_count_per_occurrence() {
        let shared = <Solver as PuzzleParser>::parse("Card 1: 5 5 7 | 5").unwrap();
        assert_eq!(shared.cards[0].winning_count, 2);
    }

    #[test]
    fn propagation_matches_worked_example() {
        let mut shared = <Solver as PuzzleParser>::parse(SAMPLE).unwrap();
        assert_eq!(total_copies(&mut shared), 30);

        let counts: Vec<_> = shared.cards.iter().map(|c| c.card_count).collect();
        assert_eq!(counts, [1, 2, 4, 8, 14, 1]);
    }

    #[test]
    fn propagation_clips_at_end_of_list() {
        // Last card wins 9 times but has no cards after it.
        let mut shared =
            <Solver as PuzzleParser>::parse("Card 1: 1 2 3 4 5 6 7 8 9 | 1 2 3 4 5 6 7 8 9")
                .unwrap();
        assert_eq!(total_copies(&mut shared), 1);
    }

    #[test]
    fn repeated_solves_reuse_cached_total() {
        let mut shared = <Solver as PuzzleParser>::parse(SAMPLE).unwrap();
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "30");
        assert_eq!(<Solver as PartSolver<2>>::solve(&mut shared).unwrap(), "30");
    }

    #[test]
    fn malformed_lines_are_not_skipped() {
        let err = <Solver as PuzzleParser>::parse("Card 1: 1 2 | 3\nno separators here")
            .unwrap_err();
        assert!(err.to_string().contains("line 2"));
    }
}
