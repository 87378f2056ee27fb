use anyhow::anyhow;
use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};
use std::collections::HashMap;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(year = 2024, day = 1, tags = ["2024", "lists"])]
pub struct Solver;

/// Two columns of integers, one pair per input line.
#[derive(Debug, Default)]
pub struct Lists {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Lists;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lists = Lists::default();
        for (line_idx, line) in input.lines().enumerate() {
            let (left, right) = parse_pair(line).map_err(|e| {
                ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
            })?;
            lists.left.push(left);
            lists.right.push(right);
        }
        Ok(lists)
    }
}

fn parse_pair(line: &str) -> Result<(i64, i64), anyhow::Error> {
    let mut tokens = line.split_whitespace();
    let left = tokens
        .next()
        .ok_or_else(|| anyhow!("expected two numbers"))?;
    let right = tokens
        .next()
        .ok_or_else(|| anyhow!("expected two numbers"))?;
    if tokens.next().is_some() {
        return Err(anyhow!("expected exactly two numbers"));
    }
    let left = left.parse().map_err(|_| anyhow!("bad number {:?}", left))?;
    let right = right
        .parse()
        .map_err(|_| anyhow!("bad number {:?}", right))?;
    Ok((left, right))
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.left.sort_unstable();
        shared.right.sort_unstable();
        let total: i64 = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(left, right)| (left - right).abs())
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let occurrences: HashMap<i64, i64> =
            shared.right.iter().fold(HashMap::new(), |mut acc, &n| {
                *acc.entry(n).or_insert(0) += 1;
                acc
            });
        let total: i64 = shared
            .left
            .iter()
            .map(|n| n * occurrences.get(n).unwrap_or(&0))
            .sum();
        Ok(total.to_string())
    }
}
