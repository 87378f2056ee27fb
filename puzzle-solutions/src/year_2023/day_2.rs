use anyhow::anyhow;
use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};
use std::str::FromStr;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(year = 2023, day = 2, tags = ["2023", "parsing"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    /// Largest draw of this color a game may contain and still be valid.
    fn cap(self) -> u32 {
        match self {
            Color::Red => 12,
            Color::Green => 13,
            Color::Blue => 14,
        }
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Color::Red),
            "green" => Ok(Color::Green),
            "blue" => Ok(Color::Blue),
            other => Err(anyhow!("unknown color {:?}", other)),
        }
    }
}

/// One input line: `Game <id>: <turn>; <turn>; ...`, each turn a
/// comma-separated list of `<count> <color>` draws.
#[derive(Debug)]
pub struct Game {
    id: u32,
    turns: Vec<Vec<(u32, Color)>>,
}

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Game>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .lines()
            .enumerate()
            .map(|(line_idx, line)| {
                parse_game(line).map_err(|e| {
                    ParseError::InvalidFormat(format!("(line {}) {}", line_idx + 1, e))
                })
            })
            .collect()
    }
}

fn parse_game(line: &str) -> Result<Game, anyhow::Error> {
    let (header, body) = line
        .split_once(':')
        .ok_or_else(|| anyhow!("missing ':' separator"))?;
    let id = header
        .strip_prefix("Game ")
        .ok_or_else(|| anyhow!("expected 'Game <id>' header"))?
        .trim()
        .parse::<u32>()
        .map_err(|_| anyhow!("bad game id {:?}", header))?;

    let turns = body
        .split(';')
        .map(|turn| {
            turn.split(',')
                .map(|draw| {
                    let (count, color) = draw
                        .trim()
                        .split_once(' ')
                        .ok_or_else(|| anyhow!("expected '<count> <color>' draw"))?;
                    let count = count
                        .parse::<u32>()
                        .map_err(|_| anyhow!("bad draw count {:?}", count))?;
                    Ok((count, color.parse()?))
                })
                .collect::<Result<Vec<_>, anyhow::Error>>()
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Game { id, turns })
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .iter()
            .filter(|game| {
                game.turns
                    .iter()
                    .flatten()
                    .all(|&(count, color)| count <= color.cap())
            })
            .map(|game| game.id)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared.iter().map(|game| u64::from(power(game))).sum();
        Ok(total.to_string())
    }
}

/// Product of the per-color maxima across all turns. Colors never drawn stay
/// at 0 and never lower a running maximum, so a game missing a color has
/// power 0.
fn power(game: &Game) -> u32 {
    let (mut red, mut green, mut blue) = (0u32, 0u32, 0u32);
    for &(count, color) in game.turns.iter().flatten() {
        match color {
            Color::Red => red = red.max(count),
            Color::Green => green = green.max(count),
            Color::Blue => blue = blue.max(count),
        }
    }
    red * green * blue
}
