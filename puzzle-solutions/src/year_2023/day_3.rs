use crate::grid;
use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};
use std::collections::HashMap;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 2)]
#[puzzle(year = 2023, day = 3, tags = ["2023", "grid"])]
pub struct Solver;

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<Vec<char>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input
            .lines()
            .map(|line| line.trim().chars().collect())
            .collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(part_number_sum(shared).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(gear_ratio_sum(shared).to_string())
    }
}

/// Cell lookup tolerating ragged rows: a coordinate beyond the grid, or past
/// the end of a shorter row, is simply not a cell.
fn cell_at(cells: &[Vec<char>], row: isize, col: isize) -> Option<char> {
    let row: usize = row.try_into().ok()?;
    let col: usize = col.try_into().ok()?;
    cells.get(row)?.get(col).copied()
}

fn symbol_adjacent(cells: &[Vec<char>], row: usize, col: usize) -> bool {
    grid::neighbours(row, col).any(|(r, c)| cell_at(cells, r, c).is_some_and(grid::is_symbol))
}

fn part_number_sum(cells: &[Vec<char>]) -> u64 {
    // First pass: mark digit cells with a symbol among their 8 neighbours.
    let marked: Vec<Vec<bool>> = cells
        .iter()
        .enumerate()
        .map(|(i, row)| {
            row.iter()
                .enumerate()
                .map(|(j, &c)| grid::is_digit(c) && symbol_adjacent(cells, i, j))
                .collect()
        })
        .collect();

    // Second pass: accumulate digit runs left to right; a run contributes its
    // full value once if any of its cells is marked.
    let mut total = 0u64;
    for (i, row) in cells.iter().enumerate() {
        let mut current = 0u64;
        let mut run_marked = false;
        for (j, &c) in row.iter().enumerate() {
            if let Some(d) = c.to_digit(10) {
                current = current * 10 + u64::from(d);
                run_marked = run_marked || marked[i][j];
            } else {
                if run_marked {
                    total += current;
                }
                current = 0;
                run_marked = false;
            }
        }
        if run_marked {
            total += current;
        }
    }
    total
}

/// Digit runs become arena records: `run_values[k]` is the numeric value of
/// run `k`, and every cell the run occupies maps to `k` in its row's table.
/// Comparing run indices keeps two equal-valued runs distinct.
fn gear_ratio_sum(cells: &[Vec<char>]) -> u64 {
    let mut run_values: Vec<u64> = Vec::new();
    let mut run_at: Vec<HashMap<usize, usize>> = Vec::with_capacity(cells.len());

    for row in cells {
        let mut row_runs = HashMap::new();
        let mut run_start = None;
        let mut current = 0u64;
        for (j, &c) in row.iter().enumerate() {
            if let Some(d) = c.to_digit(10) {
                run_start.get_or_insert(j);
                current = current * 10 + u64::from(d);
            } else if let Some(start) = run_start.take() {
                close_run(&mut run_values, &mut row_runs, start..j, current);
                current = 0;
            }
        }
        if let Some(start) = run_start {
            close_run(&mut run_values, &mut row_runs, start..row.len(), current);
        }
        run_at.push(row_runs);
    }

    let mut total = 0u64;
    for (i, row) in cells.iter().enumerate() {
        for (j, &c) in row.iter().enumerate() {
            if !grid::is_star(c) {
                continue;
            }
            let mut adjacent: Vec<usize> = grid::neighbours(i, j)
                .filter_map(|(r, c)| {
                    let r: usize = r.try_into().ok()?;
                    let c: usize = c.try_into().ok()?;
                    run_at.get(r)?.get(&c).copied()
                })
                .collect();
            adjacent.sort_unstable();
            adjacent.dedup();
            if let [first, second] = adjacent[..] {
                total += run_values[first] * run_values[second];
            }
        }
    }
    total
}

fn close_run(
    run_values: &mut Vec<u64>,
    row_runs: &mut HashMap<usize, usize>,
    span: std::ops::Range<usize>,
    value: u64,
) {
    let run = run_values.len();
    run_values.push(value);
    for col in span {
        row_runs.insert(col, run);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..";

    fn parse(input: &str) -> Vec<Vec<char>> {
        <Solver as PuzzleParser>::parse(input).unwrap()
    }

    #[test]
    fn part_numbers_summed() {
        // 114 and 58 touch no symbol; everything else counts.
        assert_eq!(part_number_sum(&parse(SAMPLE)), 4361);
    }

    #[test]
    fn run_counted_once_even_with_multiple_marked_digits() {
        // Both '6's are adjacent to the '#'; 66 must be added exactly once.
        assert_eq!(part_number_sum(&parse("66.\n.#.")), 66);
    }

    #[test]
    fn diagonal_adjacency_counts() {
        assert_eq!(part_number_sum(&parse("12..\n..#.")), 12);
    }

    #[test]
    fn gear_ratios_summed() {
        // Two stars qualify: 467*35 and 755*598.
        assert_eq!(gear_ratio_sum(&parse(SAMPLE)), 467_835);
    }

    #[test]
    fn star_needs_exactly_two_distinct_runs() {
        // One adjacent run: nothing.
        assert_eq!(gear_ratio_sum(&parse("12*..")), 0);
        // Three adjacent runs: nothing.
        assert_eq!(gear_ratio_sum(&parse("1.2\n.*.\n.3.")), 0);
    }

    #[test]
    fn equal_valued_runs_stay_distinct() {
        // Two separate "12" runs around one star: 12 * 12.
        assert_eq!(gear_ratio_sum(&parse("12.12\n..*..")), 144);
    }

    #[test]
    fn ragged_rows_are_tolerated() {
        // Rows of differing widths; missing cells are neither digit nor symbol.
        assert_eq!(part_number_sum(&parse("123\n#")), 123);
        assert_eq!(part_number_sum(&parse("9\n..#")), 0);
    }

    #[test]
    fn solver_parts_agree_with_free_functions() {
        let mut shared = parse(SAMPLE);
        assert_eq!(
            <Solver as PartSolver<1>>::solve(&mut shared).unwrap(),
            "4361"
        );
        assert_eq!(
            <Solver as PartSolver<2>>::solve(&mut shared).unwrap(),
            "467835"
        );
    }
}
