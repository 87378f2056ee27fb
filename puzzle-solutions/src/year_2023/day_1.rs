use puzzle_solver::{ParseError, PartSolver, PuzzleParser, SolveError};
use puzzle_solver_macros::{AutoRegisterSolver, PuzzleSolver};
use std::borrow::Cow;

#[derive(PuzzleSolver, AutoRegisterSolver)]
#[puzzle_solver(max_parts = 1)]
#[puzzle(year = 2023, day = 1, tags = ["2023", "words"])]
pub struct Solver;

const NUMBER_WORDS: [&str; 9] = [
    "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

impl PuzzleParser for Solver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(input.lines().collect())
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared.iter().map(|line| line_value(line)).sum();
        Ok(total.to_string())
    }
}

/// Earliest and latest spelled-out number word in the line, as
/// `(byte index, digit value)` pairs.
///
/// The two ends are located independently: `find` per word for the earliest
/// occurrence, `rfind` per word for the latest. No word-boundary checks are
/// performed, so overlapping words are all candidates ("twone" yields 2 for
/// the first end and 1 for the last), and a lone word supplies both ends.
fn first_and_last_number_word(line: &str) -> Option<((usize, u8), (usize, u8))> {
    let first = NUMBER_WORDS
        .iter()
        .zip(1u8..)
        .filter_map(|(word, digit)| line.find(word).map(|index| (index, digit)))
        .min_by_key(|&(index, _)| index)?;
    let last = NUMBER_WORDS
        .iter()
        .zip(1u8..)
        .filter_map(|(word, digit)| line.rfind(word).map(|index| (index, digit)))
        .max_by_key(|&(index, _)| index)?;
    Some((first, last))
}

/// Splice the digit for each located word in front of the word itself,
/// leaving every original character (digits included) in place.
fn normalize_line(line: &str) -> Cow<'_, str> {
    let Some(((first_index, first_digit), (last_index, last_digit))) =
        first_and_last_number_word(line)
    else {
        return Cow::Borrowed(line);
    };

    let mut normalized = String::with_capacity(line.len() + 2);
    normalized.push_str(&line[..first_index]);
    normalized.push((b'0' + first_digit) as char);
    normalized.push_str(&line[first_index..last_index]);
    normalized.push((b'0' + last_digit) as char);
    normalized.push_str(&line[last_index..]);
    Cow::Owned(normalized)
}

fn line_value(line: &str) -> u32 {
    let normalized = normalize_line(line);
    let mut digits = normalized.chars().filter_map(|c| c.to_digit(10));
    let Some(first) = digits.next() else {
        return 0;
    };
    let last = digits.last().unwrap_or(first);
    first * 10 + last
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn digits_only() {
        assert_eq!(line_value("1abc2"), 12);
        assert_eq!(line_value("pqr3stu8vwx"), 38);
        assert_eq!(line_value("treb7uchet"), 77);
    }

    #[test]
    fn spelled_words() {
        assert_eq!(line_value("two1nine"), 29);
        assert_eq!(line_value("abcone2threexyz"), 13);
        assert_eq!(line_value("4nineeightseven2"), 42);
    }

    #[test]
    fn overlapping_words() {
        // "eight" then "two" then "three": first = 8, last = 3.
        assert_eq!(line_value("eightwothree"), 83);
        // "two" and "one" share the 'o'; both ends are found.
        assert_eq!(line_value("twone"), 21);
        assert_eq!(line_value("xtwone3four"), 24);
        assert_eq!(line_value("zoneight234"), 14);
    }

    #[test]
    fn single_word_supplies_both_ends() {
        assert_eq!(line_value("seven"), 77);
    }

    #[test]
    fn no_digits_or_words_is_zero() {
        assert_eq!(line_value(""), 0);
        assert_eq!(line_value("xyzzy"), 0);
    }

    #[test]
    fn normalization_keeps_original_characters() {
        assert_eq!(normalize_line("two1nine"), "2two19nine");
        assert_eq!(normalize_line("abc"), "abc");
    }

    #[test]
    fn sums_all_lines() {
        let input = "two1nine\neightwothree\nabcone2threexyz\nxtwone3four\n\
                     4nineeightseven2\nzoneight234\n7pqrstsixteen";
        let mut shared = <Solver as PuzzleParser>::parse(input).unwrap();
        let answer = <Solver as PartSolver<1>>::solve(&mut shared).unwrap();
        assert_eq!(answer, "281");
    }
}
