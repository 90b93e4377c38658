use catnect_core::logic::board::COLS;
use std::io::{self, BufRead};

/// Next line of input without its line ending, or `None` at end of input.
///
/// # Errors
///
/// Propagates read failures from `input`.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

/// A column number as typed. Range is left to the board, which rejects
/// anything past the last column.
pub fn parse_column(line: &str) -> Option<usize> {
    line.trim().parse().ok()
}

pub fn column_prompt() -> String {
    format!("Player, enter your column (0-{}): ", COLS - 1)
}

/// Anything except an explicit no starts another round.
pub fn wants_another_round(answer: Option<&str>) -> bool {
    answer.is_some_and(|a| !a.trim_start().starts_with(['n', 'N']))
}
