//! Interactive candidate selection
//!
//! The prompt loop is an explicit two-state machine: parse one input line
//! into `Selection`; anything but `Retry` finishes the loop, `Retry`
//! re-prompts. There is no retry limit.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::console;

/// Outcome of parsing one line of selection input.
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// 1-based indices, every one verified in range.
    Indices(Vec<usize>),
    /// Every candidate.
    All,
    /// Nothing; the user backed out.
    None,
    /// Unusable input; prompt again with the carried reason.
    Retry(String),
}

/// Parse a single selection line against `candidate_count` entries.
///
/// Index lists are all-or-nothing: one unparsable or out-of-range index
/// rejects the whole line, never a partial selection.
pub fn parse_selection(input: &str, candidate_count: usize) -> Selection {
    let normalized = input.trim().to_lowercase();

    match normalized.as_str() {
        "none" | "quit" | "exit" => return Selection::None,
        "all" => return Selection::All,
        _ => {}
    }

    let mut indices = Vec::new();
    for part in normalized.split(',') {
        let part = part.trim();
        let Ok(index) = part.parse::<usize>() else {
            return Selection::Retry(format!(
                "Invalid input: '{part}'. Enter numbers separated by commas, 'all', or 'none'."
            ));
        };
        if index < 1 || index > candidate_count {
            return Selection::Retry(format!("Invalid file number: {index}"));
        }
        indices.push(index);
    }
    Selection::Indices(indices)
}

/// Present the candidates as a numbered list and prompt until one line
/// parses. Reads from stdin.
pub fn select_files_interactively(candidates: &[PathBuf]) -> io::Result<Vec<PathBuf>> {
    prompt_selection(candidates, io::stdin().lock())
}

fn prompt_selection(candidates: &[PathBuf], mut input: impl BufRead) -> io::Result<Vec<PathBuf>> {
    console::header("FILE SELECTION");
    console::info(&format!("Found {} matching files:", candidates.len()));
    for (i, path) in candidates.iter().enumerate() {
        println!("  {:2}. {}", i + 1, path.display());
    }

    println!();
    println!("Select files to process:");
    println!("  - enter file numbers separated by commas (e.g. 1,3,5)");
    println!("  - enter 'all' to process all files");
    println!("  - enter 'none' or 'quit' to exit");

    loop {
        print!("\nYour selection: ");
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // EOF on stdin counts as backing out.
            return Ok(Vec::new());
        }

        match parse_selection(&line, candidates.len()) {
            Selection::Indices(indices) => {
                return Ok(indices
                    .into_iter()
                    .map(|i| candidates[i - 1].clone())
                    .collect());
            }
            Selection::All => return Ok(candidates.to_vec()),
            Selection::None => return Ok(Vec::new()),
            Selection::Retry(reason) => console::error(&reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn candidates(n: usize) -> Vec<PathBuf> {
        (0..n).map(|i| PathBuf::from(format!("file-{i}.json"))).collect()
    }

    #[test]
    fn test_parse_comma_separated_indices() {
        assert_eq!(
            parse_selection("1,3", 3),
            Selection::Indices(vec![1, 3])
        );
        assert_eq!(
            parse_selection(" 2 , 1 ", 3),
            Selection::Indices(vec![2, 1])
        );
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_selection("all", 3), Selection::All);
        assert_eq!(parse_selection("ALL", 3), Selection::All);
        assert_eq!(parse_selection("none", 3), Selection::None);
        assert_eq!(parse_selection("quit", 3), Selection::None);
        assert_eq!(parse_selection("exit", 3), Selection::None);
    }

    #[test]
    fn test_out_of_range_index_rejects_whole_line() {
        // "1,3" against 2 candidates: no partial one-file selection.
        assert!(matches!(parse_selection("1,3", 2), Selection::Retry(_)));
        assert!(matches!(parse_selection("0", 2), Selection::Retry(_)));
    }

    #[test]
    fn test_garbage_input_retries() {
        assert!(matches!(parse_selection("", 3), Selection::Retry(_)));
        assert!(matches!(parse_selection("1,two", 3), Selection::Retry(_)));
        assert!(matches!(parse_selection("-1", 3), Selection::Retry(_)));
    }

    #[test]
    fn test_prompt_loop_retries_until_valid() {
        let candidates = candidates(3);
        let input = Cursor::new("9\nbanana\n1,3\n");

        let selected = prompt_selection(&candidates, input).unwrap();
        assert_eq!(
            selected,
            vec![PathBuf::from("file-0.json"), PathBuf::from("file-2.json")]
        );
    }

    #[test]
    fn test_prompt_loop_all_and_none() {
        let candidates = candidates(2);

        let selected = prompt_selection(&candidates, Cursor::new("all\n")).unwrap();
        assert_eq!(selected, candidates);

        let selected = prompt_selection(&candidates, Cursor::new("none\n")).unwrap();
        assert!(selected.is_empty());
    }

    #[test]
    fn test_prompt_loop_eof_backs_out() {
        let selected = prompt_selection(&candidates(2), Cursor::new("")).unwrap();
        assert!(selected.is_empty());
    }
}
