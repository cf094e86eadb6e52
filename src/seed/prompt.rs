//! Interactive prompts on stdin/stderr.
//!
//! Each prompt is written against `BufRead`/`Write` so it can be driven from
//! a buffer in tests; the `*_stdin` wrappers bind it to the terminal.

use std::io::{self, BufRead, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PromptError {
    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("Input closed before an answer was given")]
    EndOfInput,

    #[error("Nothing to choose from")]
    NoChoices,
}

fn read_answer<R: BufRead>(input: &mut R) -> Result<String, PromptError> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PromptError::EndOfInput);
    }
    Ok(line.trim().to_string())
}

/// Ask a yes/no question; an empty answer takes `default`.
pub fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    default: bool,
) -> Result<bool, PromptError> {
    let hint = if default { "[Y/n]" } else { "[y/N]" };
    loop {
        write!(output, "{question} {hint} ")?;
        output.flush()?;
        match read_answer(input)?.to_lowercase().as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(output, "Please answer yes or no.")?,
        }
    }
}

/// Pick one entry from a numbered list, by number or by exact name.
pub fn choose<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    choices: &[String],
) -> Result<String, PromptError> {
    if choices.is_empty() {
        return Err(PromptError::NoChoices);
    }

    writeln!(output, "{question}")?;
    for (i, choice) in choices.iter().enumerate() {
        writeln!(output, "  [{}] {}", i + 1, choice)?;
    }

    loop {
        write!(output, "> ")?;
        output.flush()?;
        let answer = read_answer(input)?;

        if let Some(choice) = choices.iter().find(|c| **c == answer) {
            return Ok(choice.clone());
        }
        if let Ok(n) = answer.parse::<usize>() {
            if (1..=choices.len()).contains(&n) {
                return Ok(choices[n - 1].clone());
            }
        }
        writeln!(output, "Invalid choice '{answer}'.")?;
    }
}

/// Ask for a whole number within `min..=max`.
pub fn ask_count<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    question: &str,
    min: u64,
    max: u64,
) -> Result<u64, PromptError> {
    loop {
        write!(output, "{question} ({min}-{max}): ")?;
        output.flush()?;
        let answer = read_answer(input)?.replace(['_', ','], "");
        match answer.parse::<u64>() {
            Ok(n) if (min..=max).contains(&n) => return Ok(n),
            _ => writeln!(output, "Enter a number between {min} and {max}.")?,
        }
    }
}

pub fn confirm_stdin(question: &str, default: bool) -> Result<bool, PromptError> {
    confirm(&mut io::stdin().lock(), &mut io::stderr(), question, default)
}

pub fn choose_stdin(question: &str, choices: &[String]) -> Result<String, PromptError> {
    choose(&mut io::stdin().lock(), &mut io::stderr(), question, choices)
}

pub fn ask_count_stdin(question: &str, min: u64, max: u64) -> Result<u64, PromptError> {
    ask_count(&mut io::stdin().lock(), &mut io::stderr(), question, min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn names() -> Vec<String> {
        vec!["posts".to_string(), "users".to_string()]
    }

    #[test]
    fn test_confirm_default_and_retry() {
        let mut out = Vec::new();
        assert!(confirm(&mut Cursor::new("\n"), &mut out, "Proceed?", true).unwrap());
        assert!(!confirm(&mut Cursor::new("\n"), &mut out, "Proceed?", false).unwrap());
        assert!(!confirm(&mut Cursor::new("maybe\nno\n"), &mut out, "Proceed?", true).unwrap());
        assert!(String::from_utf8(out).unwrap().contains("Please answer yes or no."));
    }

    #[test]
    fn test_confirm_end_of_input() {
        let result = confirm(&mut Cursor::new(""), &mut Vec::new(), "Proceed?", true);
        assert!(matches!(result, Err(PromptError::EndOfInput)));
    }

    #[test]
    fn test_choose_by_number_or_name() {
        let mut out = Vec::new();
        assert_eq!(
            choose(&mut Cursor::new("2\n"), &mut out, "Table?", &names()).unwrap(),
            "users"
        );
        assert_eq!(
            choose(&mut Cursor::new("9\nposts\n"), &mut out, "Table?", &names()).unwrap(),
            "posts"
        );
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.contains("[1] posts"));
        assert!(printed.contains("Invalid choice '9'."));
    }

    #[test]
    fn test_choose_without_choices() {
        let result = choose(&mut Cursor::new("1\n"), &mut Vec::new(), "Table?", &[]);
        assert!(matches!(result, Err(PromptError::NoChoices)));
    }

    #[test]
    fn test_ask_count_validates_range() {
        let mut out = Vec::new();
        let n = ask_count(&mut Cursor::new("0\nabc\n1,000\n"), &mut out, "How many?", 1, 1_000_000)
            .unwrap();
        assert_eq!(n, 1000);
        assert!(String::from_utf8(out)
            .unwrap()
            .contains("Enter a number between 1 and 1000000."));
    }
}
