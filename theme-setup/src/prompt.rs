//! Yes/no confirmation.

use std::fmt;
use std::io::{self, BufRead, IsTerminal, Write};

use console::Term;
use dialoguer::theme::Theme;

use crate::error::SetupError;

/// Asks the user a single yes/no question.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> Result<bool, SetupError>;
}

/// Trimmed, case-insensitive `y` or `yes` is affirmative. Anything else,
/// including an empty answer, is negative.
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Read one answer line from `input`, echoing `prompt` to `output`.
/// End of input counts as an empty answer.
pub fn read_answer<R: BufRead, W: Write>(
    prompt: &str,
    input: &mut R,
    output: &mut W,
) -> io::Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line)
}

/// Renders prompts exactly as given, without dialoguer's `: ` suffix.
#[derive(Debug, Default, Clone, Copy)]
pub struct VerbatimTheme;

impl Theme for VerbatimTheme {
    fn format_input_prompt(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        _default: Option<&str>,
    ) -> fmt::Result {
        write!(f, "{prompt}")
    }

    fn format_input_prompt_selection(
        &self,
        f: &mut dyn fmt::Write,
        prompt: &str,
        sel: &str,
    ) -> fmt::Result {
        write!(f, "{prompt}{sel}")
    }
}

/// Split a prompt into its count of leading blank lines and the text that
/// goes on the input line. dialoguer redraws a single line, so the blank
/// lines are written separately.
pub fn split_leading_newlines(prompt: &str) -> (usize, &str) {
    let text = prompt.trim_start_matches('\n');
    (prompt.len() - text.len(), text)
}

/// Prompts on the controlling terminal, or reads a plain line from stdin
/// when stdin is not a terminal. Both paths draw on stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalConfirm;

impl Confirm for TerminalConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool, SetupError> {
        let answer = if io::stdin().is_terminal() {
            let term = Term::stdout();
            let (blank_lines, text) = split_leading_newlines(prompt);
            for _ in 0..blank_lines {
                term.write_line("").map_err(SetupError::Prompt)?;
            }
            dialoguer::Input::<String>::with_theme(&VerbatimTheme)
                .with_prompt(text)
                .allow_empty(true)
                .interact_text_on(&term)
                .map_err(|e| SetupError::Prompt(io::Error::new(io::ErrorKind::Other, e)))?
        } else {
            let stdin = io::stdin();
            let mut input = stdin.lock();
            read_answer(prompt, &mut input, &mut io::stdout()).map_err(SetupError::Prompt)?
        };

        Ok(is_affirmative(&answer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stages::conflicts::OVERWRITE_PROMPT;

    #[test]
    fn affirmative_answers() {
        for answer in ["y", "Y", "yes", "YES", "Yes", "  y  ", "yes\n", "\ty\r\n"] {
            assert!(is_affirmative(answer), "{answer:?} should be affirmative");
        }
    }

    #[test]
    fn negative_answers() {
        for answer in ["", "\n", "n", "no", "yep", "ye", "sure", "y es"] {
            assert!(!is_affirmative(answer), "{answer:?} should be negative");
        }
    }

    #[test]
    fn read_answer_echoes_prompt_and_reads_line() {
        let mut input = io::Cursor::new(b"yes\nignored\n".to_vec());
        let mut output = Vec::new();

        let answer = read_answer("Overwrite? (y/N) ", &mut input, &mut output).unwrap();
        assert_eq!(answer, "yes\n");
        assert_eq!(String::from_utf8(output).unwrap(), "Overwrite? (y/N) ");
    }

    #[test]
    fn read_answer_treats_closed_input_as_empty() {
        let mut input = io::Cursor::new(Vec::new());
        let mut output = Vec::new();

        let answer = read_answer("Overwrite? ", &mut input, &mut output).unwrap();
        assert!(answer.is_empty());
        assert!(!is_affirmative(&answer));
    }

    #[test]
    fn terminal_prompt_renders_overwrite_question_verbatim() {
        let (blank_lines, text) = split_leading_newlines(OVERWRITE_PROMPT);
        let mut rendered = String::new();
        VerbatimTheme
            .format_input_prompt(&mut rendered, text, None)
            .unwrap();

        assert_eq!(blank_lines, 1);
        assert_eq!(rendered, "Do you want to overwrite these files? (y/N) ");
        assert_eq!(
            format!("{}{rendered}", "\n".repeat(blank_lines)),
            OVERWRITE_PROMPT
        );
    }

    #[test]
    fn terminal_prompt_echoes_answer_after_question() {
        let mut rendered = String::new();
        VerbatimTheme
            .format_input_prompt_selection(&mut rendered, "Overwrite? (y/N) ", "y")
            .unwrap();
        assert_eq!(rendered, "Overwrite? (y/N) y");
    }

    #[test]
    fn split_leaves_plain_prompt_alone() {
        assert_eq!(split_leading_newlines("Go? "), (0, "Go? "));
        assert_eq!(split_leading_newlines("\n\nGo? "), (2, "Go? "));
    }
}
