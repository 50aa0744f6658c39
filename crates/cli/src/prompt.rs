//! Interactive prompt boundary
//!
//! The menus collect every parameter conversationally through this trait,
//! so the dispatcher is testable with a scripted implementation instead of
//! a live terminal.

use anyhow::Result;
use console::{style, Term};

/// Conversational input surface for the menus
pub trait Prompt {
    /// Offer a closed list of options and return the chosen index
    fn select(&self, prompt: &str, options: &[String]) -> Result<usize>;

    /// Free-text input; may be empty
    fn input(&self, prompt: &str) -> Result<String>;

    /// Yes/no confirmation
    fn confirm(&self, prompt: &str) -> Result<bool>;
}

/// Terminal-backed prompt using numbered selection lists
pub struct TermPrompt {
    term: Term,
}

impl TermPrompt {
    pub fn new() -> Self {
        Self {
            term: Term::stdout(),
        }
    }
}

impl Default for TermPrompt {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompt for TermPrompt {
    fn select(&self, prompt: &str, options: &[String]) -> Result<usize> {
        self.term.write_line(&style(prompt).cyan().to_string())?;
        for (i, option) in options.iter().enumerate() {
            self.term.write_line(&format!("  {}) {option}", i + 1))?;
        }

        loop {
            self.term.write_str("> ")?;
            let line = self.term.read_line()?;
            match parse_selection(&line, options.len()) {
                Some(index) => return Ok(index),
                None => {
                    self.term.write_line(&format!(
                        "Please enter a number between 1 and {}",
                        options.len()
                    ))?;
                }
            }
        }
    }

    fn input(&self, prompt: &str) -> Result<String> {
        self.term
            .write_str(&format!("{} ", style(prompt).cyan()))?;
        Ok(self.term.read_line()?.trim().to_string())
    }

    fn confirm(&self, prompt: &str) -> Result<bool> {
        self.term
            .write_str(&format!("{} [y/N] ", style(prompt).red()))?;
        let line = self.term.read_line()?;
        Ok(matches!(line.trim().to_lowercase().as_str(), "y" | "yes"))
    }
}

/// Parse a 1-based menu selection into a 0-based index
fn parse_selection(line: &str, option_count: usize) -> Option<usize> {
    let choice: usize = line.trim().parse().ok()?;
    if (1..=option_count).contains(&choice) {
        Some(choice - 1)
    } else {
        None
    }
}

#[cfg(test)]
pub(crate) mod testing {
    //! Scripted prompt for driving the menus in tests.

    use std::cell::RefCell;
    use std::collections::VecDeque;

    use anyhow::{anyhow, Result};

    use super::Prompt;

    /// Replays a fixed sequence of answers; selections are given by label
    pub struct ScriptedPrompt {
        answers: RefCell<VecDeque<String>>,
    }

    impl ScriptedPrompt {
        pub fn new(answers: &[&str]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().map(|s| s.to_string()).collect()),
            }
        }

        fn next(&self) -> Result<String> {
            self.answers
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| anyhow!("scripted prompt ran out of answers"))
        }
    }

    impl Prompt for ScriptedPrompt {
        fn select(&self, _prompt: &str, options: &[String]) -> Result<usize> {
            let answer = self.next()?;
            options
                .iter()
                .position(|o| o == &answer)
                .ok_or_else(|| anyhow!("option {answer:?} not offered: {options:?}"))
        }

        fn input(&self, _prompt: &str) -> Result<String> {
            self.next()
        }

        fn confirm(&self, _prompt: &str) -> Result<bool> {
            Ok(matches!(self.next()?.as_str(), "y" | "yes"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_selection_in_range() {
        assert_eq!(parse_selection("1", 4), Some(0));
        assert_eq!(parse_selection(" 4 ", 4), Some(3));
    }

    #[test]
    fn test_parse_selection_out_of_range_or_garbage() {
        assert_eq!(parse_selection("0", 4), None);
        assert_eq!(parse_selection("5", 4), None);
        assert_eq!(parse_selection("x", 4), None);
        assert_eq!(parse_selection("", 4), None);
    }
}
