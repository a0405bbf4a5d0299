//! Line-based prompting with re-prompt loops.
//!
//! Every read blocks until a usable value arrives. The only way out of a loop
//! is end of input, surfaced as [`PromptError::Closed`].

use std::io::{self, BufRead, Write};
use std::str::FromStr;

use colored::*;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    #[error("input closed")]
    Closed,

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub struct Prompter<I, O> {
    input: I,
    output: O,
}

impl<I: BufRead, O: Write> Prompter<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self { input, output }
    }

    /// Writes a line that is part of the conversation (menus, hints).
    pub fn say(&mut self, msg: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{msg}")?;
        Ok(())
    }

    /// Reports a rejected value before the next attempt.
    pub fn complain(&mut self, msg: &str) -> Result<(), PromptError> {
        writeln!(self.output, "{} {}", "[!]".yellow().bold(), msg)?;
        Ok(())
    }

    /// Reads one raw line, without the line terminator.
    pub fn line(&mut self, label: &str) -> Result<String, PromptError> {
        write!(self.output, "{} ", format!("{label}:").bright_white())?;
        self.output.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Err(PromptError::Closed);
        }
        let trimmed_len = buf.trim_end_matches(['\n', '\r']).len();
        buf.truncate(trimmed_len);
        Ok(buf)
    }

    /// Reads a line and trims it, re-prompting while it is empty.
    pub fn required(&mut self, label: &str) -> Result<String, PromptError> {
        loop {
            let value = self.line(label)?.trim().to_string();
            if !value.is_empty() {
                return Ok(value);
            }
            self.complain("Invalid input. Try again.")?;
        }
    }

    /// Parses the trimmed line as `T` and re-prompts until it parses and
    /// `accept` holds. `hint` is shown after every rejected attempt.
    pub fn parsed<T, F>(&mut self, label: &str, hint: &str, accept: F) -> Result<T, PromptError>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        loop {
            let raw = self.line(label)?;
            match raw.trim().parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => self.complain(hint)?,
            }
        }
    }

    /// Asks a yes/no question until `y`/`yes` or `n`/`no` is entered, in any case.
    pub fn confirm(&mut self, question: &str) -> Result<bool, PromptError> {
        loop {
            let answer = self.line(&format!("{question} (y/n)"))?;
            match answer.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.complain("Please enter 'y' or 'n'.")?,
            }
        }
    }
}
