use crate::error::{Error, Result};
use colored::Colorize;
use requestty::Question;
use std::io::{self, BufRead, Write};

/// Asks the user questions. Implemented by terminal front-ends and by
/// scripted answers in tests.
pub trait Prompter {
    /// Picks one of `choices`, returning its index.
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool>;
}

/// Arrow key driven prompts.
pub struct ModernPrompter;

impl Prompter for ModernPrompter {
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize> {
        let question = Question::select("choice")
            .message(message.to_owned())
            .should_loop(false)
            .choices(choices.to_vec())
            .build();
        let answer = requestty::prompt_one(question)?;
        answer
            .as_list_item()
            .map(|item| item.index)
            .ok_or(Error::NoAnswer)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let question = Question::confirm("confirm")
            .message(message.to_owned())
            .default(default)
            .build();
        requestty::prompt_one(question)?
            .as_bool()
            .ok_or(Error::NoAnswer)
    }
}

/// Numbered prompts read line by line, for old and unsupported terminals.
///
/// Questions are written straight to `writer`, so they show up regardless of
/// the log level.
pub struct RawPrompter<R, W> {
    reader: R,
    writer: W,
}

impl RawPrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdin() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> RawPrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    fn read_answer(&mut self, question: &str) -> Result<String> {
        write!(self.writer, "{question}")?;
        self.writer.flush()?;

        let mut input = String::new();
        if self.reader.read_line(&mut input)? == 0 {
            return Err(Error::NoAnswer);
        }
        Ok(input.trim().to_owned())
    }
}

impl<R: BufRead, W: Write> Prompter for RawPrompter<R, W> {
    fn select(&mut self, message: &str, choices: &[String]) -> Result<usize> {
        writeln!(self.writer, "{}", message.cyan())?;
        for (i, choice) in choices.iter().enumerate() {
            writeln!(self.writer, "{:>2}) {}", i + 1, choice)?;
        }
        writeln!(self.writer, "{}", "------------------------------".cyan())?;

        loop {
            let input = self.read_answer(&format!("Select one (1-{}): ", choices.len()))?;
            match input.parse::<usize>() {
                Ok(n) if (1..=choices.len()).contains(&n) => return Ok(n - 1),
                _ => writeln!(self.writer, "{} is not a valid choice.", input.yellow())?,
            }
        }
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool> {
        let hint = if default { "Y/n" } else { "y/N" };

        loop {
            let input = self.read_answer(&format!("{message} ({hint}) "))?;
            match input.to_lowercase().as_str() {
                "" => return Ok(default),
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => writeln!(self.writer, "Please answer {} or {}.", "y".green(), "n".red())?,
            }
        }
    }
}
