//! Interactive prompts.
//!
//! [`ConsoleInput`] reads answers line by line from any [`BufRead`] and
//! writes its prompts through a [`ConsoleOutput`]. Three flows are provided:
//!
//! - [`ConsoleInput::ask`]: free text with an optional default
//! - [`ConsoleInput::confirm`]: yes/no
//! - [`ConsoleInput::choice`]: numbered menu, re-prompting until the answer
//!   is valid or input ends
//!
//! End of input is never an error. `ask` reports it as
//! [`Answer::EndOfInput`]; `confirm` and `choice` resolve it to their
//! defaults.

use std::io::{self, BufRead, Write};

use crate::errors::{ConsoleError, Result};
use crate::output::ConsoleOutput;

/// Prompt shown by [`ConsoleInput::choice`] when asking for a number.
pub const CHOICE_PROMPT: &str = "Enter your choice";

/// Outcome of one [`ConsoleInput::ask`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// The user typed something; surrounding whitespace is trimmed.
    Given(String),
    /// The line was blank, so the default (if any) was used.
    Defaulted(Option<String>),
    /// The input stream closed before a line arrived.
    EndOfInput,
}

impl Answer {
    /// The answer text, whether typed or defaulted.
    pub fn value(&self) -> Option<&str> {
        match self {
            Self::Given(text) => Some(text),
            Self::Defaulted(default) => default.as_deref(),
            Self::EndOfInput => None,
        }
    }

    /// Consume the answer and return its text, whether typed or defaulted.
    pub fn into_value(self) -> Option<String> {
        match self {
            Self::Given(text) => Some(text),
            Self::Defaulted(default) => default,
            Self::EndOfInput => None,
        }
    }

    /// Whether the input stream closed.
    pub fn is_end_of_input(&self) -> bool {
        matches!(self, Self::EndOfInput)
    }
}

/// Prompt engine over an input stream and a console output.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use conio_core::{ConsoleInput, ConsoleOutput};
///
/// let mut input = ConsoleInput::new(Cursor::new("n\n"), ConsoleOutput::plain(Vec::new()));
/// assert!(!input.confirm("Continue?", true).unwrap());
/// ```
#[derive(Debug)]
pub struct ConsoleInput<R, W: Write> {
    reader: R,
    output: ConsoleOutput<W>,
}

impl ConsoleInput<io::StdinLock<'static>, io::Stdout> {
    /// Prompts on stdout, answers from stdin.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), ConsoleOutput::stdout())
    }
}

impl<R: BufRead, W: Write> ConsoleInput<R, W> {
    /// Create a prompt engine.
    pub fn new(reader: R, output: ConsoleOutput<W>) -> Self {
        Self { reader, output }
    }

    /// The output prompts are written to.
    pub fn output(&mut self) -> &mut ConsoleOutput<W> {
        &mut self.output
    }

    /// Split into the reader and the output.
    pub fn into_parts(self) -> (R, ConsoleOutput<W>) {
        (self.reader, self.output)
    }

    /// Ask a question and read one answer.
    ///
    /// Writes `question (default: X):\n> ` (or `question:\n> ` without a
    /// default), then reads a line. A blank line yields
    /// [`Answer::Defaulted`] and a closed stream yields
    /// [`Answer::EndOfInput`].
    pub fn ask(&mut self, question: &str, default: Option<&str>) -> Result<Answer> {
        self.output.write(question)?;
        match default {
            Some(value) => self.output.write(&format!(" (default: {}):\n> ", value))?,
            None => self.output.write(":\n> ")?,
        }

        let Some(line) = self.read_line()? else {
            return Ok(Answer::EndOfInput);
        };

        let answer = line.trim();
        if answer.is_empty() {
            Ok(Answer::Defaulted(default.map(str::to_string)))
        } else {
            Ok(Answer::Given(answer.to_string()))
        }
    }

    /// Ask a yes/no question.
    ///
    /// Any answer starting with `y` or `Y` is a yes. A blank answer or a
    /// closed stream returns `default`.
    pub fn confirm(&mut self, question: &str, default: bool) -> Result<bool> {
        let question = format!("{} (y/n)", question);
        let fallback = if default { "y" } else { "n" };

        let answer = self.ask(&question, Some(fallback))?;
        let Some(response) = answer.value() else {
            return Ok(default);
        };

        Ok(response
            .chars()
            .next()
            .is_some_and(|c| c.eq_ignore_ascii_case(&'y')))
    }

    /// Ask the user to pick one of `choices` by number.
    ///
    /// `default` is 1-based, matching the numbers shown. Invalid answers are
    /// reported with an error message and asked again without limit. When
    /// input ends, the default choice is returned, or the first choice when
    /// there is no default.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::InvalidDefaultChoice`] if `default` is outside
    /// `1..=choices.len()` and [`ConsoleError::NoChoices`] if `choices` is
    /// empty. Nothing is written in either case.
    pub fn choice<S: AsRef<str>>(
        &mut self,
        question: &str,
        choices: &[S],
        default: Option<usize>,
    ) -> Result<String> {
        let max = choices.len();
        if let Some(default) = default {
            if default < 1 || default > max {
                return Err(ConsoleError::InvalidDefaultChoice { default, max });
            }
        }
        if choices.is_empty() {
            return Err(ConsoleError::NoChoices);
        }

        self.output.write_ln(question)?;
        for (index, choice) in choices.iter().enumerate() {
            let marker = if default == Some(index + 1) { " (default)" } else { "" };
            self.output
                .write_ln(&format!("  [{}] {}{}", index + 1, choice.as_ref(), marker))?;
        }

        let default_text = default.map(|d| d.to_string());
        loop {
            let answer = self.ask(CHOICE_PROMPT, default_text.as_deref())?;
            if answer.is_end_of_input() {
                let index = default.map_or(0, |d| d - 1);
                return Ok(choices[index].as_ref().to_string());
            }

            match answer.value().and_then(|text| parse_choice(text, max)) {
                Some(index) => return Ok(choices[index].as_ref().to_string()),
                None => {
                    tracing::debug!(answer = ?answer.value(), max, "rejected choice");
                    self.output
                        .error(&format!("Please enter a number between 1 and {}", max))?;
                }
            }
        }
    }

    /// Read one line, or `None` once the stream is exhausted.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        let read = self.reader.read_until(b'\n', &mut buf)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Map a typed choice number to a zero-based index.
///
/// Only plain ASCII digits are accepted; signs, spaces and out-of-range
/// values are rejected.
fn parse_choice(text: &str, max: usize) -> Option<usize> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    match text.parse::<usize>() {
        Ok(n) if (1..=max).contains(&n) => Some(n - 1),
        _ => None,
    }
}
