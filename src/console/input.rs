//! Line-based input and choice parsing.
//!
//! Parsing is a dedicated step returning `Result`; the prompt loop checks it
//! and re-asks on failure, with no limit on attempts.

use std::io::{BufRead, Write};
use std::str::FromStr;

use log::debug;

use crate::core::{GameError, ParseChoiceError};
use crate::games::twenty_one::Decision;

/// Source of user input, one line at a time.
pub trait LineSource {
    /// Next line without its terminator, or `None` at end of input.
    fn next_line(&mut self) -> Result<Option<String>, GameError>;
}

/// Bytes that are not UTF-8 are replaced rather than rejected, so garbage
/// input reaches the parser and gets re-prompted like any other bad answer.
impl<R: BufRead> LineSource for R {
    fn next_line(&mut self) -> Result<Option<String>, GameError> {
        let mut buf = Vec::new();
        if self.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

/// Trim and lower-case a raw input line.
#[must_use]
pub fn normalize(line: &str) -> String {
    line.trim().to_lowercase()
}

impl FromStr for Decision {
    type Err = ParseChoiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match normalize(s).as_str() {
            "hit" | "h" => Ok(Decision::Hit),
            "stay" | "stand" | "s" => Ok(Decision::Stand),
            other => Err(ParseChoiceError {
                input: other.to_string(),
            }),
        }
    }
}

/// Parse a yes/no answer.
pub fn parse_yes_no(s: &str) -> Result<bool, ParseChoiceError> {
    match normalize(s).as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        other => Err(ParseChoiceError {
            input: other.to_string(),
        }),
    }
}

/// Ask `question` until `parse` accepts the answer.
///
/// Rejected answers print `retry` and ask again. Running out of input is
/// `GameError::InputClosed`.
pub fn prompt<T, S, W>(
    input: &mut S,
    output: &mut W,
    question: &str,
    retry: &str,
    parse: impl Fn(&str) -> Result<T, ParseChoiceError>,
) -> Result<T, GameError>
where
    S: LineSource + ?Sized,
    W: Write + ?Sized,
{
    loop {
        writeln!(output, "{question}")?;
        output.flush()?;

        let line = input.next_line()?.ok_or(GameError::InputClosed)?;
        match parse(&line) {
            Ok(value) => return Ok(value),
            Err(err) => {
                debug!("rejected input: {err}");
                writeln!(output, "{retry}")?;
            }
        }
    }
}
