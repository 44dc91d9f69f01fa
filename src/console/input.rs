//! Line-oriented terminal I/O.
//!
//! `Console` wraps any `BufRead` input and `Write` output. Production code
//! uses stdin/stdout; tests use in-memory buffers.
//!
//! Bad input is never an error: `get_int` loops until it has a value.
//! The only error is the underlying I/O failing, including end of input
//! while a number is still required.

use std::fmt::Display;
use std::io::{self, BufRead, StdinLock, Stdout, Write};

use log::trace;

/// Terminal-style console over arbitrary streams.
///
/// ```
/// use card_guess::console::Console;
///
/// let mut console = Console::new("abc\n42\n".as_bytes(), Vec::new());
/// let value = console.get_int("Pick: ", None, 1, 100).unwrap();
///
/// assert_eq!(value, 42);
/// assert_eq!(
///     String::from_utf8(console.into_output()).unwrap(),
///     "Pick: Please enter a valid integer.\nPick: "
/// );
/// ```
#[derive(Debug)]
pub struct Console<I, W> {
    input: I,
    output: W,
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<I: BufRead, W: Write> Console<I, W> {
    /// Create a console over the given streams.
    pub fn new(input: I, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console, returning the output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Print one line.
    pub fn say(&mut self, line: impl Display) -> io::Result<()> {
        writeln!(self.output, "{line}")
    }

    /// Print `prompt` without a newline and read one line of input.
    ///
    /// Returns `None` at end of input. The line ending is stripped.
    pub fn ask(&mut self, prompt: &str) -> io::Result<Option<String>> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            trace!("end of input at prompt {prompt:?}");
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(&['\n', '\r'][..]).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    /// Read an integer in `[min_allowed, max_allowed]`.
    ///
    /// - empty or unparseable line: `default` if given, otherwise re-prompt
    /// - out of bounds: name the violated bound and re-prompt
    ///
    /// A returned default is not range-checked; callers pass one that fits.
    pub fn get_int(
        &mut self,
        prompt: &str,
        default: Option<i32>,
        min_allowed: i32,
        max_allowed: i32,
    ) -> io::Result<i32> {
        loop {
            let Some(line) = self.ask(prompt)? else {
                return Err(io::Error::new(
                    io::ErrorKind::UnexpectedEof,
                    "input closed while waiting for a number",
                ));
            };

            let Ok(value) = line.trim().parse::<i32>() else {
                if let Some(default) = default {
                    return Ok(default);
                }
                self.say("Please enter a valid integer.")?;
                continue;
            };

            if value < min_allowed {
                self.say(format_args!("Value must be >= {min_allowed}."))?;
            } else if value > max_allowed {
                self.say(format_args!("Value must be <= {max_allowed}."))?;
            } else {
                return Ok(value);
            }
        }
    }

    /// Ask a yes/no question. Only `y` (any case, surrounding whitespace
    /// ignored) is yes; anything else, including end of input, is no.
    pub fn confirm(&mut self, prompt: &str) -> io::Result<bool> {
        Ok(self
            .ask(prompt)?
            .is_some_and(|answer| answer.trim().eq_ignore_ascii_case("y")))
    }
}
