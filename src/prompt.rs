use crate::case::CaseMode;
use anyhow::{Result, Context, bail};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

pub const MOVE_PROMPT: &str = "Would you like to put the new file in different directory? Y/N";
pub const SOURCE_PROMPT: &str = "Enter the path for the current location of the file: ";
pub const TARGET_PROMPT: &str = "Enter the path for the destination location of the file: ";
pub const CASE_PROMPT: &str = "Upper- or lowercase? (Type \"Upper\" or \"lower\")";
pub const INVALID_PATH: &str = "Invalid path; try again.";

/// Directories the rewritten file moves between
#[derive(Debug, Clone, PartialEq)]
pub struct Relocation {
    /// Directory the file currently lives in
    pub source_dir: PathBuf,

    /// Directory the file is moved to
    pub target_dir: PathBuf,
}

/// Choices collected from the user before the file is touched
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Present only when the user asked to move the file
    pub relocation: Option<Relocation>,

    /// Case applied to every line
    pub case_mode: CaseMode,
}

impl RunConfig {
    pub fn move_requested(&self) -> bool {
        self.relocation.is_some()
    }
}

/// Line-based question/answer loop over any input and output stream
pub struct Prompter<R, W> {
    input: R,
    output: W,
    echo: bool,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output, echo: false }
    }

    /// Repeat each answer on the output after reading it
    ///
    /// Piped answers are never shown by a terminal, so echoing keeps the
    /// transcript readable when input does not come from a keyboard.
    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Ask every question in order and build the run configuration
    pub fn collect(&mut self) -> Result<RunConfig> {
        let relocation = if self.yes_no(MOVE_PROMPT)? {
            let source_dir = self.directory_path(SOURCE_PROMPT)?;
            let target_dir = self.directory_path(TARGET_PROMPT)?;
            Some(Relocation { source_dir, target_dir })
        } else {
            None
        };

        let case_mode = self.case_mode()?;

        Ok(RunConfig { relocation, case_mode })
    }

    /// Ask until the answer is "Y" or "N" in either case
    ///
    /// # Arguments
    /// * `message` - Question to print
    ///
    /// # Returns
    /// * `Result<bool>` - true for "Y", false for "N"
    pub fn yes_no(&mut self, message: &str) -> Result<bool> {
        loop {
            let answer = self.ask(message)?.to_uppercase();
            match answer.as_str() {
                "Y" => return Ok(true),
                "N" => return Ok(false),
                _ => continue,
            }
        }
    }

    /// Ask until the answer names a case mode
    pub fn case_mode(&mut self) -> Result<CaseMode> {
        loop {
            let answer = self.ask(CASE_PROMPT)?;
            if let Some(mode) = CaseMode::from_answer(&answer) {
                return Ok(mode);
            }
        }
    }

    /// Ask until the answer is an existing directory
    ///
    /// # Arguments
    /// * `message` - Question to print
    ///
    /// # Returns
    /// * `Result<PathBuf>` - The directory as entered, trimmed
    pub fn directory_path(&mut self, message: &str) -> Result<PathBuf> {
        loop {
            let answer = self.ask(message)?;
            let candidate = answer.trim();

            if is_valid_directory(candidate) {
                return Ok(PathBuf::from(candidate));
            }

            writeln!(self.output, "{}", INVALID_PATH).context("Failed to write to output")?;
        }
    }

    /// Print a question and read one line, without its terminator
    fn ask(&mut self, message: &str) -> Result<String> {
        writeln!(self.output, "{}", message).context("Failed to write to output")?;
        self.output.flush().context("Failed to write to output")?;

        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read from input")?;
        if read == 0 {
            bail!("Input closed before a valid answer was given");
        }

        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }

        if self.echo {
            writeln!(self.output, "{}", line).context("Failed to write to output")?;
        }

        Ok(line)
    }
}

/// Check whether a string names an existing directory
///
/// Strings that cannot form a usable path (empty, embedded NUL) fail the
/// same way as nonexistent paths.
pub fn is_valid_directory(path: &str) -> bool {
    !path.is_empty() && Path::new(path).is_dir()
}
