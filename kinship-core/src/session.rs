//! Interactive command loop over any `BufRead` / `Write` pair.
//!
//! Each input line produces exactly one output line. The loop ends on a line
//! equal to `exit` or at end of input; I/O errors on the input count as end
//! of input. Invalid UTF-8 is decoded lossily and the line still runs.

use std::io::{self, BufRead, Write};

use tracing::{trace, warn};

use crate::command::Command;
use crate::registry::FamilyTree;
use crate::types::{Gender, PersonName};

pub const BANNER: &str = "Family Tree Command Line Tool";
pub const HINT: &str = "Enter commands or 'exit' to quit.";
pub const PROMPT: &str = "> ";
pub const EXIT_COMMAND: &str = "exit";
pub const EXIT_MESSAGE: &str = "Exiting the program.";

/// Why [`Session::run`] returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    ExitCommand,
    EndOfInput,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    /// Non-blank lines evaluated, not counting `exit`.
    pub commands: usize,
    pub exit: ExitReason,
}

/// One interpreter session: a registry plus its input and output streams.
pub struct Session<R, W> {
    tree: FamilyTree,
    input: R,
    output: W,
    quiet: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            tree: FamilyTree::new(),
            input,
            output,
            quiet: false,
        }
    }

    /// Suppress the banner and prompts.
    pub fn quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }

    pub fn tree(&self) -> &FamilyTree {
        &self.tree
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until `exit` or end of input. Only output failures are errors.
    pub fn run(&mut self) -> io::Result<SessionSummary> {
        if !self.quiet {
            writeln!(self.output, "{BANNER}")?;
            writeln!(self.output, "{HINT}")?;
        }

        let mut commands = 0;
        let mut buf = Vec::new();
        loop {
            if !self.quiet {
                write!(self.output, "{PROMPT}")?;
                self.output.flush()?;
            }

            buf.clear();
            match self.input.read_until(b'\n', &mut buf) {
                Ok(0) => return Ok(SessionSummary { commands, exit: ExitReason::EndOfInput }),
                Ok(_) => {}
                Err(err) => {
                    warn!(error = %err, "input stream failed; stopping");
                    return Ok(SessionSummary { commands, exit: ExitReason::EndOfInput });
                }
            }

            let line = String::from_utf8_lossy(&buf);
            let text: &str = &line;
            let text = text.strip_suffix('\n').unwrap_or(text);
            let text = text.strip_suffix('\r').unwrap_or(text);
            if text == EXIT_COMMAND {
                writeln!(self.output, "{EXIT_MESSAGE}")?;
                self.output.flush()?;
                return Ok(SessionSummary { commands, exit: ExitReason::ExitCommand });
            }

            if let Some(reply) = self.execute_line(text) {
                commands += 1;
                writeln!(self.output, "{reply}")?;
            }
        }
    }

    /// Evaluate one line against the registry. `None` for a blank line.
    pub fn execute_line(&mut self, line: &str) -> Option<String> {
        match Command::parse_line(line) {
            Ok(None) => None,
            Ok(Some(command)) => {
                trace!(?command, "dispatch");
                Some(self.execute(command))
            }
            Err(err) => Some(err.to_string()),
        }
    }

    fn execute(&mut self, command: Command) -> String {
        match command {
            Command::AddPerson { name, gender } => add_person(&mut self.tree, name, &gender),
            Command::AddRelationship { kind } => match FamilyTree::validate_relationship(&kind) {
                Ok(()) => format!("Added relationship: {kind}"),
                Err(err) => err.to_string(),
            },
            Command::Connect { from, kind, to } => {
                let reply = format!("{from} is now {kind} of {to}");
                match self.tree.connect(&from, kind, &to) {
                    Ok(()) => reply,
                    Err(err) => err.to_string(),
                }
            }
            Command::Count { kind, name } => match self.tree.count(kind, &name) {
                Ok(Some(n)) => format!("{name} has {n} {kind}."),
                Ok(None) => format!("No {kind} found."),
                Err(err) => err.to_string(),
            },
            Command::FatherOf { name } => match self.tree.father_of(&name) {
                Ok(Some(father)) => format!("Father of {name} is {}.", father.name),
                Ok(None) => "No father found.".to_owned(),
                Err(err) => err.to_string(),
            },
        }
    }
}

fn add_person(tree: &mut FamilyTree, name: PersonName, raw_gender: &str) -> String {
    let gender = Gender::normalize(raw_gender);
    let reply = format!("Added {name} to the family tree as {gender}");
    tree.add_person(name, gender);
    reply
}
