//! REPL Module
//!
//! Reads commands line by line and dispatches them against a [`Session`].

mod commands;

pub use commands::{Command, Session};

use std::io::{BufRead, ErrorKind, Write};

use tracing::{info, warn};

use crate::error::Result;

/// Prompt printed before every command
pub const PROMPT: &str = "Pokedex > ";

/// Lowercases `text` and splits it into whitespace-separated words.
pub fn clean_input(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

// == Run ==
/// Runs the command loop until `exit` or end of input.
///
/// Command failures are printed and the loop continues, as does a line that
/// is not valid UTF-8. Any other I/O error on `input` or `out` ends the loop.
///
/// `input` is read with blocking calls. On a current-thread runtime a blocked
/// read also stalls the cache reaper, so drive this from a multi-thread
/// runtime when `input` is a live stream such as stdin.
pub async fn run<R: BufRead, W: Write>(session: &mut Session, input: R, out: &mut W) -> Result<()> {
    let mut lines = input.lines();

    loop {
        write!(out, "{}", PROMPT)?;
        out.flush()?;

        let Some(line) = lines.next() else {
            info!("End of input, leaving REPL");
            return Ok(());
        };
        let line = match line {
            Ok(line) => line,
            Err(err) if err.kind() == ErrorKind::InvalidData => {
                warn!("Skipping unreadable input line: {}", err);
                writeln!(out, "Error reading input: {}", err)?;
                continue;
            }
            Err(err) => return Err(err.into()),
        };
        let words = clean_input(&line);
        let Some((word, args)) = words.split_first() else {
            continue;
        };

        match Command::parse(word) {
            Some(command) => {
                if let Err(err) = session.execute(command, args, out).await {
                    writeln!(out, "Error executing command: {}", err)?;
                }
                if command == Command::Exit {
                    return Ok(());
                }
            }
            None => writeln!(out, "Unknown command: {}", word)?,
        }
    }
}
