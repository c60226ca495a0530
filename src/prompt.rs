// File: src/prompt.rs
use crate::error::{Result, StatsError};
use std::io::{BufRead, Write};
use std::path::PathBuf;

pub const FILE_PROMPT: &str = "Please enter the file name :";

/// Reads one line after printing `prompt`, without its line ending. End of
/// input is an error.
pub fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<String> {
    write!(output, "{prompt}").map_err(StatsError::Prompt)?;
    output.flush().map_err(StatsError::Prompt)?;
    let mut line = String::new();
    if input.read_line(&mut line).map_err(StatsError::Prompt)? == 0 {
        return Err(StatsError::Prompt(std::io::ErrorKind::UnexpectedEof.into()));
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Asks until an existing path is entered, allowing `retries` extra tries.
pub fn ask_existing_path<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    retries: usize,
) -> Result<PathBuf> {
    for attempt in 0..=retries {
        let path = PathBuf::from(ask(input, output, prompt)?);
        if path.exists() {
            return Ok(path);
        }
        tracing::debug!(attempt, path = %path.display(), "no such file");
        if attempt == retries {
            break;
        }
        if attempt + 1 == retries {
            writeln!(output, "\t\tOne more try").map_err(StatsError::Prompt)?;
        }
        writeln!(output, "This file does not exist...").map_err(StatsError::Prompt)?;
    }
    Err(StatsError::AttemptsExhausted { attempts: retries + 1 })
}
