//! Interactive stat prompt.

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::{cli::types::Stat, Result};

/// Ask the user for a stat name on the terminal.
///
/// End of input and Ctrl-C count as an empty answer, which the caller then
/// rejects as an invalid choice.
pub fn prompt_for_stat() -> Result<String> {
    println!("Stats available: {}", Stat::available());

    let mut rl = DefaultEditor::new()?;
    match rl.readline("Enter a stat: ") {
        Ok(line) => Ok(line),
        Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(String::new()),
        Err(e) => Err(e.into()),
    }
}
