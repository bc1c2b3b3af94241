//! Line-based console prompts

use std::io::{BufRead, Write};

use crate::error::{PetError, PetResult};

/// Message shown when the user must acknowledge output
pub const CONTINUE_PROMPT: &str = "Press Enter to continue.....";

/// Write `prompt`, then read one trimmed line
///
/// Returns [`PetError::InputClosed`] once the input is exhausted.
pub fn prompt_string<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> PetResult<String> {
    write!(output, "{}", prompt)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(PetError::InputClosed);
    }

    Ok(line.trim().to_string())
}

/// Re-prompt until `parse` accepts the input
pub fn prompt_until<R, W, T, F>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    mut parse: F,
) -> PetResult<T>
where
    R: BufRead,
    W: Write,
    F: FnMut(&str) -> Result<T, String>,
{
    loop {
        let answer = prompt_string(input, output, prompt)?;
        match parse(&answer) {
            Ok(value) => return Ok(value),
            Err(message) => writeln!(output, "{}", message)?,
        }
    }
}

/// Wait for the user to press Enter
pub fn pause<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> PetResult<()> {
    prompt_string(input, output, CONTINUE_PROMPT).map(|_| ())
}
