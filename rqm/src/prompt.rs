use crate::error::UpdateError;
use anyhow::Result;
use std::io::{BufRead, Write};

/// Ask a yes/no question until a recognizable answer arrives.
///
/// Accepts `yes`/`y` and `no`/`n` in any case. End of input is an
/// [`UpdateError::InputClosed`] error.
pub fn confirm<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<bool> {
    loop {
        write!(output, "\n{question} (yes/no): ")?;
        output.flush()?;

        let mut answer = String::new();
        if input.read_line(&mut answer)? == 0 {
            return Err(UpdateError::InputClosed.into());
        }

        match answer.trim().to_lowercase().as_str() {
            "yes" | "y" => return Ok(true),
            "no" | "n" => return Ok(false),
            _ => writeln!(output, "\nPlease enter 'yes' or 'no'.")?,
        }
    }
}
