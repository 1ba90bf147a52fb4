// src/confirm.rs

//! Operator acknowledgement before a run starts (`--confirm`).

use std::io::{self, BufRead, Write};

pub const PROMPT: &str = "Press ENTER to continue...";

/// Print the prompt and block until a line (or EOF) is read from `input`.
///
/// EOF counts as acknowledgement so a closed stdin never hangs the run.
pub fn wait_for_ack<I, O>(input: &mut I, output: &mut O) -> io::Result<()>
where
    I: BufRead,
    O: Write,
{
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(())
}
