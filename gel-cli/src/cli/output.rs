//! # Output Formatting
//!
//! Rendering of command output on stdout.

use std::io::{self, Write};

use gel_core::CommandOutput;

/// Format command output for display
///
/// Returns `None` when the command has nothing to show.
pub fn format_output(output: &CommandOutput) -> Option<String> {
    match output {
        CommandOutput::Success => None,
        CommandOutput::Message(msg) => Some(msg.clone()),
        CommandOutput::Data(data) => {
            Some(serde_json::to_string_pretty(data).unwrap_or_else(|_| data.to_string()))
        }
    }
}

/// Write command output to `writer`
pub fn write_output<W: Write>(writer: &mut W, output: &CommandOutput) -> io::Result<()> {
    if let Some(text) = format_output(output) {
        writeln!(writer, "{}", text)?;
    }
    Ok(())
}

/// Print command output to stdout
pub fn print_output(output: &CommandOutput) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_output(&mut handle, output)?;
    handle.flush()
}
