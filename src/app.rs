use std::io::{BufRead, Write};

use anyhow::Result;

use crate::client::{GeminiClient, Transport};
use crate::input::read_input;

pub const PROMPT: &str = "Enter text to summarize: ";
pub const FAILED: &str = "Failed to get summary.";

/// Prompts, reads one line, summarizes it and prints the outcome.
///
/// Returns the process exit status: `1` when the input could not be used,
/// `0` otherwise, including when the API call fails.
pub async fn run<T, R, O, E>(client: &GeminiClient<T>, stdin: R, out: &mut O, err: &mut E) -> Result<u8>
where
    T: Transport,
    R: BufRead,
    O: Write,
    E: Write,
{
    write!(out, "{PROMPT}")?;
    out.flush()?;

    let text = match read_input(stdin) {
        Ok(text) => text,
        Err(e) => {
            tracing::debug!(error = ?e, "unusable input");
            writeln!(err, "{e}")?;
            return Ok(1);
        }
    };

    match client.summarize(&text).await {
        Ok(summary) => {
            writeln!(out, "\nSummarized Text:\n{summary}")?;
        }
        Err(e) => {
            tracing::debug!(error = ?e, "summarize failed");
            writeln!(err, "{e}")?;
            writeln!(out, "{FAILED}")?;
        }
    }
    Ok(0)
}
