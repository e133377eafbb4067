//! Command execution logic.

use std::io::{self, Write};

use anyhow::Result;
use linexml_records::{parse_file, write_atomic};

use super::Cli;
use crate::config::OutputConfig;
use crate::error::Error;
use crate::output::{self, OutputFormat};

/// Convert the input file and write the rendered document.
pub async fn execute_convert(cli: &Cli, config: &OutputConfig) -> Result<()> {
    let input = &cli.input;
    if !tokio::fs::metadata(input)
        .await
        .is_ok_and(|meta| meta.is_file())
    {
        return Err(Error::InputNotFound(input.clone()).into());
    }

    let format = OutputFormat::from(cli.format);
    tracing::debug!(input = %input.display(), %format, "Converting");

    let people = parse_file(input).await?;
    let text = output::render(&people, format, config)?;

    match &cli.output {
        Some(path) => {
            write_atomic(path, &text).await?;
            tracing::info!(
                persons = people.len(),
                output = %path.display(),
                "Wrote {format} output"
            );
        }
        None => write_output(&mut io::stdout().lock(), &text)?,
    }

    Ok(())
}

/// Write rendered output to `out`, reporting a closed stream as an error.
fn write_output<W: Write>(out: &mut W, text: &str) -> crate::error::Result<()> {
    out.write_all(text.as_bytes())?;
    out.flush()?;
    Ok(())
}
