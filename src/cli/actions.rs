use anyhow::{Context, Result};
use std::{
    fs::File,
    io::{self, IsTerminal, Read, Write},
};

use clap::ArgMatches;

use super::{endpoints, Endpoint};
use crate::core::convert;

const TTY_HINT: &str =
    "unhex: reading hex text from the terminal; finish with Ctrl-D (see --help for usage)";

/// Run one conversion: read all input, convert it, then write the bytes.
///
/// The output destination is only opened once conversion has succeeded, so a
/// failing run leaves an existing output file untouched.
pub fn run(matches: &ArgMatches) -> Result<()> {
    let (input, output) = endpoints(matches);
    log::debug!("Converting {input} -> {output}");

    let text = read_input(&input)?;
    let bytes = convert(&text)?;
    write_output(&output, &bytes)?;

    log::info!("Wrote {} bytes to {output}", bytes.len());
    Ok(())
}

fn read_input(input: &Endpoint) -> Result<String> {
    match input {
        Endpoint::Stdio => {
            let stdin = io::stdin();
            // Only reachable from an interactive terminal; the integration
            // tests always pipe stdin, so they pin the hint's absence instead.
            if stdin.is_terminal() {
                eprintln!("{TTY_HINT}");
            }
            read_text(stdin.lock()).context("failed to read standard input")
        }
        Endpoint::Path(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open input file '{}'", path.display()))?;
            read_text(file)
                .with_context(|| format!("failed to read input file '{}'", path.display()))
        }
    }
}

fn write_output(output: &Endpoint, bytes: &[u8]) -> Result<()> {
    match output {
        Endpoint::Stdio => {
            write_bytes(io::stdout().lock(), bytes).context("failed to write standard output")
        }
        Endpoint::Path(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create output file '{}'", path.display()))?;
            write_bytes(file, bytes)
                .with_context(|| format!("failed to write output file '{}'", path.display()))
        }
    }
}

/// Read a whole stream as text. Invalid UTF-8 is replaced rather than
/// rejected so that comments may hold arbitrary bytes; anything replaced
/// outside a comment is caught by validation.
pub fn read_text(mut reader: impl Read) -> io::Result<String> {
    let mut raw = Vec::new();
    reader.read_to_end(&mut raw)?;
    Ok(match String::from_utf8(raw) {
        Ok(text) => text,
        Err(err) => {
            log::debug!("Input is not valid UTF-8: {err}");
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    })
}

/// Write the bytes unchanged and flush.
pub fn write_bytes(mut writer: impl Write, bytes: &[u8]) -> io::Result<()> {
    writer.write_all(bytes)?;
    writer.flush()
}
