// src/runner.rs
use std::io::{Read, Write};

use tracing::info;

use crate::{
    config::{ConvertOptions, OutputStyle},
    data::ServerStatus,
    error::Result,
    scoreboard,
    specs::server_status,
};

/// Summary of what was produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub workers: usize,
    pub bytes_written: usize,
}

/// Parse a whole status page into its worker list.
pub fn convert(doc: &str, opts: &ConvertOptions) -> Result<ServerStatus> {
    let table = server_status::extract(doc)?;
    let workers = scoreboard::parse_workers(&table, opts.times)?;
    Ok(ServerStatus { workers })
}

/// Serialize with a trailing newline, so the output behaves as a line for shell tools.
pub fn to_json(status: &ServerStatus, style: OutputStyle) -> Result<String> {
    let mut json = match style {
        OutputStyle::Pretty => serde_json::to_string_pretty(status)?,
        OutputStyle::Compact => serde_json::to_string(status)?,
    };
    json.push('\n');
    Ok(json)
}

/// Page text in, JSON text out. Nothing is produced unless the whole page parses.
pub fn render(doc: &str, opts: &ConvertOptions) -> Result<(String, usize)> {
    let status = convert(doc, opts)?;
    let json = to_json(&status, opts.output)?;
    Ok((json, status.workers.len()))
}

/// Read everything from `input`, convert, then write the document to `output`.
pub fn run<R: Read, W: Write>(mut input: R, mut output: W, opts: &ConvertOptions) -> Result<RunSummary> {
    let mut doc = String::new();
    input.read_to_string(&mut doc)?;
    info!(bytes = doc.len(), "read status page");

    let (json, workers) = render(&doc, opts)?;
    output.write_all(json.as_bytes())?;
    output.flush()?;

    info!(workers, bytes = json.len(), "wrote scoreboard JSON");
    Ok(RunSummary { workers, bytes_written: json.len() })
}
