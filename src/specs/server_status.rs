// src/specs/server_status.rs
//! Extraction rules for Apache's `/server-status` page.
//!
//! Purpose:
//! - Find the **worker table**: the first `<table>` whose first row is made of
//!   `<th>` cells including `Srv` and `Acc`. mod_status renders it with
//!   `border="0"`, but we go by the header row instead, which skips the event MPM
//!   connection table above it and the legend table below it.
//! - Return its header labels and every data row as cleaned cell text.
//!
//! Non-Responsibilities:
//! - **No typing of cells.** Numbers, status codes and the like are handled by `scoreboard`.
//!
//! Expected shape (httpd 2.4, `ExtendedStatus On`):
//! ```text
//! <table border="0"><tr><th>Srv</th><th>PID</th><th>Acc</th><th>M</th><th>CPU
//! </th><th>SS</th> ... <th>Request</th></tr>
//! <tr><td><b>0-0</b></td><td>1201</td><td>0/12/12</td><td><b>W</b>
//! </td><td>0.04</td> ... <td nowrap>GET / HTTP/1.1</td></tr>
//! ```

use tracing::debug;

use crate::config::consts::TABLE_MARKERS;
use crate::core::{CellKind, Html};
use crate::error::{Result, ScoreboardError};

/// The worker table as text: header labels plus one `Vec` of cells per row.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ScoreboardTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

pub fn extract(doc: &str) -> Result<ScoreboardTable> {
    if doc.trim().is_empty() {
        return Err(ScoreboardError::EmptyInput);
    }

    let html = Html::new(doc);
    let mut pos = 0usize;
    let mut index = 0usize;

    while let Some((ts, te)) = html.next_block("table", pos) {
        pos = te;
        let table = html.slice(ts, te);
        let mut rows = read_rows(&table);

        match rows.first() {
            Some(first) if is_scoreboard_header(first) => {}
            _ => {
                debug!(table = index, "skipping table without scoreboard header");
                index += 1;
                continue;
            }
        }

        let headers = rows.remove(0).into_iter().map(|(_, text)| text).collect();
        let rows: Vec<Vec<String>> = rows
            .into_iter()
            .map(|cells| cells.into_iter().map(|(_, text)| text).collect())
            .collect();

        debug!(table = index, rows = rows.len(), "found worker table");
        return Ok(ScoreboardTable { headers, rows });
    }

    Err(ScoreboardError::WorkerTableNotFound)
}

/// Every `<tr>` of the table that has at least one cell.
fn read_rows(table: &Html<'_>) -> Vec<Vec<(CellKind, String)>> {
    let mut rows = Vec::new();
    let mut pos = 0usize;
    while let Some((rs, re)) = table.next_block("tr", pos) {
        pos = re;
        let cells = table.slice(rs, re).cells();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    rows
}

fn is_scoreboard_header(row: &[(CellKind, String)]) -> bool {
    row.iter().all(|(kind, _)| *kind == CellKind::Header)
        && TABLE_MARKERS
            .iter()
            .all(|marker| row.iter().any(|(_, text)| text == marker))
}
