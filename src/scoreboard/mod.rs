// src/scoreboard/mod.rs
//! Typed view of the worker table: header labels and cell text in, `WorkerScore`s out.
//!
//! Any bad row fails the whole conversion. The error carries the 1-based data row
//! and the column label, so the offending cell is easy to find on the page.

mod columns;
mod fields;

pub use columns::{Column, ColumnMap};

use tracing::{debug, trace};

use crate::config::TimesPolicy;
use crate::data::WorkerScore;
use crate::error::{FieldError, Result, ScoreboardError};
use crate::specs::server_status::ScoreboardTable;

pub fn parse_workers(table: &ScoreboardTable, times: TimesPolicy) -> Result<Vec<WorkerScore>> {
    let map = ColumnMap::from_headers(&table.headers, times)?;
    debug!(
        columns = map.width(),
        rows = table.rows.len(),
        cpu = map.has(Column::Cpu),
        "scoreboard header accepted"
    );

    let mut workers = Vec::with_capacity(table.rows.len());
    for (i, cells) in table.rows.iter().enumerate() {
        let score = parse_row(&map, i + 1, cells)?;
        trace!(row = i + 1, vhost = %score.vhost, request = %score.request, "parsed worker");
        workers.push(score);
    }
    Ok(workers)
}

fn parse_row(map: &ColumnMap, row: usize, cells: &[String]) -> Result<WorkerScore> {
    if cells.len() != map.width() {
        return Err(ScoreboardError::InvalidCellCount {
            row,
            expected: map.width(),
            found: cells.len(),
        });
    }

    let cell = |col: Column| map.get(cells, col).unwrap_or_default();

    let (server, generation) = parse_cell(row, Column::Srv, cell(Column::Srv), fields::parse_srv)?;
    let cpu = match map.has(Column::Cpu) {
        true => Some(float(row, Column::Cpu, cell(Column::Cpu))?),
        false => None,
    };

    Ok(WorkerScore {
        server,
        generation,
        pid: parse_cell(row, Column::Pid, cell(Column::Pid), fields::parse_pid)?,
        access_counts: parse_cell(row, Column::Acc, cell(Column::Acc), fields::parse_acc)?,
        status: parse_cell(row, Column::Mode, cell(Column::Mode), fields::parse_status)?,
        cpu,
        seconds_since_s: int(row, Column::SecondsSince, cell(Column::SecondsSince))?,
        request_time_ms: int(row, Column::RequestTime, cell(Column::RequestTime))?,
        duration_ms: int(row, Column::Duration, cell(Column::Duration))?,
        conn_kib: float(row, Column::Conn, cell(Column::Conn))?,
        child_mib: float(row, Column::Child, cell(Column::Child))?,
        slot_mib: float(row, Column::Slot, cell(Column::Slot))?,
        client: cell(Column::Client).to_string(),
        protocol: cell(Column::Protocol).to_string(),
        vhost: cell(Column::VHost).to_string(),
        request: cell(Column::Request).to_string(),
    })
}

fn parse_cell<T>(
    row: usize,
    col: Column,
    raw: &str,
    parse: impl FnOnce(&str) -> std::result::Result<T, FieldError>,
) -> Result<T> {
    parse(raw).map_err(|e| ScoreboardError::invalid_field(row, col.label(), raw, e))
}

fn int(row: usize, col: Column, raw: &str) -> Result<u64> {
    parse_cell(row, col, raw, fields::parse_u64)
}

fn float(row: usize, col: Column, raw: &str) -> Result<f64> {
    parse_cell(row, col, raw, fields::parse_f64)
}
