// src/scoreboard/columns.rs
// Header label → column position. Rows are read by label, not by fixed offset,
// so a reordered table still maps correctly.

use tracing::warn;

use crate::config::TimesPolicy;
use crate::error::{Result, ScoreboardError};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Column {
    Srv,
    Pid,
    Acc,
    Mode,
    Cpu,
    SecondsSince,
    RequestTime,
    Duration,
    Conn,
    Child,
    Slot,
    Client,
    Protocol,
    VHost,
    Request,
}

impl Column {
    pub const COUNT: usize = 15;

    /// In the order mod_status prints them.
    pub const ALL: [Column; Column::COUNT] = [
        Column::Srv,
        Column::Pid,
        Column::Acc,
        Column::Mode,
        Column::Cpu,
        Column::SecondsSince,
        Column::RequestTime,
        Column::Duration,
        Column::Conn,
        Column::Child,
        Column::Slot,
        Column::Client,
        Column::Protocol,
        Column::VHost,
        Column::Request,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Column::Srv => "Srv",
            Column::Pid => "PID",
            Column::Acc => "Acc",
            Column::Mode => "M",
            Column::Cpu => "CPU",
            Column::SecondsSince => "SS",
            Column::RequestTime => "Req",
            Column::Duration => "Dur",
            Column::Conn => "Conn",
            Column::Child => "Child",
            Column::Slot => "Slot",
            Column::Client => "Client",
            Column::Protocol => "Protocol",
            Column::VHost => "VHost",
            Column::Request => "Request",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.label() == label)
    }

    /// "CPU" only exists when httpd has `HAVE_TIMES`; everything else always does.
    pub fn is_times(self) -> bool {
        self == Column::Cpu
    }

    fn slot(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnMap {
    index: [Option<usize>; Column::COUNT],
    width: usize,
}

impl ColumnMap {
    pub fn from_headers(headers: &[String], times: TimesPolicy) -> Result<Self> {
        let mut index = [None; Column::COUNT];

        for (pos, label) in headers.iter().enumerate() {
            match Column::from_label(label) {
                Some(col) => {
                    if index[col.slot()].replace(pos).is_some() {
                        return Err(ScoreboardError::DuplicateColumn { label: label.clone() });
                    }
                }
                None => warn!(column = %label, position = pos, "ignoring unknown scoreboard column"),
            }
        }

        let missing: Vec<&str> = Column::ALL
            .into_iter()
            .filter(|c| !c.is_times() && index[c.slot()].is_none())
            .map(Column::label)
            .collect();
        if !missing.is_empty() {
            return Err(ScoreboardError::missing_columns(missing));
        }

        if index[Column::Cpu.slot()].is_none() && times == TimesPolicy::Require {
            return Err(ScoreboardError::MissingTimes);
        }

        Ok(Self { index, width: headers.len() })
    }

    /// Number of header cells, which every data row must match.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn has(&self, col: Column) -> bool {
        self.index[col.slot()].is_some()
    }

    /// Text of `col` in `cells`, or `None` when the page has no such column.
    pub fn get<'r>(&self, cells: &'r [String], col: Column) -> Option<&'r str> {
        self.index[col.slot()]
            .and_then(|i| cells.get(i))
            .map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(cols: &[Column]) -> Vec<String> {
        cols.iter().map(|c| c.label().to_string()).collect()
    }

    #[test]
    fn full_header_maps_in_order() {
        let map = ColumnMap::from_headers(&labels(&Column::ALL), TimesPolicy::Require).unwrap();
        assert_eq!(map.width(), 15);
        let cells = labels(&Column::ALL);
        assert_eq!(map.get(&cells, Column::VHost), Some("VHost"));
        assert_eq!(map.get(&cells, Column::Cpu), Some("CPU"));
    }

    #[test]
    fn reordered_header_maps_by_label() {
        let mut cols = Column::ALL.to_vec();
        cols.reverse();
        let map = ColumnMap::from_headers(&labels(&cols), TimesPolicy::Require).unwrap();
        let cells = labels(&cols);
        assert_eq!(map.get(&cells, Column::Srv), Some("Srv"));
        assert_eq!(map.get(&cells, Column::Request), Some("Request"));
    }

    #[test]
    fn missing_cpu_depends_on_policy() {
        let cols: Vec<Column> = Column::ALL.into_iter().filter(|c| !c.is_times()).collect();
        let headers = labels(&cols);

        let err = ColumnMap::from_headers(&headers, TimesPolicy::Require).unwrap_err();
        assert!(matches!(err, ScoreboardError::MissingTimes));

        let map = ColumnMap::from_headers(&headers, TimesPolicy::Optional).unwrap();
        assert!(!map.has(Column::Cpu));
        assert_eq!(map.width(), 14);
    }

    #[test]
    fn missing_base_columns_are_reported() {
        let cols: Vec<Column> = Column::ALL
            .into_iter()
            .filter(|c| !matches!(c, Column::VHost | Column::Request))
            .collect();
        let err = ColumnMap::from_headers(&labels(&cols), TimesPolicy::Optional).unwrap_err();
        assert!(matches!(err, ScoreboardError::MissingColumns { missing } if missing == vec!["VHost", "Request"]));
    }

    #[test]
    fn duplicates_are_rejected_and_unknowns_ignored() {
        let mut headers = labels(&Column::ALL);
        headers.push("Extra".into());
        let map = ColumnMap::from_headers(&headers, TimesPolicy::Require).unwrap();
        assert_eq!(map.width(), 16);

        headers.push("PID".into());
        let err = ColumnMap::from_headers(&headers, TimesPolicy::Require).unwrap_err();
        assert!(matches!(err, ScoreboardError::DuplicateColumn { label } if label == "PID"));
    }
}
