// src/data.rs
//! Output records. One `WorkerScore` per scoreboard row.
//!
//! Field names carry their unit because mod_status rescales most of Apache's
//! raw counters (microseconds to milliseconds, bytes to KiB/MiB) before printing.

use serde::Serialize;

/// The whole JSON document. `workers` is the only key, rows stay in page order.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ServerStatus {
    pub workers: Vec<WorkerScore>,
}

/// One row of the worker table (Apache's `worker_score`, as far as mod_status shows it).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WorkerScore {
    /// Child server number, first half of "Srv"
    pub server: u32,
    /// Second half of "Srv"
    pub generation: u32,
    /// `None` when the slot is dead ("-" on the page)
    pub pid: Option<i32>,
    pub access_counts: AccessCounts,
    /// "M" column (mode of operation)
    pub status: WorkerStatus,
    /// Only rendered when httpd was built with `HAVE_TIMES`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cpu: Option<f64>,
    /// "SS": seconds since the most recent request began
    pub seconds_since_s: u64,
    /// "Req": milliseconds spent on the most recent request
    pub request_time_ms: u64,
    /// "Dur": sum of all request times, milliseconds
    pub duration_ms: u64,
    /// "Conn": KiB transferred on this connection
    pub conn_kib: f64,
    /// "Child": MiB transferred by this child
    pub child_mib: f64,
    /// "Slot": MiB transferred by this slot
    pub slot_mib: f64,
    pub client: String,
    pub protocol: String,
    pub vhost: String,
    pub request: String,
}

/// The three counters of the "Acc" column, in page order `connection/child/slot`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct AccessCounts {
    /// Accesses on this connection
    pub connection: u64,
    /// Accesses by this child
    pub child: u64,
    /// Accesses by this slot
    pub slot: u64,
}

/// Scoreboard states, one per `SERVER_*` constant in httpd's `scoreboard.h`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum WorkerStatus {
    Dead,
    Starting,
    Ready,
    BusyRead,
    BusyWrite,
    BusyKeepAlive,
    BusyLog,
    BusyDns,
    Closing,
    Graceful,
    IdleKill,
}

impl WorkerStatus {
    pub const ALL: [WorkerStatus; 11] = [
        WorkerStatus::Dead,
        WorkerStatus::Starting,
        WorkerStatus::Ready,
        WorkerStatus::BusyRead,
        WorkerStatus::BusyWrite,
        WorkerStatus::BusyKeepAlive,
        WorkerStatus::BusyLog,
        WorkerStatus::BusyDns,
        WorkerStatus::Closing,
        WorkerStatus::Graceful,
        WorkerStatus::IdleKill,
    ];

    /// The scoreboard key character mod_status prints for this state.
    pub fn code(self) -> char {
        match self {
            WorkerStatus::Dead => '.',
            WorkerStatus::Starting => 'S',
            WorkerStatus::Ready => '_',
            WorkerStatus::BusyRead => 'R',
            WorkerStatus::BusyWrite => 'W',
            WorkerStatus::BusyKeepAlive => 'K',
            WorkerStatus::BusyLog => 'L',
            WorkerStatus::BusyDns => 'D',
            WorkerStatus::Closing => 'C',
            WorkerStatus::Graceful => 'G',
            WorkerStatus::IdleKill => 'I',
        }
    }

    pub fn from_code(code: char) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.code() == code)
    }
}
