// src/config/consts.rs

// Scoreboard table detection: a header row carrying all of these labels
pub const TABLE_MARKERS: &[&str] = &["Srv", "Acc"];

// Separators inside scoreboard cells
pub const SRV_SEP: char = '-';
pub const ACC_SEP: char = '/';
pub const DEAD_PID: &str = "-";

// I/O
pub const STDIO_PATH: &str = "-";

// Logging
pub const DEFAULT_LOG_LEVEL: &str = "warn";
