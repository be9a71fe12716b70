// src/lib.rs

pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod log;
pub mod runner;
pub mod scoreboard;
pub mod specs;

pub use config::{ConvertOptions, OutputStyle, TimesPolicy};
pub use data::{AccessCounts, ServerStatus, WorkerScore, WorkerStatus};
pub use error::{FieldError, ScoreboardError};
pub use runner::{convert, render, run};
