// src/specs/mod.rs
//! # Page specs
//!
//! Page-specific extraction: *where the data lives in the HTML* and how to get it
//! out as plain text, using the tolerant helpers in `core::html`.
//!
//! ## What lives here
//! - Locating the right block of a page (tables, rows, cells).
//! - Cleaning cell text (tags, entities, whitespace).
//!
//! ## What does **not** live here
//! - Typing and validating values. That is `scoreboard`'s job.
//! - Reading input or writing JSON. That is `runner`'s job.
//!
//! ## Typical call chain
//! ```text
//! cli → runner::render → specs::server_status::extract → scoreboard::parse_workers
//! ```
//!
//! Specs are tested offline against small hand-written snippets and the fixtures
//! under `tests/fixtures/`.
pub mod server_status;
