//! Grammar core library.
//!
//! This crate runs a text document through a grammar engine one line at a
//! time, echoing the document to one stream and writing suggestions to
//! another.
//!
//! High-level modules:
//! - `cli`: CLI argument parsing (binary uses this).
//! - `config`: Config file discovery and the immutable run `Config`.
//! - `stream`: Opening the input and the two output streams.
//! - `lines`: Line records with 1-based numbers and trimmed text.
//! - `engine`: The engine boundary and the built-in rule engine.
//! - `pipeline`: Linting one line with guaranteed resource release.
//! - `output`: Verbosity gating and suggestion formatting.
//! - `status`: Mistake counting and exit statuses.
//! - `runner`: The per-line loop tying the above together.
//! - `error`: Error types and their severity.
//! - `utils`: Supporting helpers.
pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod lines;
pub mod output;
pub mod pipeline;
pub mod runner;
pub mod status;
pub mod stream;
pub mod utils;

pub use config::{Config, Verbosity};
pub use error::Error;
pub use status::{ExitStatus, RunState};
