//! Small helpers shared by the binary and the library.

use std::io::{self, IsTerminal};
use std::path::Path;

/// Basename of `argv[0]`, used to prefix every diagnostic.
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .as_deref()
        .and_then(|arg0| Path::new(arg0).file_name())
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string())
}

/// OS reason text for an I/O error, without Rust's `(os error N)` suffix.
pub fn io_reason(err: &io::Error) -> String {
    let text = err.to_string();
    match text.find(" (os error ") {
        Some(idx) => text[..idx].to_string(),
        None => text,
    }
}

/// Styling is only applied to an interactive stdout and honours `NO_COLOR`.
pub fn use_colors() -> bool {
    std::env::var_os("NO_COLOR").is_none() && io::stdout().is_terminal()
}
