//! Resolution of the three stream endpoints of a run.
//!
//! `-` always means the process's standard input or output. Any other
//! path is checked before it is opened so that directories and special
//! files are rejected with a precise reason.

use crate::error::OpenError;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// Path sentinel for standard input/output.
pub const STDIO: &str = "-";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Read,
    Write,
}

/// Check a filesystem entry against the open contract for `mode`.
///
/// Reading requires an existing regular file. Writing only rejects
/// directories; a missing path is created and special files such as
/// `/dev/null` are accepted.
pub fn inspect(path: &Path, mode: Mode) -> Result<(), OpenError> {
    match fs::metadata(path) {
        Err(e) if mode == Mode::Read => Err(match e.kind() {
            io::ErrorKind::NotFound => OpenError::NotFound,
            _ => OpenError::Io(e),
        }),
        Err(_) => Ok(()),
        Ok(meta) if meta.is_dir() => Err(OpenError::IsDirectory),
        Ok(meta) if mode == Mode::Read && !meta.is_file() => Err(OpenError::NotRegularFile),
        Ok(_) => Ok(()),
    }
}

/// Open the input document.
pub fn open_input(path: &str) -> Result<Box<dyn BufRead>, OpenError> {
    if path == STDIO {
        return Ok(Box::new(io::stdin().lock()));
    }
    inspect(Path::new(path), Mode::Read)?;
    Ok(Box::new(BufReader::new(File::open(path)?)))
}

/// Open (truncating) an output stream.
///
/// Standard output is returned unbuffered by this layer so that two
/// streams both pointing at `-` interleave in write order.
pub fn open_output(path: &str) -> Result<Box<dyn Write>, OpenError> {
    if path == STDIO {
        return Ok(Box::new(io::stdout()));
    }
    inspect(Path::new(path), Mode::Write)?;
    Ok(Box::new(BufWriter::new(File::create(path)?)))
}
