//! Line-at-a-time reading of the input document.

use std::io::{self, BufRead};
use std::iter::FusedIterator;

/// One input line. `raw` keeps the terminator so echoing it reproduces
/// the source byte for byte; `trimmed` is what the engine sees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// 1-based, gapless
    pub number: usize,
    pub raw: Vec<u8>,
    pub trimmed: String,
}

/// Lazy, finite sequence of `LineRecord`s over a buffered reader.
///
/// Ends at end-of-stream or after the first read error, and never
/// restarts.
pub struct Lines<R> {
    reader: R,
    next_number: usize,
    done: bool,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            next_number: 1,
            done: false,
        }
    }
}

impl<R: BufRead> Iterator for Lines<R> {
    type Item = io::Result<LineRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let mut raw = Vec::new();
        match self.reader.read_until(b'\n', &mut raw) {
            Ok(0) => {
                self.done = true;
                None
            }
            Ok(_) => {
                let number = self.next_number;
                self.next_number += 1;
                let trimmed = String::from_utf8_lossy(strip(&raw)).into_owned();
                Some(Ok(LineRecord {
                    number,
                    raw,
                    trimmed,
                }))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

impl<R: BufRead> FusedIterator for Lines<R> {}

/// C-locale `isspace`: space, `\t`, `\n`, `\v`, `\f`, `\r`.
fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

/// Two-pointer trim: skip leading whitespace, then back off trailing.
pub fn strip(bytes: &[u8]) -> &[u8] {
    let mut start = 0;
    while start < bytes.len() && is_space(bytes[start]) {
        start += 1;
    }
    let mut end = bytes.len();
    while end > start && is_space(bytes[end - 1]) {
        end -= 1;
    }
    &bytes[start..end]
}
