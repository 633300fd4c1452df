//! Output rendering for the document echo and suggestion streams.
//!
//! Verbosity decides which stream receives anything:
//! - `normal`: echo every line, print one suggestion line per finding.
//! - `quiet`: echo only.
//! - `silent`: nothing.
//!
//! Suggestion lines are `{delimiter}'{match}': {message}`, or with line
//! numbering `{delimiter}{line}:{col} '{match}': {message}` where `col` is
//! the 1-based byte column in the trimmed line.

use crate::config::{Config, Verbosity};
use crate::error::Error;
use crate::lines::LineRecord;
use crate::pipeline::Finding;
use std::io::Write;

/// Format one suggestion line, newline included.
///
/// Offsets are clamped to the trimmed text and the match is extracted as
/// bytes, so an out-of-range or mid-character span never panics.
pub fn format_suggestion(
    delimiter: &str,
    number_lines: bool,
    line_number: usize,
    trimmed: &str,
    finding: &Finding,
) -> String {
    let bytes = trimmed.as_bytes();
    let end = finding.end.min(bytes.len());
    let start = finding.start.min(end);
    let matched = String::from_utf8_lossy(&bytes[start..end]);
    if number_lines {
        format!(
            "{}{}:{} '{}': {}\n",
            delimiter,
            line_number,
            finding.start + 1,
            matched,
            finding.message
        )
    } else {
        format!("{}'{}': {}\n", delimiter, matched, finding.message)
    }
}

/// Writes each line's echo and suggestions to their streams.
pub struct Multiplexer<D, S> {
    verbosity: Verbosity,
    number_lines: bool,
    delimiter: String,
    document: D,
    document_path: String,
    suggestions: S,
    suggestion_path: String,
}

impl<D: Write, S: Write> Multiplexer<D, S> {
    pub fn new(config: &Config, document: D, suggestions: S) -> Self {
        Self {
            verbosity: config.verbosity,
            number_lines: config.number_lines,
            delimiter: config.delimiter.clone(),
            document,
            document_path: config.output_path.clone(),
            suggestions,
            suggestion_path: config.suggestion_path.clone(),
        }
    }

    /// Emit one line and flush both streams before the next line is read.
    pub fn emit(&mut self, record: &LineRecord, findings: &[Finding]) -> Result<(), Error> {
        if self.verbosity.echoes_document() {
            self.document
                .write_all(&record.raw)
                .and_then(|_| self.document.flush())
                .map_err(|source| Error::Write {
                    path: self.document_path.clone(),
                    source,
                })?;
        }
        if self.verbosity.prints_suggestions() && !findings.is_empty() {
            for finding in findings {
                let line = format_suggestion(
                    &self.delimiter,
                    self.number_lines,
                    record.number,
                    &record.trimmed,
                    finding,
                );
                self.suggestions
                    .write_all(line.as_bytes())
                    .map_err(|source| Error::Write {
                        path: self.suggestion_path.clone(),
                        source,
                    })?;
            }
            self.suggestions.flush().map_err(|source| Error::Write {
                path: self.suggestion_path.clone(),
                source,
            })?;
        }
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn into_inner(self) -> (D, S) {
        (self.document, self.suggestions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn finding(start: usize, end: usize, message: &str) -> Finding {
        Finding {
            start,
            end,
            message: message.to_string(),
        }
    }

    fn record(number: usize, raw: &str) -> LineRecord {
        LineRecord {
            number,
            raw: raw.as_bytes().to_vec(),
            trimmed: raw.trim().to_string(),
        }
    }

    #[test]
    fn test_plain_suggestion() {
        let line = format_suggestion(
            "",
            false,
            1,
            "She dont like apples",
            &finding(4, 8, "subject-verb agreement"),
        );
        assert_eq!(line, "'dont': subject-verb agreement\n");
    }

    #[test]
    fn test_numbered_suggestion_with_delimiter() {
        let line = format_suggestion(
            "# ",
            true,
            3,
            "She dont like apples",
            &finding(4, 8, "subject-verb agreement"),
        );
        assert_eq!(line, "# 3:5 'dont': subject-verb agreement\n");
    }

    #[test]
    fn test_empty_and_out_of_range_spans() {
        assert_eq!(
            format_suggestion("", false, 1, "abc", &finding(1, 1, "empty")),
            "'': empty\n"
        );
        assert_eq!(
            format_suggestion("", false, 1, "abc", &finding(2, 10, "clamped")),
            "'c': clamped\n"
        );
    }

    #[test]
    fn test_span_inside_multibyte_char_is_lossy() {
        // "é" is two bytes; the span ends between them.
        let line = format_suggestion("", false, 1, "café", &finding(3, 4, "accent"));
        assert_eq!(line, "'\u{FFFD}': accent\n");
    }

    fn run(verbosity: Verbosity) -> (String, String) {
        let config = Config {
            verbosity,
            ..Config::default()
        };
        let mut mux = Multiplexer::new(&config, Vec::new(), Vec::new());
        let rec = record(1, "She dont like apples\n");
        mux.emit(&rec, &[finding(4, 8, "subject-verb agreement")])
            .unwrap();
        mux.emit(&record(2, "Fine.\n"), &[]).unwrap();
        let (doc, sug) = mux.into_inner();
        (String::from_utf8(doc).unwrap(), String::from_utf8(sug).unwrap())
    }

    #[test]
    fn test_normal_echoes_and_suggests() {
        let (doc, sug) = run(Verbosity::Normal);
        assert_eq!(doc, "She dont like apples\nFine.\n");
        assert_eq!(sug, "'dont': subject-verb agreement\n");
    }

    #[test]
    fn test_quiet_echoes_only() {
        let (doc, sug) = run(Verbosity::Quiet);
        assert_eq!(doc, "She dont like apples\nFine.\n");
        assert!(sug.is_empty());
    }

    #[test]
    fn test_silent_writes_nothing() {
        let (doc, sug) = run(Verbosity::Silent);
        assert!(doc.is_empty());
        assert!(sug.is_empty());
    }
}
