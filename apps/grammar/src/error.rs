//! Error types for a grammar run.
//!
//! Every failure surfaces once, in `main`, as `<program>: <message>`.
//! The variant decides the exit status: malformed invocations exit 1,
//! resource and engine failures exit 127.

use crate::engine::rules::RuleError;
use crate::status::ExitStatus;
use crate::utils::io_reason;
use std::io;
use thiserror::Error;

/// Why one of the three stream endpoints could not be opened.
#[derive(Debug, Error)]
pub enum OpenError {
    #[error("No such file or directory")]
    NotFound,
    #[error("Is a directory")]
    IsDirectory,
    #[error("Not a regular file")]
    NotRegularFile,
    #[error("{}", io_reason(.0))]
    Io(#[from] io::Error),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{operand}: Extra operand")]
    ExtraOperand { operand: String },
    #[error("{path}: {source}")]
    Open {
        path: String,
        #[source]
        source: OpenError,
    },
    #[error("{path}: {}", io_reason(.source))]
    Read { path: String, source: io::Error },
    #[error("{path}: {}", io_reason(.source))]
    Write { path: String, source: io::Error },
    #[error("{path}: {reason}")]
    Config { path: String, reason: String },
    #[error(transparent)]
    Rule(#[from] RuleError),
    #[error("Failed to create document")]
    Document,
    #[error("Failed to create lint group")]
    LintGroup,
}

impl Error {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            Error::ExtraOperand { .. } => ExitStatus::Usage,
            _ => ExitStatus::Fatal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_errors_render_like_coreutils() {
        let err = Error::Open {
            path: "notes".into(),
            source: OpenError::IsDirectory,
        };
        assert_eq!(err.to_string(), "notes: Is a directory");
        let err = Error::Open {
            path: "missing.txt".into(),
            source: OpenError::NotFound,
        };
        assert_eq!(err.to_string(), "missing.txt: No such file or directory");
    }

    #[test]
    fn io_reason_drops_os_error_suffix() {
        let err = Error::Read {
            path: "-".into(),
            source: io::Error::from_raw_os_error(5),
        };
        assert!(!err.to_string().contains("os error"));
        assert!(err.to_string().starts_with("-: "));
    }

    #[test]
    fn severity_maps_to_exit_status() {
        let usage = Error::ExtraOperand {
            operand: "b.txt".into(),
        };
        assert_eq!(usage.exit_status(), ExitStatus::Usage);
        assert_eq!(usage.to_string(), "b.txt: Extra operand");
        assert_eq!(Error::Document.exit_status(), ExitStatus::Fatal);
        assert_eq!(Error::LintGroup.exit_status(), ExitStatus::Fatal);
    }
}
