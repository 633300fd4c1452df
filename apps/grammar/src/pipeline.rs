//! Per-line lint pipeline.
//!
//! Each line gets its own document and its own lint group, so no rule
//! state leaks between lines and the result for a line does not depend on
//! what came before it. Both are dropped before this function returns, on
//! success and on every error path.

use crate::engine::{Engine, EngineLint};
use crate::error::Error;

/// A reported issue with a retrievable message. Offsets are byte offsets
/// into the trimmed line, half-open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub start: usize,
    pub end: usize,
    pub message: String,
}

/// Lint one trimmed line.
///
/// Fails only when the engine cannot build the document or the lint
/// group. An absent lint list counts as no findings; lints whose message
/// cannot be retrieved are dropped without being reported.
pub fn lint_line<E: Engine>(engine: &E, trimmed: &str) -> Result<Vec<Finding>, Error> {
    let document = engine.create_document(trimmed).ok_or(Error::Document)?;
    let mut group = engine.create_lint_group().ok_or(Error::LintGroup)?;
    let lints = engine.lints(&document, &mut group).unwrap_or_default();
    let findings: Vec<Finding> = lints
        .iter()
        .filter_map(|lint| {
            let Some(message) = lint.message() else {
                log::trace!("skipping lint {}..{} without message", lint.start(), lint.end());
                return None;
            };
            Some(Finding {
                start: lint.start(),
                end: lint.end(),
                message,
            })
        })
        .collect();
    // Drop order mirrors acquisition: lints, then group, then document.
    drop(lints);
    drop(group);
    drop(document);
    Ok(findings)
}
