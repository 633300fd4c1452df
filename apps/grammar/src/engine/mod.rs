//! Boundary to the grammar engine.
//!
//! The engine is opaque: it turns a line of text into a document, builds a
//! lint group (a rule-evaluation session) and reports lints against the
//! document. Documents, lint groups and lints are owned values; dropping
//! them releases whatever the engine allocated, so every exit path of the
//! caller, early returns included, gives the resources back.

pub mod rules;
#[cfg(test)]
pub(crate) mod testing;

/// A lint exactly as the engine reports it.
pub trait EngineLint {
    /// Byte offset of the first matched byte in the document text.
    fn start(&self) -> usize;
    /// Byte offset one past the last matched byte.
    fn end(&self) -> usize;
    /// Human-readable message, or `None` when the engine cannot produce one.
    fn message(&self) -> Option<String>;
}

/// Named piece of the engine, listed by `--version`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    pub name: String,
    pub version: String,
}

pub trait Engine {
    type Document;
    type LintGroup;
    type Lint: EngineLint;

    /// `None` when the engine cannot represent `text`.
    fn create_document(&self, text: &str) -> Option<Self::Document>;

    /// A fresh session; nothing carries over from earlier groups.
    fn create_lint_group(&self) -> Option<Self::LintGroup>;

    /// Lints in source order. `None` means the engine produced no list,
    /// which callers treat as an empty one.
    fn lints(&self, document: &Self::Document, group: &mut Self::LintGroup)
        -> Option<Vec<Self::Lint>>;

    fn components(&self) -> Vec<Component>;
}
