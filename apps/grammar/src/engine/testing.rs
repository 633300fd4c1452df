//! Scripted engine for tests: canned lints per line text, injectable
//! construction failures, and a ledger of every acquire/release.

use super::{Component, Engine, EngineLint};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Debug, Default)]
pub struct Ledger {
    pub documents_created: Cell<usize>,
    pub documents_released: Cell<usize>,
    pub groups_created: Cell<usize>,
    pub groups_released: Cell<usize>,
    pub lints_released: Cell<usize>,
    /// Most documents alive at the same time
    pub peak_documents: Cell<usize>,
}

impl Ledger {
    pub fn live_documents(&self) -> usize {
        self.documents_created.get() - self.documents_released.get()
    }

    pub fn live_groups(&self) -> usize {
        self.groups_created.get() - self.groups_released.get()
    }
}

fn bump(cell: &Cell<usize>) {
    cell.set(cell.get() + 1);
}

pub struct ScriptedDocument {
    text: String,
    ledger: Rc<Ledger>,
}

impl Drop for ScriptedDocument {
    fn drop(&mut self) {
        bump(&self.ledger.documents_released);
    }
}

pub struct ScriptedGroup {
    ledger: Rc<Ledger>,
}

impl Drop for ScriptedGroup {
    fn drop(&mut self) {
        bump(&self.ledger.groups_released);
    }
}

pub struct ScriptedLint {
    start: usize,
    end: usize,
    message: Option<String>,
    ledger: Rc<Ledger>,
}

impl Drop for ScriptedLint {
    fn drop(&mut self) {
        bump(&self.ledger.lints_released);
    }
}

impl EngineLint for ScriptedLint {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }

    fn message(&self) -> Option<String> {
        self.message.clone()
    }
}

type Script = (usize, usize, Option<String>);

#[derive(Default)]
pub struct ScriptedEngine {
    pub ledger: Rc<Ledger>,
    /// Trimmed text -> lints; `None` scripts an absent lint list.
    script: HashMap<String, Option<Vec<Script>>>,
    fail_document_on: Option<String>,
    fail_group_on: Option<String>,
    /// Text of the most recently created document
    last_text: RefCell<Option<String>>,
}

impl ScriptedEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Report `word` inside `line` with `message`.
    pub fn finding(mut self, line: &str, word: &str, message: &str) -> Self {
        let start = line.find(word).expect("word occurs in line");
        self.push(line, (start, start + word.len(), Some(message.to_string())));
        self
    }

    /// Report a span whose message the engine cannot produce.
    pub fn silent_finding(mut self, line: &str, start: usize, end: usize) -> Self {
        self.push(line, (start, end, None));
        self
    }

    pub fn absent_lints(mut self, line: &str) -> Self {
        self.script.insert(line.to_string(), None);
        self
    }

    pub fn fail_document_on(mut self, line: &str) -> Self {
        self.fail_document_on = Some(line.to_string());
        self
    }

    pub fn fail_group_on(mut self, line: &str) -> Self {
        self.fail_group_on = Some(line.to_string());
        self
    }

    fn push(&mut self, line: &str, lint: Script) {
        self.script
            .entry(line.to_string())
            .or_insert_with(|| Some(Vec::new()))
            .get_or_insert_with(Vec::new)
            .push(lint);
    }
}

impl Engine for ScriptedEngine {
    type Document = ScriptedDocument;
    type LintGroup = ScriptedGroup;
    type Lint = ScriptedLint;

    fn create_document(&self, text: &str) -> Option<ScriptedDocument> {
        if self.fail_document_on.as_deref() == Some(text) {
            return None;
        }
        bump(&self.ledger.documents_created);
        *self.last_text.borrow_mut() = Some(text.to_string());
        let live = self.ledger.live_documents();
        if live > self.ledger.peak_documents.get() {
            self.ledger.peak_documents.set(live);
        }
        Some(ScriptedDocument {
            text: text.to_string(),
            ledger: Rc::clone(&self.ledger),
        })
    }

    fn create_lint_group(&self) -> Option<ScriptedGroup> {
        // The group is created right after the document it will lint.
        if self.fail_group_on.is_some() && self.fail_group_on == *self.last_text.borrow() {
            return None;
        }
        bump(&self.ledger.groups_created);
        Some(ScriptedGroup {
            ledger: Rc::clone(&self.ledger),
        })
    }

    fn lints(
        &self,
        document: &ScriptedDocument,
        _group: &mut ScriptedGroup,
    ) -> Option<Vec<ScriptedLint>> {
        let scripted = match self.script.get(&document.text) {
            Some(None) => return None,
            Some(Some(lints)) => lints.clone(),
            None => Vec::new(),
        };
        Some(
            scripted
                .into_iter()
                .map(|(start, end, message)| ScriptedLint {
                    start,
                    end,
                    message,
                    ledger: Rc::clone(&self.ledger),
                })
                .collect(),
        )
    }

    fn components(&self) -> Vec<Component> {
        vec![Component {
            name: "scripted".to_string(),
            version: "0.0.0".to_string(),
        }]
    }
}
