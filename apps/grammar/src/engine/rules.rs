//! Built-in rule engine: pattern rules plus a repeated-word check.
//!
//! A document is the trimmed line, a lint group is a clone of the compiled
//! rule set (regexes are reference counted, so this is cheap) and lints are
//! byte spans into the document text, sorted by position.

use super::{Component, Engine, EngineLint};
use crate::config::RulesCfg;
use regex::{Regex, RegexBuilder};
use thiserror::Error;

/// (id, pattern, message)
static BUILTIN: &[(&str, &str, &str)] = &[
    (
        "missing-apostrophe",
        r"(?i)\b(?:dont|doesnt|didnt|isnt|arent|wasnt|werent|couldnt|shouldnt|wouldnt|hasnt|havent|hadnt)\b",
        "Missing apostrophe in contraction.",
    ),
    (
        "article-before-vowel",
        r"(?i)\ba\s+(?:[aio]|e[^u\W])\w*",
        "Use 'an' before a word starting with a vowel sound.",
    ),
    ("a-lot", r"(?i)\balot\b", "Did you mean 'a lot'?"),
    (
        "modal-of",
        r"(?i)\b(?:could|should|would|must|might)\s+of\b",
        "Did you mean 'have' instead of 'of'?",
    ),
    ("double-space", r" {2,}", "Use a single space between words."),
    (
        "space-before-punctuation",
        r"\s+[,.;:!?]",
        "Remove the space before this punctuation mark.",
    ),
];

const REPEATED_WORD: &str = "repeated-word";
const REPEATED_WORD_MESSAGE: &str = "Did you mean to repeat this word?";

#[derive(Debug, Error)]
#[error("rule '{id}': invalid pattern: {source}")]
pub struct RuleError {
    pub id: String,
    #[source]
    pub source: regex::Error,
}

#[derive(Debug, Clone)]
enum Check {
    Pattern(Regex),
    /// Word tokenizer; a hit is two equal words separated only by whitespace.
    RepeatedWord(Regex),
}

#[derive(Debug, Clone)]
pub struct Rule {
    id: String,
    message: String,
    check: Check,
}

impl Rule {
    pub fn id(&self) -> &str {
        &self.id
    }

    fn apply(&self, text: &str, out: &mut Vec<RuleLint>) {
        match &self.check {
            Check::Pattern(re) => {
                for m in re.find_iter(text) {
                    out.push(RuleLint::new(m.start(), m.end(), &self.message));
                }
            }
            Check::RepeatedWord(words) => {
                let mut prev: Option<regex::Match> = None;
                for m in words.find_iter(text) {
                    if let Some(p) = prev {
                        let gap = &text[p.end()..m.start()];
                        if !gap.is_empty()
                            && gap.chars().all(char::is_whitespace)
                            && p.as_str().to_lowercase() == m.as_str().to_lowercase()
                        {
                            out.push(RuleLint::new(p.start(), m.end(), &self.message));
                        }
                    }
                    prev = Some(m);
                }
            }
        }
    }
}

/// The compiled rule set. `Default` is an engine with no rules.
#[derive(Debug, Clone, Default)]
pub struct RuleEngine {
    rules: Vec<Rule>,
}

impl RuleEngine {
    /// Compile the rule set selected by `cfg`.
    pub fn new(cfg: &RulesCfg) -> Result<Self, RuleError> {
        let mut rules = Vec::new();
        if cfg.defaults {
            rules.push(Rule {
                id: REPEATED_WORD.to_string(),
                message: REPEATED_WORD_MESSAGE.to_string(),
                check: Check::RepeatedWord(compile(REPEATED_WORD, r"\w+", false)?),
            });
            for (id, pattern, message) in BUILTIN {
                rules.push(Rule {
                    id: id.to_string(),
                    message: message.to_string(),
                    check: Check::Pattern(compile(id, pattern, false)?),
                });
            }
        }
        for custom in &cfg.custom {
            rules.push(Rule {
                id: custom.id.clone(),
                message: custom.message.clone(),
                check: Check::Pattern(compile(
                    &custom.id,
                    &custom.pattern,
                    custom.case_insensitive,
                )?),
            });
        }
        for id in &cfg.disable {
            if !rules.iter().any(|r| &r.id == id) {
                log::warn!("cannot disable unknown rule '{}'", id);
            }
        }
        rules.retain(|r| !cfg.disable.contains(&r.id));
        log::debug!(
            "rule engine ready with {} rule(s): {}",
            rules.len(),
            rules.iter().map(Rule::id).collect::<Vec<_>>().join(", ")
        );
        Ok(Self { rules })
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}

fn compile(id: &str, pattern: &str, case_insensitive: bool) -> Result<Regex, RuleError> {
    RegexBuilder::new(pattern)
        .case_insensitive(case_insensitive)
        .build()
        .map_err(|source| RuleError {
            id: id.to_string(),
            source,
        })
}

#[derive(Debug)]
pub struct RuleDocument {
    text: String,
}

#[derive(Debug)]
pub struct RuleGroup {
    rules: Vec<Rule>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleLint {
    start: usize,
    end: usize,
    message: String,
}

impl RuleLint {
    fn new(start: usize, end: usize, message: &str) -> Self {
        Self {
            start,
            end,
            message: message.to_string(),
        }
    }
}

impl EngineLint for RuleLint {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }

    fn message(&self) -> Option<String> {
        Some(self.message.clone())
    }
}

impl Engine for RuleEngine {
    type Document = RuleDocument;
    type LintGroup = RuleGroup;
    type Lint = RuleLint;

    fn create_document(&self, text: &str) -> Option<RuleDocument> {
        Some(RuleDocument {
            text: text.to_string(),
        })
    }

    fn create_lint_group(&self) -> Option<RuleGroup> {
        Some(RuleGroup {
            rules: self.rules.clone(),
        })
    }

    fn lints(&self, document: &RuleDocument, group: &mut RuleGroup) -> Option<Vec<RuleLint>> {
        let mut out = Vec::new();
        for rule in &group.rules {
            rule.apply(&document.text, &mut out);
        }
        // Stable: equal spans keep rule order.
        out.sort_by_key(|l| (l.start, l.end));
        Some(out)
    }

    fn components(&self) -> Vec<Component> {
        vec![Component {
            name: "grammar-rules".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }]
    }
}
