//! Configuration discovery and the immutable run `Config`.
//!
//! `grammar` reads `grammar.toml|yaml|yml` from the current directory (or
//! the closest ancestor, stopping at a `.git` directory) unless
//! `GRAMMAR_CONFIG` names a file explicitly. The file supplies defaults
//! for output formatting and the rule set of the built-in engine.
//!
//! Defaults:
//! - `delimiter`: `""`
//! - `comment`: `""`
//! - `number_lines`: false
//! - `verbosity`: `normal`
//! - `rules.defaults`: true
//!
//! Overrides precedence: CLI > config file > defaults.

use crate::cli::Cli;
use crate::error::Error;
use crate::stream::STDIO;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_NAMES: [&str; 3] = ["grammar.toml", "grammar.yaml", "grammar.yml"];
const CONFIG_ENV: &str = "GRAMMAR_CONFIG";

/// How much output a run produces. Each level suppresses strictly more
/// than the one before it; mistakes are counted at every level.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    /// Document echo and suggestions.
    #[default]
    Normal,
    /// Document echo only.
    Quiet,
    /// Nothing.
    Silent,
}

impl Verbosity {
    pub fn echoes_document(self) -> bool {
        self <= Verbosity::Quiet
    }

    pub fn prints_suggestions(self) -> bool {
        self == Verbosity::Normal
    }
}

#[derive(Debug, Default, Deserialize, Clone)]
/// Root configuration loaded from `grammar.toml|yaml`.
pub struct FileConfig {
    pub delimiter: Option<String>,
    pub comment: Option<String>,
    pub number_lines: Option<bool>,
    pub verbosity: Option<Verbosity>,
    #[serde(default)]
    pub rules: RulesCfg,
}

#[derive(Debug, Deserialize, Clone)]
/// Rule selection for the built-in engine under `[rules]`.
pub struct RulesCfg {
    /// Include the built-in rule table
    #[serde(default = "default_true")]
    pub defaults: bool,
    /// Rule ids to switch off, built-in or custom
    #[serde(default)]
    pub disable: Vec<String>,
    #[serde(default)]
    pub custom: Vec<CustomRule>,
}

impl Default for RulesCfg {
    fn default() -> Self {
        Self {
            defaults: true,
            disable: Vec::new(),
            custom: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Deserialize, Clone)]
/// A user-defined pattern rule, `[[rules.custom]]`.
pub struct CustomRule {
    pub id: String,
    pub pattern: String,
    pub message: String,
    #[serde(default)]
    pub case_insensitive: bool,
}

/// Fully-resolved settings for one run. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct Config {
    pub fix_requested: bool,
    pub number_lines: bool,
    pub verbosity: Verbosity,
    /// Stored for the comment-skipping extension; the pipeline does not read it.
    pub comment_prefixes: String,
    pub delimiter: String,
    pub input_path: String,
    pub output_path: String,
    pub suggestion_path: String,
    pub rules: RulesCfg,
    /// Config file the settings were read from, if any
    pub source: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            fix_requested: false,
            number_lines: false,
            verbosity: Verbosity::Normal,
            comment_prefixes: String::new(),
            delimiter: String::new(),
            input_path: STDIO.to_string(),
            output_path: STDIO.to_string(),
            suggestion_path: STDIO.to_string(),
            rules: RulesCfg::default(),
            source: None,
        }
    }
}

/// Walk upward from `start` looking for a config file.
///
/// Stops at the first directory holding one of `grammar.toml|yaml|yml`,
/// or at a directory containing `.git`.
pub fn discover_config(start: &Path) -> Option<PathBuf> {
    let mut cur = start;
    loop {
        for name in CONFIG_NAMES {
            let candidate = cur.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
        if cur.join(".git").exists() {
            return None;
        }
        cur = cur.parent()?;
    }
}

/// Load a `FileConfig`, choosing the parser from the file extension.
pub fn load_config(path: &Path) -> Result<FileConfig, Error> {
    let config_err = |reason: String| Error::Config {
        path: path.to_string_lossy().to_string(),
        reason,
    };
    let s = fs::read_to_string(path).map_err(|e| config_err(crate::utils::io_reason(&e)))?;
    let is_yaml = matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("yaml") | Some("yml")
    );
    if is_yaml {
        serde_yaml::from_str(&s).map_err(|e| config_err(e.to_string()))
    } else {
        toml::from_str(&s).map_err(|e| config_err(e.to_string().trim_end().to_string()))
    }
}

/// Validate operands, locate the config file and merge it with the CLI.
///
/// `start` is the directory discovery begins from (the current directory
/// for the binary).
pub fn resolve(cli: &Cli, start: &Path) -> Result<Config, Error> {
    // One input only; concatenate with `cat` for more.
    if let Some(extra) = cli.operands.get(1) {
        return Err(Error::ExtraOperand {
            operand: extra.clone(),
        });
    }
    let path = match std::env::var_os(CONFIG_ENV) {
        Some(p) if !p.is_empty() => Some(PathBuf::from(p)),
        _ => discover_config(start),
    };
    let file = match path.as_deref() {
        Some(p) => {
            log::debug!("loading config from {}", p.display());
            load_config(p)?
        }
        None => FileConfig::default(),
    };
    let mut config = merge(cli, file);
    config.source = path;
    Ok(config)
}

/// Merge CLI flags over file settings over defaults.
pub fn merge(cli: &Cli, file: FileConfig) -> Config {
    let defaults = Config::default();
    Config {
        fix_requested: cli.fix,
        number_lines: cli.number_lines || file.number_lines.unwrap_or(false),
        verbosity: cli
            .verbosity()
            .or(file.verbosity)
            .unwrap_or(defaults.verbosity),
        comment_prefixes: cli
            .comment
            .clone()
            .or(file.comment)
            .unwrap_or(defaults.comment_prefixes),
        delimiter: cli
            .delimiter
            .clone()
            .or(file.delimiter)
            .unwrap_or(defaults.delimiter),
        input_path: cli.operands.first().cloned().unwrap_or(defaults.input_path),
        output_path: cli.document_output.clone().unwrap_or(defaults.output_path),
        suggestion_path: cli
            .suggestion_output
            .clone()
            .unwrap_or(defaults.suggestion_path),
        rules: file.rules,
        source: None,
    }
}
