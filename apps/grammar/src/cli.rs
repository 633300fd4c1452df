//! CLI argument parsing via `clap`.

use crate::config::Verbosity;
use crate::engine::Engine;
use clap::{ArgAction, Parser};
use owo_colors::OwoColorize;

#[derive(Parser, Debug, Default)]
#[command(
    name = "grammar",
    about = "Perform grammar checking on a text document, line by line.",
    long_about = "Perform grammar checking on a text document, line by line.\n\nWith no FILE, or when FILE is -, read standard input. The document text is \
                  echoed to the document output and suggestions are written to the suggestion output; both default to standard output.\n\n\
                  Exit status is 0 when no mistakes were found, 1 when mistakes were found or the invocation is malformed, and 127 on I/O or engine failure.",
    after_help = "Examples:\n  grammar essay.txt\n  grammar -n -d '# ' -O suggestions.txt essay.txt\n  cat essay.txt | grammar -q -o /dev/null",
    disable_version_flag = true,
    args_override_self = true
)]
/// Flags for a single grammar-checking run.
pub struct Cli {
    #[arg(
        short = 'c',
        long = "comment",
        value_name = "COMMENT",
        allow_hyphen_values = true,
        help = "Record COMMENT as comment prefix characters (lines are still checked)"
    )]
    pub comment: Option<String>,
    #[arg(
        short = 'd',
        long = "delimiter",
        value_name = "DELIMITER",
        allow_hyphen_values = true,
        help = "Start suggestion lines with DELIMITER (default: '')"
    )]
    pub delimiter: Option<String>,
    #[arg(short = 'f', long = "fix-file", alias = "fix", action = ArgAction::SetTrue, help = "Automatically apply suggestions")]
    pub fix: bool,
    #[arg(short = 'n', long = "number-lines", alias = "number", action = ArgAction::SetTrue, help = "Provide line:col number for each suggestion")]
    pub number_lines: bool,
    #[arg(short = 'o', long = "document-output", value_name = "FILE", help = "Output document text to FILE")]
    pub document_output: Option<String>,
    #[arg(short = 'O', long = "suggestion-output", value_name = "FILE", help = "Output suggestions to FILE")]
    pub suggestion_output: Option<String>,
    #[arg(short = 'q', long = "quiet", action = ArgAction::SetTrue, overrides_with = "silent", help = "Do not print suggestions")]
    pub quiet: bool,
    #[arg(short = 's', long = "silent", action = ArgAction::SetTrue, overrides_with = "quiet", help = "Do not output anything")]
    pub silent: bool,
    #[arg(short = 'v', long = "version", action = ArgAction::SetTrue, help = "Print version information and exit")]
    pub version: bool,
    /// Input document; only one is accepted
    #[arg(value_name = "FILE")]
    pub operands: Vec<String>,
}

impl Cli {
    /// Verbosity requested on the command line, if any. The later of
    /// `-q`/`-s` wins because each overrides the other.
    pub fn verbosity(&self) -> Option<Verbosity> {
        if self.silent {
            Some(Verbosity::Silent)
        } else if self.quiet {
            Some(Verbosity::Quiet)
        } else {
            None
        }
    }
}

/// Render `--version`: the program, each engine component, then licensing.
pub fn version_text<E: Engine>(program: &str, engine: &E, color: bool) -> String {
    let mut out = String::new();
    let head = format!("{} v{}", program, env!("CARGO_PKG_VERSION"));
    if color {
        out.push_str(&head.bold().to_string());
    } else {
        out.push_str(&head);
    }
    out.push('\n');
    for component in engine.components() {
        out.push_str(&format!("{} v{}\n", component.name, component.version));
    }
    out.push('\n');
    out.push_str("Copyright (C) 2024 the grammar contributors.\n");
    out.push_str("License GPLv3+: GNU GPL version 3 or later <https://gnu.org/licenses/gpl.html>.\n");
    out.push_str("This is free software: you are free to change and redistribute it.\n");
    out.push_str("There is NO WARRANTY, to the extent permitted by law.\n");
    out.push('\n');
    out.push_str("Written by the grammar contributors.\n");
    out
}
