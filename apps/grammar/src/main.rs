//! Grammar CLI binary entry point.
//! Parses flags, resolves configuration and runs the line pipeline.

use clap::error::ErrorKind;
use clap::Parser;
use grammar::cli::{self, Cli};
use grammar::engine::rules::RuleEngine;
use grammar::{config, runner, utils, Error, ExitStatus, RunState};
use std::path::{Path, PathBuf};
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("GRAMMAR_LOG", "warn"))
        .init();
    let program = utils::program_name();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let status = match err.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitStatus::Clean,
                _ => ExitStatus::Usage,
            };
            let _ = err.print();
            process::exit(status.code());
        }
    };
    if cli.version {
        print!(
            "{}",
            cli::version_text(&program, &RuleEngine::default(), utils::use_colors())
        );
        process::exit(ExitStatus::Clean.code());
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let status = match run(&cli, &cwd) {
        Ok(state) => state.exit_status(),
        Err(err) => {
            eprintln!("{}: {}", program, err);
            err.exit_status()
        }
    };
    process::exit(status.code());
}

fn run(cli: &Cli, cwd: &Path) -> Result<RunState, Error> {
    let config = config::resolve(cli, cwd)?;
    log::debug!("resolved config: {:?}", config);
    if config.fix_requested {
        log::warn!("--fix-file is accepted but suggestions are not applied automatically");
    }
    let engine = RuleEngine::new(&config.rules)?;
    let state = runner::run(&config, &engine)?;
    log::debug!("finished with {} mistake(s)", state.mistakes());
    Ok(state)
}
