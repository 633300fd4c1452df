//! Drives one run: resolve streams, then lint and emit line by line.

use crate::config::Config;
use crate::engine::Engine;
use crate::error::{Error, OpenError};
use crate::lines::Lines;
use crate::output::Multiplexer;
use crate::pipeline::lint_line;
use crate::status::RunState;
use crate::stream::{open_input, open_output};
use std::io::{BufRead, Write};

/// Open the configured input and outputs, in that order, and process the
/// whole document. The first open failure aborts before any input is read.
pub fn run<E: Engine>(config: &Config, engine: &E) -> Result<RunState, Error> {
    let open_err = |path: &str| {
        let path = path.to_string();
        move |source: OpenError| Error::Open { path, source }
    };
    let input = open_input(&config.input_path).map_err(open_err(&config.input_path))?;
    let document = open_output(&config.output_path).map_err(open_err(&config.output_path))?;
    let suggestions =
        open_output(&config.suggestion_path).map_err(open_err(&config.suggestion_path))?;
    run_streams(config, engine, input, document, suggestions)
}

/// Process `input` against already-open output streams.
///
/// Stops at end of input or at the first fatal error; output already
/// written for earlier lines stays written.
pub fn run_streams<E, R, D, S>(
    config: &Config,
    engine: &E,
    input: R,
    document: D,
    suggestions: S,
) -> Result<RunState, Error>
where
    E: Engine,
    R: BufRead,
    D: Write,
    S: Write,
{
    let mut state = RunState::default();
    let mut mux = Multiplexer::new(config, document, suggestions);
    for record in Lines::new(input) {
        let record = record.map_err(|source| Error::Read {
            path: config.input_path.clone(),
            source,
        })?;
        let findings = lint_line(engine, &record.trimmed)?;
        log::debug!("line {}: {} finding(s)", record.number, findings.len());
        for f in &findings {
            log::trace!("line {} {}..{}: {}", record.number, f.start, f.end, f.message);
        }
        state.record(findings.len());
        mux.emit(&record, &findings)?;
    }
    Ok(state)
}
