// AT&T tabular transducer format: line parsing and loading.
//
// One record per line, fields separated by tabs:
//   <state>\t<weight>                                    accepting state
//   <in_state>\t<out_state>\t<in_sym>\t<out_sym>\t<weight>  transition
//
// Weights are carried by the format but never interpreted here.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use crate::automaton::{Automaton, AutomatonBuilder};
use crate::{AttError, FormatIssue, StateId};

/// One parsed record of an AT&T file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttRecord<'a> {
    /// `[state, weight]`
    Accepting { state: StateId },
    /// `[in_state, out_state, in_symbol, out_symbol, weight]`
    Transition {
        source: StateId,
        target: StateId,
        input: &'a str,
        output: &'a str,
    },
}

/// Parse one line.
///
/// Surrounding tabs and line terminators are stripped first. Returns
/// `Ok(None)` for a line with nothing left on it. `line_number` is 1-based
/// and only used for error reporting.
pub fn parse_line(line: &str, line_number: usize) -> Result<Option<AttRecord<'_>>, AttError> {
    let line = line.trim_matches(|c: char| matches!(c, '\t' | '\n' | '\r'));
    if line.is_empty() {
        return Ok(None);
    }

    let fields: Vec<&str> = line.split('\t').collect();
    match fields[..] {
        [state, _weight] => Ok(Some(AttRecord::Accepting {
            state: parse_state(state, line_number)?,
        })),
        [source, target, input, output, _weight] => Ok(Some(AttRecord::Transition {
            source: parse_state(source, line_number)?,
            target: parse_state(target, line_number)?,
            input,
            output,
        })),
        _ => Err(AttError::Format {
            line: line_number,
            issue: FormatIssue::FieldCount(fields.len()),
        }),
    }
}

fn parse_state(field: &str, line_number: usize) -> Result<StateId, AttError> {
    field.trim().parse::<StateId>().map_err(|_| AttError::Format {
        line: line_number,
        issue: FormatIssue::StateId(field.to_string()),
    })
}

/// Load an automaton from buffered lines.
///
/// The whole load fails on the first malformed line; no partially filled
/// automaton is ever returned.
pub fn load<R: BufRead>(reader: R) -> Result<Automaton, AttError> {
    load_from(reader, "<stream>")
}

/// Load an automaton from a file on disk. The file is closed as soon as
/// parsing ends.
pub fn load_file(path: impl AsRef<Path>) -> Result<Automaton, AttError> {
    let path = path.as_ref();
    let origin = path.display().to_string();
    let file = File::open(path).map_err(|source| AttError::File {
        origin: origin.clone(),
        source,
    })?;
    load_from(BufReader::new(file), &origin)
}

/// Parse an automaton held in memory.
pub fn parse(text: &str) -> Result<Automaton, AttError> {
    let mut builder = AutomatonBuilder::new();
    let mut line_count = 0;
    for (index, line) in text.lines().enumerate() {
        add_record(&mut builder, line, index + 1)?;
        line_count += 1;
    }
    Ok(finish(builder, line_count))
}

fn load_from<R: BufRead>(reader: R, origin: &str) -> Result<Automaton, AttError> {
    let mut builder = AutomatonBuilder::new();
    let mut line_count = 0;
    for (index, line) in reader.lines().enumerate() {
        let line = line.map_err(|source| AttError::File {
            origin: origin.to_string(),
            source,
        })?;
        add_record(&mut builder, &line, index + 1)?;
        line_count += 1;
    }
    let automaton = finish(builder, line_count);
    tracing::debug!(origin, "automaton source closed");
    Ok(automaton)
}

fn add_record(
    builder: &mut AutomatonBuilder,
    line: &str,
    line_number: usize,
) -> Result<(), AttError> {
    match parse_line(line, line_number)? {
        Some(AttRecord::Accepting { state }) => {
            builder.add_accepting(state);
        }
        Some(AttRecord::Transition {
            source,
            target,
            input,
            output,
        }) => {
            builder.add_transition(source, target, input, output);
        }
        None => {}
    }
    Ok(())
}

fn finish(builder: AutomatonBuilder, line_count: usize) -> Automaton {
    let automaton = builder.build();
    tracing::debug!(
        lines = line_count,
        states = automaton.state_count(),
        accepting = automaton.accepting_states().len(),
        transitions = automaton.transition_count(),
        symbols = automaton.symbols().len(),
        "loaded tabular automaton"
    );
    automaton
}

impl Automaton {
    /// Load an automaton from an AT&T file. See [`load_file`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AttError> {
        load_file(path)
    }
}

impl FromStr for Automaton {
    type Err = AttError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}
