//! AT&T tabular finite state transducer engine.
//!
//! This crate loads transducers written in the tab-separated AT&T format
//! (as produced by Apertium `lt-print` or `hfst-fst2txt`) and computes every
//! output string reachable for an input word, following epsilon transitions
//! on the way. The transducer is used exactly as encoded: it may be
//! nondeterministic and may contain epsilon cycles.
//!
//! # Architecture
//!
//! - [`symbols`] -- Symbol interning (string to id), epsilon is id 0
//! - [`transition`] -- Transition entries and output extension
//! - [`automaton`] -- Immutable automaton model and its builder
//! - [`att`] -- Tabular text loader
//! - [`config`] -- Per-call traversal memory (live mapping, active states)
//! - [`closure`] -- Epsilon-closure over a live mapping
//! - [`step`] -- Consuming one input symbol from one active state
//! - [`analyzer`] -- Word-level driver and result extraction

pub mod analyzer;
pub mod att;
pub mod automaton;
pub mod closure;
pub mod config;
pub mod step;
pub mod symbols;
pub mod transition;

pub use analyzer::AnalysisResult;
pub use automaton::{Automaton, AutomatonBuilder};
pub use config::{LiveMap, OutputPair, TraversalConfig};

/// Identifier of an automaton state.
pub type StateId = u32;

/// Identifier of an interned symbol.
pub type SymbolId = u32;

/// Error type for loading and querying tabular transducers.
#[derive(Debug, thiserror::Error)]
pub enum AttError {
    /// The automaton source could not be opened or read.
    #[error("cannot read automaton source {origin}: {source}")]
    File {
        origin: String,
        #[source]
        source: std::io::Error,
    },
    /// A line of the automaton source is malformed.
    #[error("malformed automaton at line {line}: {issue}")]
    Format { line: usize, issue: FormatIssue },
    /// An argument passed to the analyzer is not a usable input.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// What is wrong with a malformed line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatIssue {
    #[error("expected 2 or 5 tab-separated fields, found {0}")]
    FieldCount(usize),
    #[error("state id {0:?} is not a non-negative integer")]
    StateId(String),
}
