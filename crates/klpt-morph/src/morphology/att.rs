// Generic tabular transducer analyzer.
//
// A thin wrapper around an automaton. Unlike the Kurmanji analyzer, this one
// does no parsing: it reports the raw output and accepting state of every
// analysis.

use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use klpt_core::analysis::{ATTR_FSTOUTPUT, ATTR_STATE, Analysis};
use klpt_fst::Automaton;

use super::Analyzer;
use crate::MorphError;

/// Language-agnostic analyzer over a tabular transducer.
#[derive(Debug, Clone)]
pub struct AttAnalyzer {
    automaton: Arc<Automaton>,
}

impl AttAnalyzer {
    pub fn new(automaton: Arc<Automaton>) -> Self {
        Self { automaton }
    }

    /// Load the transducer from a tabular file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MorphError> {
        Ok(Self::new(Arc::new(Automaton::from_path(path)?)))
    }

    /// Load the transducer from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MorphError> {
        Ok(Self::new(Arc::new(klpt_fst::att::load(reader)?)))
    }

    pub fn automaton(&self) -> &Arc<Automaton> {
        &self.automaton
    }
}

impl Analyzer for AttAnalyzer {
    /// One analysis per output string, carrying `FSTOUTPUT` and `STATE`.
    fn analyze(&self, word: &str) -> Vec<Analysis> {
        self.automaton
            .analyze(word)
            .pairs()
            .map(|pair| {
                Analysis::new()
                    .with(ATTR_FSTOUTPUT, pair.output.as_str())
                    .with(ATTR_STATE, pair.state.to_string())
            })
            .collect()
    }
}
