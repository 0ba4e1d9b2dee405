// Kurmanji (Latin script) morphological analyzer.
//
// Runs the Apertium Kurmanji transducer and splits every output into lemma
// and tag description:
//   gotin<vblex><tv><pri><p1><sg>  ->  base=gotin description=vblex_tv_pri_p1_sg

use std::io::BufRead;
use std::path::Path;
use std::sync::Arc;

use hashbrown::HashSet;
use klpt_core::analysis::{
    ATTR_BASE, ATTR_DESCRIPTION, ATTR_FORMATION, ATTR_FSTOUTPUT, ATTR_POS, ATTR_TERMINAL_SUFFIX,
    Analysis,
};
use klpt_fst::Automaton;

use super::Analyzer;
use super::tag_parser::{description, pos_of, split_tags, strip_marker};
use crate::MorphError;

/// Default file name of the Kurmanji Latin-script transducer.
pub const KMR_LATN_FILE: &str = "kmr-Latn.att";

/// Morphological analyzer for Kurmanji in Latin script.
#[derive(Debug, Clone)]
pub struct KurmanjiAnalyzer {
    automaton: Arc<Automaton>,
}

impl KurmanjiAnalyzer {
    pub fn new(automaton: Arc<Automaton>) -> Self {
        Self { automaton }
    }

    /// Load the transducer from a tabular file (normally `kmr-Latn.att`).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, MorphError> {
        let path = path.as_ref();
        let automaton = Automaton::from_path(path)?;
        tracing::debug!(path = %path.display(), "loaded Kurmanji transducer");
        Ok(Self::new(Arc::new(automaton)))
    }

    /// Load the transducer from any buffered reader.
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self, MorphError> {
        Ok(Self::new(Arc::new(klpt_fst::att::load(reader)?)))
    }

    pub fn automaton(&self) -> &Arc<Automaton> {
        &self.automaton
    }
}

/// Build the attribute map for one raw transducer output.
///
/// `terminal_suffix` and `formation` are always present and empty: the
/// Apertium tag set carries no equivalent of those fields.
pub fn parse_output(output: &str) -> Analysis {
    let (base, tags) = split_tags(strip_marker(output));
    Analysis::new()
        .with(ATTR_BASE, base)
        .with(ATTR_DESCRIPTION, description(&tags))
        .with(ATTR_POS, pos_of(&tags))
        .with(ATTR_TERMINAL_SUFFIX, "")
        .with(ATTR_FORMATION, "")
        .with(ATTR_FSTOUTPUT, output)
}

impl Analyzer for KurmanjiAnalyzer {
    /// One analysis per distinct output string, in the order the transducer
    /// produced them.
    fn analyze(&self, word: &str) -> Vec<Analysis> {
        let result = self.automaton.analyze(word);
        let mut seen = HashSet::new();
        let analyses: Vec<Analysis> = result
            .outputs()
            .filter(|output| seen.insert(*output))
            .map(parse_output)
            .collect();
        tracing::trace!(word, count = analyses.len(), "analyzed");
        analyses
    }
}
