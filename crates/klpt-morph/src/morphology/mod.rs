// Morphological analysis module

mod att;
mod kurmanji;
pub mod tag_parser;

pub use att::AttAnalyzer;
pub use kurmanji::{KMR_LATN_FILE, KurmanjiAnalyzer, parse_output};

use klpt_core::analysis::Analysis;

/// Trait for morphological analyzers.
///
/// Implementations hold an immutable transducer and allocate their
/// traversal memory per call, so `analyze` takes `&self` and one analyzer can
/// serve many threads.
pub trait Analyzer {
    /// Analyze a word and return all valid analyses.
    ///
    /// A word the analyzer does not cover yields an empty list.
    fn analyze(&self, word: &str) -> Vec<Analysis>;
}
