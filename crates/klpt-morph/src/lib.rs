//! Morphological analysis for Kurdish on top of [`klpt_fst`].
//!
//! The transducer engine returns raw output strings such as
//! `gotin<vblex><tv><pri><p1><sg>`. This crate turns them into
//! [`klpt_core::Analysis`] attribute maps.

pub mod morphology;

pub use morphology::{Analyzer, AttAnalyzer, KMR_LATN_FILE, KurmanjiAnalyzer};

/// Error type for building analyzers.
#[derive(Debug, thiserror::Error)]
pub enum MorphError {
    #[error(transparent)]
    Automaton(#[from] klpt_fst::AttError),
}
