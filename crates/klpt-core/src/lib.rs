//! Shared types for the Kurdish Language Processing Toolkit.
//!
//! - [`analysis`] -- Morphological analysis result: an attribute map with
//!   well-known keys

pub mod analysis;

pub use analysis::Analysis;
