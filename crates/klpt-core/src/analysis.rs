// Morphological analysis result type

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Attribute key constants
// ---------------------------------------------------------------------------

/// Lemma: the text before the first tag.
pub const ATTR_BASE: &str = "base";
/// Tags joined with `_`.
pub const ATTR_DESCRIPTION: &str = "description";
/// Universal Dependencies part of speech.
pub const ATTR_POS: &str = "pos";
pub const ATTR_TERMINAL_SUFFIX: &str = "terminal_suffix";
pub const ATTR_FORMATION: &str = "formation";
/// Raw transducer output the analysis was built from.
pub const ATTR_FSTOUTPUT: &str = "FSTOUTPUT";
/// Accepting state the output was read in.
pub const ATTR_STATE: &str = "STATE";

/// Result of morphological analysis: a set of key-value attribute pairs.
///
/// Keys iterate in sorted order, so printing and serializing an analysis is
/// deterministic. Serializes as a plain JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Analysis {
    attributes: BTreeMap<String, String>,
}

impl Analysis {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set an attribute value. Replaces any previous value for the same key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }

    /// Builder form of [`set`](Self::set).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Get an attribute value by key. Returns `None` if not present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_analysis_is_empty() {
        let a = Analysis::new();
        assert!(a.is_empty());
        assert_eq!(a.len(), 0);
    }

    #[test]
    fn set_and_get() {
        let mut a = Analysis::new();
        a.set(ATTR_BASE, "mal");
        assert_eq!(a.get(ATTR_BASE), Some("mal"));
        assert_eq!(a.get(ATTR_POS), None);
    }

    #[test]
    fn set_replaces_existing() {
        let mut a = Analysis::new();
        a.set(ATTR_BASE, "mal");
        a.set(ATTR_BASE, "xan\u{00ee}");
        assert_eq!(a.get(ATTR_BASE), Some("xan\u{00ee}"));
        assert_eq!(a.len(), 1);
    }

    #[test]
    fn keys_are_sorted() {
        let a = Analysis::new()
            .with(ATTR_POS, "NOUN")
            .with(ATTR_BASE, "mal")
            .with(ATTR_FSTOUTPUT, "mal<n>")
            .with(ATTR_DESCRIPTION, "n");
        let keys: Vec<&str> = a.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["FSTOUTPUT", "base", "description", "pos"]);
        assert_eq!(a.iter().next(), Some(("FSTOUTPUT", "mal<n>")));
    }

    #[test]
    fn clone_is_independent() {
        let a = Analysis::new().with(ATTR_BASE, "mal");
        let mut b = a.clone();
        b.set(ATTR_BASE, "av");
        assert_eq!(a.get(ATTR_BASE), Some("mal"));
        assert_eq!(b.get(ATTR_BASE), Some("av"));
    }

    #[test]
    fn serializes_as_flat_object() {
        let a = Analysis::new()
            .with(ATTR_BASE, "gotin")
            .with(ATTR_DESCRIPTION, "vblex_tv_pri_p1_sg")
            .with(ATTR_POS, "VERB");
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(
            json,
            r#"{"base":"gotin","description":"vblex_tv_pri_p1_sg","pos":"VERB"}"#
        );
        let back: Analysis = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
