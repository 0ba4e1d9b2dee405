// Pure functions for parsing transducer output tags.
//
// The Apertium Kurmanji transducer produces a lemma followed by bracketed
// tags, e.g.:
//   gotin<vblex><tv><pri><p1><sg>
//
// Some tabular dumps prefix every output with an `@...@` marker. This module
// extracts the lemma, the tag list and the part of speech without requiring
// a transducer, so the functions are unit-testable.

/// Drop an optional `@...@` prefix marker: everything up to and including the
/// last `@`. Strings without `@` are returned unchanged.
pub fn strip_marker(output: &str) -> &str {
    match output.rfind('@') {
        Some(i) => &output[i + 1..],
        None => output,
    }
}

/// Split an output into its base (text before the first `<`) and its tag
/// labels in order. Text outside brackets after the base is ignored, as is
/// an unterminated trailing `<`.
pub fn split_tags(output: &str) -> (&str, Vec<&str>) {
    let Some(start) = output.find('<') else {
        return (output, Vec::new());
    };
    let base = &output[..start];
    let mut tags = Vec::new();
    let mut rest = &output[start..];
    while let Some(open) = rest.find('<') {
        let after = &rest[open + 1..];
        let Some(close) = after.find('>') else {
            break;
        };
        tags.push(&after[..close]);
        rest = &after[close + 1..];
    }
    (base, tags)
}

/// Tags joined with `_`, e.g. `vblex_tv_pri_p1_sg`.
pub fn description(tags: &[&str]) -> String {
    tags.join("_")
}

/// Map an Apertium part-of-speech tag to its Universal Dependencies
/// counterpart.
pub fn lookup_pos(tag: &str) -> Option<&'static str> {
    match tag {
        "n" => Some("NOUN"),
        "np" => Some("PROPN"),
        "vblex" => Some("VERB"),
        "vaux" | "vbser" | "vbhaver" | "vbmod" => Some("AUX"),
        "adj" => Some("ADJ"),
        "adv" => Some("ADV"),
        "prn" => Some("PRON"),
        "num" => Some("NUM"),
        "pr" | "post" => Some("ADP"),
        "cnjcoo" => Some("CCONJ"),
        "cnjsub" => Some("SCONJ"),
        "det" => Some("DET"),
        "ij" => Some("INTJ"),
        "part" => Some("PART"),
        _ => None,
    }
}

/// Part of speech of a tag list, read from its first tag. Empty when the
/// first tag has no mapping.
pub fn pos_of(tags: &[&str]) -> &'static str {
    tags.first().and_then(|tag| lookup_pos(tag)).unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strip_marker_variants() {
        assert_eq!(strip_marker("@0@mal<n>"), "mal<n>");
        assert_eq!(strip_marker("@x@@y@ji<pr>"), "ji<pr>");
        assert_eq!(strip_marker("mal<n>"), "mal<n>");
        assert_eq!(strip_marker("@"), "");
        assert_eq!(strip_marker(""), "");
    }

    #[test]
    fn split_verb() {
        let (base, tags) = split_tags("gotin<vblex><tv><pri><p1><sg>");
        assert_eq!(base, "gotin");
        assert_eq!(tags, vec!["vblex", "tv", "pri", "p1", "sg"]);
    }

    #[test]
    fn split_without_tags() {
        assert_eq!(split_tags("mal"), ("mal", Vec::new()));
        assert_eq!(split_tags(""), ("", Vec::new()));
    }

    #[test]
    fn split_ignores_text_between_tags() {
        let (base, tags) = split_tags("av<n>+<sg>x<obl");
        assert_eq!(base, "av");
        assert_eq!(tags, vec!["n", "sg"]);
    }

    #[test]
    fn split_keeps_non_ascii_base() {
        let (base, tags) = split_tags("xan\u{00ee}<n><f>");
        assert_eq!(base, "xan\u{00ee}");
        assert_eq!(tags, vec!["n", "f"]);
    }

    #[test]
    fn description_joins_with_underscore() {
        assert_eq!(description(&["vblex", "tv", "pri"]), "vblex_tv_pri");
        assert_eq!(description(&["n"]), "n");
        assert_eq!(description(&[]), "");
    }

    #[test]
    fn pos_mapping() {
        assert_eq!(lookup_pos("n"), Some("NOUN"));
        assert_eq!(lookup_pos("vblex"), Some("VERB"));
        assert_eq!(lookup_pos("cnjsub"), Some("SCONJ"));
        assert_eq!(lookup_pos("sg"), None);
        assert_eq!(pos_of(&["vblex", "tv"]), "VERB");
        assert_eq!(pos_of(&["pr"]), "ADP");
        assert_eq!(pos_of(&["sg", "pr"]), "");
        assert_eq!(pos_of(&["sg", "obl"]), "");
        assert_eq!(pos_of(&[]), "");
    }
}
