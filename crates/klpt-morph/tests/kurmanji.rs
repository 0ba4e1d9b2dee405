//! Kurmanji analyzer against the `kmr-toy.att` fixture shared with klpt-fst.

use std::path::PathBuf;
use std::sync::Arc;

use klpt_core::analysis::{ATTR_BASE, ATTR_DESCRIPTION, ATTR_FSTOUTPUT, ATTR_POS, ATTR_STATE};
use klpt_morph::{Analyzer, AttAnalyzer, KurmanjiAnalyzer, MorphError};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../klpt-fst/tests/data/kmr-toy.att")
}

fn kurmanji() -> KurmanjiAnalyzer {
    KurmanjiAnalyzer::from_path(fixture()).unwrap_or_else(|e| panic!("load failed: {e}"))
}

#[test]
fn noun_nominative() {
    let analyses = kurmanji().analyze("mal");
    assert_eq!(analyses.len(), 1);
    let a = &analyses[0];
    assert_eq!(a.get(ATTR_BASE), Some("mal"));
    assert_eq!(a.get(ATTR_DESCRIPTION), Some("n_sg_nom"));
    assert_eq!(a.get(ATTR_POS), Some("NOUN"));
}

#[test]
fn ambiguous_noun_form() {
    let analyses = kurmanji().analyze("mal\u{00ea}");
    let descriptions: Vec<_> = analyses
        .iter()
        .map(|a| a.get(ATTR_DESCRIPTION).unwrap_or_default())
        .collect();
    assert_eq!(descriptions, vec!["n_sg_obl", "n_sg_con"]);
    assert!(analyses.iter().all(|a| a.get(ATTR_BASE) == Some("mal")));
}

#[test]
fn verb_lemma_differs_from_surface() {
    let analyses = kurmanji().analyze("dib\u{00ea}jim");
    assert_eq!(analyses.len(), 1);
    assert_eq!(analyses[0].get(ATTR_BASE), Some("gotin"));
    assert_eq!(analyses[0].get(ATTR_DESCRIPTION), Some("vblex_tv_pri_p1_sg"));
    assert_eq!(analyses[0].get(ATTR_POS), Some("VERB"));
}

#[test]
fn two_readings_in_one_state() {
    let analyses = kurmanji().analyze("ji");
    let pos: Vec<_> = analyses
        .iter()
        .map(|a| a.get(ATTR_POS).unwrap_or_default())
        .collect();
    assert_eq!(pos, vec!["ADP", "SCONJ"]);
}

#[test]
fn unanalyzable_word_is_empty() {
    let analyzer = kurmanji();
    assert!(analyzer.analyze("xan\u{00ee}").is_empty());
    assert!(analyzer.analyze("").is_empty());
}

#[test]
fn analyses_serialize_to_json() {
    let analyses = kurmanji().analyze("\u{00fb}");
    let json = serde_json::to_value(&analyses).unwrap();
    assert_eq!(
        json,
        serde_json::json!([{
            "FSTOUTPUT": "\u{00fb}<cnjcoo>",
            "base": "\u{00fb}",
            "description": "cnjcoo",
            "formation": "",
            "pos": "CCONJ",
            "terminal_suffix": "",
        }])
    );
}

#[test]
fn analyzers_share_one_automaton() {
    let kurmanji = kurmanji();
    let raw = AttAnalyzer::new(Arc::clone(kurmanji.automaton()));
    let raw_analyses = raw.analyze("malan");
    assert_eq!(raw_analyses.len(), 1);
    assert_eq!(raw_analyses[0].get(ATTR_FSTOUTPUT), Some("mal<n><pl><obl>"));
    assert_eq!(raw_analyses[0].get(ATTR_STATE), Some("11"));
    assert_eq!(
        kurmanji.analyze("malan")[0].get(ATTR_FSTOUTPUT),
        raw_analyses[0].get(ATTR_FSTOUTPUT)
    );
}

#[test]
fn missing_file_is_reported() {
    let err = KurmanjiAnalyzer::from_path(fixture().with_file_name("nope.att")).unwrap_err();
    assert!(matches!(err, MorphError::Automaton(klpt_fst::AttError::File { .. })));
    assert!(err.to_string().contains("nope.att"));
}

#[test]
fn analyzer_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<KurmanjiAnalyzer>();

    let analyzer = kurmanji();
    std::thread::scope(|scope| {
        let a = scope.spawn(|| analyzer.analyze("mal\u{00ea}").len());
        let b = scope.spawn(|| analyzer.analyze("ji").len());
        assert_eq!(a.join().unwrap(), 2);
        assert_eq!(b.join().unwrap(), 2);
    });
}
