// Quick test: load a tabular transducer and print the analyses of a few words.
//
//   cargo run -p klpt-fst --example att_lookup -- path/to/kmr-Latn.att mal malê
use std::process;

use klpt_fst::Automaton;

fn main() {
    let mut args = std::env::args().skip(1);
    let Some(path) = args.next() else {
        eprintln!("usage: att_lookup FILE.att [WORD...]");
        process::exit(2);
    };

    let automaton = match Automaton::from_path(&path) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };
    println!(
        "Loaded {path}: {} states, {} accepting, {} transitions, {} symbols",
        automaton.state_count(),
        automaton.accepting_states().len(),
        automaton.transition_count(),
        automaton.symbols().len(),
    );

    let mut words: Vec<String> = args.collect();
    if words.is_empty() {
        words = ["mal", "mal\u{00ea}", "dib\u{00ea}jim", "asdfxyz"]
            .map(String::from)
            .to_vec();
    }

    for word in &words {
        let result = automaton.analyze(word);
        if !result.is_recognized() {
            println!("\n{word:15} → (no match)");
            continue;
        }
        println!("\n{word:15} → {} analyses", result.pairs().count());
        for (i, pair) in result.pairs().enumerate().take(5) {
            println!("  [{i}] {} (state {})", pair.output, pair.state);
        }
    }
}
