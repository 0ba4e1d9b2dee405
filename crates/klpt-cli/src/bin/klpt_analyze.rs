// klpt-analyze: Morphological analysis of Kurmanji words.
//
// Analyzes the words given as arguments, or reads words from stdin (one per
// line), and prints every analysis of each word.
//
// Usage:
//   klpt-analyze [-f FILE | -d DATA_PATH] [--raw] [--json] [-v] [WORD...]
//
// Options:
//   -f, --file FILE        Tabular transducer file
//   -d, --data-path DIR    Directory containing kmr-Latn.att
//   --raw                  Print raw transducer outputs and accepting states
//   --json                 Print one JSON object per word
//   -v, --verbose          Debug logging on stderr
//   -h, --help             Print help

use std::io::{self, BufRead, Write};

use klpt_morph::{Analyzer, AttAnalyzer, KMR_LATN_FILE, KurmanjiAnalyzer};

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (data_args, mut args) =
        klpt_cli::parse_data_args(&args).unwrap_or_else(|e| klpt_cli::fatal(&e));

    if klpt_cli::wants_help(&args) {
        println!("klpt-analyze: Morphological analysis of Kurmanji words.");
        println!();
        println!("Usage: klpt-analyze [-f FILE | -d DATA_PATH] [--raw] [--json] [-v] [WORD...]");
        println!();
        println!("If WORD arguments are given, analyzes each word.");
        println!("Otherwise reads words from stdin (one per line).");
        println!();
        println!("Options:");
        println!("  -f, --file FILE        Tabular transducer file");
        println!("  -d, --data-path DIR    Directory containing {KMR_LATN_FILE}");
        println!("  --raw                  Print raw transducer outputs and accepting states");
        println!("  --json                 Print one JSON object per word");
        println!("  -v, --verbose          Debug logging on stderr");
        println!("  -h, --help             Print this help");
        println!();
        println!("Without -f/-d the file is looked up in ${}, ~/.klpt/data,", klpt_cli::DATA_PATH_ENV);
        println!("/usr/share/klpt/data, /usr/local/share/klpt/data and the current directory.");
        return;
    }

    let raw = klpt_cli::take_flag(&mut args, &["--raw"]);
    let json = klpt_cli::take_flag(&mut args, &["--json"]);
    let verbose = klpt_cli::take_flag(&mut args, &["-v", "--verbose"]);
    klpt_cli::init_logging(verbose);

    if let Some(unknown) = args.iter().find(|a| a.starts_with('-')) {
        klpt_cli::fatal(&format!("unknown option {unknown}"));
    }

    let automaton = klpt_cli::load_automaton(&data_args, KMR_LATN_FILE)
        .unwrap_or_else(|e| klpt_cli::fatal(&e));
    let analyzer: Box<dyn Analyzer> = if raw {
        Box::new(AttAnalyzer::new(automaton))
    } else {
        Box::new(KurmanjiAnalyzer::new(automaton))
    };

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());

    let mut analyze_word = |word: &str| -> io::Result<()> {
        let analyses = analyzer.analyze(word);
        if json {
            writeln!(out, "{}", klpt_cli::analyses_json(word, &analyses))
        } else {
            klpt_cli::write_analyses(&mut out, word, &analyses)
        }
    };

    let result = if args.is_empty() {
        io::stdin().lock().lines().try_for_each(|line| {
            let line = line?;
            let word = line.trim();
            if word.is_empty() {
                return Ok(());
            }
            analyze_word(word)
        })
    } else {
        args.iter().try_for_each(|word| analyze_word(word))
    };

    if let Err(e) = result.and_then(|()| out.flush()) {
        if e.kind() != io::ErrorKind::BrokenPipe {
            klpt_cli::fatal(&e.to_string());
        }
    }
}
