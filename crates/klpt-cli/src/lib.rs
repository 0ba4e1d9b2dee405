// klpt-cli: shared utilities for CLI tools.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;

use klpt_core::Analysis;
use klpt_fst::Automaton;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

pub use klpt_morph::KMR_LATN_FILE;

/// Environment variable naming a data directory or the transducer file.
pub const DATA_PATH_ENV: &str = "KLPT_DATA_PATH";

/// Where the transducer should come from, as given on the command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataArgs {
    /// `-f/--file`: the transducer file itself.
    pub file: Option<String>,
    /// `-d/--data-path`: a directory containing the transducer file.
    pub data_path: Option<String>,
}

/// Find and load the transducer.
///
/// An explicit `--file` is used as is. Otherwise `file_name` is searched
/// for in:
/// 1. `--data-path` (if provided)
/// 2. `KLPT_DATA_PATH` (a directory, or the file itself)
/// 3. `~/.klpt/data`
/// 4. `/usr/share/klpt/data`, `/usr/local/share/klpt/data`
/// 5. Current working directory
pub fn load_automaton(args: &DataArgs, file_name: &str) -> Result<Arc<Automaton>, String> {
    let path = find_automaton(args, file_name)?;
    tracing::debug!(path = %path.display(), "loading transducer");
    Automaton::from_path(&path)
        .map(Arc::new)
        .map_err(|e| e.to_string())
}

/// Resolve the transducer path without loading it.
pub fn find_automaton(args: &DataArgs, file_name: &str) -> Result<PathBuf, String> {
    if let Some(file) = &args.file {
        let path = PathBuf::from(file);
        return if path.is_file() {
            Ok(path)
        } else {
            Err(format!("{} is not a file", path.display()))
        };
    }

    let env_path = std::env::var(DATA_PATH_ENV).ok();
    let candidates = build_candidates(
        args.data_path.as_deref(),
        env_path.as_deref(),
        home_dir().as_deref(),
        std::env::current_dir().ok().as_deref(),
        file_name,
    );

    for candidate in &candidates {
        tracing::trace!(candidate = %candidate.display(), "probing");
        if candidate.is_file() {
            return Ok(candidate.clone());
        }
    }

    Err(format!(
        "could not find {} in any of the search paths:\n{}",
        file_name,
        candidates
            .iter()
            .map(|p| format!("  - {}", p.display()))
            .collect::<Vec<_>>()
            .join("\n")
    ))
}

/// Build the list of candidate files, in search order.
fn build_candidates(
    data_path: Option<&str>,
    env_path: Option<&str>,
    home: Option<&Path>,
    cwd: Option<&Path>,
    file_name: &str,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = data_path {
        paths.push(Path::new(p).join(file_name));
    }

    // The variable may name the file directly.
    if let Some(p) = env_path {
        let p = PathBuf::from(p);
        if p.file_name().is_some_and(|name| name == file_name) {
            paths.push(p.clone());
        }
        paths.push(p.join(file_name));
    }

    if let Some(home) = home {
        paths.push(home.join(".klpt").join("data").join(file_name));
    }

    paths.push(Path::new("/usr/share/klpt/data").join(file_name));
    paths.push(Path::new("/usr/local/share/klpt/data").join(file_name));

    if let Some(cwd) = cwd {
        paths.push(cwd.join(file_name));
    }

    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME").ok().map(PathBuf::from)
}

/// Parse `-f/--file` and `-d/--data-path` (with a separate or `=` value)
/// from command line args.
///
/// Returns `(data_args, remaining_args)`.
pub fn parse_data_args(args: &[String]) -> Result<(DataArgs, Vec<String>), String> {
    let mut data = DataArgs::default();
    let mut remaining = Vec::new();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        if let Some(val) = arg.strip_prefix("--file=") {
            data.file = Some(val.to_string());
        } else if let Some(val) = arg.strip_prefix("--data-path=") {
            data.data_path = Some(val.to_string());
        } else if matches!(arg.as_str(), "-f" | "--file" | "-d" | "--data-path") {
            let val = iter
                .next()
                .ok_or_else(|| format!("{arg} requires a value"))?
                .clone();
            if matches!(arg.as_str(), "-f" | "--file") {
                data.file = Some(val);
            } else {
                data.data_path = Some(val);
            }
        } else {
            remaining.push(arg.clone());
        }
    }

    Ok((data, remaining))
}

/// Remove every occurrence of the given flags from `args`. Returns whether
/// any was present.
pub fn take_flag(args: &mut Vec<String>, names: &[&str]) -> bool {
    let before = args.len();
    args.retain(|a| !names.contains(&a.as_str()));
    args.len() != before
}

/// Install the stderr log subscriber. `RUST_LOG` wins when set; otherwise
/// the level is `warn`, or `debug` with `verbose`.
pub fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    // A global subscriber may already be installed (tests, embedding
    // binaries); keeping it is fine.
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Write the analyses of one word as indented `key=value` lines.
pub fn write_analyses(out: &mut impl Write, word: &str, analyses: &[Analysis]) -> io::Result<()> {
    if analyses.is_empty() {
        return writeln!(out, "{word}: (no analysis)");
    }
    writeln!(out, "{word}:")?;
    for (i, analysis) in analyses.iter().enumerate() {
        writeln!(out, "  Analysis {}:", i + 1)?;
        for (key, val) in analysis.iter() {
            writeln!(out, "    {key}={val}")?;
        }
    }
    Ok(())
}

/// The analyses of one word as a JSON object `{"word": .., "analyses": [..]}`.
pub fn analyses_json(word: &str, analyses: &[Analysis]) -> serde_json::Value {
    serde_json::json!({ "word": word, "analyses": analyses })
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}

/// Check if `--help` or `-h` is in the args.
pub fn wants_help(args: &[String]) -> bool {
    args.iter().any(|a| a == "--help" || a == "-h")
}
