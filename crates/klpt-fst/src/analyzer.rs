// Word-level traversal driver.
//
// The driver walks the input one symbol at a time. For every position it
// steps each active state into a fresh live mapping, so the mapping of the
// consumed position is dropped as a whole: a path that reached no successor
// dies with it, and a state that is both consumed and freshly reached in the
// same step only holds the outputs that reached it in this step.

use indexmap::IndexSet;

use crate::automaton::Automaton;
use crate::closure::epsilon_closure;
use crate::config::{LiveMap, OutputPair, TraversalConfig};
use crate::step::step;
use crate::symbols::EPSILON_SYMBOL;
use crate::{AttError, StateId, SymbolId};

/// Outcome of analyzing one word.
///
/// `groups` holds one entry per accepting state reached after the whole
/// word was consumed, each listing the distinct outputs alive there. An
/// empty `groups` means the word is not recognized; that is not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisResult {
    pub word: String,
    pub groups: Vec<Vec<OutputPair>>,
}

impl AnalysisResult {
    /// Whether at least one accepting path consumed the word.
    pub fn is_recognized(&self) -> bool {
        !self.groups.is_empty()
    }

    /// Every output string, group by group.
    pub fn outputs(&self) -> impl Iterator<Item = &str> {
        self.groups
            .iter()
            .flatten()
            .map(|pair| pair.output.as_str())
    }

    /// Every output pair, group by group.
    pub fn pairs(&self) -> impl Iterator<Item = &OutputPair> {
        self.groups.iter().flatten()
    }
}

impl Automaton {
    /// Create an empty traversal configuration for this automaton.
    pub fn new_config(&self) -> TraversalConfig {
        TraversalConfig::new()
    }

    /// Prepare `config` for traversing `symbols`.
    ///
    /// Maps every symbol to its id and seeds the live mapping with the empty
    /// output at the initial state, followed by its epsilon-closure so that
    /// paths starting with an epsilon transition are not missed.
    ///
    /// Returns `true` if every symbol is known to the automaton. Unknown
    /// symbols do not prevent traversal; no path survives them.
    pub fn prepare<S: AsRef<str>>(&self, config: &mut TraversalConfig, symbols: &[S]) -> bool {
        config.reset();
        let mut all_known = true;
        for symbol in symbols {
            let id = self.symbols().lookup(symbol.as_ref());
            all_known &= id.is_some();
            config.input.push(id);
        }
        self.seed(config);
        all_known
    }

    /// Like [`prepare`](Self::prepare), taking every `char` of `word` as one
    /// input symbol.
    pub fn prepare_word(&self, config: &mut TraversalConfig, word: &str) -> bool {
        config.reset();
        let mut all_known = true;
        let mut buf = [0u8; 4];
        for ch in word.chars() {
            let id = self.symbols().lookup(ch.encode_utf8(&mut buf));
            all_known &= id.is_some();
            config.input.push(id);
        }
        self.seed(config);
        all_known
    }

    fn seed(&self, config: &mut TraversalConfig) {
        let initial = self.initial_state();
        config.live.insert(initial, String::new());
        epsilon_closure(self, initial, &mut config.live, &mut config.active);
    }

    /// Consume the prepared input and return the accepting groups.
    ///
    /// Groups come in the order their accepting states were first reached;
    /// outputs inside a group in the order they were produced.
    pub fn traverse(&self, config: &mut TraversalConfig) -> Vec<Vec<OutputPair>> {
        while config.position < config.input.len() {
            let Some(symbol) = config.input[config.position] else {
                config.live.clear();
                config.active.clear();
                break;
            };
            self.advance(config, symbol);
            if config.active.is_empty() {
                break;
            }
        }

        if config.active.is_empty() {
            return Vec::new();
        }

        // Trailing epsilon paths after the last symbol.
        let active: Vec<StateId> = config.active.iter().copied().collect();
        for state in active {
            epsilon_closure(self, state, &mut config.live, &mut config.active);
        }

        self.accepting_groups(&config.live)
    }

    fn advance(&self, config: &mut TraversalConfig, symbol: SymbolId) {
        let mut next = LiveMap::new();
        let mut reached = IndexSet::new();
        for &state in &config.active {
            step(self, state, symbol, &config.live, &mut next, &mut reached);
        }

        tracing::trace!(
            position = config.position,
            symbol = self.symbols().as_str(symbol),
            active = reached.len(),
            live = next.len(),
            "consumed input symbol"
        );

        config.live = next;
        config.active = reached;
        config.position += 1;
    }

    fn accepting_groups(&self, live: &LiveMap) -> Vec<Vec<OutputPair>> {
        live.iter()
            .filter(|&(state, outputs)| self.is_accepting(state) && !outputs.is_empty())
            .map(|(state, _)| live.pairs(state))
            .collect()
    }

    /// Analyze a word, taking every `char` as one input symbol.
    ///
    /// Never fails: an unanalyzable word yields an empty `groups` list. Each
    /// call owns its traversal memory, so concurrent calls on one shared
    /// automaton do not interfere.
    pub fn analyze(&self, word: &str) -> AnalysisResult {
        let mut config = self.new_config();
        self.prepare_word(&mut config, word);
        let groups = self.traverse(&mut config);
        AnalysisResult {
            word: word.to_string(),
            groups,
        }
    }

    /// Analyze an explicit sequence of input symbols (for automata whose
    /// input side uses multi-character symbols).
    ///
    /// Fails with [`AttError::InvalidArgument`] if a symbol is the epsilon
    /// marker, which can never be consumed as input.
    pub fn analyze_symbols<S: AsRef<str>>(&self, symbols: &[S]) -> Result<AnalysisResult, AttError> {
        if let Some(position) = symbols.iter().position(|s| s.as_ref() == EPSILON_SYMBOL) {
            return Err(AttError::InvalidArgument(format!(
                "input symbol at position {position} is the epsilon marker {EPSILON_SYMBOL}"
            )));
        }

        let mut config = self.new_config();
        self.prepare(&mut config, symbols);
        let groups = self.traverse(&mut config);
        Ok(AnalysisResult {
            word: symbols.iter().map(|s| s.as_ref()).collect(),
            groups,
        })
    }
}
