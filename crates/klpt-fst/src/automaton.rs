// Immutable automaton model and its builder.

use hashbrown::{HashMap, HashSet};

use crate::symbols::{EPSILON, EPSILON_SYMBOL, SymbolTable};
use crate::transition::Transition;
use crate::{StateId, SymbolId};

/// Initial state of every automaton.
pub const INITIAL_STATE: StateId = 0;

/// A loaded finite state transducer.
///
/// Holds the state set, the accepting states, the alphabet and the
/// transition table keyed by `(source state, input symbol)`. There is no way
/// to mutate an automaton after [`AutomatonBuilder::build`], so one instance
/// can be shared (for example behind an `Arc`) by any number of concurrent
/// analyses.
#[derive(Clone, PartialEq, Eq)]
pub struct Automaton {
    symbols: SymbolTable,
    states: HashSet<StateId>,
    accepting: HashSet<StateId>,
    alphabet: HashSet<SymbolId>,
    transitions: HashMap<(StateId, SymbolId), Vec<Transition>>,
    transition_count: usize,
}

impl std::fmt::Debug for Automaton {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Automaton")
            .field("state_count", &self.states.len())
            .field("accepting_count", &self.accepting.len())
            .field("symbol_count", &self.symbols.len())
            .field("transition_count", &self.transition_count)
            .finish()
    }
}

impl Automaton {
    /// Transitions leaving `state` on `symbol`, in file order.
    ///
    /// Returns an empty slice when there are none.
    pub fn transitions_from(&self, state: StateId, symbol: SymbolId) -> &[Transition] {
        self.transitions
            .get(&(state, symbol))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Like [`transitions_from`](Self::transitions_from), with the symbol
    /// given as text.
    pub fn transitions_from_symbol(&self, state: StateId, symbol: &str) -> &[Transition] {
        match self.symbols.lookup(symbol) {
            Some(id) => self.transitions_from(state, id),
            None => &[],
        }
    }

    /// Whether `state` is accepting.
    #[inline]
    pub fn is_accepting(&self, state: StateId) -> bool {
        self.accepting.contains(&state)
    }

    /// The initial state (always 0).
    #[inline]
    pub const fn initial_state(&self) -> StateId {
        INITIAL_STATE
    }

    /// Id of the epsilon symbol.
    #[inline]
    pub const fn epsilon(&self) -> SymbolId {
        EPSILON
    }

    /// Textual form of the epsilon symbol.
    #[inline]
    pub const fn epsilon_symbol(&self) -> &'static str {
        EPSILON_SYMBOL
    }

    /// Access the symbol table.
    pub fn symbols(&self) -> &SymbolTable {
        &self.symbols
    }

    /// All states.
    pub fn states(&self) -> &HashSet<StateId> {
        &self.states
    }

    /// Accepting states.
    pub fn accepting_states(&self) -> &HashSet<StateId> {
        &self.accepting
    }

    /// Ids of every symbol seen in a transition record, input or output.
    pub fn alphabet(&self) -> &HashSet<SymbolId> {
        &self.alphabet
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    pub fn transition_count(&self) -> usize {
        self.transition_count
    }
}

/// Accumulates states and transitions, then freezes them into an
/// [`Automaton`].
#[derive(Debug, Default)]
pub struct AutomatonBuilder {
    symbols: SymbolTable,
    states: HashSet<StateId>,
    accepting: HashSet<StateId>,
    alphabet: HashSet<SymbolId>,
    transitions: HashMap<(StateId, SymbolId), Vec<Transition>>,
    transition_count: usize,
}

impl AutomatonBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare `state` accepting (and a member of the state set).
    pub fn add_accepting(&mut self, state: StateId) -> &mut Self {
        self.states.insert(state);
        self.accepting.insert(state);
        self
    }

    /// Add a transition from `source` to `target` that consumes `input` and
    /// emits `output`. Both symbols join the alphabet.
    ///
    /// Transitions sharing a `(source, input)` key keep their insertion order.
    pub fn add_transition(
        &mut self,
        source: StateId,
        target: StateId,
        input: &str,
        output: &str,
    ) -> &mut Self {
        let input = self.symbols.intern(input);
        let output = self.symbols.intern(output);
        self.states.insert(source);
        self.states.insert(target);
        self.alphabet.insert(input);
        self.alphabet.insert(output);
        self.transitions
            .entry((source, input))
            .or_default()
            .push(Transition::new(output, target));
        self.transition_count += 1;
        self
    }

    /// Freeze the accumulated data. The initial state is always a member of
    /// the resulting state set, even when nothing mentions it.
    pub fn build(mut self) -> Automaton {
        self.states.insert(INITIAL_STATE);
        Automaton {
            symbols: self.symbols,
            states: self.states,
            accepting: self.accepting,
            alphabet: self.alphabet,
            transitions: self.transitions,
            transition_count: self.transition_count,
        }
    }
}
