// Per-call traversal memory.
//
// Everything the driver mutates while walking a word lives here. A
// configuration is created per analysis (or reset between analyses) and is
// never shared, so the automaton itself stays read-only.

use indexmap::{IndexMap, IndexSet};

use crate::{StateId, SymbolId};

/// An output accumulated along one path, paired with the state the path is
/// currently in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OutputPair {
    pub output: String,
    pub state: StateId,
}

impl OutputPair {
    pub fn new(output: impl Into<String>, state: StateId) -> Self {
        Self {
            output: output.into(),
            state,
        }
    }
}

/// Live mapping from a state to the outputs of every path alive in it.
///
/// Outputs are deduplicated by value per state. Both states and outputs keep
/// insertion order, so results come out in branch-exploration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiveMap {
    entries: IndexMap<StateId, IndexSet<String>>,
}

impl LiveMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make sure `state` has an entry, possibly without outputs.
    pub fn ensure(&mut self, state: StateId) {
        self.entries.entry(state).or_default();
    }

    /// Record `output` as alive at `state`. Returns `false` if it already was.
    pub fn insert(&mut self, state: StateId, output: String) -> bool {
        self.entries.entry(state).or_default().insert(output)
    }

    /// Whether `state` has an entry.
    pub fn contains(&self, state: StateId) -> bool {
        self.entries.contains_key(&state)
    }

    /// Outputs alive at `state`, in insertion order.
    pub fn outputs(&self, state: StateId) -> impl Iterator<Item = &str> {
        self.entries
            .get(&state)
            .into_iter()
            .flat_map(|outputs| outputs.iter().map(String::as_str))
    }

    /// Number of outputs alive at `state`.
    pub fn output_count(&self, state: StateId) -> usize {
        self.entries.get(&state).map_or(0, IndexSet::len)
    }

    /// Number of states with an entry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries as `(state, outputs)` in first-reached order.
    pub fn iter(&self) -> impl Iterator<Item = (StateId, &IndexSet<String>)> {
        self.entries.iter().map(|(&state, outputs)| (state, outputs))
    }

    /// Outputs alive at `state` as [`OutputPair`]s, in insertion order.
    pub fn pairs(&self, state: StateId) -> Vec<OutputPair> {
        self.outputs(state)
            .map(|output| OutputPair::new(output, state))
            .collect()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

/// Working memory for one traversal.
///
/// Mirrors the `prepare` + traverse split: [`Automaton::prepare`] fills
/// `input` and seeds the live mapping, [`Automaton::traverse`] consumes it.
///
/// [`Automaton::prepare`]: crate::Automaton::prepare
/// [`Automaton::traverse`]: crate::Automaton::traverse
#[derive(Debug, Clone, Default)]
pub struct TraversalConfig {
    /// Input symbols mapped to ids. `None` marks a symbol the automaton has
    /// never seen; no path survives it.
    pub input: Vec<Option<SymbolId>>,
    /// Live mapping for the current input position.
    pub live: LiveMap,
    /// States alive at the current input position.
    pub active: IndexSet<StateId>,
    /// Number of input symbols consumed so far.
    pub position: usize,
}

impl TraversalConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Forget everything from a previous traversal.
    pub fn reset(&mut self) {
        self.input.clear();
        self.live.clear();
        self.active.clear();
        self.position = 0;
    }
}
