// Transition entries of the tabular transducer.

use crate::symbols::{EPSILON, SymbolTable};
use crate::{StateId, SymbolId};

/// One outgoing transition for a `(source state, input symbol)` key.
///
/// The key itself lives in the automaton's transition table; the entry only
/// carries what the transition emits and where it leads. Entries for one key
/// are kept in file order, which is the order nondeterministic branches are
/// explored in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    /// Output symbol emitted when the transition is taken.
    pub output: SymbolId,
    /// State the transition leads to.
    pub target: StateId,
}

impl Transition {
    pub fn new(output: SymbolId, target: StateId) -> Self {
        Self { output, target }
    }

    /// Whether taking this transition emits nothing.
    #[inline]
    pub fn is_silent(&self) -> bool {
        self.output == EPSILON
    }

    /// Extend an accumulated output with this transition's output symbol.
    ///
    /// Epsilon output carries `prefix` forward unchanged.
    pub fn append_output(&self, prefix: &str, symbols: &SymbolTable) -> String {
        if self.is_silent() {
            return prefix.to_string();
        }
        let symbol = symbols.as_str(self.output);
        let mut extended = String::with_capacity(prefix.len() + symbol.len());
        extended.push_str(prefix);
        extended.push_str(symbol);
        extended
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_transition_keeps_prefix() {
        let symbols = SymbolTable::new();
        let t = Transition::new(EPSILON, 3);
        assert!(t.is_silent());
        assert_eq!(t.append_output("mal<n>", &symbols), "mal<n>");
    }

    #[test]
    fn output_symbol_is_appended() {
        let mut symbols = SymbolTable::new();
        let tag = symbols.intern("<sg>");
        let t = Transition::new(tag, 1);
        assert!(!t.is_silent());
        assert_eq!(t.append_output("mal<n>", &symbols), "mal<n><sg>");
        assert_eq!(t.append_output("", &symbols), "<sg>");
    }
}
