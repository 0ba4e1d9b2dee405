// Consuming one input symbol from one active state.

use indexmap::IndexSet;

use crate::automaton::Automaton;
use crate::closure::epsilon_closure;
use crate::config::LiveMap;
use crate::{StateId, SymbolId};

/// Move every path alive at `state` across `symbol`.
///
/// Outputs are read from `current` (the mapping of the position being
/// consumed) and written to `next` (the mapping of the following position).
/// Each matching transition is a separate branch: its target receives every
/// extended output, then the epsilon-closure from the target runs inside
/// `next`. All targets and closure states are added to `reached`.
///
/// No matching transition means the paths at `state` die here.
pub fn step(
    automaton: &Automaton,
    state: StateId,
    symbol: SymbolId,
    current: &LiveMap,
    next: &mut LiveMap,
    reached: &mut IndexSet<StateId>,
) {
    let arcs = automaton.transitions_from(state, symbol);
    if arcs.is_empty() {
        return;
    }

    for arc in arcs {
        next.ensure(arc.target);
        reached.insert(arc.target);
        for output in current.outputs(state) {
            next.insert(arc.target, arc.append_output(output, automaton.symbols()));
        }
        epsilon_closure(automaton, arc.target, next, reached);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::automaton::AutomatonBuilder;

    fn symbol(a: &Automaton, s: &str) -> SymbolId {
        a.symbols().lookup(s).unwrap()
    }

    #[test]
    fn direct_transition_then_closure() {
        let mut b = AutomatonBuilder::new();
        b.add_transition(0, 1, "l", "l")
            .add_transition(1, 2, "@0@", "<n>");
        let a = b.build();

        let mut current = LiveMap::new();
        current.insert(0, "ma".to_string());
        let mut next = LiveMap::new();
        let mut reached = IndexSet::new();
        step(&a, 0, symbol(&a, "l"), &current, &mut next, &mut reached);

        assert_eq!(reached.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(next.outputs(1).collect::<Vec<_>>(), vec!["mal"]);
        assert_eq!(next.outputs(2).collect::<Vec<_>>(), vec!["mal<n>"]);
        // the consumed mapping is left alone
        assert!(!current.contains(1));
    }

    #[test]
    fn every_branch_is_explored() {
        let mut b = AutomatonBuilder::new();
        b.add_transition(0, 1, "a", "x")
            .add_transition(0, 2, "a", "y")
            .add_transition(0, 1, "a", "z");
        let a = b.build();

        let mut current = LiveMap::new();
        current.insert(0, String::new());
        let mut next = LiveMap::new();
        let mut reached = IndexSet::new();
        step(&a, 0, symbol(&a, "a"), &current, &mut next, &mut reached);

        assert_eq!(next.outputs(1).collect::<Vec<_>>(), vec!["x", "z"]);
        assert_eq!(next.outputs(2).collect::<Vec<_>>(), vec!["y"]);
    }

    #[test]
    fn epsilon_output_carries_prefix() {
        let mut b = AutomatonBuilder::new();
        b.add_transition(0, 1, "a", "@0@");
        let a = b.build();

        let mut current = LiveMap::new();
        current.insert(0, "pre".to_string());
        current.insert(0, "other".to_string());
        let mut next = LiveMap::new();
        let mut reached = IndexSet::new();
        step(&a, 0, symbol(&a, "a"), &current, &mut next, &mut reached);

        assert_eq!(next.outputs(1).collect::<Vec<_>>(), vec!["pre", "other"]);
    }

    #[test]
    fn no_match_contributes_nothing() {
        let mut b = AutomatonBuilder::new();
        b.add_transition(0, 1, "a", "a").add_transition(3, 4, "b", "b");
        let a = b.build();

        let mut current = LiveMap::new();
        current.insert(0, String::new());
        let mut next = LiveMap::new();
        let mut reached = IndexSet::new();
        step(&a, 0, symbol(&a, "b"), &current, &mut next, &mut reached);

        assert!(next.is_empty());
        assert!(reached.is_empty());
    }
}
