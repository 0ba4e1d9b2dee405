// Epsilon-closure over a live mapping.

use std::collections::VecDeque;

use hashbrown::HashSet;
use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};

use crate::automaton::Automaton;
use crate::config::LiveMap;
use crate::symbols::EPSILON;
use crate::StateId;

/// Follow epsilon transitions out of `start`, carrying the outputs alive at
/// each expanded state to the states it reaches.
///
/// Every state of the epsilon subgraph reachable from `start`, `start`
/// included, gets an entry in `live` (possibly empty) and is added to
/// `reached`, in discovery order.
///
/// States are expanded in dependency order: a state is expanded only after
/// every epsilon predecessor inside the subgraph, so it passes on all the
/// outputs that reach it, whatever the length of the branches leading there.
/// When only states on epsilon cycles remain, the earliest discovered one is
/// expanded next. Each state is expanded exactly once per call, so cycles
/// terminate and the number of expansions equals the size of the subgraph.
///
/// Returns the number of states expanded.
pub fn epsilon_closure(
    automaton: &Automaton,
    start: StateId,
    live: &mut LiveMap,
    reached: &mut IndexSet<StateId>,
) -> usize {
    // Reachable subgraph in discovery order, with the number of epsilon arcs
    // entering each state from inside the subgraph.
    let mut pending: IndexMap<StateId, usize> = IndexMap::new();
    let mut queue: VecDeque<StateId> = VecDeque::new();
    pending.insert(start, 0);
    queue.push_back(start);
    while let Some(state) = queue.pop_front() {
        for arc in automaton.transitions_from(state, EPSILON) {
            match pending.entry(arc.target) {
                Entry::Occupied(mut entry) => *entry.get_mut() += 1,
                Entry::Vacant(entry) => {
                    entry.insert(1);
                    queue.push_back(arc.target);
                }
            }
        }
    }

    for &state in pending.keys() {
        live.ensure(state);
        reached.insert(state);
    }

    let mut ready: VecDeque<StateId> = pending
        .iter()
        .filter(|&(_, &count)| count == 0)
        .map(|(&state, _)| state)
        .collect();
    let mut expanded: HashSet<StateId> = HashSet::with_capacity(pending.len());
    let mut cursor = 0;

    loop {
        let state = match ready.pop_front() {
            Some(state) => state,
            None => {
                // Only states on epsilon cycles are left.
                while pending
                    .get_index(cursor)
                    .is_some_and(|(state, _)| expanded.contains(state))
                {
                    cursor += 1;
                }
                match pending.get_index(cursor) {
                    Some((&state, _)) => state,
                    None => break,
                }
            }
        };
        if !expanded.insert(state) {
            continue;
        }

        let arcs = automaton.transitions_from(state, EPSILON);
        if arcs.is_empty() {
            continue;
        }

        // Snapshot: a self-loop would otherwise extend the set being read.
        let outputs: Vec<String> = live.outputs(state).map(str::to_string).collect();
        for arc in arcs {
            for output in &outputs {
                live.insert(arc.target, arc.append_output(output, automaton.symbols()));
            }
            if let Some(count) = pending.get_mut(&arc.target) {
                if *count > 0 {
                    *count -= 1;
                    if *count == 0 && !expanded.contains(&arc.target) {
                        ready.push_back(arc.target);
                    }
                }
            }
        }
    }

    expanded.len()
}
