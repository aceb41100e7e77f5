//! Subset construction algorithm for converting an NFA to a DFA.
//!
//! The number of composite states is bounded by 2^n for an NFA with n states,
//! so the output can be exponentially larger than the input.

use crate::automaton::dfa::Dfa;
use crate::automaton::nfa::Nfa;
use crate::automaton::state::{Composite, StateId, StateLabel, StateSet};
use crate::automaton::symbol::Symbol;
use crate::automaton::traits::FiniteAutomaton;
use indexmap::IndexSet;
use log::{debug, trace};
use std::collections::HashMap;

/// Convert an NFA to a DFA using the powerset construction algorithm.
///
/// The DFA's alphabet is the NFA's working alphabet (the symbols that label a
/// transition), and every composite reached is kept, including the empty one.
/// The input is never modified.
pub fn subset_construction<S: StateLabel + Ord>(nfa: &Nfa<S>) -> Dfa<Composite<S>> {
    // Intern every NFA state a composite can contain, so the construction
    // works on bit sets of indices instead of sets of labels.
    let mut labels: IndexSet<&S> = IndexSet::new();

    let mut initial_set = StateSet::with_capacity(0);
    if let Some(start) = nfa.start_state() {
        initial_set.insert(labels.insert_full(start).0 as StateId);
    }

    let mut moves: HashMap<(StateId, Symbol), StateSet> = HashMap::new();
    for (source, outgoing) in nfa.transition_table() {
        let source_id = labels.insert_full(source).0 as StateId;
        for (&symbol, targets) in outgoing {
            let reached: StateSet = targets
                .iter()
                .map(|target| labels.insert_full(target).0 as StateId)
                .collect();
            moves.insert((source_id, symbol), reached);
        }
    }

    let final_set: StateSet = labels
        .iter()
        .enumerate()
        .filter(|(_, state)| nfa.is_accept_state(state))
        .map(|(idx, _)| idx as StateId)
        .collect();

    let alphabet = nfa.working_alphabet();
    debug!(
        "subset construction over {} NFA states and {} symbols",
        labels.len(),
        alphabet.len()
    );

    // Each DFA state corresponds to a set of NFA states; its index in
    // `discovered` is its DFA state ID.
    let mut discovered: IndexSet<StateSet> = IndexSet::new();
    let mut transitions: Vec<(usize, Symbol, usize)> = Vec::new();

    let (initial_dfa_state, _) = discovered.insert_full(initial_set.clone());
    let mut worklist = vec![(initial_set, initial_dfa_state)];

    while let Some((current_nfa_set, current_dfa_state)) = worklist.pop() {
        for &symbol in &alphabet {
            let mut next_nfa_set = StateSet::with_capacity(labels.len());
            for state in current_nfa_set.iter() {
                if let Some(reached) = moves.get(&(state, symbol)) {
                    next_nfa_set.union_with(reached);
                }
            }

            // The empty set is a real (dead) state, not a missing transition.
            let next_dfa_state = match discovered.get_index_of(&next_nfa_set) {
                Some(existing) => existing,
                None => {
                    let (new_state, _) = discovered.insert_full(next_nfa_set.clone());
                    trace!("discovered composite {new_state}: {next_nfa_set:?}");
                    worklist.push((next_nfa_set, new_state));
                    new_state
                }
            };

            transitions.push((current_dfa_state, symbol, next_dfa_state));
        }
    }

    let composites: Vec<Composite<S>> = discovered
        .iter()
        .map(|set| set.iter().map(|idx| labels[idx as usize]).cloned().collect())
        .collect();

    let mut dfa = Dfa::new();
    dfa.set_alphabet(alphabet);
    for composite in &composites {
        dfa.add_state(composite.clone());
    }
    if let Some(start) = composites.get(initial_dfa_state) {
        dfa.set_start_state(start.clone());
    }
    for (source, symbol, destination) in transitions {
        dfa.add_transition(
            composites[source].clone(),
            symbol,
            composites[destination].clone(),
        );
    }

    // Acceptance is decided once every composite is known.
    dfa.set_accept_states(
        discovered
            .iter()
            .zip(&composites)
            .filter(|(set, _)| set.intersects(&final_set))
            .map(|(_, composite)| composite.clone()),
    );

    debug!(
        "subset construction produced {} states, {} accepting",
        dfa.states().len(),
        dfa.accept_states().len()
    );

    dfa
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composite(states: &[&'static str]) -> Composite<&'static str> {
        states.iter().copied().collect()
    }

    #[test]
    fn test_subset_construction_basic() {
        // q0 -a-> {q0, q1}, q1 -a-> {q2}
        let mut nfa = Nfa::new();
        nfa.set_start_state("q0");
        nfa.set_accept_states(["q2"]);
        nfa.add_transitions("q0", 'a', ["q0", "q1"]);
        nfa.add_transition("q1", 'a', "q2");

        let dfa = subset_construction(&nfa);

        assert_eq!(dfa.alphabet().iter().collect::<String>(), "a");
        assert_eq!(dfa.states().len(), 3);
        assert_eq!(dfa.start_state(), Some(&composite(&["q0"])));
        assert_eq!(
            dfa.transition(&composite(&["q0"]), 'a'),
            Some(&composite(&["q0", "q1"]))
        );
        assert_eq!(
            dfa.transition(&composite(&["q0", "q1"]), 'a'),
            Some(&composite(&["q0", "q1", "q2"]))
        );
        assert_eq!(
            dfa.transition(&composite(&["q0", "q1", "q2"]), 'a'),
            Some(&composite(&["q0", "q1", "q2"]))
        );
        assert_eq!(dfa.accept_states().len(), 1);
        assert!(dfa.is_accept_state(&composite(&["q0", "q1", "q2"])));
        assert!(dfa.accepts_str("aa").unwrap());
        assert!(!dfa.accepts_str("a").unwrap());
    }

    #[test]
    fn test_dead_composite_is_kept() {
        // q0 -a-> q1, q0 -b-> q0; q1 has no transitions.
        let mut nfa = Nfa::new();
        nfa.set_start_state("q0");
        nfa.set_accept_states(["q1"]);
        nfa.add_transition("q0", 'a', "q1");
        nfa.add_transition("q0", 'b', "q0");

        let dfa = subset_construction(&nfa);
        let dead = composite(&[]);

        assert_eq!(dfa.states().len(), 3);
        assert!(dfa.states().contains(&dead));
        assert_eq!(dfa.transition(&composite(&["q1"]), 'a'), Some(&dead));
        assert_eq!(dfa.transition(&dead, 'a'), Some(&dead));
        assert_eq!(dfa.transition(&dead, 'b'), Some(&dead));
        assert!(dfa.is_complete());
        assert!(dfa.accepts_str("bba").unwrap());
        assert!(!dfa.accepts_str("ab").unwrap());
    }

    #[test]
    fn test_sink_state_without_outgoing_transitions() {
        // q1 only appears as a target; composites holding it stop growing.
        let mut nfa = Nfa::new();
        nfa.set_start_state(0u8);
        nfa.set_accept_states([1]);
        nfa.add_transitions(0, 'a', [0, 1]);

        let dfa = subset_construction(&nfa);
        let both: Composite<u8> = [0, 1].into_iter().collect();

        assert_eq!(dfa.states().len(), 2);
        assert_eq!(dfa.transition(&both, 'a'), Some(&both));
    }

    #[test]
    fn test_no_transitions() {
        let mut nfa = Nfa::new();
        nfa.add_state("q0");
        nfa.set_start_state("q0");

        let dfa = subset_construction(&nfa);

        assert_eq!(dfa.states().len(), 1);
        assert!(dfa.alphabet().is_empty());
        assert_eq!(dfa.edges().count(), 0);
        assert!(dfa.accept_states().is_empty());
        assert!(!dfa.accepts_str("").unwrap());
        assert!(!dfa.accepts_str("a").unwrap());
    }

    #[test]
    fn test_unset_start_state_yields_empty_start_composite() {
        let mut nfa: Nfa<&str> = Nfa::new();
        nfa.add_transition("q0", 'a', "q0");

        let dfa = subset_construction(&nfa);

        assert_eq!(dfa.start_state(), Some(&composite(&[])));
        assert_eq!(dfa.states().len(), 1);
        assert!(!dfa.accepts_str("a").unwrap());
    }

    #[test]
    fn test_declared_only_symbol_is_ignored() {
        let mut nfa = Nfa::new();
        nfa.set_alphabet(['a', 'b']);
        nfa.set_start_state("q0");
        nfa.set_accept_states(["q0"]);
        nfa.add_transition("q0", 'a', "q0");

        let dfa = subset_construction(&nfa);

        assert_eq!(dfa.alphabet().len(), 1);
        assert!(dfa.accepts_str("aaa").unwrap());
        assert!(!dfa.accepts_str("ab").unwrap());
    }

    #[test]
    fn test_input_is_untouched() {
        let mut nfa = Nfa::new();
        nfa.set_start_state("q0");
        nfa.add_transitions("q0", 'a', ["q0", "q1"]);
        let before = format!("{nfa:?}");

        let _ = nfa.to_dfa();

        assert_eq!(format!("{nfa:?}"), before);
    }
}
