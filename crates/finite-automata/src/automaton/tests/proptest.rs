use proptest::{collection, prelude::*, sample};

use crate::automaton::{FiniteAutomaton, Nfa, convert};

const SYMBOLS: [char; 2] = ['a', 'b'];
const MAX_INPUT_LEN: usize = 6;

/// NFAs over `{a, b}` with states `0..n`, start state 0.
fn arb_nfa() -> impl Strategy<Value = Nfa<u8>> {
    (1u8..=5)
        .prop_flat_map(|n| {
            (
                Just(n),
                collection::vec((0..n, sample::select(SYMBOLS.to_vec()), 0..n), 0..16),
                collection::vec(0..n, 0..=n as usize),
            )
        })
        .prop_map(|(n, transitions, accept_states)| {
            let mut nfa = Nfa::new();
            for state in 0..n {
                nfa.add_state(state);
            }
            nfa.set_start_state(0);
            nfa.set_accept_states(accept_states);
            for (from, symbol, to) in transitions {
                nfa.add_transition(from, symbol, to);
            }
            nfa
        })
}

/// Every string over `SYMBOLS` of length at most `max_len`, shortest first.
fn all_inputs(max_len: usize) -> Vec<String> {
    let mut inputs = vec![String::new()];
    let mut frontier = vec![String::new()];
    for _ in 0..max_len {
        frontier = frontier
            .iter()
            .flat_map(|prefix| SYMBOLS.iter().map(move |&c| format!("{prefix}{c}")))
            .collect();
        inputs.extend(frontier.iter().cloned());
    }
    inputs
}

#[test]
fn all_inputs_enumerates_every_string() {
    let inputs = all_inputs(2);
    assert_eq!(inputs, ["", "a", "b", "aa", "ab", "ba", "bb"]);
}

proptest! {
    #[test]
    fn conversion_preserves_language(nfa in arb_nfa()) {
        let dfa = convert(&nfa);
        for input in all_inputs(MAX_INPUT_LEN) {
            prop_assert_eq!(
                nfa.accepts_str(&input).unwrap(),
                dfa.accepts_str(&input).unwrap(),
                "disagreement on {:?}",
                input
            );
        }
    }

    #[test]
    fn composite_count_is_bounded(nfa in arb_nfa()) {
        let dfa = convert(&nfa);
        let bound = 1usize << nfa.states().len();
        prop_assert!(!dfa.states().is_empty());
        prop_assert!(dfa.states().len() <= bound);
    }

    #[test]
    fn conversion_is_deterministic(nfa in arb_nfa()) {
        let first = convert(&nfa);
        let second = convert(&nfa);
        prop_assert_eq!(first.start_state(), second.start_state());
        prop_assert_eq!(first.states(), second.states());
        prop_assert_eq!(first.accept_states(), second.accept_states());
        prop_assert_eq!(first.transition_table(), second.transition_table());
    }

    #[test]
    fn converted_dfa_is_complete_over_working_alphabet(nfa in arb_nfa()) {
        let dfa = convert(&nfa);
        prop_assert_eq!(dfa.alphabet(), &nfa.working_alphabet());
        prop_assert!(dfa.is_complete());
    }

    #[test]
    fn empty_input_follows_start_state(nfa in arb_nfa()) {
        let dfa = convert(&nfa);
        let start_accepts = nfa.is_accept_state(&0);
        prop_assert_eq!(nfa.accepts_str("").unwrap(), start_accepts);
        prop_assert_eq!(dfa.accepts_str("").unwrap(), start_accepts);
    }
}
