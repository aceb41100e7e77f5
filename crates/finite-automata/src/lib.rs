//! Deterministic and nondeterministic finite automata, and conversion from
//! one to the other by subset construction.
//!
//! ```
//! use finite_automata::{FiniteAutomaton, Nfa, convert};
//!
//! let mut nfa = Nfa::new();
//! nfa.set_start_state("q0");
//! nfa.set_accept_states(["q2"]);
//! nfa.add_transitions("q0", 'a', ["q0", "q1"]);
//! nfa.add_transition("q1", 'a', "q2");
//!
//! let dfa = convert(&nfa);
//! assert_eq!(dfa.states().len(), 3);
//! assert!(dfa.accepts_str("aaa")?);
//! # Ok::<(), finite_automata::AutomatonError>(())
//! ```

pub mod automaton;

pub use automaton::{
    Alphabet, AutomatonError, Composite, DEFAULT_EXPORT_FILE, Dfa, Edge, ExportOptions,
    FiniteAutomaton, Graph, Nfa, Node, Result, StateLabel, Symbol, alphabet_from_str, convert,
    export_json,
};
