//! Finite automata and NFA-to-DFA conversion.
//!
//! This module provides:
//! - DFA and NFA types sharing the `FiniteAutomaton` build/query surface
//! - Subset construction (NFA to DFA conversion)
//! - A node/edge graph export for visualization

mod dfa;
mod error;
mod graph;
mod nfa;
mod state;
mod subset_construction;
mod symbol;
mod traits;


pub use dfa::Dfa;
pub use error::{AutomatonError, Result};
pub use graph::{DEFAULT_EXPORT_FILE, Edge, ExportOptions, Graph, Node, export_json};
pub use nfa::Nfa;
pub use state::{Composite, StateId, StateLabel, StateSet};
pub use subset_construction::subset_construction;
pub use symbol::{Alphabet, Symbol, alphabet_from_str};
pub use traits::FiniteAutomaton;

/// Convert an NFA into a DFA recognizing the same language.
pub fn convert<S: StateLabel + Ord>(nfa: &Nfa<S>) -> Dfa<Composite<S>> {
    subset_construction(nfa)
}
