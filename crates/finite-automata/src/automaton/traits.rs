//! The build and query surface shared by both automaton kinds.

use crate::automaton::error::Result;
use crate::automaton::graph::{ExportOptions, Graph};
use crate::automaton::state::StateLabel;
use crate::automaton::symbol::{Alphabet, Symbol};
use indexmap::IndexSet;
use std::fmt::Display;

/// A finite automaton that is built incrementally and then queried.
///
/// None of the mutators validate their arguments: transitions may mention
/// states that were never added, and symbols outside the declared alphabet.
pub trait FiniteAutomaton {
    type State: StateLabel;

    /// Add a state. Adding a state twice is a no-op.
    fn add_state(&mut self, state: Self::State);

    /// Add a transition from `from` to `to` on `symbol`.
    fn add_transition(&mut self, from: Self::State, symbol: Symbol, to: Self::State);

    fn set_start_state(&mut self, state: Self::State);

    /// Replace the whole accept set. Callers pass the complete desired set.
    fn set_accept_states<I>(&mut self, states: I)
    where
        I: IntoIterator<Item = Self::State>;

    /// Replace the declared alphabet.
    fn set_alphabet<I>(&mut self, alphabet: I)
    where
        I: IntoIterator<Item = Symbol>;

    fn alphabet(&self) -> &Alphabet;

    /// All states ever added, in insertion order.
    fn states(&self) -> &IndexSet<Self::State>;

    fn start_state(&self) -> Option<&Self::State>;

    fn accept_states(&self) -> &IndexSet<Self::State>;

    fn is_accept_state(&self, state: &Self::State) -> bool {
        self.accept_states().contains(state)
    }

    /// Run the automaton over `input` and report whether it ends accepting.
    ///
    /// A missing transition is a dead end and never an error. Fails only when
    /// no start state has been set.
    fn accepts<I>(&self, input: I) -> Result<bool>
    where
        I: IntoIterator<Item = Symbol>;

    fn accepts_str(&self, input: &str) -> Result<bool> {
        self.accepts(input.chars())
    }

    /// Every `(source, symbol, target)` triple, one per target.
    fn edges(&self) -> impl Iterator<Item = (&Self::State, Symbol, &Self::State)> + '_;

    /// Build the node/edge view consumed by visualization.
    fn to_graph(&self, options: &ExportOptions) -> Graph
    where
        Self: Sized,
        Self::State: Display,
    {
        Graph::from_automaton(self, options)
    }
}
