//! Deterministic Finite Automaton (DFA) implementation.

use crate::automaton::error::{AutomatonError, Result};
use crate::automaton::state::StateLabel;
use crate::automaton::symbol::{Alphabet, Symbol};
use crate::automaton::traits::FiniteAutomaton;
use indexmap::{IndexMap, IndexSet};
use log::trace;
use std::collections::VecDeque;

/// A Deterministic Finite Automaton.
#[derive(Debug, Clone)]
pub struct Dfa<S: StateLabel> {
    /// Declared alphabet
    alphabet: Alphabet,
    /// All states ever added
    states: IndexSet<S>,
    /// Transitions: source -> symbol -> destination
    transitions: IndexMap<S, IndexMap<Symbol, S>>,
    /// Start state (None until set)
    start_state: Option<S>,
    /// Final (accepting) states
    accept_states: IndexSet<S>,
}

impl<S: StateLabel> Dfa<S> {
    /// Create a new empty DFA.
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::new(),
            states: IndexSet::new(),
            transitions: IndexMap::new(),
            start_state: None,
            accept_states: IndexSet::new(),
        }
    }

    /// Get the transition from a state on a symbol.
    pub fn transition(&self, source: &S, symbol: Symbol) -> Option<&S> {
        self.transitions.get(source)?.get(&symbol)
    }

    /// The transition table as source -> symbol -> destination.
    pub fn transition_table(&self) -> &IndexMap<S, IndexMap<Symbol, S>> {
        &self.transitions
    }

    /// Check that every state has exactly one transition per alphabet symbol
    /// and none outside it.
    pub fn is_complete(&self) -> bool {
        self.states.iter().all(|state| match self.transitions.get(state) {
            Some(outgoing) => {
                outgoing.len() == self.alphabet.len()
                    && outgoing.keys().all(|symbol| self.alphabet.contains(symbol))
            }
            None => self.alphabet.is_empty(),
        })
    }

    /// Find all states reachable from the start state.
    pub fn reachable_states(&self) -> IndexSet<S> {
        let mut reachable = IndexSet::new();

        let Some(start) = &self.start_state else {
            return reachable;
        };

        let mut queue = VecDeque::new();
        queue.push_back(start);

        while let Some(state) = queue.pop_front() {
            if !reachable.insert(state.clone()) {
                continue;
            }

            if let Some(outgoing) = self.transitions.get(state) {
                for next in outgoing.values() {
                    if !reachable.contains(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        reachable
    }
}

impl<S: StateLabel> Default for Dfa<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateLabel> FiniteAutomaton for Dfa<S> {
    type State = S;

    fn add_state(&mut self, state: S) {
        self.states.insert(state);
    }

    /// Set the target for `(from, symbol)`, replacing any previous one.
    fn add_transition(&mut self, from: S, symbol: Symbol, to: S) {
        self.transitions.entry(from).or_default().insert(symbol, to);
    }

    fn set_start_state(&mut self, state: S) {
        self.start_state = Some(state);
    }

    fn set_accept_states<I>(&mut self, states: I)
    where
        I: IntoIterator<Item = S>,
    {
        self.accept_states = states.into_iter().collect();
    }

    fn set_alphabet<I>(&mut self, alphabet: I)
    where
        I: IntoIterator<Item = Symbol>,
    {
        self.alphabet = alphabet.into_iter().collect();
    }

    fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    fn states(&self) -> &IndexSet<S> {
        &self.states
    }

    fn start_state(&self) -> Option<&S> {
        self.start_state.as_ref()
    }

    fn accept_states(&self) -> &IndexSet<S> {
        &self.accept_states
    }

    fn accepts<I>(&self, input: I) -> Result<bool>
    where
        I: IntoIterator<Item = Symbol>,
    {
        let mut current = self
            .start_state
            .as_ref()
            .ok_or(AutomatonError::MissingStartState)?;

        for symbol in input {
            match self.transition(current, symbol) {
                Some(next) => current = next,
                None => {
                    trace!("no transition from {current:?} on {symbol:?}, rejecting");
                    return Ok(false);
                }
            }
        }

        Ok(self.accept_states.contains(current))
    }

    fn edges(&self) -> impl Iterator<Item = (&S, Symbol, &S)> + '_ {
        self.transitions.iter().flat_map(|(source, outgoing)| {
            outgoing
                .iter()
                .map(move |(&symbol, target)| (source, symbol, target))
        })
    }
}
