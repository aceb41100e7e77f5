//! Non-deterministic Finite Automaton (NFA) implementation.
//!
//! Transitions consume exactly one symbol; there are no epsilon moves.

use crate::automaton::dfa::Dfa;
use crate::automaton::error::{AutomatonError, Result};
use crate::automaton::state::{Composite, StateLabel};
use crate::automaton::subset_construction::subset_construction;
use crate::automaton::symbol::{Alphabet, Symbol};
use crate::automaton::traits::FiniteAutomaton;
use indexmap::{IndexMap, IndexSet};
use std::collections::{HashSet, VecDeque};
use std::mem;

/// A Non-deterministic Finite Automaton.
#[derive(Debug, Clone)]
pub struct Nfa<S: StateLabel> {
    /// Declared alphabet
    alphabet: Alphabet,
    /// All states ever added
    states: IndexSet<S>,
    /// Transitions: source -> symbol -> set of destination states
    transitions: IndexMap<S, IndexMap<Symbol, IndexSet<S>>>,
    /// Start state (None until set)
    start_state: Option<S>,
    /// Final (accepting) states
    accept_states: IndexSet<S>,
}

impl<S: StateLabel> Nfa<S> {
    /// Create a new empty NFA.
    pub fn new() -> Self {
        Self {
            alphabet: Alphabet::new(),
            states: IndexSet::new(),
            transitions: IndexMap::new(),
            start_state: None,
            accept_states: IndexSet::new(),
        }
    }

    /// Add a transition from `from` on `symbol` to each of `targets`.
    pub fn add_transitions<I>(&mut self, from: S, symbol: Symbol, targets: I)
    where
        I: IntoIterator<Item = S>,
    {
        self.transitions
            .entry(from)
            .or_default()
            .entry(symbol)
            .or_default()
            .extend(targets);
    }

    /// Get the destinations of a state on a symbol.
    pub fn targets(&self, source: &S, symbol: Symbol) -> Option<&IndexSet<S>> {
        self.transitions.get(source)?.get(&symbol)
    }

    /// The transition table as source -> symbol -> destinations.
    pub fn transition_table(&self) -> &IndexMap<S, IndexMap<Symbol, IndexSet<S>>> {
        &self.transitions
    }

    /// The symbols that label at least one transition.
    ///
    /// This can differ from the declared alphabet in both directions.
    pub fn working_alphabet(&self) -> Alphabet {
        self.transitions
            .values()
            .flat_map(|outgoing| outgoing.keys().copied())
            .collect()
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
                for next in outgoing.values().flatten() {
                    if !reachable.contains(next) {
                        queue.push_back(next);
                    }
                }
            }
        }

        reachable
    }
}

impl<S: StateLabel + Ord> Nfa<S> {
    /// Build an equivalent DFA by subset construction.
    pub fn to_dfa(&self) -> Dfa<Composite<S>> {
        subset_construction(self)
    }
}

impl<S: StateLabel> Default for Nfa<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: StateLabel> FiniteAutomaton for Nfa<S> {
    type State = S;

    fn add_state(&mut self, state: S) {
        self.states.insert(state);
    }

    /// Add `to` to the destinations of `(from, symbol)`.
    fn add_transition(&mut self, from: S, symbol: Symbol, to: S) {
        self.add_transitions(from, symbol, [to]);
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
        let start = self
            .start_state
            .as_ref()
            .ok_or(AutomatonError::MissingStartState)?;

        let mut current: HashSet<&S> = HashSet::from([start]);
        let mut next = HashSet::new();

        for symbol in input {
            for state in &current {
                if let Some(targets) = self.targets(state, symbol) {
                    next.extend(targets);
                }
            }
            // clear + swap keeps both allocations alive across steps
            current.clear();
            mem::swap(&mut current, &mut next);

            // Stuck: no branch can recover
            if current.is_empty() {
                return Ok(false);
            }
        }

        Ok(current.iter().any(|state| self.accept_states.contains(*state)))
    }

    fn edges(&self) -> impl Iterator<Item = (&S, Symbol, &S)> + '_ {
        self.transitions.iter().flat_map(|(source, outgoing)| {
            outgoing.iter().flat_map(move |(&symbol, targets)| {
                targets.iter().map(move |target| (source, symbol, target))
            })
        })
    }
}
