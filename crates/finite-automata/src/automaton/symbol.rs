//! Symbol types for automata transitions.

use std::collections::BTreeSet;

/// A transition symbol. Transitions consume exactly one character.
pub type Symbol = char;

/// An ordered set of symbols.
///
/// The declared alphabet of an automaton is informational only: transitions
/// are never validated against it.
pub type Alphabet = BTreeSet<Symbol>;

/// Collect the symbols of `input` into an alphabet, ignoring whitespace.
///
/// Accepts both `"a b c"` and `"abc"`.
pub fn alphabet_from_str(input: &str) -> Alphabet {
    input.chars().filter(|c| !c.is_whitespace()).collect()
}
