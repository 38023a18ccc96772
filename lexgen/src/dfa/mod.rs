//! # Deterministic finite automaton
//!
//! A [Dfa] is produced from an [Nfa](crate::nfa::Nfa) by subset construction
//! and is the automaton the [Lexer](crate::lexer::Lexer) actually scans
//! with. Each DFA state remembers the set of NFA states it represents (via
//! [Dfa::state_sets]), so that rule selection and sink detection can inspect
//! the underlying NFA accept states without re-deriving them.

use std::collections::{BTreeSet, HashMap, HashSet};

/// Identifies a state within a [Dfa].
pub type DfaStateId = usize;

/// A deterministic finite automaton produced by subset construction.
#[derive(Clone, Debug)]
pub struct Dfa {
    pub(crate) alphabet: HashSet<char>,
    pub(crate) num_states: usize,
    pub(crate) start: DfaStateId,
    pub(crate) transitions: HashMap<(DfaStateId, char), DfaStateId>,
    pub(crate) accepts: HashSet<DfaStateId>,
    /// The set of NFA states each DFA state represents, indexed by `DfaStateId`.
    pub(crate) state_sets: Vec<BTreeSet<crate::nfa::StateId>>,
    pub(crate) sinks: HashSet<DfaStateId>,
}

impl Dfa {
    /// Looks up the transition from `state` on `symbol`, if any.
    pub(crate) fn step(&self, state: DfaStateId, symbol: char) -> Option<DfaStateId> {
        self.transitions.get(&(state, symbol)).copied()
    }

    pub(crate) fn is_accepting(&self, state: DfaStateId) -> bool {
        self.accepts.contains(&state)
    }

    /// A sink state is non-accepting and every symbol transition from it
    /// either leads back to itself or is absent.
    pub(crate) fn is_sink(&self, state: DfaStateId) -> bool {
        self.sinks.contains(&state)
    }

    pub(crate) fn start(&self) -> DfaStateId {
        self.start
    }

    /// The set of NFA states the given DFA state represents.
    pub(crate) fn nfa_states(&self, state: DfaStateId) -> &BTreeSet<crate::nfa::StateId> {
        &self.state_sets[state]
    }

    /// Checks whether this automaton accepts `input` as a whole, stepping
    /// one `char` at a time from the start state. Used by the regex/NFA/DFA
    /// unit tests; the [Lexer](crate::lexer::Lexer) itself uses maximal
    /// munch over a single compiled multi-rule DFA instead.
    pub fn accepts(&self, input: &str) -> bool {
        let mut state = self.start;
        for c in input.chars() {
            match self.step(state, c) {
                Some(next) => state = next,
                None => return false,
            }
        }
        self.is_accepting(state)
    }

    /// The number of states in this DFA.
    pub fn num_states(&self) -> usize {
        self.num_states
    }
}

#[cfg(test)]
mod tests {
    use crate::nfa::Nfa;

    #[test]
    fn sink_state_is_never_accepting() {
        let dfa = Nfa::symbol('a').to_dfa();
        for &sink in &dfa.sinks {
            assert!(!dfa.is_accepting(sink));
        }
    }
}
