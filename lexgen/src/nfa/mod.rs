//! # Nondeterministic finite automaton with ε-moves
//!
//! The [Nfa] built here is always an intermediate value: it is produced by
//! [Thompson construction](crate::regex::ast::RegexTree::compile) from a single
//! regex, combined with its sibling rules by [Nfa::union], and finally turned
//! into a [Dfa](crate::dfa::Dfa) by [Nfa::to_dfa]. Nothing outside this crate
//! ever sees an [Nfa] directly.

use std::collections::{HashMap, HashSet};

use crate::dfa::Dfa;

/// Identifies a state within a single [Nfa].
pub type StateId = usize;

/// A nondeterministic finite automaton with ε-moves.
///
/// States are a dense range `0..num_states`. Transitions are keyed by
/// `(state, Some(symbol))` for normal moves and `(state, None)` for ε-moves.
#[derive(Clone, Debug)]
pub struct Nfa {
    pub(crate) alphabet: HashSet<char>,
    pub(crate) num_states: usize,
    pub(crate) start: StateId,
    pub(crate) transitions: HashMap<(StateId, Option<char>), HashSet<StateId>>,
    pub(crate) accepts: HashSet<StateId>,
}

impl Nfa {
    /// The two-state ε-NFA matching only the empty string.
    pub(crate) fn epsilon() -> Self {
        let mut transitions = HashMap::new();
        transitions.insert((0, None), HashSet::from([1]));
        Nfa {
            alphabet: HashSet::new(),
            num_states: 2,
            start: 0,
            transitions,
            accepts: HashSet::from([1]),
        }
    }

    /// The two-state NFA matching exactly the single character `c`.
    pub(crate) fn symbol(c: char) -> Self {
        let mut transitions = HashMap::new();
        transitions.insert((0, Some(c)), HashSet::from([1]));
        Nfa {
            alphabet: HashSet::from([c]),
            num_states: 2,
            start: 0,
            transitions,
            accepts: HashSet::from([1]),
        }
    }

    /// The two-state NFA matching any single character in the inclusive
    /// code-point range `lo..=hi`. Code points with no valid `char`
    /// representation (the UTF-16 surrogate range) are skipped.
    pub(crate) fn char_class(lo: u32, hi: u32) -> Self {
        let mut alphabet = HashSet::new();
        let mut transitions = HashMap::new();
        for cp in lo..=hi {
            if let Some(c) = char::from_u32(cp) {
                alphabet.insert(c);
                transitions.insert((0, Some(c)), HashSet::from([1]));
            }
        }
        Nfa {
            alphabet,
            num_states: 2,
            start: 0,
            transitions,
            accepts: HashSet::from([1]),
        }
    }

    /// Shifts every state id in this NFA up by `offset`, returning the new
    /// transition map, start state and accept set. Does not mutate `self`;
    /// Thompson's composite constructions treat each child as an immutable
    /// input and build fresh maps from the shifted pieces.
    fn shifted(
        &self,
        offset: usize,
    ) -> (
        HashMap<(StateId, Option<char>), HashSet<StateId>>,
        StateId,
        HashSet<StateId>,
    ) {
        let transitions = self
            .transitions
            .iter()
            .map(|(&(from, sym), tos)| {
                (
                    (from + offset, sym),
                    tos.iter().map(|&to| to + offset).collect(),
                )
            })
            .collect();
        let accepts = self.accepts.iter().map(|&s| s + offset).collect();
        (transitions, self.start + offset, accepts)
    }

    fn add_epsilon(
        transitions: &mut HashMap<(StateId, Option<char>), HashSet<StateId>>,
        from: StateId,
        to: StateId,
    ) {
        transitions.entry((from, None)).or_default().insert(to);
    }

    /// `Concat(a, b)`: place `a`, then `b`, with an ε-move from `a`'s accept
    /// to `b`'s start.
    pub(crate) fn concat(a: Self, b: Self) -> Self {
        let a_len = a.num_states;
        let (b_transitions, b_start, b_accepts) = b.shifted(a_len);
        let mut transitions = a.transitions.clone();
        transitions.extend(b_transitions);
        for &a_accept in &a.accepts {
            Self::add_epsilon(&mut transitions, a_accept, b_start);
        }
        Nfa {
            alphabet: a.alphabet.union(&b.alphabet).copied().collect(),
            num_states: a_len + b.num_states,
            start: a.start,
            transitions,
            accepts: b_accepts,
        }
    }

    /// `Alternation(children)`: a fresh start with ε-moves to each child's
    /// start, and a fresh accept reached by ε-move from each child's accept.
    pub(crate) fn alternation(children: Vec<Self>) -> Self {
        let mut alphabet = HashSet::new();
        let mut transitions = HashMap::new();
        let mut offset = 1;
        let mut child_starts = Vec::with_capacity(children.len());
        let mut child_accepts = Vec::new();

        for child in &children {
            let (child_transitions, child_start, accepts) = child.shifted(offset);
            transitions.extend(child_transitions);
            child_starts.push(child_start);
            child_accepts.extend(accepts);
            alphabet.extend(&child.alphabet);
            offset += child.num_states;
        }

        let new_start = 0;
        let new_accept = offset;
        for &start in &child_starts {
            Self::add_epsilon(&mut transitions, new_start, start);
        }
        for accept in child_accepts {
            Self::add_epsilon(&mut transitions, accept, new_accept);
        }

        Nfa {
            alphabet,
            num_states: offset + 1,
            start: new_start,
            transitions,
            accepts: HashSet::from([new_accept]),
        }
    }

    /// `Star(a)`: zero or more repetitions of `a`.
    pub(crate) fn star(a: Self) -> Self {
        let (mut transitions, a_start, a_accepts) = a.shifted(1);
        let new_start = 0;
        let new_accept = a.num_states + 1;
        Self::add_epsilon(&mut transitions, new_start, a_start);
        Self::add_epsilon(&mut transitions, new_start, new_accept);
        for &accept in &a_accepts {
            Self::add_epsilon(&mut transitions, accept, a_start);
            Self::add_epsilon(&mut transitions, accept, new_accept);
        }
        Nfa {
            alphabet: a.alphabet,
            num_states: a.num_states + 2,
            start: new_start,
            transitions,
            accepts: HashSet::from([new_accept]),
        }
    }

    /// `Plus(a)`: one or more repetitions of `a`.
    pub(crate) fn plus(a: Self) -> Self {
        let (mut transitions, a_start, a_accepts) = a.shifted(1);
        let new_start = 0;
        let new_accept = a.num_states + 1;
        Self::add_epsilon(&mut transitions, new_start, a_start);
        for &accept in &a_accepts {
            Self::add_epsilon(&mut transitions, accept, a_start);
            Self::add_epsilon(&mut transitions, accept, new_accept);
        }
        Nfa {
            alphabet: a.alphabet,
            num_states: a.num_states + 2,
            start: new_start,
            transitions,
            accepts: HashSet::from([new_accept]),
        }
    }

    /// `Question(a)`: zero or one occurrence of `a`.
    pub(crate) fn question(a: Self) -> Self {
        let (mut transitions, a_start, a_accepts) = a.shifted(1);
        let new_start = 0;
        let new_accept = a.num_states + 1;
        Self::add_epsilon(&mut transitions, new_start, a_start);
        Self::add_epsilon(&mut transitions, new_start, new_accept);
        for &accept in &a_accepts {
            Self::add_epsilon(&mut transitions, accept, new_accept);
        }
        Nfa {
            alphabet: a.alphabet,
            num_states: a.num_states + 2,
            start: new_start,
            transitions,
            accepts: HashSet::from([new_accept]),
        }
    }

    /// Merges an ordered list of per-rule NFAs under a fresh start state,
    /// preserving which rule each accepting state originated from.
    ///
    /// Returns the combined NFA together with a map from each of its
    /// accepting states to the index of the rule (in `rule_nfas`) that
    /// produced it.
    pub(crate) fn union(rule_nfas: Vec<Self>) -> (Self, HashMap<StateId, usize>) {
        let mut alphabet = HashSet::new();
        let mut transitions = HashMap::new();
        let mut final_to_rule = HashMap::new();
        let mut offset = 1;

        for (rule_idx, nfa) in rule_nfas.iter().enumerate() {
            let (nfa_transitions, nfa_start, nfa_accepts) = nfa.shifted(offset);
            transitions.extend(nfa_transitions);
            alphabet.extend(&nfa.alphabet);

            let new_start = 0;
            Self::add_epsilon(&mut transitions, new_start, nfa_start);
            for accept in nfa_accepts {
                final_to_rule.insert(accept, rule_idx);
            }

            offset += nfa.num_states;
        }

        let accepts = final_to_rule.keys().copied().collect();
        let combined = Nfa {
            alphabet,
            num_states: offset,
            start: 0,
            transitions,
            accepts,
        };
        (combined, final_to_rule)
    }

    /// The ε-closure of a set of states: every state reachable via zero or
    /// more ε-transitions, including the starting states themselves.
    pub(crate) fn epsilon_closure(&self, states: &HashSet<StateId>) -> HashSet<StateId> {
        let mut closure = states.clone();
        let mut stack: Vec<StateId> = states.iter().copied().collect();
        while let Some(state) = stack.pop() {
            if let Some(targets) = self.transitions.get(&(state, None)) {
                for &target in targets {
                    if closure.insert(target) {
                        stack.push(target);
                    }
                }
            }
        }
        closure
    }

    fn step(&self, states: &HashSet<StateId>, symbol: char) -> HashSet<StateId> {
        let mut result = HashSet::new();
        for &state in states {
            if let Some(targets) = self.transitions.get(&(state, Some(symbol))) {
                result.extend(targets);
            }
        }
        result
    }

    /// Converts this NFA to a [Dfa] via subset construction. Every DFA state
    /// is the ε-closure of a set of NFA states; an empty `move` result is
    /// still interned as the canonical dead/sink state rather than left as a
    /// missing transition.
    pub fn to_dfa(&self) -> Dfa {
        use std::collections::BTreeSet;

        let mut state_sets: Vec<BTreeSet<StateId>> = Vec::new();
        let mut set_to_id: HashMap<BTreeSet<StateId>, usize> = HashMap::new();
        let mut transitions = HashMap::new();
        let mut accepts = HashSet::new();

        let start_set: BTreeSet<StateId> =
            self.epsilon_closure(&HashSet::from([self.start])).into_iter().collect();
        let start_id = 0;
        set_to_id.insert(start_set.clone(), start_id);
        state_sets.push(start_set.clone());
        if start_set.iter().any(|s| self.accepts.contains(s)) {
            accepts.insert(start_id);
        }

        let mut worklist = vec![start_set];
        while let Some(current) = worklist.pop() {
            let current_id = set_to_id[&current];
            let as_hashset: HashSet<StateId> = current.iter().copied().collect();
            for &symbol in &self.alphabet {
                let moved = self.step(&as_hashset, symbol);
                let closure: BTreeSet<StateId> =
                    self.epsilon_closure(&moved).into_iter().collect();
                let target_id = *set_to_id.entry(closure.clone()).or_insert_with(|| {
                    let id = state_sets.len();
                    state_sets.push(closure.clone());
                    if closure.iter().any(|s| self.accepts.contains(s)) {
                        accepts.insert(id);
                    }
                    worklist.push(closure.clone());
                    id
                });
                transitions.insert((current_id, symbol), target_id);
            }
        }

        let num_states = state_sets.len();
        let sinks = (0..num_states)
            .filter(|&id| {
                !accepts.contains(&id)
                    && self
                        .alphabet
                        .iter()
                        .all(|&sym| transitions.get(&(id, sym)).map_or(true, |&to| to == id))
            })
            .collect();

        Dfa {
            alphabet: self.alphabet.clone(),
            num_states,
            start: start_id,
            transitions,
            accepts,
            state_sets,
            sinks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_accepts_only_itself() {
        let nfa = Nfa::symbol('a');
        let dfa = nfa.to_dfa();
        assert!(dfa.accepts("a"));
        assert!(!dfa.accepts("b"));
        assert!(!dfa.accepts("aa"));
    }

    #[test]
    fn union_preserves_rule_identity() {
        let (combined, final_to_rule) =
            Nfa::union(vec![Nfa::symbol('a'), Nfa::symbol('b')]);
        assert_eq!(final_to_rule.len(), 2);
        let values: HashSet<_> = final_to_rule.values().copied().collect();
        assert_eq!(values, HashSet::from([0, 1]));
        let dfa = combined.to_dfa();
        assert!(dfa.accepts("a"));
        assert!(dfa.accepts("b"));
        assert!(!dfa.accepts("c"));
    }

    #[test]
    fn star_accepts_empty_and_repetitions() {
        let dfa = Nfa::star(Nfa::symbol('a')).to_dfa();
        assert!(dfa.accepts(""));
        assert!(dfa.accepts("a"));
        assert!(dfa.accepts("aaaa"));
        assert!(!dfa.accepts("aab"));
    }

    #[test]
    fn plus_requires_at_least_one() {
        let dfa = Nfa::plus(Nfa::symbol('a')).to_dfa();
        assert!(!dfa.accepts(""));
        assert!(dfa.accepts("a"));
        assert!(dfa.accepts("aaa"));
    }

    #[test]
    fn question_accepts_zero_or_one() {
        let dfa = Nfa::question(Nfa::symbol('a')).to_dfa();
        assert!(dfa.accepts(""));
        assert!(dfa.accepts("a"));
        assert!(!dfa.accepts("aa"));
    }
}
