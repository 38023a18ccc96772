//! # Lexer
//!
//! A [Lexer] compiles an ordered list of `(token-name, regex-source)` rules
//! into a single DFA (regex parse → Thompson construction → NFA union →
//! subset construction) and then scans input strings against it with
//! maximal munch, breaking ties between equally-long matches by the rule's
//! position in the original list.
//!
//! Line/column bookkeeping is updated at the exact step where a character
//! causes a transition into an accepting state, not by re-scanning the
//! committed lexeme afterwards.

use std::collections::HashMap;

use thiserror::Error;

use crate::dfa::{Dfa, DfaStateId};
use crate::nfa::{Nfa, StateId};
use crate::regex::{self, RegexError};

/// A single emitted token: the name of the rule that matched, and the
/// matched lexeme.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub name: String,
    pub lexeme: String,
}

/// A rule failed to parse while constructing a [Lexer].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("rule #{rule_index} ({name:?}): {source}")]
pub struct LexBuildError {
    pub rule_index: usize,
    pub name: String,
    #[source]
    pub source: RegexError,
}

/// A scan-time failure, reported with the same `line`/`column` convention
/// the compiled automaton uses throughout.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("No viable alternative at character {column}, line {line}")]
    UnrecognizedInput { line: usize, column: usize },

    #[error("No viable alternative at character EOF, line {line}")]
    UnexpectedEndOfInput { line: usize },
}

/// A compiled, immutable lexer. Construction is the only fallible step;
/// [Lexer::tokenize] never mutates the lexer and may be called any number
/// of times, from any number of threads, once built.
#[derive(Debug, Clone)]
pub struct Lexer {
    dfa: Dfa,
    spec: Vec<(String, String)>,
    final_to_rule: HashMap<StateId, usize>,
}

impl Lexer {
    /// Compiles an ordered `(token-name, regex-source)` spec into a [Lexer].
    /// Order is significant: earlier rules win maximal-munch ties.
    pub fn new(spec: Vec<(String, String)>) -> Result<Lexer, LexBuildError> {
        let mut rule_nfas = Vec::with_capacity(spec.len());
        for (rule_index, (name, source)) in spec.iter().enumerate() {
            let tree = regex::parse(source).map_err(|source| LexBuildError {
                rule_index,
                name: name.clone(),
                source,
            })?;
            rule_nfas.push(tree.compile());
        }

        let (combined, final_to_rule) = Nfa::union(rule_nfas);
        let dfa = combined.to_dfa();

        Ok(Lexer {
            dfa,
            spec,
            final_to_rule,
        })
    }

    /// Tokenizes `input` with maximal munch, returning the ordered token
    /// list or the first scan error encountered.
    pub fn tokenize(&self, input: &str) -> Result<Vec<Token>, LexError> {
        let chars: Vec<char> = input.chars().collect();
        let mut pos = 0;
        let mut line = 0;
        let mut line_start = 0;
        let mut tokens = Vec::new();

        while pos < chars.len() {
            let mut state = self.dfa.start();
            let mut cursor = pos;
            let mut last_accept: Option<(usize, DfaStateId)> = None;
            let mut hit_sink = false;
            let mut fail_at = cursor;
            let mut pending_line = line;
            let mut pending_line_start = line_start;

            while cursor < chars.len() {
                let c = chars[cursor];
                match self.dfa.step(state, c) {
                    Some(next) if !self.dfa.is_sink(next) => {
                        cursor += 1;
                        state = next;
                        if self.dfa.is_accepting(state) {
                            last_accept = Some((cursor, state));
                            if c == '\n' {
                                pending_line += 1;
                                pending_line_start = cursor;
                            }
                            line = pending_line;
                            line_start = pending_line_start;
                        }
                    }
                    _ => {
                        fail_at = cursor;
                        hit_sink = true;
                        break;
                    }
                }
            }

            match last_accept {
                Some((end, accept_state)) => {
                    let lexeme: String = chars[pos..end].iter().collect();
                    let rule_index = self.select_rule(accept_state);
                    tokens.push(Token {
                        name: self.spec[rule_index].0.clone(),
                        lexeme,
                    });
                    pos = end;
                }
                None if hit_sink => {
                    return Err(LexError::UnrecognizedInput {
                        line,
                        column: fail_at - line_start,
                    });
                }
                None => {
                    return Err(LexError::UnexpectedEndOfInput { line });
                }
            }
        }

        Ok(tokens)
    }

    /// Chooses the earliest rule (in spec order) among those whose NFA
    /// accept states are present in this DFA accept state's underlying set.
    fn select_rule(&self, dfa_state: DfaStateId) -> usize {
        self.dfa
            .nfa_states(dfa_state)
            .iter()
            .filter_map(|nfa_state| self.final_to_rule.get(nfa_state))
            .min()
            .copied()
            .expect("an accepting DFA state must map to at least one rule")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(rules: &[(&str, &str)]) -> Vec<(String, String)> {
        rules
            .iter()
            .map(|(name, regex)| (name.to_string(), regex.to_string()))
            .collect()
    }

    fn tokens(pairs: &[(&str, &str)]) -> Vec<Token> {
        pairs
            .iter()
            .map(|(name, lexeme)| Token {
                name: name.to_string(),
                lexeme: lexeme.to_string(),
            })
            .collect()
    }

    #[test]
    fn single_rule_whole_match() {
        let lexer = Lexer::new(spec(&[("TOKEN", "abbcs")])).unwrap();
        assert_eq!(lexer.tokenize("abbcs").unwrap(), tokens(&[("TOKEN", "abbcs")]));
    }

    #[test]
    fn repeated_rule_emits_repeated_tokens() {
        let lexer = Lexer::new(spec(&[("WS", " ")])).unwrap();
        assert_eq!(
            lexer.tokenize("   ").unwrap(),
            tokens(&[("WS", " "), ("WS", " "), ("WS", " ")])
        );
    }

    #[test]
    fn maximal_munch_prefers_longest_match() {
        let lexer = Lexer::new(spec(&[("IF", "if"), ("ID", "[a-z]+")])).unwrap();
        assert_eq!(lexer.tokenize("ifier").unwrap(), tokens(&[("ID", "ifier")]));
    }

    #[test]
    fn ordered_tie_break_prefers_earlier_rule() {
        let lexer = Lexer::new(spec(&[("IF", "if"), ("ID", "[a-z]+")])).unwrap();
        assert_eq!(lexer.tokenize("if").unwrap(), tokens(&[("IF", "if")]));
    }

    #[test]
    fn distinct_rules_interleave() {
        let lexer = Lexer::new(spec(&[("DIGIT", "[0-9]"), ("PLUS", "\\+")])).unwrap();
        assert_eq!(
            lexer.tokenize("1+2").unwrap(),
            tokens(&[("DIGIT", "1"), ("PLUS", "+"), ("DIGIT", "2")])
        );
    }

    #[test]
    fn unrecognized_input_reports_character_and_line() {
        let lexer = Lexer::new(spec(&[("A", "a+"), ("B", "b")])).unwrap();
        let err = lexer.tokenize("aab?").unwrap_err();
        assert_eq!(err, LexError::UnrecognizedInput { line: 0, column: 3 });
    }

    #[test]
    fn unrecognized_input_after_a_newline_counts_column_within_the_line() {
        let lexer = Lexer::new(spec(&[("NL", "\n"), ("X", "x")])).unwrap();
        let err = lexer.tokenize("x\nx!").unwrap_err();
        assert_eq!(err, LexError::UnrecognizedInput { line: 1, column: 1 });
    }

    #[test]
    fn eps_keyword_matches_the_empty_string() {
        let lexer = Lexer::new(spec(&[("EPS", "eps"), ("E", "e")])).unwrap();
        assert_eq!(lexer.tokenize("e").unwrap(), tokens(&[("E", "e")]));
    }

    #[test]
    fn unexpected_end_of_input_when_no_rule_ever_matches() {
        let lexer = Lexer::new(spec(&[("A", "aa")])).unwrap();
        let err = lexer.tokenize("a").unwrap_err();
        assert_eq!(err, LexError::UnexpectedEndOfInput { line: 0 });
    }

    #[test]
    fn invalid_rule_identifies_its_index_and_name() {
        let err = Lexer::new(spec(&[("GOOD", "a"), ("BAD", "(a")])).unwrap_err();
        assert_eq!(err.rule_index, 1);
        assert_eq!(err.name, "BAD");
    }
}
