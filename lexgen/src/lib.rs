//! # lexgen
//!
//! `lexgen` compiles an ordered list of `(token-name, regex)` rules into a
//! single deterministic finite automaton and uses it to tokenize input
//! strings under maximal munch, breaking ties between equally-long matches
//! in favor of whichever rule appears earliest in the list.
//!
//! ## Pipeline
//!
//! 1. [regex::parser::parse] parses each rule's regex source into a
//!    [regex::ast::RegexTree] by recursive descent.
//! 2. [regex::ast::RegexTree::compile] turns that tree into an
//!    [nfa::Nfa] via Thompson construction.
//! 3. [nfa::Nfa::union] merges all the per-rule NFAs under a single start
//!    state, recording which rule each accepting state belongs to.
//! 4. [nfa::Nfa::to_dfa] performs subset construction to produce the
//!    [dfa::Dfa] that is actually scanned.
//! 5. [lexer::Lexer::tokenize] runs maximal munch over that DFA.
//!
//! ## Usage
//!
//! ```rust
//! use lexgen::lexer::Lexer;
//!
//! let spec = vec![
//!     ("IF".to_string(), "if".to_string()),
//!     ("ID".to_string(), "[a-z]+".to_string()),
//!     ("WS".to_string(), " ".to_string()),
//! ];
//! let lexer = Lexer::new(spec).unwrap();
//! let tokens = lexer.tokenize("if foo").unwrap();
//! assert_eq!(tokens[0].name, "IF");
//! assert_eq!(tokens[2].name, "ID");
//! assert_eq!(tokens[2].lexeme, "foo");
//! ```
//!
//! ## Regex surface
//!
//! Literal characters match themselves (including a literal space); `\x`
//! escapes any character, including metacharacters; `[a-b]` matches any
//! single character in that inclusive range; `eps` denotes the empty
//! string; `(...)` groups; `|` alternates; `*`, `+` and `?` are postfix
//! Kleene star, one-or-more and optional, and may be stacked.

pub mod dfa;
pub mod lexer;
pub mod nfa;
pub mod regex;
