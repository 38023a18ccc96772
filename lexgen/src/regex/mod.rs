//! # Regular expressions
//!
//! A rule's regex source is parsed by [parser::parse] into a [ast::RegexTree],
//! then compiled by [ast::RegexTree::compile] into an [Nfa](crate::nfa::Nfa)
//! via Thompson construction. See the crate's regex surface table for the
//! accepted syntax.

pub mod ast;
pub mod error;
pub mod parser;

pub use ast::RegexTree;
pub use error::RegexError;
pub use parser::parse;
