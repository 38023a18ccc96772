use thiserror::Error;

/// An error produced while parsing a regular expression into an AST.
///
/// Each variant carries the character offset in the regex source at which
/// the problem was detected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegexError {
    #[error("unbalanced parenthesis at offset {offset}")]
    UnbalancedParen { offset: usize },

    #[error("malformed character class at offset {offset}")]
    MalformedCharClass { offset: usize },

    #[error("operator with no operand at offset {offset}")]
    DanglingOperator { offset: usize },

    #[error("dangling escape at offset {offset}")]
    DanglingEscape { offset: usize },
}
