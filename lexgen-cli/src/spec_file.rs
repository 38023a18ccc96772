//! Spec-file format: one rule per line, `name regex`, blank lines and
//! `#`-prefixed comment lines ignored.

use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SpecFileError {
    #[error("error reading {0:?}: {1}")]
    Read(std::path::PathBuf, std::io::Error),
    #[error("line {line}: expected \"NAME regex\", found {text:?}")]
    Malformed { line: usize, text: String },
}

/// Reads and parses a spec file into the ordered `(name, regex)` list
/// [lexgen::lexer::Lexer::new] expects.
pub fn load(path: &Path) -> Result<Vec<(String, String)>, SpecFileError> {
    let contents =
        fs::read_to_string(path).map_err(|e| SpecFileError::Read(path.to_path_buf(), e))?;
    parse(&contents)
}

fn parse(contents: &str) -> Result<Vec<(String, String)>, SpecFileError> {
    let mut rules = Vec::new();
    for (idx, raw_line) in contents.lines().enumerate() {
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let (name, regex) = line.split_once(char::is_whitespace).ok_or_else(|| {
            SpecFileError::Malformed {
                line: idx + 1,
                text: line.to_string(),
            }
        })?;
        rules.push((name.to_string(), regex.trim_start().to_string()));
    }
    Ok(rules)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rules_and_skips_comments_and_blanks() {
        let rules = parse("# a comment\nIF if\n\nID [a-z]+\n").unwrap();
        assert_eq!(
            rules,
            vec![
                ("IF".to_string(), "if".to_string()),
                ("ID".to_string(), "[a-z]+".to_string()),
            ]
        );
    }

    #[test]
    fn rejects_a_line_with_no_regex() {
        let err = parse("IF\n").unwrap_err();
        assert!(matches!(err, SpecFileError::Malformed { line: 1, .. }));
    }
}
