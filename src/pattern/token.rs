//! Pattern tokens
//!
//! A pattern line compiles into an ordered sequence of literal runs and
//! `<name>` placeholders.

use std::fmt;
use std::slice::Iter;

use crate::constants::{ESCAPE, VARIABLE_CLOSE, VARIABLE_OPEN};

/// One piece of a compiled pattern line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Text that appears verbatim (escapes already resolved)
    Literal(String),
    /// A `<name>` placeholder
    Variable(String),
}

impl Token {
    /// Returns the variable name if this token is a placeholder
    pub fn variable_name(&self) -> Option<&str> {
        match self {
            Token::Variable(name) => Some(name),
            Token::Literal(_) => None,
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Literal(text) => {
                for c in text.chars() {
                    if c == VARIABLE_OPEN {
                        write!(f, "{ESCAPE}")?;
                    }
                    write!(f, "{c}")?;
                }
                Ok(())
            }
            Token::Variable(name) => write!(f, "{VARIABLE_OPEN}{name}{VARIABLE_CLOSE}"),
        }
    }
}

/// An ordered, immutable sequence of tokens
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    tokens: Vec<Token>,
}

impl Pattern {
    pub fn new(tokens: Vec<Token>) -> Self {
        Pattern { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> Iter<'_, Token> {
        self.tokens.iter()
    }

    /// Names of all placeholders, in order of appearance (duplicates included)
    pub fn variables(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().filter_map(Token::variable_name)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

impl<'a> IntoIterator for &'a Pattern {
    type Item = &'a Token;
    type IntoIter = Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

/// Writes the pattern back in scheme syntax, escaping literal `<`
impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tokens.iter().try_for_each(|token| write!(f, "{token}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variables_in_order() {
        let pattern = Pattern::new(vec![
            Token::Variable("show".to_string()),
            Token::Literal(" - ".to_string()),
            Token::Variable("episode".to_string()),
        ]);

        let names: Vec<&str> = pattern.variables().collect();
        assert_eq!(names, vec!["show", "episode"]);
        assert_eq!(pattern.len(), 3);
        assert!(!pattern.is_empty());
    }

    #[test]
    fn test_display_escapes_literal_open() {
        let pattern = Pattern::new(vec![
            Token::Literal("id-<x>-".to_string()),
            Token::Variable("n".to_string()),
        ]);

        assert_eq!(pattern.to_string(), r"id-\<x>-<n>");
    }

    #[test]
    fn test_empty_pattern() {
        let pattern = Pattern::default();
        assert!(pattern.is_empty());
        assert_eq!(pattern.to_string(), "");
        assert_eq!(pattern.variables().count(), 0);
    }
}
