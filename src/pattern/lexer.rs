//! Pattern line lexer
//!
//! Splits one line of a naming scheme into literal runs and `<name>`
//! placeholders with a single forward scan.
//!
//! `\<` is resolved while scanning: it adds a literal `<` to the current run
//! and the backslash is dropped. A backslash before anything else is kept.
//! Inside a placeholder every character up to the next `>` belongs to the name.

use std::mem::take;

use log::trace;

use crate::constants::{ESCAPE, VARIABLE_CLOSE, VARIABLE_OPEN};
use crate::errors::{CompileError, PatternLine};

use super::token::{Pattern, Token};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LexState {
    Idle,
    InVariable,
    InLiteral,
}

/// Tokenizes a single pattern line
///
/// # Arguments
/// * `line` - The raw pattern text
/// * `which` - Which scheme line is being read, used for error reporting
///
/// # Errors
/// Returns [`CompileError::UnterminatedVariable`] if the line ends inside a placeholder
pub fn tokenize(line: &str, which: PatternLine) -> Result<Pattern, CompileError> {
    let mut tokens = Vec::new();
    let mut state = LexState::Idle;
    let mut buffer = String::new();
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        state = match state {
            LexState::InVariable if c == VARIABLE_CLOSE => {
                tokens.push(Token::Variable(take(&mut buffer)));
                LexState::Idle
            }
            LexState::InVariable => {
                buffer.push(c);
                LexState::InVariable
            }
            LexState::Idle | LexState::InLiteral => {
                if c == ESCAPE && chars.peek() == Some(&VARIABLE_OPEN) {
                    chars.next();
                    buffer.push(VARIABLE_OPEN);
                    LexState::InLiteral
                } else if c == VARIABLE_OPEN {
                    if !buffer.is_empty() {
                        tokens.push(Token::Literal(take(&mut buffer)));
                    }
                    LexState::InVariable
                } else {
                    buffer.push(c);
                    LexState::InLiteral
                }
            }
        };
    }

    match state {
        LexState::InVariable => {
            return Err(CompileError::UnterminatedVariable {
                line: which,
                name: buffer,
            });
        }
        LexState::InLiteral if !buffer.is_empty() => tokens.push(Token::Literal(buffer)),
        _ => {}
    }

    trace!("Tokenized {which}: {tokens:?}");

    Ok(Pattern::new(tokens))
}
