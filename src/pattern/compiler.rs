//! Naming scheme compiler
//!
//! This module turns the two-line scheme text into a [`CompiledSpec`].

use std::collections::BTreeSet;

use log::debug;

use crate::errors::{CompileError, PatternLine};

use super::lexer::tokenize;
use super::token::{Pattern, Token};

/// A compiled naming scheme
///
/// Holds the input pattern, the output pattern and the set of variables the
/// input pattern declares. Every variable of the output pattern is guaranteed
/// to be declared by the input pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledSpec {
    input: Pattern,
    output: Pattern,
    variables: BTreeSet<String>,
}

impl CompiledSpec {
    pub fn input(&self) -> &Pattern {
        &self.input
    }

    pub fn output(&self) -> &Pattern {
        &self.output
    }

    /// Variables declared by the input pattern
    pub fn variables(&self) -> &BTreeSet<String> {
        &self.variables
    }

    pub fn declares(&self, name: &str) -> bool {
        self.variables.contains(name)
    }
}

/// Compiles the full text of a naming scheme
///
/// The text must hold exactly two lines: the input pattern and the output
/// pattern. Trailing blank lines and `\r\n` line endings are tolerated.
///
/// # Errors
/// * [`CompileError::MalformedSpec`] if the text does not have two lines
/// * Any error of [`compile_lines`]
pub fn compile(spec_text: &str) -> Result<CompiledSpec, CompileError> {
    let mut lines: Vec<&str> = spec_text.lines().collect();
    while lines.last().is_some_and(|line| line.trim().is_empty()) {
        lines.pop();
    }

    match lines.as_slice() {
        [input, output] => compile_lines(input, output),
        _ => Err(CompileError::MalformedSpec { lines: lines.len() }),
    }
}

/// Compiles an input and an output pattern line
///
/// # Errors
/// * [`CompileError::UnterminatedVariable`] if either line ends inside a placeholder
/// * [`CompileError::AdjacentVariables`] if the input pattern has two placeholders in a row
/// * [`CompileError::UndeclaredOutputVariable`] if the output pattern uses an unknown name
pub fn compile_lines(input: &str, output: &str) -> Result<CompiledSpec, CompileError> {
    let input = tokenize(input, PatternLine::Input)?;
    reject_adjacent_variables(&input)?;

    let variables: BTreeSet<String> = input.variables().map(str::to_string).collect();

    let output = tokenize(output, PatternLine::Output)?;
    if let Some(name) = output.variables().find(|name| !variables.contains(*name)) {
        return Err(CompileError::UndeclaredOutputVariable(name.to_string()));
    }

    debug!(
        "Compiled naming scheme '{input}' -> '{output}' with variables {variables:?}"
    );

    Ok(CompiledSpec {
        input,
        output,
        variables,
    })
}

fn reject_adjacent_variables(pattern: &Pattern) -> Result<(), CompileError> {
    for pair in pattern.tokens().windows(2) {
        if let [Token::Variable(first), Token::Variable(second)] = pair {
            return Err(CompileError::AdjacentVariables {
                first: first.clone(),
                second: second.clone(),
            });
        }
    }
    Ok(())
}
