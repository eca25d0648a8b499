//! Naming scheme module
//!
//! This module contains the lexer and compiler for the two-line naming scheme.

mod compiler;
mod lexer;
mod token;

pub use compiler::{CompiledSpec, compile, compile_lines};
pub use lexer::tokenize;
pub use token::{Pattern, Token};
