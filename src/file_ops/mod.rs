//! File operations module
//!
//! This module contains components for resolving destinations and moving files.

mod actions;

pub use actions::{FileActionResult, destination_for, perform_move};
