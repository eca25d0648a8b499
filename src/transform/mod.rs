//! Transformation module
//!
//! This module contains the matcher and renderer that turn a filename into its new relative path.

mod transformer;

pub use transformer::{Bindings, MatchMode, apply, extract, render, split_extension};
