//! Configuration module
//!
//! This module contains the settings loader and the naming scheme file handling.

pub mod settings;
pub mod spec_file;

pub use settings::{Settings, load_settings, load_settings_or_default};
pub use spec_file::{initialize_spec, load_or_initialize, load_spec};
