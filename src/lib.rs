//! Show Sort
//!
//! Renames video files according to a two-line naming scheme: the first line
//! describes how existing filenames look, the second how the resulting
//! relative path should look.
//!
//! ```text
//! <show> - <season>x<episode> - <title>
//! <show>/Season <season>/<episode> - <title>
//! ```
//!
//! With this scheme `Breaking Bad - 1x05 - Pilot.mkv` becomes
//! `Breaking Bad/Season 1/05 - Pilot.mkv`.

pub mod cli;
pub mod config;
pub mod constants;
pub mod discovery;
pub mod errors;
pub mod file_ops;
pub mod logging;
pub mod pattern;
pub mod transform;
pub mod utils;
pub mod workflow;

pub mod prelude {
    pub use crate::config::{Settings, load_or_initialize, load_spec};
    pub use crate::errors::{ApplyError, CompileError, Error, Result, SpecLoadError};
    pub use crate::logging::{Verbosity, format_message, init_logger};
    pub use crate::pattern::{CompiledSpec, Pattern, Token, compile};
    pub use crate::transform::{Bindings, MatchMode, apply};
    pub use crate::workflow::{ProcessingOptions, WorkflowContext, process_files, run_batch};
}
