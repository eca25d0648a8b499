//! Naming scheme file handling
//!
//! This module loads the two-line naming scheme file, or asks for both lines
//! on first run and stores them for the next run.

use std::fs;
use std::io::{self, BufRead, ErrorKind, Write};
use std::path::Path;

use anyhow::{Result, anyhow};
use log::{debug, info, warn};

use crate::constants::{INPUT_PROMPT, OUTPUT_PROMPT};
use crate::errors::{self, SpecLoadError, file_operation_error};
use crate::pattern::{CompiledSpec, compile, compile_lines};

/// Reads and compiles an existing naming scheme file
///
/// # Errors
/// * [`SpecLoadError::MissingSpecFile`] if the file does not exist
/// * [`SpecLoadError::Unreadable`] if it cannot be read as UTF-8 text
/// * A compile error if the scheme is invalid
pub fn load_spec(path: &Path) -> errors::Result<CompiledSpec> {
    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SpecLoadError::MissingSpecFile(path.to_path_buf()),
        _ => SpecLoadError::Unreadable {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    let spec = compile(&text)?;
    debug!("Loaded naming scheme from {}", path.display());

    Ok(spec)
}

/// Asks for the two pattern lines and stores them at `path`
///
/// Invalid schemes are reported and asked for again; the file is only
/// written once the scheme compiles.
///
/// # Errors
/// Returns an error if input ends before a valid scheme was entered or the
/// file cannot be written
pub fn initialize_spec<R, W>(path: &Path, reader: &mut R, writer: &mut W) -> Result<CompiledSpec>
where
    R: BufRead,
    W: Write,
{
    writeln!(
        writer,
        "No naming scheme found at {}. Let's create one.",
        path.display()
    )?;
    writeln!(
        writer,
        "Use <name> for the parts that change and \\< for a literal '<'."
    )?;

    loop {
        let input = prompt(reader, writer, INPUT_PROMPT)?;
        let output = prompt(reader, writer, OUTPUT_PROMPT)?;

        match compile_lines(&input, &output) {
            Ok(spec) => {
                save_spec(path, &input, &output)?;
                info!("Naming scheme saved to {}", path.display());
                return Ok(spec);
            }
            Err(e) => {
                warn!("Rejected naming scheme: {e}");
                writeln!(writer, "{e}. Please try again.")?;
            }
        }
    }
}

/// Loads the naming scheme at `path`, creating it interactively if it is absent
pub fn load_or_initialize<R, W>(path: &Path, reader: &mut R, writer: &mut W) -> Result<CompiledSpec>
where
    R: BufRead,
    W: Write,
{
    if path.exists() {
        Ok(load_spec(path)?)
    } else {
        initialize_spec(path, reader, writer)
    }
}

fn save_spec(path: &Path, input: &str, output: &str) -> errors::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .map_err(|e| file_operation_error(e, parent.to_path_buf(), "create directory"))?;
    }
    fs::write(path, format!("{input}\n{output}"))
        .map_err(|e| file_operation_error(e, path.to_path_buf(), "write"))
}

fn prompt<R: BufRead, W: Write>(reader: &mut R, writer: &mut W, question: &str) -> Result<String> {
    write!(writer, "{question}")?;
    writer.flush()?;

    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(anyhow!(io::Error::new(
            ErrorKind::UnexpectedEof,
            "Input ended before a naming scheme was entered",
        )));
    }

    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
