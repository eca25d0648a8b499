use std::fs::create_dir_all;
use std::path::PathBuf;

use directories::ProjectDirs;
use shellexpand::tilde;

use crate::constants::{APPLICATION, ORGANIZATION, QUALIFIER};
use crate::errors::{Result, file_operation_error, generic_error};

/// Expands a leading `~` to the home directory
pub fn expand_path(raw: &str) -> PathBuf {
    PathBuf::from(tilde(raw).to_string())
}

/// Returns the platform project directories, creating the config directory if needed
pub(crate) fn find_project_folder() -> Result<ProjectDirs> {
    let folder = ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
        .ok_or_else(|| generic_error("Failed to determine project directories"))?;

    if !folder.config_dir().exists() {
        create_dir_all(folder.config_dir()).map_err(|e| {
            file_operation_error(e, folder.config_dir().to_path_buf(), "create directory")
        })?;
    }
    Ok(folder)
}
