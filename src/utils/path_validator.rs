use crate::error::{Result, TfmvError};
use std::path::{Path, PathBuf};

/// Checks the input path before it is read and overwritten.
pub struct PathValidator;

impl PathValidator {
    /// Ensures the path exists and points at a regular file.
    ///
    /// The returned path is the one given, not the canonical form, so the
    /// file is written back through the same (possibly symlinked) name.
    pub fn validate_input_file(path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();

        let canonical = path.canonicalize().map_err(|e| {
            TfmvError::InvalidInput(format!("Invalid path '{}': {e}", path.display()))
        })?;

        if !canonical.is_file() {
            return Err(TfmvError::InvalidInput(format!(
                "Path '{}' is not a file",
                path.display()
            )));
        }

        Ok(path.to_path_buf())
    }
}
