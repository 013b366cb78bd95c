/// Locating the fetch routine on disk.
use std::path::{Path, PathBuf};

use super::FetchError;

/// Path of the fetch routine relative to the repository root.
#[must_use]
pub fn default_script() -> PathBuf {
    ["src", "app", "api", "python", "e-z.py"].iter().collect()
}

/// Resolve the root directory the script path is relative to.
///
/// The current working directory is always resolved; a relative `root` is
/// taken relative to it, an absolute one replaces it.
///
/// # Errors
///
/// Returns `FetchError::Environment` if the working directory is unavailable.
pub fn resolve_root(root: Option<&Path>) -> Result<PathBuf, FetchError> {
    let cwd = std::env::current_dir().map_err(FetchError::Environment)?;
    Ok(match root {
        Some(root) => cwd.join(root),
        None => cwd,
    })
}

/// Join the script onto the root. Absolute scripts are returned unchanged.
#[must_use]
pub fn script_path(root: &Path, script: Option<&Path>) -> PathBuf {
    match script {
        Some(script) => root.join(script),
        None => root.join(default_script()),
    }
}
