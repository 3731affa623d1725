//! Base directory resolution for the log directory

use crate::errors::{LogifyError, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Marker file identifying a project root when walking upwards.
pub const DEFAULT_ROOT_MARKER: &str = "Cargo.toml";

/// Strategy for locating the directory the log directory is created under.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "strategy", rename_all = "snake_case")]
pub enum BaseDir {
    /// Use this path as is.
    Explicit { path: PathBuf },
    /// Walk upwards from `start` (default: the current directory) to the
    /// nearest directory containing `marker`.
    ProjectRoot {
        #[serde(default)]
        start: Option<PathBuf>,
        #[serde(default = "default_marker")]
        marker: String,
    },
}

fn default_marker() -> String {
    DEFAULT_ROOT_MARKER.to_string()
}

impl Default for BaseDir {
    fn default() -> Self {
        BaseDir::ProjectRoot {
            start: None,
            marker: default_marker(),
        }
    }
}

impl BaseDir {
    pub fn explicit(path: impl Into<PathBuf>) -> Self {
        BaseDir::Explicit { path: path.into() }
    }

    /// Resolve to a concrete directory.
    ///
    /// # Errors
    ///
    /// `RootNotFound` when the project-root walk finds no marker, `Io` when
    /// the current directory cannot be read.
    pub fn resolve(&self) -> Result<PathBuf> {
        match self {
            BaseDir::Explicit { path } => Ok(path.clone()),
            BaseDir::ProjectRoot { start, marker } => {
                let start = match start {
                    Some(start) => start.clone(),
                    None => std::env::current_dir().map_err(|e| LogifyError::io(".", e))?,
                };
                find_project_root(&start, marker)
            }
        }
    }
}

/// Find the nearest ancestor of `start` (inclusive) containing `marker`.
///
/// The filesystem root itself is never considered a project root.
///
/// # Errors
///
/// `RootNotFound` if no such ancestor exists.
pub fn find_project_root(start: &Path, marker: &str) -> Result<PathBuf> {
    let absolute = if start.is_absolute() {
        start.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| LogifyError::io(start, e))?
            .join(start)
    };

    let mut current = absolute.as_path();
    while let Some(parent) = current.parent() {
        if current.join(marker).exists() {
            return Ok(current.to_path_buf());
        }
        current = parent;
    }

    Err(LogifyError::RootNotFound {
        start: absolute,
        marker: marker.to_string(),
    })
}

/// Create `dir` and any missing parents. Existing directories are left
/// untouched.
///
/// # Errors
///
/// `Io` if the directory cannot be created.
pub fn ensure_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| LogifyError::io(dir, e))
}
