//! Profile storage
//!
//! The profile lives in a single `folio.toml` file. Commands locate it via
//! the `FOLIO_ROOT` environment variable or by walking up from the current
//! directory.

use crate::domain::Profile;
use crate::error::{FolioError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name the store looks for
pub const PROFILE_FILE: &str = "folio.toml";

/// Abstract store for profile data
pub trait ProfileStore {
    /// Directory containing the profile file
    fn root(&self) -> &Path;

    /// Load the profile from folio.toml
    fn load_profile(&self) -> Result<Profile>;

    /// Save the profile to folio.toml
    fn save_profile(&self, profile: &Profile) -> Result<()>;

    /// Check whether a folio.toml exists at the root
    fn is_initialized(&self) -> bool;
}

/// File system implementation of ProfileStore
#[derive(Debug, Clone)]
pub struct FileSystemStore {
    pub root: PathBuf,
}

impl FileSystemStore {
    /// Create a store rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemStore { root }
    }

    /// Discover the profile directory.
    /// First checks the FOLIO_ROOT environment variable, then walks up from
    /// the current directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("FOLIO_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_profile(&path) {
                return Ok(FileSystemStore::new(path));
            } else {
                return Err(FolioError::Config(format!(
                    "FOLIO_ROOT is set to '{}' but no {} found there. \
                    Run 'folio init' in that directory or unset FOLIO_ROOT.",
                    path.display(),
                    PROFILE_FILE
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the profile directory by walking up from a starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_profile(&current) {
                return Ok(FileSystemStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(FolioError::ProfileNotFound(start.to_path_buf()));
                }
            }
        }
    }

    /// Full path to the profile file
    pub fn profile_path(&self) -> PathBuf {
        self.root.join(PROFILE_FILE)
    }

    fn has_profile(path: &Path) -> bool {
        path.join(PROFILE_FILE).is_file()
    }
}

impl ProfileStore for FileSystemStore {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_profile(&self) -> Result<Profile> {
        let contents = fs::read_to_string(self.profile_path()).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                FolioError::ProfileNotFound(self.root.clone())
            } else {
                FolioError::Io(e)
            }
        })?;

        Ok(toml::from_str(&contents)?)
    }

    fn save_profile(&self, profile: &Profile) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root)?;
        }

        let contents = toml::to_string_pretty(profile)?;
        fs::write(self.profile_path(), contents)?;

        Ok(())
    }

    fn is_initialized(&self) -> bool {
        Self::has_profile(&self.root)
    }
}
