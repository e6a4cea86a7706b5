//! Error types for folio

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the folio application
#[derive(Debug, Error)]
pub enum FolioError {
    #[error("No profile found from: {0}")]
    ProfileNotFound(PathBuf),

    #[error("Unknown project: {0}")]
    ProjectNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl FolioError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FolioError::ProfileNotFound(_) => 2,
            FolioError::ProjectNotFound(_) => 3,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            FolioError::ProfileNotFound(path) => {
                format!(
                    "No folio.toml found searching upward from: {}\n\n\
                    Suggestions:\n\
                    • Run 'folio init' to create a starter profile here\n\
                    • Navigate to a directory containing a folio.toml\n\
                    • Set FOLIO_ROOT environment variable to your profile directory",
                    path.display()
                )
            }
            FolioError::ProjectNotFound(id) => {
                format!(
                    "Unknown project: '{}'\n\n\
                    Suggestions:\n\
                    • Run 'folio projects' to see available project identifiers\n\
                    • Project identifiers are case-sensitive",
                    id
                )
            }
            FolioError::TomlDeserialize(e) => {
                format!(
                    "Could not parse folio.toml: {}\n\n\
                    Suggestions:\n\
                    • Check the TOML syntax near the reported location\n\
                    • Compare against a starter profile from 'folio init'",
                    e
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using FolioError
pub type Result<T> = std::result::Result<T, FolioError>;
