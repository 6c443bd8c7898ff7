use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapdeckError {
    #[error("Health check failed: {0}")]
    HealthCheck(String),

    #[error("Failed to fetch photos list: {0}")]
    Fetch(String),

    #[error("Failed to upload photos: {0}")]
    Upload(String),

    #[error("Failed to delete photos: {0}")]
    Delete(String),

    #[error("Please select an album!")]
    NoAlbumSelected,

    #[error("No files selected")]
    NoFiles,

    #[error("Unsupported file type: {0}")]
    UnsupportedFile(PathBuf),

    #[error("File does not exist: {0}")]
    FileNotFound(PathBuf),

    #[error("Invalid page size: {0}")]
    InvalidPageSize(usize),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SnapdeckError {
    /// Short title for error notices
    pub fn title(&self) -> &'static str {
        match self {
            SnapdeckError::HealthCheck(_) => "API error",
            SnapdeckError::NoAlbumSelected => "No album selected",
            _ => "Error",
        }
    }
}

impl From<toml::de::Error> for SnapdeckError {
    fn from(e: toml::de::Error) -> Self {
        SnapdeckError::Config(e.to_string())
    }
}

impl From<toml::ser::Error> for SnapdeckError {
    fn from(e: toml::ser::Error) -> Self {
        SnapdeckError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SnapdeckError>;
