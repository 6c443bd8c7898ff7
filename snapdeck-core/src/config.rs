use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::{Result, SnapdeckError};

/// Base URL used when neither the CLI nor the settings file provide one
pub const DEFAULT_API_URL: &str = "http://localhost:8888";

/// Page sizes selectable from the header
pub const PAGE_SIZES: [usize; 7] = [5, 10, 25, 50, 100, 250, 500];

/// Index into [`PAGE_SIZES`] used on reset
pub const DEFAULT_PAGE_SIZE_INDEX: usize = 2;

/// Page size used on reset (25)
pub const DEFAULT_PAGE_SIZE: usize = PAGE_SIZES[DEFAULT_PAGE_SIZE_INDEX];

/// Albums a photo can be uploaded into
pub const ALBUMS: [&str; 5] = ["Travel", "Personal", "Food", "Nature", "Other"];

/// Check that a page size is one of the selectable ones
pub fn validate_page_size(size: usize) -> Result<usize> {
    if PAGE_SIZES.contains(&size) {
        Ok(size)
    } else {
        Err(SnapdeckError::InvalidPageSize(size))
    }
}

/// Next larger selectable page size (saturates at the largest)
pub fn next_page_size(current: usize) -> usize {
    PAGE_SIZES
        .iter()
        .copied()
        .find(|&s| s > current)
        .unwrap_or(PAGE_SIZES[PAGE_SIZES.len() - 1])
}

/// Next smaller selectable page size (saturates at the smallest)
pub fn prev_page_size(current: usize) -> usize {
    PAGE_SIZES
        .iter()
        .rev()
        .copied()
        .find(|&s| s < current)
        .unwrap_or(PAGE_SIZES[0])
}

/// Persisted user settings (`config.toml`)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Photo service base URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_url: Option<String>,
    /// Page size used for the first fetch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
    /// Whether the delete instructions notice was dismissed for good
    #[serde(default)]
    pub hide_delete_instructions: bool,
}

impl Settings {
    /// Default settings location: `<config_dir>/snapdeck/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("snapdeck").join("config.toml"))
    }

    /// Load settings, falling back to defaults when the file is missing
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let settings: Settings = toml::from_str(&content)?;
        if let Some(size) = settings.page_size {
            validate_page_size(size)?;
        }
        Ok(settings)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or(DEFAULT_API_URL)
    }

    pub fn page_size(&self) -> usize {
        self.page_size.unwrap_or(DEFAULT_PAGE_SIZE)
    }
}
