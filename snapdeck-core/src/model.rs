use serde::{Deserialize, Serialize};

/// A single photo record as returned by the list endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    /// Server identity (records without one never match each other)
    #[serde(default)]
    pub id: Option<String>,
    /// Display name, also the name used by the delete endpoint
    pub name: String,
    /// Album the photo belongs to
    pub album: String,
    /// Image payload or URL
    #[serde(default)]
    pub raw: String,
}

impl Photo {
    pub fn new(id: impl Into<String>, name: impl Into<String>, album: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: name.into(),
            album: album.into(),
            raw: String::new(),
        }
    }

    /// Two photos are the same item only if both carry the same id
    pub fn same_identity(&self, other: &Photo) -> bool {
        matches!((&self.id, &other.id), (Some(a), Some(b)) if a == b)
    }

    /// Whether `raw` points at a remote resource rather than inline data
    pub fn raw_is_url(&self) -> bool {
        self.raw.starts_with("http://") || self.raw.starts_with("https://")
    }
}

/// Body of `POST /photos/list`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRequest {
    pub skip: usize,
    pub limit: usize,
}

/// Response of `POST /photos/list`
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ListResponse {
    #[serde(default)]
    pub documents: Vec<Photo>,
    #[serde(default)]
    pub count: usize,
    #[serde(default)]
    pub skip: usize,
}

impl ListResponse {
    pub fn new(documents: Vec<Photo>, skip: usize) -> Self {
        Self {
            count: documents.len(),
            documents,
            skip,
        }
    }
}
