use std::path::{Path, PathBuf};

use crate::config::ALBUMS;
use crate::{Result, SnapdeckError};

/// File extensions the upload form accepts
pub const ACCEPTED_EXTENSIONS: [&str; 3] = ["png", "jpeg", "gif"];

/// A validated upload, ready to be sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadJob {
    pub album: String,
    pub files: Vec<PathBuf>,
}

impl UploadJob {
    pub fn label(&self) -> &'static str {
        crate::delete::photo_label(self.files.len())
    }

    pub fn success_message(&self) -> String {
        let label = self.label();
        let mut chars = label.chars();
        let capitalized = match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
            None => String::new(),
        };
        format!("{} uploaded successfully!", capitalized)
    }

    pub fn failure_message(&self) -> String {
        format!("Failed to upload the {}", self.label())
    }
}

/// Whether a path has one of the accepted image extensions
pub fn is_accepted(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| {
            ACCEPTED_EXTENSIONS
                .iter()
                .any(|accepted| e.eq_ignore_ascii_case(accepted))
        })
        .unwrap_or(false)
}

/// Files and album chosen in the upload dialog
#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    files: Vec<PathBuf>,
    album: Option<usize>,
}

impl UploadForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn album(&self) -> Option<&'static str> {
        self.album.map(|idx| ALBUMS[idx])
    }

    /// Add a file; duplicates are ignored
    pub fn add_file(&mut self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        if !is_accepted(&path) {
            return Err(SnapdeckError::UnsupportedFile(path));
        }
        if !path.is_file() {
            return Err(SnapdeckError::FileNotFound(path));
        }
        if !self.files.contains(&path) {
            self.files.push(path);
        }
        Ok(())
    }

    pub fn remove_file(&mut self, index: usize) -> Option<PathBuf> {
        (index < self.files.len()).then(|| self.files.remove(index))
    }

    pub fn remove_last(&mut self) -> Option<PathBuf> {
        self.files.pop()
    }

    /// Select an album by name; unknown names are ignored
    pub fn select_album(&mut self, name: &str) -> bool {
        match ALBUMS.iter().position(|a| *a == name) {
            Some(idx) => {
                self.album = Some(idx);
                true
            }
            None => false,
        }
    }

    pub fn next_album(&mut self) {
        self.album = Some(match self.album {
            Some(idx) => (idx + 1) % ALBUMS.len(),
            None => 0,
        });
    }

    pub fn prev_album(&mut self) {
        self.album = Some(match self.album {
            Some(0) | None => ALBUMS.len() - 1,
            Some(idx) => idx - 1,
        });
    }

    /// Validate the form into an upload job
    pub fn prepare(&self) -> Result<UploadJob> {
        let album = self.album().ok_or(SnapdeckError::NoAlbumSelected)?;
        if self.files.is_empty() {
            return Err(SnapdeckError::NoFiles);
        }
        Ok(UploadJob {
            album: album.to_string(),
            files: self.files.clone(),
        })
    }

    pub fn clear(&mut self) {
        self.files.clear();
        self.album = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_accepted_extensions() {
        assert!(is_accepted(Path::new("a.png")));
        assert!(is_accepted(Path::new("b.JPEG")));
        assert!(is_accepted(Path::new("dir/c.gif")));
        assert!(!is_accepted(Path::new("d.txt")));
        assert!(!is_accepted(Path::new("noext")));
    }

    #[test]
    fn test_add_and_remove_files() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.png");
        let b = temp.path().join("b.gif");
        fs::write(&a, b"png").unwrap();
        fs::write(&b, b"gif").unwrap();

        let mut form = UploadForm::new();
        form.add_file(&a).unwrap();
        form.add_file(&b).unwrap();
        form.add_file(&a).unwrap();
        assert_eq!(form.files(), &[a.clone(), b.clone()]);

        assert_eq!(form.remove_file(0), Some(a));
        assert_eq!(form.remove_file(5), None);
        assert_eq!(form.remove_last(), Some(b));
        assert!(form.files().is_empty());
    }

    #[test]
    fn test_rejects_bad_files() {
        let temp = TempDir::new().unwrap();
        let txt = temp.path().join("notes.txt");
        fs::write(&txt, b"hi").unwrap();

        let mut form = UploadForm::new();
        assert!(matches!(
            form.add_file(&txt),
            Err(SnapdeckError::UnsupportedFile(_))
        ));
        assert!(matches!(
            form.add_file(temp.path().join("missing.png")),
            Err(SnapdeckError::FileNotFound(_))
        ));
        assert!(form.files().is_empty());
    }

    #[test]
    fn test_prepare_requires_album_then_files() {
        let temp = TempDir::new().unwrap();
        let a = temp.path().join("a.png");
        fs::write(&a, b"png").unwrap();

        let mut form = UploadForm::new();
        assert!(matches!(form.prepare(), Err(SnapdeckError::NoAlbumSelected)));

        assert!(form.select_album("Nature"));
        assert!(matches!(form.prepare(), Err(SnapdeckError::NoFiles)));

        form.add_file(&a).unwrap();
        let job = form.prepare().unwrap();
        assert_eq!(job.album, "Nature");
        assert_eq!(job.files, vec![a]);
        assert_eq!(job.success_message(), "Photo uploaded successfully!");
        assert_eq!(job.failure_message(), "Failed to upload the photo");

        form.clear();
        assert!(form.album().is_none());
        assert!(form.files().is_empty());
    }

    #[test]
    fn test_album_cycling() {
        let mut form = UploadForm::new();
        assert!(!form.select_album("Work"));
        form.next_album();
        assert_eq!(form.album(), Some("Travel"));
        form.prev_album();
        assert_eq!(form.album(), Some("Other"));
        form.next_album();
        assert_eq!(form.album(), Some("Travel"));
    }

    #[test]
    fn test_plural_messages() {
        let job = UploadJob {
            album: "Food".to_string(),
            files: vec![PathBuf::from("a.png"), PathBuf::from("b.png")],
        };
        assert_eq!(job.success_message(), "Photos uploaded successfully!");
        assert_eq!(job.failure_message(), "Failed to upload the photos");
    }
}
