use serde::{Serialize, Serializer, ser::SerializeStruct};

use crate::model::Photo;

/// Names to delete from one album
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteGroup {
    pub album: String,
    /// Photo names in selection order
    pub names: Vec<String>,
}

impl DeleteGroup {
    /// Comma-joined names, as the delete endpoint expects them
    pub fn documents(&self) -> String {
        self.names.join(",")
    }
}

impl Serialize for DeleteGroup {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("DeleteGroup", 2)?;
        state.serialize_field("album", &self.album)?;
        state.serialize_field("documents", &self.documents())?;
        state.end()
    }
}

/// Group photos by album, keeping first-encounter order of albums and names
pub fn group_by_album(photos: &[Photo]) -> Vec<DeleteGroup> {
    photos.iter().fold(Vec::new(), |mut groups, photo| {
        match groups.iter().position(|g| g.album == photo.album) {
            Some(idx) => groups[idx].names.push(photo.name.clone()),
            None => groups.push(DeleteGroup {
                album: photo.album.clone(),
                names: vec![photo.name.clone()],
            }),
        }
        groups
    })
}

/// "photo" or "photos"
pub fn photo_label(count: usize) -> &'static str {
    if count == 1 { "photo" } else { "photos" }
}

/// A grouped delete waiting for the user to accept it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteConfirmation {
    pub count: usize,
    pub groups: Vec<DeleteGroup>,
}

impl DeleteConfirmation {
    /// Build a confirmation for the selection; `None` when nothing is selected
    pub fn for_selection(selection: &[Photo]) -> Option<Self> {
        if selection.is_empty() {
            return None;
        }
        Some(Self {
            count: selection.len(),
            groups: group_by_album(selection),
        })
    }

    pub fn label(&self) -> &'static str {
        photo_label(self.count)
    }

    /// "this 1 photo" / "these 3 photos"
    pub fn phrase(&self) -> String {
        let demonstrative = if self.count == 1 { "this" } else { "these" };
        format!("{} {} {}", demonstrative, self.count, self.label())
    }

    pub fn title(&self) -> String {
        format!("Delete {}", self.label())
    }

    pub fn prompt(&self) -> String {
        format!("Are you sure you want to delete {}?", self.phrase())
    }

    pub fn success_message(&self) -> String {
        format!("Successfully deleted {} {}!", self.count, self.label())
    }

    pub fn failure_message(&self) -> String {
        format!("Failed to delete the {}!", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn photo(name: &str, album: &str) -> Photo {
        Photo::new(name, name, album)
    }

    #[test]
    fn test_group_by_album() {
        let photos = vec![photo("x", "A"), photo("y", "A"), photo("z", "B")];
        let groups = group_by_album(&photos);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].album, "A");
        assert_eq!(groups[0].names, vec!["x", "y"]);
        assert_eq!(groups[1].album, "B");
        assert_eq!(groups[1].documents(), "z");

        let payload = serde_json::to_value(&groups).unwrap();
        assert_eq!(
            payload,
            serde_json::json!([
                {"album": "A", "documents": "x,y"},
                {"album": "B", "documents": "z"}
            ])
        );
    }

    #[test]
    fn test_group_by_album_interleaved() {
        let photos = vec![
            photo("1", "Food"),
            photo("2", "Travel"),
            photo("3", "Food"),
            photo("4", "Travel"),
            photo("5", "Other"),
        ];
        let groups = group_by_album(&photos);
        let albums: Vec<_> = groups.iter().map(|g| g.album.as_str()).collect();
        assert_eq!(albums, vec!["Food", "Travel", "Other"]);
        assert_eq!(groups[0].documents(), "1,3");
        assert_eq!(groups[1].documents(), "2,4");
    }

    #[test]
    fn test_group_by_album_empty() {
        assert!(group_by_album(&[]).is_empty());
    }

    #[test]
    fn test_pluralization() {
        let one = DeleteConfirmation::for_selection(&[photo("a", "A")]).unwrap();
        assert_eq!(one.phrase(), "this 1 photo");
        assert_eq!(one.prompt(), "Are you sure you want to delete this 1 photo?");
        assert_eq!(one.title(), "Delete photo");
        assert_eq!(one.success_message(), "Successfully deleted 1 photo!");

        let three =
            DeleteConfirmation::for_selection(&[photo("a", "A"), photo("b", "A"), photo("c", "B")])
                .unwrap();
        assert_eq!(three.phrase(), "these 3 photos");
        assert_eq!(three.failure_message(), "Failed to delete the photos!");
        assert_eq!(three.groups.len(), 2);
    }

    #[test]
    fn test_empty_selection_has_no_confirmation() {
        assert!(DeleteConfirmation::for_selection(&[]).is_none());
    }
}
