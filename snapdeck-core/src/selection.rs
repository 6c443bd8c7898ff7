use crate::model::Photo;

/// Ordered set of photos marked for deletion, unique by id
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    items: Vec<Photo>,
}

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove the photo if a photo with the same id is held, otherwise append it
    pub fn toggle(&mut self, photo: &Photo) {
        match self.position(photo) {
            Some(idx) => {
                self.items.remove(idx);
            }
            None => self.items.push(photo.clone()),
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Selected photos in selection order
    pub fn current(&self) -> &[Photo] {
        &self.items
    }

    pub fn contains(&self, photo: &Photo) -> bool {
        self.position(photo).is_some()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, photo: &Photo) -> Option<usize> {
        self.items.iter().position(|p| p.same_identity(photo))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_empty() {
        let mut selection = SelectionSet::new();
        let photo = Photo::new("1", "a.png", "Travel");

        selection.toggle(&photo);
        assert_eq!(selection.len(), 1);
        assert!(selection.contains(&photo));

        selection.toggle(&photo);
        assert!(selection.is_empty());
    }

    #[test]
    fn test_keeps_selection_order() {
        let mut selection = SelectionSet::new();
        let a = Photo::new("a", "a.png", "Travel");
        let b = Photo::new("b", "b.png", "Food");
        let c = Photo::new("c", "c.png", "Travel");

        selection.toggle(&c);
        selection.toggle(&a);
        selection.toggle(&b);
        selection.toggle(&a);

        let ids: Vec<_> = selection
            .current()
            .iter()
            .map(|p| p.id.as_deref().unwrap())
            .collect();
        assert_eq!(ids, vec!["c", "b"]);
    }

    #[test]
    fn test_matches_by_id_only() {
        let mut selection = SelectionSet::new();
        selection.toggle(&Photo::new("1", "old-name.png", "Travel"));
        // Refetched record with the same id but different fields
        selection.toggle(&Photo::new("1", "new-name.png", "Food"));
        assert!(selection.is_empty());
    }

    #[test]
    fn test_photo_without_id_always_appended() {
        let mut selection = SelectionSet::new();
        let anon = Photo {
            id: None,
            name: "x.png".to_string(),
            album: "Other".to_string(),
            raw: String::new(),
        };

        selection.toggle(&anon);
        selection.toggle(&anon);
        assert_eq!(selection.len(), 2);
        assert!(!selection.contains(&anon));
    }

    #[test]
    fn test_clear() {
        let mut selection = SelectionSet::new();
        selection.toggle(&Photo::new("1", "a.png", "Travel"));
        selection.toggle(&Photo::new("2", "b.png", "Travel"));
        selection.clear();
        assert!(selection.is_empty());
        assert!(selection.current().is_empty());
    }
}
