use tracing::{info, warn};

use crate::config::validate_page_size;
use crate::delete::DeleteConfirmation;
use crate::model::{ListResponse, Photo};
use crate::pagination::{PageOutcome, PageRequest, Pager};
use crate::selection::SelectionSet;
use crate::Result;

/// Paging, selection and batch delete state of one browsing session
///
/// Methods that need the network return the request to issue; the caller
/// dispatches it and feeds the result back in.
#[derive(Debug, Clone, Default)]
pub struct Gallery {
    pager: Pager,
    selection: SelectionSet,
    pending_delete: Option<DeleteConfirmation>,
    deleting: bool,
}

impl Gallery {
    pub fn new(default_page_size: usize) -> Self {
        Self {
            pager: Pager::new(default_page_size),
            ..Default::default()
        }
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }

    pub fn photos(&self) -> &[Photo] {
        self.pager.items()
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Fetch the first page with the default page size
    pub fn refresh(&mut self) -> PageRequest {
        self.pager.reset()
    }

    pub fn change_page_size(&mut self, page_size: usize) -> Result<PageRequest> {
        let page_size = validate_page_size(page_size)?;
        Ok(self.pager.change_page_size(page_size))
    }

    /// Fetch the next page, unless a fetch is running or nothing is left
    pub fn load_more(&mut self) -> Option<PageRequest> {
        if self.pager.is_loading() || !self.pager.has_more() {
            return None;
        }
        Some(self.pager.load_more())
    }

    pub fn apply_page(
        &mut self,
        request: PageRequest,
        response: Result<ListResponse>,
    ) -> Result<PageOutcome> {
        let outcome = self.pager.apply(request, response);
        if let Err(e) = &outcome {
            warn!(error = %e, "page fetch failed");
        }
        outcome
    }

    pub fn toggle(&mut self, photo: &Photo) {
        self.selection.toggle(photo);
    }

    /// Toggle the photo at `index` in the loaded list
    pub fn toggle_at(&mut self, index: usize) -> bool {
        match self.pager.items().get(index) {
            Some(photo) => {
                self.selection.toggle(photo);
                true
            }
            None => false,
        }
    }

    pub fn is_selected(&self, photo: &Photo) -> bool {
        self.selection.contains(photo)
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Group the selection and hold it for confirmation
    pub fn request_delete(&mut self) -> Option<&DeleteConfirmation> {
        if self.deleting {
            return None;
        }
        self.pending_delete = DeleteConfirmation::for_selection(self.selection.current());
        self.pending_delete.as_ref()
    }

    pub fn pending_delete(&self) -> Option<&DeleteConfirmation> {
        self.pending_delete.as_ref()
    }

    pub fn cancel_delete(&mut self) {
        self.pending_delete = None;
    }

    /// Accept the pending delete; the returned confirmation is what to send
    pub fn confirm_delete(&mut self) -> Option<DeleteConfirmation> {
        let confirmation = self.pending_delete.take()?;
        self.deleting = true;
        Some(confirmation)
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    /// Handle the delete result.
    ///
    /// On success the selection is cleared and the list must be refetched
    /// with the returned request. On failure the selection is kept.
    pub fn finish_delete(&mut self, result: Result<()>) -> Result<PageRequest> {
        self.deleting = false;
        match result {
            Ok(()) => {
                info!(count = self.selection.len(), "photos deleted");
                self.selection.clear();
                Ok(self.pager.reset())
            }
            Err(e) => {
                warn!(error = %e, "batch delete failed");
                Err(e)
            }
        }
    }

    /// Handle an upload result; on success the list must be refetched
    pub fn finish_upload(&mut self, result: Result<()>) -> Result<PageRequest> {
        result?;
        Ok(self.pager.reset())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SnapdeckError;
    use crate::pagination::FetchKind;

    fn page(start: usize, count: usize, album: &str) -> ListResponse {
        let docs = (start..start + count)
            .map(|i| Photo::new(format!("id{i}"), format!("p{i}.png"), album))
            .collect();
        ListResponse::new(docs, start)
    }

    fn loaded(count: usize) -> Gallery {
        let mut gallery = Gallery::new(25);
        let req = gallery.refresh();
        gallery.apply_page(req, Ok(page(0, count, "Travel"))).unwrap();
        gallery
    }

    #[test]
    fn test_paging_end_to_end() {
        let mut gallery = loaded(25);
        assert!(gallery.pager().has_more());

        let req = gallery.load_more().unwrap();
        assert!(gallery.load_more().is_none(), "fetch already running");
        gallery.apply_page(req, Ok(page(25, 10, "Travel"))).unwrap();

        assert_eq!(gallery.photos().len(), 35);
        assert!(!gallery.pager().has_more());
        assert!(gallery.load_more().is_none(), "nothing left to load");
    }

    #[test]
    fn test_change_page_size_validates() {
        let mut gallery = Gallery::new(25);
        assert!(matches!(
            gallery.change_page_size(42),
            Err(SnapdeckError::InvalidPageSize(42))
        ));
        let req = gallery.change_page_size(250).unwrap();
        assert_eq!(req.kind, FetchKind::Reset);
        assert_eq!(req.limit(), 250);
    }

    #[test]
    fn test_delete_flow_success() {
        let mut gallery = loaded(5);
        gallery.toggle_at(0);
        gallery.toggle_at(3);
        assert!(!gallery.toggle_at(99));

        let confirmation = gallery.request_delete().unwrap();
        assert_eq!(confirmation.phrase(), "these 2 photos");
        assert_eq!(confirmation.groups[0].documents(), "p0.png,p3.png");

        let confirmation = gallery.confirm_delete().unwrap();
        assert_eq!(confirmation.count, 2);
        assert!(gallery.is_deleting());
        assert!(gallery.request_delete().is_none(), "delete already running");

        let refetch = gallery.finish_delete(Ok(())).unwrap();
        assert_eq!(refetch.kind, FetchKind::Reset);
        assert!(gallery.selection().is_empty());
        assert!(!gallery.is_deleting());
    }

    #[test]
    fn test_delete_failure_keeps_selection() {
        let mut gallery = loaded(5);
        gallery.toggle_at(1);
        gallery.request_delete();
        gallery.confirm_delete();

        let err = gallery
            .finish_delete(Err(SnapdeckError::Delete("500".into())))
            .unwrap_err();
        assert!(matches!(err, SnapdeckError::Delete(_)));
        assert_eq!(gallery.selection().len(), 1);
        assert!(!gallery.pager().is_loading());

        // Retry is possible
        assert!(gallery.request_delete().is_some());
    }

    #[test]
    fn test_cancel_delete() {
        let mut gallery = loaded(3);
        assert!(gallery.request_delete().is_none(), "nothing selected");

        gallery.toggle_at(2);
        gallery.request_delete();
        gallery.cancel_delete();
        assert!(gallery.pending_delete().is_none());
        assert!(gallery.confirm_delete().is_none());
        assert_eq!(gallery.selection().len(), 1);
    }

    #[test]
    fn test_selection_survives_refetch() {
        let mut gallery = loaded(3);
        gallery.toggle_at(0);

        let req = gallery.refresh();
        gallery.apply_page(req, Ok(page(0, 3, "Travel"))).unwrap();
        assert!(gallery.is_selected(&gallery.photos()[0].clone()));
    }

    #[test]
    fn test_upload_refetches_on_success_only() {
        let mut gallery = loaded(3);
        assert!(gallery
            .finish_upload(Err(SnapdeckError::Upload("413".into())))
            .is_err());
        assert!(!gallery.pager().is_loading());

        let req = gallery.finish_upload(Ok(())).unwrap();
        assert_eq!(req.skip(), 0);
        assert!(gallery.pager().is_loading());
    }
}
