use tracing::debug;

use crate::config::DEFAULT_PAGE_SIZE;
use crate::model::{ListRequest, ListResponse, Photo};
use crate::Result;

/// Whether a fetch starts over or continues from the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchKind {
    /// Replace the accumulated list with page 0
    Reset,
    /// Append the next page to the accumulated list
    LoadMore,
}

/// Parameters of one issued list fetch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    /// Sequence number; only the latest generation may change state
    pub generation: u64,
    pub kind: FetchKind,
    /// Zero-based page this request fetches
    pub page: usize,
    pub page_size: usize,
}

impl PageRequest {
    pub fn skip(&self) -> usize {
        self.page * self.page_size
    }

    pub fn limit(&self) -> usize {
        self.page_size
    }

    /// Request body for the list endpoint
    pub fn body(&self) -> ListRequest {
        ListRequest {
            skip: self.skip(),
            limit: self.limit(),
        }
    }
}

/// What applying a response did to the pager
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageOutcome {
    /// The list was replaced with `count` photos
    Replaced { count: usize },
    /// `count` photos were appended
    Appended { count: usize },
    /// A newer request was issued since; the response was dropped
    Stale,
}

/// Pagination state: accumulated photos plus paging cursor
#[derive(Debug, Clone)]
pub struct Pager {
    items: Vec<Photo>,
    page_size: usize,
    /// Page size of the latest issued request
    requested_page_size: usize,
    current_page: usize,
    loading: bool,
    has_more: bool,
    default_page_size: usize,
    generation: u64,
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

impl Pager {
    /// Create an empty pager; `default_page_size` is what `reset` uses
    pub fn new(default_page_size: usize) -> Self {
        Self {
            items: Vec::new(),
            page_size: default_page_size,
            requested_page_size: default_page_size,
            current_page: 0,
            loading: false,
            has_more: false,
            default_page_size,
            generation: 0,
        }
    }

    pub fn items(&self) -> &[Photo] {
        &self.items
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Page size the list is heading to: the in-flight request's size
    /// while loading, otherwise the committed one
    pub fn requested_page_size(&self) -> usize {
        self.requested_page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn default_page_size(&self) -> usize {
        self.default_page_size
    }

    /// Start over from page 0 with the default page size
    pub fn reset(&mut self) -> PageRequest {
        self.issue(FetchKind::Reset, 0, self.default_page_size)
    }

    /// Start over from page 0 with a new page size
    pub fn change_page_size(&mut self, page_size: usize) -> PageRequest {
        self.issue(FetchKind::Reset, 0, page_size)
    }

    /// Fetch the page after the current one
    pub fn load_more(&mut self) -> PageRequest {
        self.issue(FetchKind::LoadMore, self.current_page + 1, self.page_size)
    }

    fn issue(&mut self, kind: FetchKind, page: usize, page_size: usize) -> PageRequest {
        self.generation += 1;
        self.loading = true;
        self.requested_page_size = page_size;
        let request = PageRequest {
            generation: self.generation,
            kind,
            page,
            page_size,
        };
        debug!(?request, skip = request.skip(), "issued page request");
        request
    }

    /// Apply the response to `request`.
    ///
    /// Responses for anything but the latest issued request are dropped.
    /// On error the list and cursor are left as they were.
    pub fn apply(
        &mut self,
        request: PageRequest,
        response: Result<ListResponse>,
    ) -> Result<PageOutcome> {
        if request.generation != self.generation {
            debug!(
                generation = request.generation,
                latest = self.generation,
                "dropping stale page response"
            );
            return Ok(PageOutcome::Stale);
        }

        self.loading = false;
        let response = match response {
            Ok(response) => response,
            Err(e) => {
                self.requested_page_size = self.page_size;
                return Err(e);
            }
        };

        let count = response.documents.len();
        self.current_page = request.page;
        self.page_size = request.page_size;
        self.has_more = count >= request.page_size;

        match request.kind {
            FetchKind::Reset => {
                self.items = response.documents;
                Ok(PageOutcome::Replaced { count })
            }
            FetchKind::LoadMore => {
                self.items.extend(response.documents);
                Ok(PageOutcome::Appended { count })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SnapdeckError;

    fn page(start: usize, count: usize) -> ListResponse {
        let docs = (start..start + count)
            .map(|i| Photo::new(format!("id{i}"), format!("photo{i}.png"), "Travel"))
            .collect();
        ListResponse::new(docs, start)
    }

    #[test]
    fn test_reset_request_parameters() {
        let mut pager = Pager::default();
        let req = pager.reset();
        assert_eq!(req.kind, FetchKind::Reset);
        assert_eq!(req.body(), ListRequest { skip: 0, limit: 25 });
        assert!(pager.is_loading());
    }

    #[test]
    fn test_full_page_has_more() {
        let mut pager = Pager::default();
        let req = pager.reset();
        let outcome = pager.apply(req, Ok(page(0, 25))).unwrap();
        assert_eq!(outcome, PageOutcome::Replaced { count: 25 });
        assert!(pager.has_more());
        assert!(!pager.is_loading());
    }

    #[test]
    fn test_short_page_has_no_more() {
        let mut pager = Pager::default();
        let req = pager.reset();
        pager.apply(req, Ok(page(0, 24))).unwrap();
        assert!(!pager.has_more());
        assert_eq!(pager.items().len(), 24);
    }

    #[test]
    fn test_reset_then_load_more() {
        let mut pager = Pager::new(25);
        let req = pager.reset();
        pager.apply(req, Ok(page(0, 25))).unwrap();
        assert!(pager.has_more());

        let req = pager.load_more();
        assert_eq!(req.page, 1);
        assert_eq!(req.skip(), 25);
        let outcome = pager.apply(req, Ok(page(25, 10))).unwrap();

        assert_eq!(outcome, PageOutcome::Appended { count: 10 });
        assert_eq!(pager.items().len(), 35);
        assert_eq!(pager.current_page(), 1);
        assert!(!pager.has_more());
        // Appended, not replaced
        assert_eq!(pager.items()[0].id.as_deref(), Some("id0"));
        assert_eq!(pager.items()[34].id.as_deref(), Some("id34"));
    }

    #[test]
    fn test_reset_replaces_accumulated_items() {
        let mut pager = Pager::new(5);
        let req = pager.reset();
        pager.apply(req, Ok(page(0, 5))).unwrap();
        let req = pager.load_more();
        pager.apply(req, Ok(page(5, 5))).unwrap();
        assert_eq!(pager.items().len(), 10);

        let req = pager.reset();
        pager.apply(req, Ok(page(100, 3))).unwrap();
        assert_eq!(pager.items().len(), 3);
        assert_eq!(pager.current_page(), 0);
        assert_eq!(pager.items()[0].id.as_deref(), Some("id100"));
    }

    #[test]
    fn test_change_page_size() {
        let mut pager = Pager::new(25);
        let req = pager.change_page_size(100);
        assert_eq!(req.body(), ListRequest { skip: 0, limit: 100 });
        pager.apply(req, Ok(page(0, 100))).unwrap();
        assert_eq!(pager.page_size(), 100);

        let req = pager.load_more();
        assert_eq!(req.body(), ListRequest { skip: 100, limit: 100 });

        // Plain reset goes back to the configured default
        let req = pager.reset();
        assert_eq!(req.page_size, 25);
    }

    #[test]
    fn test_error_leaves_state_unchanged() {
        let mut pager = Pager::new(5);
        let req = pager.reset();
        pager.apply(req, Ok(page(0, 5))).unwrap();

        let req = pager.load_more();
        let err = pager
            .apply(req, Err(SnapdeckError::Fetch("connection refused".into())))
            .unwrap_err();
        assert!(matches!(err, SnapdeckError::Fetch(_)));
        assert!(!pager.is_loading());
        assert_eq!(pager.items().len(), 5);
        assert_eq!(pager.current_page(), 0);
        assert!(pager.has_more());

        // Failed page size change keeps the old size
        let req = pager.change_page_size(50);
        let _ = pager.apply(req, Err(SnapdeckError::Fetch("boom".into())));
        assert_eq!(pager.page_size(), 5);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let mut pager = Pager::new(5);
        let first = pager.reset();
        pager.apply(first, Ok(page(0, 5))).unwrap();

        // A reset is in flight when load_more is issued
        let reset = pager.reset();
        let more = pager.load_more();

        // The reset answers last but predates load_more
        assert_eq!(
            pager.apply(more, Ok(page(5, 5))).unwrap(),
            PageOutcome::Appended { count: 5 }
        );
        assert_eq!(
            pager.apply(reset, Ok(page(50, 2))).unwrap(),
            PageOutcome::Stale
        );
        assert_eq!(pager.items().len(), 10);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn test_stale_response_keeps_loading_flag() {
        let mut pager = Pager::new(5);
        let old = pager.reset();
        let _latest = pager.change_page_size(10);
        let outcome = pager
            .apply(old, Err(SnapdeckError::Fetch("late".into())))
            .unwrap();
        assert_eq!(outcome, PageOutcome::Stale);
        assert!(pager.is_loading());
    }

    #[test]
    fn test_requested_page_size_tracks_in_flight_change() {
        let mut pager = Pager::new(25);
        assert_eq!(pager.requested_page_size(), 25);

        let req = pager.change_page_size(50);
        assert_eq!(pager.page_size(), 25);
        assert_eq!(pager.requested_page_size(), 50);

        pager.apply(req, Ok(page(0, 50))).unwrap();
        assert_eq!(pager.requested_page_size(), 50);

        // A failed change falls back to the committed size
        let req = pager.change_page_size(100);
        let _ = pager.apply(req, Err(SnapdeckError::Fetch("boom".into())));
        assert_eq!(pager.requested_page_size(), 50);
    }
}
