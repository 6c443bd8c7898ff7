use std::path::PathBuf;
use std::sync::Arc;

use snapdeck_core::{
    ApiMessage, Dispatcher, Gallery, PageOutcome, PageRequest, Photo, PhotoApi, Settings,
    UploadForm, next_page_size, prev_page_size,
};
use tracing::{info, warn};

/// Statistics tracked during the session
#[derive(Debug, Default, Clone)]
pub struct SessionStats {
    /// Number of photos deleted
    pub photos_deleted: usize,
    /// Number of photos uploaded
    pub photos_uploaded: usize,
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// Waiting for the health check
    Connecting,
    /// Health check failed; waiting for a retry
    ApiDown,
    /// Browsing the grid
    Browsing,
    /// Showing help overlay
    Help,
    /// First-run delete instructions
    Instructions,
    /// Showing delete confirmation dialog
    ConfirmDelete,
    /// Batch delete in flight
    Deleting,
    /// Upload dialog open
    Upload,
    /// Upload in flight
    Uploading,
    /// Success or error notice
    Notice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A modal message the user has to dismiss
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Success".to_string(),
            message: message.into(),
        }
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Application state
pub struct AppState {
    /// Current mode
    pub mode: AppMode,
    /// Photos, paging and selection
    pub gallery: Gallery,
    /// Background API calls
    dispatcher: Dispatcher,
    /// Service base URL (for display)
    pub api_url: String,
    /// Index of the photo under the cursor
    pub cursor: usize,
    /// First grid row on screen
    pub scroll_row: usize,
    /// Grid columns (set by UI)
    pub columns: usize,
    /// Grid rows that fit on screen (set by UI)
    pub visible_rows: usize,
    /// Whether app should quit
    pub should_quit: bool,
    /// Spinner frame for animation
    pub spinner_frame: usize,
    /// Health check error, while in `ApiDown`
    pub api_error: Option<String>,
    /// Notice being shown
    pub notice: Option<Notice>,
    /// Mode to return to when the notice is dismissed
    notice_return: AppMode,
    /// Upload dialog form
    pub upload: UploadForm,
    /// Path being typed in the upload dialog
    pub upload_input: String,
    /// Inline error in the upload dialog
    pub upload_error: Option<String>,
    /// "Don't show again" checkbox on the instructions notice
    pub instructions_dont_show: bool,
    /// Persisted settings
    pub settings: Settings,
    /// Where settings are saved (None = don't persist)
    settings_path: Option<PathBuf>,
    /// Session statistics
    pub session_stats: SessionStats,
}

impl AppState {
    pub fn new(
        api: Arc<dyn PhotoApi>,
        api_url: String,
        page_size: usize,
        settings: Settings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        Self {
            mode: AppMode::Connecting,
            gallery: Gallery::new(page_size),
            dispatcher: Dispatcher::new(api),
            api_url,
            cursor: 0,
            scroll_row: 0,
            columns: 1,
            visible_rows: 5,
            should_quit: false,
            spinner_frame: 0,
            api_error: None,
            notice: None,
            notice_return: AppMode::Browsing,
            upload: UploadForm::new(),
            upload_input: String::new(),
            upload_error: None,
            instructions_dont_show: false,
            settings,
            settings_path,
            session_stats: SessionStats::default(),
        }
    }

    /// Kick off the startup health check
    pub fn start(&mut self) {
        self.mode = AppMode::Connecting;
        self.api_error = None;
        self.dispatcher.check_health();
    }

    /// Advance spinner animation
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % 10;
    }

    /// Request quit
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Photo under the cursor
    pub fn cursor_photo(&self) -> Option<&Photo> {
        self.gallery.photos().get(self.cursor)
    }

    /// Whether the "load more" row should be offered
    pub fn can_load_more(&self) -> bool {
        self.gallery.pager().has_more() && !self.gallery.pager().is_loading()
    }

    fn fetch(&self, request: PageRequest) {
        self.dispatcher.fetch_page(request);
    }

    fn show_notice(&mut self, notice: Notice) {
        if self.mode != AppMode::Notice {
            self.notice_return = match self.mode {
                AppMode::Upload | AppMode::Uploading | AppMode::Instructions => self.mode,
                _ => AppMode::Browsing,
            };
        }
        self.notice = Some(notice);
        self.mode = AppMode::Notice;
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
        self.mode = self.notice_return;
    }

    // --- API results ---

    /// Drain finished API calls and apply them
    pub fn poll_api(&mut self) {
        while let Some(msg) = self.dispatcher.try_recv() {
            self.handle_api_message(msg);
        }
    }

    fn handle_api_message(&mut self, msg: ApiMessage) {
        match msg {
            ApiMessage::Health(Ok(())) => {
                info!(url = %self.api_url, "photo API is up");
                let request = self.gallery.refresh();
                self.fetch(request);
                self.mode = if self.settings.hide_delete_instructions {
                    AppMode::Browsing
                } else {
                    AppMode::Instructions
                };
            }
            ApiMessage::Health(Err(e)) => {
                warn!(error = %e, "photo API is not reachable");
                self.api_error = Some(e.to_string());
                self.mode = AppMode::ApiDown;
            }
            ApiMessage::Page { request, result } => {
                match self.gallery.apply_page(request, result) {
                    Ok(PageOutcome::Replaced { count }) => {
                        info!(count, "photo list loaded");
                        self.scroll_to_top();
                    }
                    Ok(PageOutcome::Appended { count }) => {
                        info!(count, total = self.gallery.photos().len(), "more photos loaded");
                    }
                    Ok(PageOutcome::Stale) => {}
                    Err(_) => {
                        self.show_notice(Notice::error("Error", "Failed to fetch photos list!"));
                    }
                }
                self.clamp_cursor();
            }
            ApiMessage::Deleted {
                confirmation,
                result,
            } => match self.gallery.finish_delete(result) {
                Ok(request) => {
                    self.session_stats.photos_deleted += confirmation.count;
                    self.fetch(request);
                    self.show_notice(Notice::success(confirmation.success_message()));
                }
                Err(_) => {
                    self.show_notice(Notice::error("Error", confirmation.failure_message()));
                }
            },
            ApiMessage::Uploaded { job, result } => match self.gallery.finish_upload(result) {
                Ok(request) => {
                    info!(album = %job.album, files = job.files.len(), "photos uploaded");
                    self.session_stats.photos_uploaded += job.files.len();
                    self.fetch(request);
                    self.upload.clear();
                    self.upload_input.clear();
                    self.upload_error = None;
                    self.mode = AppMode::Browsing;
                    self.show_notice(Notice::success(job.success_message()));
                }
                Err(e) => {
                    warn!(error = %e, "upload failed");
                    self.upload_error = Some(job.failure_message());
                    if self.mode == AppMode::Uploading {
                        self.mode = AppMode::Upload;
                    } else if self.mode == AppMode::Notice {
                        self.notice_return = AppMode::Upload;
                    }
                }
            },
        }
    }

    // --- Health ---

    pub fn retry_health(&mut self) {
        if self.mode == AppMode::ApiDown {
            self.start();
        }
    }

    // --- Navigation ---

    fn photo_count(&self) -> usize {
        self.gallery.photos().len()
    }

    fn set_cursor(&mut self, index: usize) {
        self.cursor = index.min(self.photo_count().saturating_sub(1));
        self.ensure_visible();
    }

    /// Keep the cursor row inside the viewport
    fn ensure_visible(&mut self) {
        let columns = self.columns.max(1);
        let row = self.cursor / columns;
        let visible = self.visible_rows.max(1);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + visible {
            self.scroll_row = row + 1 - visible;
        }
    }

    fn clamp_cursor(&mut self) {
        self.set_cursor(self.cursor);
    }

    fn scroll_to_top(&mut self) {
        self.cursor = 0;
        self.scroll_row = 0;
    }

    /// Update the grid geometry after a resize
    pub fn set_grid(&mut self, columns: usize, visible_rows: usize) {
        self.columns = columns.max(1);
        self.visible_rows = visible_rows.max(1);
        self.ensure_visible();
    }

    pub fn move_left(&mut self) {
        self.set_cursor(self.cursor.saturating_sub(1));
    }

    pub fn move_right(&mut self) {
        self.set_cursor(self.cursor + 1);
    }

    pub fn move_up(&mut self) {
        if self.cursor >= self.columns {
            self.set_cursor(self.cursor - self.columns);
        }
    }

    pub fn move_down(&mut self) {
        if self.cursor + self.columns < self.photo_count() {
            self.set_cursor(self.cursor + self.columns);
        }
    }

    pub fn page_up(&mut self) {
        let step = self.columns * self.visible_rows.max(1);
        self.set_cursor(self.cursor.saturating_sub(step));
    }

    pub fn page_down(&mut self) {
        let step = self.columns * self.visible_rows.max(1);
        self.set_cursor(self.cursor + step);
    }

    pub fn go_to_first(&mut self) {
        self.set_cursor(0);
    }

    pub fn go_to_last(&mut self) {
        self.set_cursor(self.photo_count().saturating_sub(1));
    }

    // --- Paging ---

    pub fn load_more(&mut self) {
        if let Some(request) = self.gallery.load_more() {
            self.fetch(request);
        }
    }

    pub fn refresh(&mut self) {
        let request = self.gallery.refresh();
        self.fetch(request);
    }

    /// Step up from the size last asked for, so repeated presses keep
    /// climbing while a change is in flight
    pub fn page_size_up(&mut self) {
        let size = next_page_size(self.gallery.pager().requested_page_size());
        self.change_page_size(size);
    }

    pub fn page_size_down(&mut self) {
        let size = prev_page_size(self.gallery.pager().requested_page_size());
        self.change_page_size(size);
    }

    fn change_page_size(&mut self, size: usize) {
        match self.gallery.change_page_size(size) {
            Ok(request) => self.fetch(request),
            Err(e) => warn!(error = %e, "page size rejected"),
        }
    }

    // --- Selection ---

    pub fn toggle_select(&mut self) {
        self.gallery.toggle_at(self.cursor);
    }

    pub fn clear_selection(&mut self) {
        self.gallery.clear_selection();
    }

    pub fn selection_count(&self) -> usize {
        self.gallery.selection().len()
    }

    // --- Delete ---

    /// Show the confirmation dialog if anything is selected
    pub fn request_delete(&mut self) {
        if self.gallery.request_delete().is_some() {
            self.mode = AppMode::ConfirmDelete;
        }
    }

    pub fn confirm_delete(&mut self) {
        if let Some(confirmation) = self.gallery.confirm_delete() {
            info!(
                count = confirmation.count,
                albums = confirmation.groups.len(),
                "deleting photos"
            );
            self.dispatcher.delete(confirmation);
            self.mode = AppMode::Deleting;
        } else {
            self.mode = AppMode::Browsing;
        }
    }

    pub fn cancel_delete(&mut self) {
        self.gallery.cancel_delete();
        self.mode = AppMode::Browsing;
    }

    // --- Upload ---

    pub fn open_upload(&mut self) {
        self.upload_error = None;
        self.mode = AppMode::Upload;
    }

    pub fn cancel_upload(&mut self) {
        self.upload_input.clear();
        self.upload_error = None;
        self.mode = AppMode::Browsing;
    }

    pub fn upload_input(&mut self, c: char) {
        self.upload_input.push(c);
        self.upload_error = None;
    }

    pub fn upload_backspace(&mut self) {
        if self.upload_input.pop().is_none() {
            self.upload.remove_last();
        }
    }

    /// Add the typed path, or submit when nothing is typed
    pub fn upload_enter(&mut self) {
        let input = self.upload_input.trim();
        if input.is_empty() {
            self.submit_upload();
            return;
        }

        let path = expand_tilde(input);
        match self.upload.add_file(path) {
            Ok(()) => {
                self.upload_input.clear();
                self.upload_error = None;
            }
            Err(e) => self.upload_error = Some(e.to_string()),
        }
    }

    pub fn album_next(&mut self) {
        self.upload.next_album();
        self.upload_error = None;
    }

    pub fn album_prev(&mut self) {
        self.upload.prev_album();
        self.upload_error = None;
    }

    pub fn submit_upload(&mut self) {
        match self.upload.prepare() {
            Ok(job) => {
                self.upload_error = None;
                self.dispatcher.upload(job);
                self.mode = AppMode::Uploading;
            }
            Err(e) => self.upload_error = Some(e.to_string()),
        }
    }

    // --- Instructions / help ---

    pub fn toggle_dont_show(&mut self) {
        self.instructions_dont_show = !self.instructions_dont_show;
    }

    pub fn dismiss_instructions(&mut self) {
        if self.instructions_dont_show && !self.settings.hide_delete_instructions {
            self.settings.hide_delete_instructions = true;
            if let Some(path) = &self.settings_path
                && let Err(e) = self.settings.save_to(path)
            {
                warn!(error = %e, path = %path.display(), "failed to save settings");
            }
        }
        self.mode = AppMode::Browsing;
    }

    pub fn show_help(&mut self) {
        self.mode = AppMode::Help;
    }

    pub fn hide_help(&mut self) {
        self.mode = AppMode::Browsing;
    }
}

/// Expand a leading `~/` to the home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = dirs::home_dir()
    {
        return home.join(stripped);
    }
    PathBuf::from(path)
}
