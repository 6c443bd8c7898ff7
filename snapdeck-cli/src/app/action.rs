/// User actions that can be performed in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move cursor one row up
    MoveUp,
    /// Move cursor one row down
    MoveDown,
    /// Move cursor one cell left
    MoveLeft,
    /// Move cursor one cell right
    MoveRight,
    /// Move cursor up by a screen
    PageUp,
    /// Move cursor down by a screen
    PageDown,
    /// Go to first photo
    GoToFirst,
    /// Go to last loaded photo
    GoToLast,
    /// Toggle the photo under the cursor in/out of the selection
    ToggleSelect,
    /// Clear the selection
    ClearSelection,
    /// Fetch the next page
    LoadMore,
    /// Switch to the next larger page size
    PageSizeUp,
    /// Switch to the next smaller page size
    PageSizeDown,
    /// Refetch from the first page
    Refresh,
    /// Show help overlay
    ShowHelp,
    /// Hide help overlay
    HideHelp,
    /// Request delete of the selection (show confirmation dialog)
    Delete,
    /// Confirm delete operation
    ConfirmDelete,
    /// Cancel delete operation
    CancelDelete,
    /// Open the upload dialog
    OpenUpload,
    /// Close the upload dialog
    CancelUpload,
    /// Send the upload
    SubmitUpload,
    /// Type a character into the path input
    UploadInput(char),
    /// Delete a character (or the last file when the input is empty)
    UploadBackspace,
    /// Add the typed path, or upload when the input is empty
    UploadEnter,
    /// Select the next album
    AlbumNext,
    /// Select the previous album
    AlbumPrev,
    /// Toggle "don't show again" on the instructions notice
    ToggleDontShow,
    /// Close the instructions notice
    DismissInstructions,
    /// Close the current notice
    DismissNotice,
    /// Re-run the API health check
    RetryHealth,
    /// Quit the application
    Quit,
    /// No action (for tick events)
    Tick,
}
