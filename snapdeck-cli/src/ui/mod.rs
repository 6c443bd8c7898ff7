mod confirm_delete;
mod footer;
mod header;
mod help;
mod layout;
mod notice;
mod photo_grid;
mod progress;
mod status_bar;
mod text;
mod theme;
mod upload_dialog;

pub use confirm_delete::ConfirmDeleteView;
pub use footer::Footer;
pub use header::Header;
pub use help::HelpView;
pub use layout::AppLayout;
pub use notice::NoticeView;
pub use photo_grid::{PhotoGrid, grid_geometry};
pub use progress::BusyView;
pub use status_bar::StatusBar;
pub use theme::Theme;
pub use upload_dialog::UploadDialog;
