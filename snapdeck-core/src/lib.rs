pub mod client;
pub mod config;
pub mod delete;
pub mod error;
pub mod gallery;
pub mod model;
pub mod pagination;
pub mod selection;
pub mod upload;

pub use client::{ApiMessage, Dispatcher, PhotoApi, RestClient};
pub use config::{
    ALBUMS, DEFAULT_API_URL, DEFAULT_PAGE_SIZE, PAGE_SIZES, Settings, next_page_size,
    prev_page_size, validate_page_size,
};
pub use delete::{DeleteConfirmation, DeleteGroup, group_by_album, photo_label};
pub use error::{Result, SnapdeckError};
pub use gallery::Gallery;
pub use model::{ListRequest, ListResponse, Photo};
pub use pagination::{FetchKind, PageOutcome, PageRequest, Pager};
pub use selection::SelectionSet;
pub use upload::{UploadForm, UploadJob};
