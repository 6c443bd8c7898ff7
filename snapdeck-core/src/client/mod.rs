mod dispatch;
mod rest;

pub use dispatch::{ApiMessage, Dispatcher};
pub use rest::RestClient;

use crate::Result;
use crate::delete::DeleteGroup;
use crate::model::{ListRequest, ListResponse};
use crate::upload::UploadJob;

/// Operations the photo service exposes
///
/// Each call blocks until the service answers. Errors are reported as the
/// matching `SnapdeckError` variant (`HealthCheck`, `Fetch`, `Upload`,
/// `Delete`).
pub trait PhotoApi: Send + Sync {
    /// `GET /health`
    fn health(&self) -> Result<()>;

    /// `POST /photos/list`
    fn list(&self, request: ListRequest) -> Result<ListResponse>;

    /// `PUT /photos` (multipart)
    fn upload(&self, job: &UploadJob) -> Result<()>;

    /// `DELETE /photos`
    fn delete(&self, groups: &[DeleteGroup]) -> Result<()>;
}
