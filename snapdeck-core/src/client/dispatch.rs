use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender, TryRecvError};
use tracing::{debug, warn};

use super::PhotoApi;
use crate::Result;
use crate::delete::DeleteConfirmation;
use crate::model::ListResponse;
use crate::pagination::PageRequest;
use crate::upload::UploadJob;

/// Completion of a background API call
#[derive(Debug)]
pub enum ApiMessage {
    /// Health check finished
    Health(Result<()>),
    /// A list fetch finished
    Page {
        request: PageRequest,
        result: Result<ListResponse>,
    },
    /// An upload finished
    Uploaded { job: UploadJob, result: Result<()> },
    /// A batch delete finished
    Deleted {
        confirmation: DeleteConfirmation,
        result: Result<()>,
    },
}

/// Runs API calls on background threads and reports back over a channel
///
/// Calls cannot be cancelled once issued; results arrive in completion
/// order, not issue order.
pub struct Dispatcher {
    api: Arc<dyn PhotoApi>,
    tx: Sender<ApiMessage>,
    rx: Receiver<ApiMessage>,
}

impl Dispatcher {
    pub fn new(api: Arc<dyn PhotoApi>) -> Self {
        let (tx, rx) = crossbeam_channel::unbounded();
        Self { api, tx, rx }
    }

    pub fn check_health(&self) {
        self.spawn("health", |api| ApiMessage::Health(api.health()));
    }

    pub fn fetch_page(&self, request: PageRequest) {
        self.spawn("list", move |api| ApiMessage::Page {
            request,
            result: api.list(request.body()),
        });
    }

    pub fn upload(&self, job: UploadJob) {
        self.spawn("upload", move |api| {
            let result = api.upload(&job);
            ApiMessage::Uploaded { job, result }
        });
    }

    pub fn delete(&self, confirmation: DeleteConfirmation) {
        self.spawn("delete", move |api| {
            let result = api.delete(&confirmation.groups);
            ApiMessage::Deleted {
                confirmation,
                result,
            }
        });
    }

    /// Next finished call, if any, without blocking
    pub fn try_recv(&self) -> Option<ApiMessage> {
        match self.rx.try_recv() {
            Ok(msg) => Some(msg),
            Err(TryRecvError::Empty) => None,
            // We hold a sender ourselves, so this cannot happen
            Err(TryRecvError::Disconnected) => None,
        }
    }

    pub fn receiver(&self) -> &Receiver<ApiMessage> {
        &self.rx
    }

    fn spawn<F>(&self, op: &'static str, call: F)
    where
        F: FnOnce(&dyn PhotoApi) -> ApiMessage + Send + 'static,
    {
        let api = Arc::clone(&self.api);
        let tx = self.tx.clone();
        debug!(op, "dispatching api call");
        std::thread::spawn(move || {
            let msg = call(api.as_ref());
            if tx.send(msg).is_err() {
                warn!(op, "api result dropped, receiver gone");
            }
        });
    }
}
