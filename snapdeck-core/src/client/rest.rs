use reqwest::blocking::{Client, multipart::Form};
use reqwest::header::CONTENT_TYPE;
use tracing::{debug, info};

use super::PhotoApi;
use crate::delete::DeleteGroup;
use crate::model::{ListRequest, ListResponse};
use crate::upload::UploadJob;
use crate::{Result, SnapdeckError};

/// `PhotoApi` over HTTP with JSON bodies
#[derive(Debug, Clone)]
pub struct RestClient {
    client: Client,
    base_url: String,
}

impl RestClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl PhotoApi for RestClient {
    fn health(&self) -> Result<()> {
        self.client
            .get(self.url("/health"))
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| SnapdeckError::HealthCheck(e.to_string()))?;
        Ok(())
    }

    fn list(&self, request: ListRequest) -> Result<ListResponse> {
        debug!(skip = request.skip, limit = request.limit, "POST /photos/list");
        self.client
            .post(self.url("/photos/list"))
            .json(&request)
            .send()
            .and_then(|r| r.error_for_status())
            .and_then(|r| r.json::<ListResponse>())
            .map_err(|e| SnapdeckError::Fetch(e.to_string()))
    }

    fn upload(&self, job: &UploadJob) -> Result<()> {
        let mut form = Form::new().text("album", job.album.clone());
        for path in &job.files {
            form = form
                .file("documents", path)
                .map_err(|e| SnapdeckError::Upload(format!("{}: {}", path.display(), e)))?;
        }

        info!(album = %job.album, files = job.files.len(), "PUT /photos");
        self.client
            .put(self.url("/photos"))
            .multipart(form)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| SnapdeckError::Upload(e.to_string()))?;
        Ok(())
    }

    fn delete(&self, groups: &[DeleteGroup]) -> Result<()> {
        let body =
            serde_json::to_string(groups).map_err(|e| SnapdeckError::Delete(e.to_string()))?;

        info!(groups = groups.len(), "DELETE /photos");
        self.client
            .delete(self.url("/photos"))
            .header(CONTENT_TYPE, "application/json; charset=utf-8")
            .body(body)
            .send()
            .and_then(|r| r.error_for_status())
            .map_err(|e| SnapdeckError::Delete(e.to_string()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joining() {
        let client = RestClient::new("http://localhost:8888/");
        assert_eq!(client.base_url(), "http://localhost:8888");
        assert_eq!(client.url("/photos/list"), "http://localhost:8888/photos/list");
    }

    #[test]
    fn test_unreachable_service_maps_to_taxonomy() {
        // Port 9 (discard) on loopback is expected to refuse connections
        let client = RestClient::new("http://127.0.0.1:9");
        assert!(matches!(client.health(), Err(SnapdeckError::HealthCheck(_))));
        assert!(matches!(
            client.list(ListRequest { skip: 0, limit: 5 }),
            Err(SnapdeckError::Fetch(_))
        ));
        assert!(matches!(client.delete(&[]), Err(SnapdeckError::Delete(_))));
    }

    #[test]
    fn test_upload_missing_file_fails_before_sending() {
        let client = RestClient::new("http://127.0.0.1:9");
        let job = UploadJob {
            album: "Travel".to_string(),
            files: vec!["/definitely/not/here.png".into()],
        };
        match client.upload(&job) {
            Err(SnapdeckError::Upload(msg)) => assert!(msg.contains("here.png")),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
