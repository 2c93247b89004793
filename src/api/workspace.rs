use reqwest::multipart::{Form, Part};
use serde_json::json;

use crate::client::PanelClient;
use crate::error::Result;
use crate::models::{FileContent, WorkspaceListing};

/// File operations inside an application's workspace directory.
///
/// Every call is scoped by `app_name`; `path` is always relative to that
/// application's workspace root, the backend rejects escapes.
pub struct WorkspaceApi<'a> {
    client: &'a PanelClient,
}

impl<'a> WorkspaceApi<'a> {
    pub(crate) fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, app_name: &str, path: &str) -> Result<WorkspaceListing> {
        self.client
            .post(
                "/api/workspace/list",
                Some(&json!({ "app_name": app_name, "path": path })),
            )
            .await
    }

    pub async fn read(&self, app_name: &str, path: &str) -> Result<FileContent> {
        self.client
            .post(
                "/api/workspace/read",
                Some(&json!({ "app_name": app_name, "path": path })),
            )
            .await
    }

    pub async fn save(&self, app_name: &str, path: &str, content: &str) -> Result<()> {
        self.client
            .post_unit(
                "/api/workspace/save",
                Some(&json!({ "app_name": app_name, "path": path, "content": content })),
            )
            .await
    }

    pub async fn remove(&self, app_name: &str, path: &str) -> Result<()> {
        self.client
            .post_unit(
                "/api/workspace/delete",
                Some(&json!({ "app_name": app_name, "path": path })),
            )
            .await
    }

    pub async fn mkdir(&self, app_name: &str, path: &str) -> Result<()> {
        self.client
            .post_unit(
                "/api/workspace/mkdir",
                Some(&json!({ "app_name": app_name, "path": path })),
            )
            .await
    }

    /// Upload one file into `directory` (empty string for the workspace
    /// root). The backend creates intermediate directories as needed.
    pub async fn upload(
        &self,
        app_name: &str,
        directory: &str,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<()> {
        let form = Form::new()
            .text("app_name", app_name.to_string())
            .text("path", directory.to_string())
            .part("file", Part::bytes(contents).file_name(file_name.to_string()));

        self.client.post_multipart("/api/workspace/upload", form).await
    }
}
