use serde_json::json;

use crate::client::PanelClient;
use crate::error::Result;
use crate::models::{Application, ApplicationPage};

/// Operations on the application catalog.
pub struct ApplicationApi<'a> {
    client: &'a PanelClient,
}

impl<'a> ApplicationApi<'a> {
    pub(crate) fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Application>> {
        self.client.post_empty("/api/application/list").await
    }

    pub async fn get(&self, id: i64) -> Result<Application> {
        self.client
            .post("/api/application/get", Some(&json!({ "id": id })))
            .await
    }

    pub async fn add(&self, application: &Application) -> Result<Application> {
        self.client
            .post("/api/application/add", Some(application))
            .await
    }

    pub async fn update(&self, application: &Application) -> Result<Application> {
        self.client
            .post("/api/application/update", Some(application))
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .post_unit("/api/application/delete", Some(&json!({ "id": id })))
            .await
    }

    pub async fn page(&self, page: i64, page_size: i64) -> Result<ApplicationPage> {
        self.client
            .post(
                "/api/application/page",
                Some(&json!({ "page": page, "page_size": page_size })),
            )
            .await
    }
}
