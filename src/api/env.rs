use serde_json::json;

use crate::client::PanelClient;
use crate::error::Result;
use crate::models::{EnvPage, EnvPageQuery, UpsertEnv};

/// Operations on scoped environment variables.
pub struct EnvApi<'a> {
    client: &'a PanelClient,
}

impl<'a> EnvApi<'a> {
    pub(crate) fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    pub async fn page(&self, query: &EnvPageQuery) -> Result<EnvPage> {
        self.client.post("/api/env/page", Some(query)).await
    }

    pub async fn scopes(&self) -> Result<Vec<String>> {
        self.client.post_empty("/api/env/scopes").await
    }

    pub async fn add_or_update(&self, req: &UpsertEnv) -> Result<()> {
        self.client.post_unit("/api/env/addOrUpdate", Some(req)).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .post_unit("/api/env/delete", Some(&json!({ "id": id })))
            .await
    }
}
