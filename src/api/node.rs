use serde_json::json;

use crate::client::PanelClient;
use crate::error::Result;
use crate::models::{CreateNode, Node, NodePage, UpdateNode};

/// Operations on managed hosts.
pub struct NodeApi<'a> {
    client: &'a PanelClient,
}

impl<'a> NodeApi<'a> {
    pub(crate) fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> Result<Vec<Node>> {
        self.client.post_empty("/api/node/list").await
    }

    pub async fn get(&self, id: i64) -> Result<Node> {
        self.client
            .post("/api/node/get", Some(&json!({ "id": id })))
            .await
    }

    pub async fn add(&self, node: &CreateNode) -> Result<Node> {
        self.client.post("/api/node/add", Some(node)).await
    }

    pub async fn update(&self, node: &UpdateNode) -> Result<Node> {
        self.client.post("/api/node/update", Some(node)).await
    }

    pub async fn delete(&self, id: i64) -> Result<()> {
        self.client
            .post_unit("/api/node/delete", Some(&json!({ "id": id })))
            .await
    }

    pub async fn page(&self, page: i64, page_size: i64) -> Result<NodePage> {
        self.client
            .post(
                "/api/node/page",
                Some(&json!({ "page": page, "page_size": page_size })),
            )
            .await
    }
}
