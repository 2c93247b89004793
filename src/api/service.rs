use serde_json::json;

use crate::client::PanelClient;
use crate::error::Result;
use crate::models::{DeployService, SaveService, SavedService, ServicePage};
use crate::streaming::{StreamCallbacks, StreamHandle};

/// Operations on service instances, including the streaming deploy.
pub struct ServiceApi<'a> {
    client: &'a PanelClient,
}

impl<'a> ServiceApi<'a> {
    pub(crate) fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    pub async fn page(&self, page: i64, page_size: i64) -> Result<ServicePage> {
        self.client
            .post(
                "/api/service/page",
                Some(&json!({ "page": page, "page_size": page_size })),
            )
            .await
    }

    /// Create when `req.id` is zero, update otherwise.
    pub async fn save(&self, req: &SaveService) -> Result<SavedService> {
        self.client.post("/api/service/save", Some(req)).await
    }

    /// A deployed service refuses deletion unless `force` also tears the
    /// deployment down.
    pub async fn delete(&self, id: i64, force: bool) -> Result<()> {
        self.client
            .post_unit("/api/service/delete", Some(&json!({ "id": id, "force": force })))
            .await
    }

    /// Kick off a deployment and follow its progress as a live event
    /// stream. Each progress line arrives through `on_message`; the
    /// backend signals completion with a `done` event. The returned
    /// handle cancels the watch, not the deployment itself.
    pub fn deploy_stream(&self, req: &DeployService, callbacks: StreamCallbacks) -> StreamHandle {
        self.client
            .stream("/api/docker/compose/deploy", Some(req.clone()), callbacks)
    }
}
