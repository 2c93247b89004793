use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::client::PanelClient;
use crate::error::Result;
use crate::models::{
    ComposeConfig, ComposeConfigRequest, Container, DockerInfo, Image, Network, Volume,
};

/// Header naming the node whose Docker daemon a call should hit; the
/// panel proxies the request to that node's agent.
const NODE_ID_HEADER: HeaderName = HeaderName::from_static("x-node-id");

/// Docker inspection and compose rendering, proxied per node.
pub struct DockerApi<'a> {
    client: &'a PanelClient,
}

impl<'a> DockerApi<'a> {
    pub(crate) fn new(client: &'a PanelClient) -> Self {
        Self { client }
    }

    fn node_headers(node_id: i64) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(NODE_ID_HEADER, HeaderValue::from(node_id));
        headers
    }

    pub async fn info(&self, node_id: i64) -> Result<DockerInfo> {
        self.client
            .post_with_headers("/api/docker/info", None::<&()>, Self::node_headers(node_id))
            .await
    }

    pub async fn containers(&self, node_id: i64) -> Result<Vec<Container>> {
        self.client
            .post_with_headers(
                "/api/docker/containers",
                None::<&()>,
                Self::node_headers(node_id),
            )
            .await
    }

    pub async fn images(&self, node_id: i64) -> Result<Vec<Image>> {
        self.client
            .post_with_headers(
                "/api/docker/images",
                None::<&()>,
                Self::node_headers(node_id),
            )
            .await
    }

    pub async fn volumes(&self, node_id: i64) -> Result<Vec<Volume>> {
        self.client
            .post_with_headers(
                "/api/docker/volumes",
                None::<&()>,
                Self::node_headers(node_id),
            )
            .await
    }

    pub async fn networks(&self, node_id: i64) -> Result<Vec<Network>> {
        self.client
            .post_with_headers(
                "/api/docker/networks",
                None::<&()>,
                Self::node_headers(node_id),
            )
            .await
    }

    /// Render a compose template against an explicit env map without
    /// touching any stored application.
    pub async fn compose_config(&self, req: &ComposeConfigRequest) -> Result<ComposeConfig> {
        self.client
            .post("/api/docker/compose/config", Some(req))
            .await
    }
}
