use reqwest::header::{CONTENT_TYPE, HeaderMap};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::api::{ApplicationApi, DockerApi, EnvApi, NodeApi, ServiceApi, WorkspaceApi};
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};
use crate::models::{ApiResponse, DashboardStats};
use crate::streaming::{StreamCallbacks, StreamHandle, stream};

/// Handle to one panel backend.
///
/// Cheap to share by reference; every entity API borrows it. The HTTP
/// client carries no global timeout so streaming responses can live as
/// long as the deployment they follow; ordinary calls apply the
/// configured timeout per request.
pub struct PanelClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PanelClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;

        let http = reqwest::Client::builder()
            .build()
            .map_err(|e| ClientError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn applications(&self) -> ApplicationApi<'_> {
        ApplicationApi::new(self)
    }

    pub fn nodes(&self) -> NodeApi<'_> {
        NodeApi::new(self)
    }

    pub fn services(&self) -> ServiceApi<'_> {
        ServiceApi::new(self)
    }

    pub fn envs(&self) -> EnvApi<'_> {
        EnvApi::new(self)
    }

    pub fn workspace(&self) -> WorkspaceApi<'_> {
        WorkspaceApi::new(self)
    }

    pub fn docker(&self) -> DockerApi<'_> {
        DockerApi::new(self)
    }

    /// Counters shown on the panel landing page.
    pub async fn dashboard_stats(&self) -> Result<DashboardStats> {
        self.post_empty("/api/dashboard/stats").await
    }

    /// Liveness probe, the one GET endpoint the backend exposes.
    pub async fn health(&self) -> Result<()> {
        let url = self.config.endpoint("/healthz");
        let response = self
            .http
            .get(&url)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Status { status, body });
        }

        Ok(())
    }

    /// Open a streaming session against `path` and return its cancel
    /// handle synchronously. Failures, including connect failures, are
    /// reported through the callbacks, never from this call. Must run
    /// inside a Tokio runtime.
    pub fn stream<B>(
        &self,
        path: &str,
        body: Option<B>,
        callbacks: StreamCallbacks,
    ) -> StreamHandle
    where
        B: Serialize + Send + 'static,
    {
        let url = self.config.endpoint(path);
        stream::spawn(self.http.clone(), url, body, callbacks)
    }

    pub(crate) async fn post<T, B>(&self, path: &'static str, body: Option<&B>) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        self.post_with_headers(path, body, HeaderMap::new()).await
    }

    /// POST without a request body; several listing endpoints take none.
    pub(crate) async fn post_empty<T: DeserializeOwned>(&self, path: &'static str) -> Result<T> {
        self.post::<T, ()>(path, None).await
    }

    pub(crate) async fn post_with_headers<T, B>(
        &self,
        path: &'static str,
        body: Option<&B>,
        headers: HeaderMap,
    ) -> Result<T>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let envelope = self.exchange::<T, B>(path, body, headers).await?;
        envelope.data.ok_or(ClientError::MissingData(path))
    }

    /// POST where the caller only cares that the envelope said success.
    pub(crate) async fn post_unit<B>(&self, path: &'static str, body: Option<&B>) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        self.exchange::<serde_json::Value, B>(path, body, HeaderMap::new())
            .await?;
        Ok(())
    }

    pub(crate) async fn post_multipart(
        &self,
        path: &'static str,
        form: reqwest::multipart::Form,
    ) -> Result<()> {
        let url = self.config.endpoint(path);
        debug!(path, "multipart request");

        let response = self
            .http
            .post(&url)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .multipart(form)
            .send()
            .await?;

        Self::decode::<serde_json::Value>(response).await?;
        Ok(())
    }

    async fn exchange<T, B>(
        &self,
        path: &'static str,
        body: Option<&B>,
        headers: HeaderMap,
    ) -> Result<ApiResponse<T>>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = self.config.endpoint(path);
        debug!(path, "request");

        let mut request = self
            .http
            .post(&url)
            .timeout(Duration::from_secs(self.config.timeout_secs))
            .header(CONTENT_TYPE, "application/json")
            .headers(headers);
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        Self::decode(response).await
    }

    /// Judge the transport status, then the envelope code. The backend
    /// answers 200 for application-level failures, so both layers need
    /// checking.
    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<ApiResponse<T>> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ClientError::Status { status, body });
        }

        let envelope: ApiResponse<T> = response.json().await?;
        if !envelope.is_success() {
            return Err(ClientError::Api {
                code: envelope.code,
                message: envelope
                    .message
                    .unwrap_or_else(|| "unknown error".to_string()),
            });
        }

        Ok(envelope)
    }
}
