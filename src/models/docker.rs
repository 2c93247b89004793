use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Docker daemon summary for one node.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DockerInfo {
    pub version: String,
    pub api_version: String,
    pub os: String,
    pub arch: String,
    pub total_memory: u64,
    pub total_cpu: u64,
    pub total_disk: u64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Container {
    pub id: String,
    pub name: String,
    pub image: String,
    pub status: String,
    pub created: i64,
    #[serde(default)]
    pub ports: Vec<String>,
}

/// Image summary as the Docker Engine API reports it (PascalCase fields
/// pass through the panel untouched).
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Image {
    pub id: String,
    pub size: i64,
    pub created: i64,
    pub containers: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo_digests: Option<Vec<String>>,
    #[serde(default)]
    pub repo_tags: Vec<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Volume {
    pub name: String,
    pub created_at: String,
    #[serde(default)]
    pub size: i64,
    pub driver: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<HashMap<String, String>>,
    pub mountpoint: String,
    pub scope: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Network {
    pub id: String,
    pub name: String,
    pub created: String,
    pub scope: String,
    pub driver: String,
    #[serde(rename = "EnableIPv4", default)]
    pub enable_ipv4: bool,
    #[serde(rename = "EnableIPv6", default)]
    pub enable_ipv6: bool,
    #[serde(rename = "IPAM")]
    pub ipam: Ipam,
    pub internal: bool,
    pub attachable: bool,
    pub ingress: bool,
    #[serde(default)]
    pub containers: Vec<NetworkContainer>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Ipam {
    pub driver: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<Vec<IpamConfig>>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct IpamConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subnet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gateway: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct NetworkContainer {
    pub id: String,
    pub name: String,
}

/// Shorten a possibly `sha256:`-prefixed image id to the usual 12 hex chars.
pub fn short_image_id(id: &str) -> &str {
    if id.len() < 12 {
        return id;
    }
    if let Some(rest) = id.strip_prefix("sha256:") {
        return &rest[..rest.len().min(12)];
    }
    &id[..12]
}

pub fn short_network_id(id: &str) -> &str {
    if id.len() < 12 { id } else { &id[..12] }
}

/// Resolve the `(repository, tag)` pair to display for an image. Repo tags
/// are consulted first, then repo digests take precedence when present
/// (a digest names the repository but carries no tag).
pub fn image_repository(
    repo_digests: Option<&[String]>,
    repo_tags: Option<&[String]>,
) -> (String, String) {
    let mut repository = "<none>".to_string();
    let mut tag = "<none>".to_string();

    if let Some(tags) = repo_tags
        && let Some(first) = tags.first()
    {
        let mut parts = first.splitn(2, ':');
        repository = parts.next().unwrap_or("<none>").to_string();
        tag = parts.next().unwrap_or("<none>").to_string();
    }

    if let Some(digests) = repo_digests
        && let Some(first) = digests.first()
    {
        repository = first.split('@').next().unwrap_or("<none>").to_string();
        tag = "<none>".to_string();
    }

    (repository, tag)
}

/// Human-readable size, MB above one megabyte, KB below.
pub fn format_size(size: i64) -> String {
    if size > 1024 * 1024 {
        format!("{:.2} MB", size as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.2} KB", size as f64 / 1024.0)
    }
}
