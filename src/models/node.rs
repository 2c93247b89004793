use serde::{Deserialize, Serialize};

/// A managed host, either the panel machine itself (`is_local`) or a
/// remote reached over SSH with an agent listening on `agent_port`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Node {
    pub id: i64,
    pub is_local: bool,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub address: String,
    pub ssh_port: u16,
    pub agent_port: u16,
    pub ssh_user: String,
    pub ssh_password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CreateNode {
    pub name: String,
    pub address: String,
    pub ssh_port: u16,
    pub agent_port: u16,
    pub ssh_user: String,
    pub ssh_password: String,
    pub is_local: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// One page of nodes; like the service listing this endpoint reports the
/// page index as `page`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NodePage {
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub nodes: Vec<Node>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpdateNode {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub ssh_port: u16,
    pub agent_port: u16,
    pub ssh_user: String,
    pub ssh_password: String,
    pub is_local: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}
