use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A deployed (or saved-but-undeployed) instance of an application on a node.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub app_id: i64,
    pub node_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, String>>,
}

/// One page of services; this endpoint reports the page index as `page`,
/// unlike the application and env listings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServicePage {
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub services: Vec<Service>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SaveService {
    /// Zero creates a new service, non-zero updates in place
    pub id: i64,
    pub name: String,
    pub app_id: i64,
    pub node_id: i64,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub qa_values: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SavedService {
    pub id: i64,
}

/// Body POSTed to the streaming deploy endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeployService {
    pub service_id: i64,
    pub app_id: i64,
    pub node_id: i64,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub qa_values: HashMap<String, String>,
}
