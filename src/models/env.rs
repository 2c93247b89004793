use serde::{Deserialize, Serialize};

/// A scoped environment variable made available to compose templates.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnvVar {
    pub id: i64,
    pub key: String,
    pub value: String,
    pub scope: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metadata: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnvPageQuery {
    pub scope: String,
    pub page: i64,
    pub page_size: i64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct EnvPage {
    pub total: i64,
    pub current_page: i64,
    pub page_size: i64,
    pub list: Vec<EnvVar>,
}

/// Insert when `id` is absent, update otherwise.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpsertEnv {
    pub id: Option<i64>,
    pub key: String,
    pub value: String,
    pub scope: String,
}
