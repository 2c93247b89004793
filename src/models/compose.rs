use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Render a compose template with an explicit env map.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComposeConfigRequest {
    pub docker_compose: String,
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub env: HashMap<String, String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ComposeConfig {
    pub config: String,
}
