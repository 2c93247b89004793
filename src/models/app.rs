use super::response::Metadata;
use serde::{Deserialize, Serialize};

/// An installable application template (a parameterized docker-compose
/// definition plus the questions asked before deployment).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Application {
    #[serde(default)]
    pub id: i64,

    /// Machine name, unique per panel
    pub name: String,

    /// Display name, falls back to `name` when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Questions answered at deploy time, substituted into the compose template
    #[serde(skip_serializing_if = "Option::is_none")]
    pub qa: Option<Vec<QaItem>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Vec<Metadata>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub docker_compose: Option<String>,
}

/// One question in an application's deploy-time questionnaire.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QaItem {
    pub name: String,

    #[serde(rename = "type")]
    pub field_type: QaFieldType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,

    /// Choices for `select` fields
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum QaFieldType {
    Text,
    Number,
    Boolean,
    Select,
    Textarea,
}

/// One page of the application catalog.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApplicationPage {
    pub total: i64,
    pub current_page: i64,
    pub page_size: i64,
    pub apps: Vec<Application>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qa_field_type_wire_names() {
        let item: QaItem = serde_json::from_str(
            r#"{"name":"port","type":"number","default_value":"8080","required":true}"#,
        )
        .unwrap();
        assert_eq!(item.field_type, QaFieldType::Number);
        assert_eq!(item.default_value.as_deref(), Some("8080"));
    }

    #[test]
    fn test_application_optional_fields_omitted() {
        let app = Application {
            id: 0,
            name: "redis".to_string(),
            display: None,
            description: None,
            version: None,
            icon: None,
            qa: None,
            metadata: None,
            docker_compose: None,
        };

        let json = serde_json::to_string(&app).unwrap();
        assert!(!json.contains("display"));
        assert!(!json.contains("docker_compose"));
    }
}
