use serde::{Deserialize, Serialize};

/// One entry of an application's workspace directory listing.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkspaceEntry {
    pub name: String,
    pub path: String,
    pub is_dir: bool,
    pub size: i64,
    pub mod_time: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct WorkspaceListing {
    // The backend emits this one field in camelCase.
    #[serde(rename = "currentPath")]
    pub current_path: String,
    pub entries: Vec<WorkspaceEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct FileContent {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_field_rename() {
        let listing: WorkspaceListing = serde_json::from_str(
            r#"{"currentPath":"conf","entries":[{"name":"app.toml","path":"conf/app.toml","is_dir":false,"size":120,"mod_time":"2026-01-01T00:00:00Z"}]}"#,
        )
        .unwrap();
        assert_eq!(listing.current_path, "conf");
        assert_eq!(listing.entries.len(), 1);
        assert!(!listing.entries[0].is_dir);
    }
}
