use serde::{Deserialize, Serialize};

/// Counters for the panel landing page.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardStats {
    pub total_nodes: i64,
    pub total_applications: i64,
    pub total_services: i64,
}
