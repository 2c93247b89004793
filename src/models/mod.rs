pub mod app;
pub mod compose;
pub mod docker;
pub mod env;
pub mod node;
pub mod response;
pub mod service;
pub mod stats;
pub mod workspace;

pub use app::{Application, ApplicationPage, QaFieldType, QaItem};
pub use compose::{ComposeConfig, ComposeConfigRequest};
pub use docker::{Container, DockerInfo, Image, Network, Volume};
pub use env::{EnvPage, EnvPageQuery, EnvVar, UpsertEnv};
pub use node::{CreateNode, Node, NodePage, UpdateNode};
pub use response::{ApiResponse, Metadata};
pub use service::{DeployService, SaveService, SavedService, Service, ServicePage};
pub use stats::DashboardStats;
pub use workspace::{FileContent, WorkspaceEntry, WorkspaceListing};
