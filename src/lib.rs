//! # Panel Client
//!
//! Async client for a self-hosted container management panel.
//!
//! ## Overview
//!
//! This library speaks the panel backend's HTTP API:
//! - **CRUD calls** over a uniform `{code, message, data}` JSON envelope
//!   (applications, nodes, services, env variables)
//! - **Workspace operations** - browse, read, write and upload files in an
//!   application's workspace
//! - **Docker inspection** - containers, images, volumes, networks per node
//! - **Streaming deploys** - deployment progress arrives as a live
//!   Server-Sent-Events feed with cooperative cancellation
//!
//! The streaming client is the heart of the crate: it decodes an unbounded
//! chunked byte stream into ordered events, survives frames split at any
//! byte boundary, and guarantees a terminal callback on every exit path.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use panel_client::{PanelClient, StreamCallbacks};
//! use panel_client::models::DeployService;
//!
//! # async fn run() -> panel_client::Result<()> {
//! let client = PanelClient::from_env()?;
//!
//! // Plain CRUD
//! let nodes = client.nodes().list().await?;
//! println!("{} nodes", nodes.len());
//!
//! // Watch a deployment
//! let req = DeployService {
//!     service_id: 1,
//!     app_id: 1,
//!     node_id: 1,
//!     qa_values: Default::default(),
//! };
//! let handle = client.services().deploy_stream(
//!     &req,
//!     StreamCallbacks::new()
//!         .on_message(|line| println!("{line}"))
//!         .on_end(|| println!("deploy finished")),
//! );
//! // handle.cancel() stops watching at any point
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading and validation
//! - [`error`] - Error types and handling
//! - [`models`] - Wire data structures for the panel API
//! - [`api`] - Per-entity operation surfaces
//! - [`streaming`] - Incremental SSE decoder and stream controller

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod streaming;

pub use client::PanelClient;
pub use config::ClientConfig;
pub use error::{ClientError, Result};
pub use streaming::{SseEvent, StreamCallbacks, StreamHandle};
