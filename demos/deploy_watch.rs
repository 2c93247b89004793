use anyhow::Result;
use tokio::sync::oneshot;
use tracing_subscriber::EnvFilter;

use panel_client::models::DeployService;
use panel_client::{PanelClient, StreamCallbacks};

/// Watch a deployment live: `deploy_watch <service_id> <app_id> <node_id>`.
/// The panel address comes from PANEL_BASE_URL.
#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut args = std::env::args().skip(1);
    let service_id: i64 = args.next().unwrap_or_else(|| "1".to_string()).parse()?;
    let app_id: i64 = args.next().unwrap_or_else(|| "1".to_string()).parse()?;
    let node_id: i64 = args.next().unwrap_or_else(|| "1".to_string()).parse()?;

    let client = PanelClient::from_env()?;

    let req = DeployService {
        service_id,
        app_id,
        node_id,
        qa_values: Default::default(),
    };

    let (done_tx, done_rx) = oneshot::channel();
    let handle = client.services().deploy_stream(
        &req,
        StreamCallbacks::new()
            .on_message(|line| println!("{line}"))
            .on_error(|err| eprintln!("stream error: {err}"))
            .on_end(move || {
                let _ = done_tx.send(());
            }),
    );

    tokio::select! {
        _ = done_rx => println!("deployment finished"),
        _ = tokio::signal::ctrl_c() => {
            handle.cancel();
            println!("cancelled");
        }
    }

    Ok(())
}
