use clap::Parser;
use police_records::config::ServerConfig;
use police_records::http::{router, AppState};
use police_records::lifecycle::RecordSystem;
use police_records::orchestrator::{AgentOrchestrator, CaseOrchestrator};
use police_records::schema::Schemas;
use record_actor::tracing::setup_tracing;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();

    let config = ServerConfig::parse();
    let system = RecordSystem::new(config.mailbox_size);
    let Schemas { agent, case } = Schemas::default();

    let state = AppState::new(
        AgentOrchestrator::new(system.agent_client.clone(), system.case_client.clone(), agent),
        CaseOrchestrator::new(system.case_client.clone(), system.agent_client.clone(), case),
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    info!("Police records server listening on {}", listener.local_addr()?);

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Ctrl-C received");
        })
        .await?;

    // The router and its orchestrator clones are gone once serve returns.
    system.shutdown().await?;
    Ok(())
}
