use crate::clients::{AgentClient, CaseClient};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
#[error("Actor task failed: {0}")]
pub struct ShutdownError(#[from] tokio::task::JoinError);

/// Owns the running Agent and Case actors.
///
/// The Case actor is started with a clone of the Agent client as its context, so it can
/// resolve `agente_id` on every write. That makes the Agent table a dependency of the
/// Case table: the Agent actor only stops once the Case actor has stopped and released
/// its clone.
///
/// ```ignore
/// let system = RecordSystem::new(32);
/// let agent = system.agent_client.create(draft).await?;
/// system.shutdown().await?;
/// ```
pub struct RecordSystem {
    pub agent_client: AgentClient,
    pub case_client: CaseClient,
    handles: Vec<JoinHandle<()>>,
}

impl RecordSystem {
    /// Spawns both actors with mailboxes of `mailbox_size`. Must be called inside a
    /// Tokio runtime.
    pub fn new(mailbox_size: usize) -> Self {
        let (agent_actor, agent_client) = crate::agent_actor::new(mailbox_size);
        let (case_actor, case_client) = crate::case_actor::new(mailbox_size);

        let agent_handle = tokio::spawn(agent_actor.run(()));
        let case_handle = tokio::spawn(case_actor.run(agent_client.clone()));

        info!(mailbox_size, "Record system started");

        Self {
            agent_client,
            case_client,
            // Case first: it holds the last Agent client clone.
            handles: vec![case_handle, agent_handle],
        }
    }

    /// Drops this system's clients and waits for both actors to drain and exit.
    ///
    /// Clones handed out earlier (for instance to orchestrators) keep their actor alive,
    /// so drop those before calling this.
    pub async fn shutdown(self) -> Result<(), ShutdownError> {
        info!("Shutting down record system...");

        drop(self.case_client);
        drop(self.agent_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = %e, "Actor task failed");
                return Err(e.into());
            }
        }

        info!("Record system shutdown complete.");
        Ok(())
    }
}
