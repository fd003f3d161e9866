use crate::clients::AgentClient;
use crate::model::{AgentId, Case, CaseDraft, CaseId, CasePatch};
use crate::store::RecordStore;
use async_trait::async_trait;
use record_actor::{ActorEntity, ConstraintViolation, FrameworkError};
use tracing::warn;

async fn require_agent(agents: &AgentClient, id: AgentId) -> Result<(), FrameworkError> {
    if agents.find_by_id(id).await?.is_some() {
        return Ok(());
    }
    warn!(agente_id = %id, "Rejected case write with unknown agent");
    Err(ConstraintViolation::ForeignKey {
        column: "agente_id",
        value: id.to_string(),
    }
    .into())
}

#[async_trait]
impl ActorEntity for Case {
    type Id = CaseId;
    type Create = CaseDraft;
    type Update = CasePatch;
    type Context = AgentClient;

    fn from_create_params(id: CaseId, params: CaseDraft) -> Self {
        Case::new(id, params)
    }

    async fn on_create(&mut self, agents: &AgentClient) -> Result<(), FrameworkError> {
        require_agent(agents, self.agente_id).await
    }

    /// Re-checks the foreign key only when the update moves the case to another agent.
    async fn on_update(&mut self, update: CasePatch, agents: &AgentClient) -> Result<(), FrameworkError> {
        if let Some(agente_id) = update.agente_id {
            if agente_id != self.agente_id {
                require_agent(agents, agente_id).await?;
            }
        }
        self.apply(update);
        Ok(())
    }
}
