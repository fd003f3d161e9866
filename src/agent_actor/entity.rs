use crate::model::{Agent, AgentDraft, AgentId, AgentPatch};
use async_trait::async_trait;
use record_actor::{ActorEntity, FrameworkError};

#[async_trait]
impl ActorEntity for Agent {
    type Id = AgentId;
    type Create = AgentDraft;
    type Update = AgentPatch;
    type Context = ();

    fn from_create_params(id: AgentId, params: AgentDraft) -> Self {
        Agent::new(id, params)
    }

    async fn on_update(&mut self, update: AgentPatch, _ctx: &()) -> Result<(), FrameworkError> {
        self.apply(update);
        Ok(())
    }
}
