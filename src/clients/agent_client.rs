use super::absent_as;
use crate::model::{Agent, AgentDraft, AgentId, AgentPatch};
use crate::store::RecordStore;
use async_trait::async_trait;
use record_actor::{FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for the Agent actor.
#[derive(Clone)]
pub struct AgentClient {
    inner: ResourceClient<Agent>,
}

impl AgentClient {
    pub fn new(inner: ResourceClient<Agent>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RecordStore<Agent> for AgentClient {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Agent>, FrameworkError> {
        debug!("Sending request");
        self.inner.list(None).await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: AgentId) -> Result<Option<Agent>, FrameworkError> {
        debug!("Sending request");
        self.inner.get(id).await
    }

    #[instrument(skip(self))]
    async fn create(&self, params: AgentDraft) -> Result<Agent, FrameworkError> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    #[instrument(skip(self))]
    async fn update(&self, id: AgentId, update: AgentPatch) -> Result<Option<Agent>, FrameworkError> {
        debug!("Sending request");
        absent_as(self.inner.update(id, update).await.map(Some), None)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: AgentId) -> Result<bool, FrameworkError> {
        debug!("Sending request");
        absent_as(self.inner.delete(id).await.map(|_| true), false)
    }
}
