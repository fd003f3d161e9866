use super::absent_as;
use crate::model::{AgentId, Case, CaseDraft, CaseId, CasePatch};
use crate::store::{CaseStore, RecordStore};
use async_trait::async_trait;
use record_actor::{Filter, FrameworkError, ResourceClient};
use tracing::{debug, instrument};

/// Client for the Case actor.
///
/// Writes naming an unknown agent come back as
/// [`ConstraintViolation::ForeignKey`](record_actor::ConstraintViolation::ForeignKey).
#[derive(Clone)]
pub struct CaseClient {
    inner: ResourceClient<Case>,
}

impl CaseClient {
    pub fn new(inner: ResourceClient<Case>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl RecordStore<Case> for CaseClient {
    #[instrument(skip(self))]
    async fn find_all(&self) -> Result<Vec<Case>, FrameworkError> {
        debug!("Sending request");
        self.inner.list(None).await
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: CaseId) -> Result<Option<Case>, FrameworkError> {
        debug!("Sending request");
        self.inner.get(id).await
    }

    #[instrument(skip(self))]
    async fn create(&self, params: CaseDraft) -> Result<Case, FrameworkError> {
        debug!("Sending request");
        self.inner.create(params).await
    }

    #[instrument(skip(self))]
    async fn update(&self, id: CaseId, update: CasePatch) -> Result<Option<Case>, FrameworkError> {
        debug!("Sending request");
        absent_as(self.inner.update(id, update).await.map(Some), None)
    }

    #[instrument(skip(self))]
    async fn remove(&self, id: CaseId) -> Result<bool, FrameworkError> {
        debug!("Sending request");
        absent_as(self.inner.delete(id).await.map(|_| true), false)
    }
}

#[async_trait]
impl CaseStore for CaseClient {
    #[instrument(skip(self))]
    async fn find_by_agent(&self, agent: AgentId) -> Result<Vec<Case>, FrameworkError> {
        debug!("Sending request");
        let filter = Filter::new(move |case: &Case| case.agente_id == agent);
        self.inner.list(Some(filter)).await
    }
}
