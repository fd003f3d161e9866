use super::{parse_id, reject_id, require_object};
use crate::clients::{AgentClient, CaseClient};
use crate::error::{RecordError, Resource};
use crate::model::{Agent, AgentId, Case, CaseId};
use crate::schema::CaseSchema;
use crate::store::{CaseStore, RecordStore};
use serde_json::Value;
use tracing::info;

/// Case use-cases. Every write naming an agent checks it first, so a missing agent is
/// a 404 rather than a store-level constraint failure.
pub struct CaseOrchestrator<C = CaseClient, A = AgentClient> {
    cases: C,
    agents: A,
    schema: CaseSchema,
}

impl<C, A> CaseOrchestrator<C, A>
where
    C: CaseStore,
    A: RecordStore<Agent>,
{
    pub fn new(cases: C, agents: A, schema: CaseSchema) -> Self {
        Self {
            cases,
            agents,
            schema,
        }
    }

    async fn require_agent(&self, id: AgentId) -> Result<(), RecordError> {
        match self.agents.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(RecordError::ReferencedAgentNotFound(id.0)),
        }
    }

    pub async fn list(&self) -> Result<Vec<Case>, RecordError> {
        Ok(self.cases.find_all().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Case, RecordError> {
        let key: CaseId = parse_id(Resource::Case, id)?;
        self.cases
            .find_by_id(key)
            .await?
            .ok_or_else(|| RecordError::not_found(Resource::Case, id))
    }

    pub async fn create(&self, body: Option<Value>) -> Result<Case, RecordError> {
        let body = require_object(body)?;
        let draft = self
            .schema
            .validate_full(&body)
            .map_err(RecordError::Validation)?;
        self.require_agent(draft.agente_id).await?;
        let case = self.cases.create(draft).await?;
        info!(id = %case.id, agente_id = %case.agente_id, "Case created");
        Ok(case)
    }

    pub async fn replace(&self, id: &str, body: Option<Value>) -> Result<Case, RecordError> {
        let body = require_object(body)?;
        reject_id(&body)?;
        let draft = self
            .schema
            .validate_full(&body)
            .map_err(RecordError::Validation)?;
        self.require_agent(draft.agente_id).await?;
        let key: CaseId = parse_id(Resource::Case, id)?;
        self.cases
            .update(key, draft.into())
            .await?
            .ok_or_else(|| RecordError::not_found(Resource::Case, id))
    }

    /// Partial update. The agent is checked only when `agente_id` is part of the patch.
    pub async fn patch(&self, id: &str, body: Option<Value>) -> Result<Case, RecordError> {
        let body = require_object(body)?;
        reject_id(&body)?;
        let patch = self
            .schema
            .validate_partial(&body)
            .map_err(RecordError::Validation)?;
        if let Some(agente_id) = patch.agente_id {
            self.require_agent(agente_id).await?;
        }
        let key: CaseId = parse_id(Resource::Case, id)?;
        self.cases
            .update(key, patch)
            .await?
            .ok_or_else(|| RecordError::not_found(Resource::Case, id))
    }

    pub async fn delete(&self, id: &str) -> Result<(), RecordError> {
        let key: CaseId = parse_id(Resource::Case, id)?;
        if !self.cases.remove(key).await? {
            return Err(RecordError::not_found(Resource::Case, id));
        }
        info!(id = %key, "Case deleted");
        Ok(())
    }
}
