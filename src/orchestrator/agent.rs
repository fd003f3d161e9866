use super::{parse_id, reject_id, require_object};
use crate::clients::{AgentClient, CaseClient};
use crate::error::{RecordError, Resource};
use crate::model::{Agent, AgentId, Case};
use crate::schema::AgentSchema;
use crate::store::{CaseStore, RecordStore};
use serde_json::Value;
use tracing::info;

/// Agent use-cases.
pub struct AgentOrchestrator<A = AgentClient, C = CaseClient> {
    agents: A,
    cases: C,
    schema: AgentSchema,
}

impl<A, C> AgentOrchestrator<A, C>
where
    A: RecordStore<Agent>,
    C: CaseStore,
{
    pub fn new(agents: A, cases: C, schema: AgentSchema) -> Self {
        Self {
            agents,
            cases,
            schema,
        }
    }

    pub async fn list(&self) -> Result<Vec<Agent>, RecordError> {
        Ok(self.agents.find_all().await?)
    }

    pub async fn get(&self, id: &str) -> Result<Agent, RecordError> {
        let key: AgentId = parse_id(Resource::Agent, id)?;
        self.agents
            .find_by_id(key)
            .await?
            .ok_or_else(|| RecordError::not_found(Resource::Agent, id))
    }

    pub async fn create(&self, body: Option<Value>) -> Result<Agent, RecordError> {
        let body = require_object(body)?;
        let draft = self
            .schema
            .validate_full(&body)
            .map_err(RecordError::Validation)?;
        let agent = self.agents.create(draft).await?;
        info!(id = %agent.id, "Agent created");
        Ok(agent)
    }

    /// Full replace: every field required.
    pub async fn replace(&self, id: &str, body: Option<Value>) -> Result<Agent, RecordError> {
        let body = require_object(body)?;
        reject_id(&body)?;
        let draft = self
            .schema
            .validate_full(&body)
            .map_err(RecordError::Validation)?;
        let key: AgentId = parse_id(Resource::Agent, id)?;
        self.agents
            .update(key, draft.into())
            .await?
            .ok_or_else(|| RecordError::not_found(Resource::Agent, id))
    }

    pub async fn patch(&self, id: &str, body: Option<Value>) -> Result<Agent, RecordError> {
        let body = require_object(body)?;
        reject_id(&body)?;
        let patch = self
            .schema
            .validate_partial(&body)
            .map_err(RecordError::Validation)?;
        let key: AgentId = parse_id(Resource::Agent, id)?;
        self.agents
            .update(key, patch)
            .await?
            .ok_or_else(|| RecordError::not_found(Resource::Agent, id))
    }

    /// Removes the agent. Its cases are kept and keep pointing at the removed id.
    pub async fn delete(&self, id: &str) -> Result<(), RecordError> {
        let key: AgentId = parse_id(Resource::Agent, id)?;
        if !self.agents.remove(key).await? {
            return Err(RecordError::not_found(Resource::Agent, id));
        }
        info!(id = %key, "Agent deleted");
        Ok(())
    }

    pub async fn list_cases(&self, id: &str) -> Result<Vec<Case>, RecordError> {
        let agent = self.get(id).await?;
        Ok(self.cases.find_by_agent(agent.id).await?)
    }
}
