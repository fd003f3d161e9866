//! # Store Seams
//!
//! The operations orchestrators need from a table, independent of how the table is
//! kept. Absence is a value here: `update` answers `None` and `remove` answers `false`
//! when the id names no row. `Err` is reserved for store failures and constraint
//! rejections.

use crate::model::{AgentId, Case};
use async_trait::async_trait;
use record_actor::{ActorEntity, FrameworkError};

#[async_trait]
pub trait RecordStore<T: ActorEntity>: Send + Sync {
    /// Every row, ascending by id.
    async fn find_all(&self) -> Result<Vec<T>, FrameworkError>;

    async fn find_by_id(&self, id: T::Id) -> Result<Option<T>, FrameworkError>;

    async fn create(&self, params: T::Create) -> Result<T, FrameworkError>;

    async fn update(&self, id: T::Id, update: T::Update) -> Result<Option<T>, FrameworkError>;

    async fn remove(&self, id: T::Id) -> Result<bool, FrameworkError>;
}

/// Case table, with the lookup by owning Agent.
#[async_trait]
pub trait CaseStore: RecordStore<Case> {
    async fn find_by_agent(&self, agent: AgentId) -> Result<Vec<Case>, FrameworkError>;
}
