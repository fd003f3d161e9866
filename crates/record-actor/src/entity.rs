//! # ActorEntity Trait
//!
//! The contract every table row type implements to be owned by a [`ResourceActor`](crate::ResourceActor).
//! It names the id type, the insert and update payloads, and the context injected into
//! the lifecycle hooks.
//!
//! # Provided Methods (Hooks)
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::on_delete`]
//!
//! The defaults accept every write (`Ok(())`). Override them to enforce constraints,
//! for instance a foreign key that must resolve through another actor's client.

use crate::error::FrameworkError;
use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any row type must implement to be managed by `ResourceActor`.
///
/// # Async & Context
/// Hooks are `async` so they can consult other actors. The `Context` is handed to
/// `run()` rather than `new()`, so actors that depend on each other can be created first
/// and wired afterwards.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// Store-assigned identifier. Built from the actor's sequential counter.
    type Id: Ord + Clone + Send + Sync + Display + Debug + From<u64>;

    /// Payload for inserting a new row.
    type Create: Send + Sync + Debug;

    /// Payload for changing an existing row. Fields left out stay untouched.
    type Update: Send + Sync + Debug;

    /// Dependencies injected into the hooks. Use `()` if none.
    type Context: Send + Sync;

    /// Builds the row from its assigned id and insert payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Self;

    /// Called after the row is built and before it is stored.
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), FrameworkError> {
        Ok(())
    }

    /// Applies an update. The actor calls this on a copy and only commits on `Ok`.
    async fn on_update(
        &mut self,
        update: Self::Update,
        ctx: &Self::Context,
    ) -> Result<(), FrameworkError>;

    /// Called before the row is removed.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), FrameworkError> {
        Ok(())
    }
}
