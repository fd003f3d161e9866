//! # Record Actor
//!
//! An in-process table store built on the actor model. Each table is a
//! [`ResourceActor`] running on its own Tokio task; it owns its rows outright and serves
//! requests one at a time, so no locks are involved. The rest of the application talks
//! to it through a cloneable [`ResourceClient`].
//!
//! ## Layers
//!
//! 1. **Row contract** ([`ActorEntity`]): id type, insert and update payloads, and
//!    lifecycle hooks that may reject a write with a [`ConstraintViolation`].
//! 2. **Server** ([`ResourceActor`]): sequential processing of
//!    [`ResourceRequest`]s against an ordered map.
//! 3. **Handle** ([`ResourceClient`]): async request/reply API.
//!
//! ## Context Injection
//!
//! Dependencies reach the hooks through `run(context)`, not `new()`. A child table can
//! therefore hold its parent's client and check foreign keys on insert:
//!
//! ```rust
//! use record_actor::{ActorEntity, ConstraintViolation, FrameworkError, ResourceActor, ResourceClient};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Owner { id: u64 }
//! #[derive(Debug)] struct OwnerCreate;
//! #[derive(Debug)] struct OwnerUpdate;
//!
//! #[async_trait]
//! impl ActorEntity for Owner {
//!     type Id = u64; type Create = OwnerCreate; type Update = OwnerUpdate; type Context = ();
//!     fn from_create_params(id: u64, _: OwnerCreate) -> Self { Self { id } }
//!     async fn on_update(&mut self, _: OwnerUpdate, _: &()) -> Result<(), FrameworkError> { Ok(()) }
//! }
//!
//! #[derive(Clone, Debug)] struct Pet { id: u64, owner: u64 }
//! #[derive(Debug)] struct PetCreate { owner: u64 }
//! #[derive(Debug)] struct PetUpdate;
//!
//! #[async_trait]
//! impl ActorEntity for Pet {
//!     type Id = u64; type Create = PetCreate; type Update = PetUpdate;
//!     type Context = ResourceClient<Owner>;
//!
//!     fn from_create_params(id: u64, params: PetCreate) -> Self { Self { id, owner: params.owner } }
//!
//!     async fn on_create(&mut self, owners: &ResourceClient<Owner>) -> Result<(), FrameworkError> {
//!         match owners.get(self.owner).await? {
//!             Some(_) => Ok(()),
//!             None => Err(ConstraintViolation::ForeignKey { column: "owner", value: self.owner.to_string() }.into()),
//!         }
//!     }
//!
//!     async fn on_update(&mut self, _: PetUpdate, _: &ResourceClient<Owner>) -> Result<(), FrameworkError> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (owner_actor, owners) = ResourceActor::<Owner>::new(10);
//!     let (pet_actor, pets) = ResourceActor::<Pet>::new(10);
//!     tokio::spawn(owner_actor.run(()));
//!     tokio::spawn(pet_actor.run(owners.clone()));
//!
//!     let owner = owners.create(OwnerCreate).await.unwrap();
//!     assert!(pets.create(PetCreate { owner: owner.id }).await.is_ok());
//!     assert!(matches!(
//!         pets.create(PetCreate { owner: 42 }).await,
//!         Err(FrameworkError::Constraint(ConstraintViolation::ForeignKey { .. }))
//!     ));
//! }
//! ```
//!
//! The dependency graph must stay acyclic: a table shuts down when every clone of its
//! client is gone, including the ones held in other tables' contexts.
//!
//! ## Testing
//!
//! [`mock::MockClient`] produces a real `ResourceClient` backed by scripted replies.

pub mod actor;
pub mod client;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;
pub mod tracing;

pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use entity::ActorEntity;
pub use error::{ConstraintViolation, FrameworkError};
pub use message::{Filter, ResourceRequest, Response};
