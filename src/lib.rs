//! # Police Records
//!
//! HTTP backend for a police department's Agents and the Cases assigned to them.
//!
//! ## Layers
//!
//! - [`schema`]: strict full and partial validators, one pair per entity.
//! - [`orchestrator`]: the use-cases. Body checks, validation, the Agent existence
//!   check for Cases, then the store call.
//! - [`error`]: [`RecordError`](error::RecordError), the one failure type, and its
//!   mapping to HTTP responses.
//! - [`store`]: the traits orchestrators depend on. [`clients`] implements them over
//!   actor-owned tables from the `record-actor` crate.
//! - [`agent_actor`] / [`case_actor`]: the tables. The Case table checks `agente_id`
//!   against the Agent table on every write that sets it.
//! - [`lifecycle`]: spawns and stops the tables ([`RecordSystem`](lifecycle::RecordSystem)).
//! - [`http`]: the axum router.
//!
//! Rows live in memory for the life of the process.

pub mod agent_actor;
pub mod case_actor;
pub mod clients;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod model;
pub mod orchestrator;
pub mod schema;
pub mod store;
