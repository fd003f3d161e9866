//! Case table: entity hooks and actor construction.
//!
//! The actor runs with the Agent client as its context and refuses any write whose
//! `agente_id` does not resolve at the time of the write. This narrows the gap left by
//! the orchestrator's own check but is not atomic: an Agent delete can still land
//! between the lookup and the insert, and deleting an Agent orphans its Cases anyway.

pub mod entity;

use crate::clients::CaseClient;
use crate::model::Case;
use record_actor::ResourceActor;

/// Creates the Case actor and its client. Start it with `actor.run(agent_client)`.
pub fn new(buffer: usize) -> (ResourceActor<Case>, CaseClient) {
    let (actor, generic_client) = ResourceActor::new(buffer);
    (actor, CaseClient::new(generic_client))
}
