//! Agent table: entity hooks and actor construction.

pub mod entity;

use crate::clients::AgentClient;
use crate::model::Agent;
use record_actor::ResourceActor;

/// Creates the Agent actor and its client. The actor runs with `()` as context.
pub fn new(buffer: usize) -> (ResourceActor<Agent>, AgentClient) {
    let (actor, generic_client) = ResourceActor::new(buffer);
    (actor, AgentClient::new(generic_client))
}
