//! Typed handles around [`ResourceClient`](record_actor::ResourceClient), one per table.
//! Each implements the store traits in [`crate::store`].

pub mod agent_client;
pub mod case_client;

pub use agent_client::*;
pub use case_client::*;

use record_actor::FrameworkError;

/// Folds the actor's `NotFound` into the "absent" value of a store call.
pub(crate) fn absent_as<R>(
    result: Result<R, FrameworkError>,
    absent: R,
) -> Result<R, FrameworkError> {
    match result {
        Err(FrameworkError::NotFound(_)) => Ok(absent),
        other => other,
    }
}
