//! Plain data: the stored rows, their ids, and the validated insert/update payloads.

pub mod agent;
pub mod case;

pub use agent::*;
pub use case::*;
