//! Startup and shutdown of the actor-backed tables.

pub mod record_system;

pub use record_system::RecordSystem;
