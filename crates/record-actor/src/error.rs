//! # Store Errors
//!
//! Every failure a [`ResourceClient`](crate::ResourceClient) can report is one of the
//! variants below. Callers match on the variant; nothing downstream inspects error
//! names or strings.

/// A write rejected by an entity hook because it would break a table constraint.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstraintViolation {
    /// The row references a key that does not exist in the parent table.
    #[error("foreign key violation on {column}: {value}")]
    ForeignKey { column: &'static str, value: String },

    /// The row repeats a value that must be unique.
    #[error("unique violation on {column}: {value}")]
    Unique { column: &'static str, value: String },
}

/// Errors that can occur within the actor store itself.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FrameworkError {
    #[error("Actor closed")]
    ActorClosed,
    #[error("Actor dropped response channel")]
    ActorDropped,
    #[error("Item not found: {0}")]
    NotFound(String),
    #[error(transparent)]
    Constraint(#[from] ConstraintViolation),
}
