//! # Schema Validation
//!
//! Turns a raw JSON object into a typed payload, or into the list of every rule it
//! breaks. Each entity has two entry points:
//!
//! - **full**: every field required (create and full replace),
//! - **partial**: every field optional but checked when present (partial update).
//!
//! Both are strict: keys outside the schema are errors. Errors come out in field
//! declaration order, unrecognized keys last.
//!
//! The schemas hold no mutable state. [`Schemas`] is built once at startup and split
//! between the orchestrators.

pub mod agent;
pub mod case;
pub mod rules;

pub use agent::AgentSchema;
pub use case::CaseSchema;

use chrono::{Local, NaiveDate};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// One violated rule. `field` is the dotted path to the offending value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(path: &[&str], message: impl Into<String>) -> Self {
        Self {
            field: path.join("."),
            message: message.into(),
        }
    }
}

/// Which schema variant to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Full,
    Partial,
}

/// Source of the current calendar date for "not in the future" rules.
pub type Today = Arc<dyn Fn() -> NaiveDate + Send + Sync>;

/// Local calendar date of the running process.
pub fn system_today() -> Today {
    Arc::new(|| Local::now().date_naive())
}

/// Walks one JSON object against a schema, collecting typed values and errors.
pub(crate) struct Fields<'a> {
    body: &'a Map<String, Value>,
    mode: Mode,
    known: &'static [&'static str],
    errors: Vec<FieldError>,
}

impl<'a> Fields<'a> {
    pub(crate) fn new(
        body: &'a Map<String, Value>,
        mode: Mode,
        known: &'static [&'static str],
    ) -> Self {
        Self {
            body,
            mode,
            known,
            errors: Vec::new(),
        }
    }

    /// Applies `rule` to `name`. A missing field is an error only in [`Mode::Full`].
    pub(crate) fn take<T>(
        &mut self,
        name: &'static str,
        rule: impl FnOnce(&Value) -> Result<T, String>,
    ) -> Option<T> {
        match self.body.get(name) {
            Some(value) => match rule(value) {
                Ok(parsed) => Some(parsed),
                Err(message) => {
                    self.errors.push(FieldError::new(&[name], message));
                    None
                }
            },
            None => {
                if self.mode == Mode::Full {
                    self.errors.push(FieldError::new(
                        &[name],
                        format!("O campo '{}' é obrigatório.", name),
                    ));
                }
                None
            }
        }
    }

    /// Appends one error per unrecognized key and returns everything collected.
    pub(crate) fn into_errors(mut self) -> Vec<FieldError> {
        for key in self.body.keys() {
            if !self.known.contains(&key.as_str()) {
                self.errors.push(FieldError::new(
                    &[key.as_str()],
                    format!("Campo não reconhecido: '{}'.", key),
                ));
            }
        }
        self.errors
    }
}

/// Every schema the service uses, built once.
pub struct Schemas {
    pub agent: AgentSchema,
    pub case: CaseSchema,
}

impl Schemas {
    pub fn new(today: Today) -> Self {
        Self {
            agent: AgentSchema::new(today),
            case: CaseSchema::new(),
        }
    }
}

impl Default for Schemas {
    fn default() -> Self {
        Self::new(system_today())
    }
}
