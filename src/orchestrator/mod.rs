//! # Orchestrators
//!
//! Use-cases for each table, free of HTTP types. Every write runs the same gauntlet in
//! the same order:
//!
//! 1. empty body (absent, `null`, `{}` or `[]`) is [`RecordError::EmptyBody`],
//! 2. an update body carrying `id` is [`RecordError::ImmutableField`],
//! 3. full or partial schema validation,
//! 4. for Cases, the referenced Agent must exist,
//! 5. the store call, where a missing row becomes [`RecordError::NotFound`].
//!
//! Path ids arrive as raw text. Text that is not a positive integer names no row, and
//! is reported as not found when the store would have been consulted.

pub mod agent;
pub mod case;

pub use agent::AgentOrchestrator;
pub use case::CaseOrchestrator;

use crate::error::{RecordError, Resource};
use crate::schema::FieldError;
use serde_json::{Map, Value};

/// Decodes a raw request body. Blank input is an absent body.
pub fn decode_body(bytes: &[u8]) -> Result<Option<Value>, RecordError> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    serde_json::from_slice(bytes).map(Some).map_err(|_| {
        RecordError::Validation(vec![FieldError::new(
            &[],
            "O corpo da requisição não é um JSON válido.",
        )])
    })
}

pub(crate) fn require_object(body: Option<Value>) -> Result<Map<String, Value>, RecordError> {
    match body {
        None | Some(Value::Null) => Err(RecordError::EmptyBody),
        Some(Value::Object(map)) if map.is_empty() => Err(RecordError::EmptyBody),
        Some(Value::Array(items)) if items.is_empty() => Err(RecordError::EmptyBody),
        Some(Value::Object(map)) => Ok(map),
        Some(_) => Err(RecordError::Validation(vec![FieldError::new(
            &[],
            "O corpo da requisição deve ser um objeto JSON.",
        )])),
    }
}

pub(crate) fn reject_id(body: &Map<String, Value>) -> Result<(), RecordError> {
    if body.contains_key("id") {
        return Err(RecordError::ImmutableField);
    }
    Ok(())
}

pub(crate) fn parse_id<I: From<u64>>(resource: Resource, raw: &str) -> Result<I, RecordError> {
    raw.parse::<u64>()
        .ok()
        .filter(|id| *id > 0)
        .map(I::from)
        .ok_or_else(|| RecordError::not_found(resource, raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AgentId;
    use serde_json::json;

    #[test]
    fn blank_bodies_are_absent() {
        assert_eq!(decode_body(b"").unwrap(), None);
        assert_eq!(decode_body(b"  \n").unwrap(), None);
        assert_eq!(decode_body(b"{\"a\":1}").unwrap(), Some(json!({"a": 1})));
    }

    #[test]
    fn malformed_json_is_a_root_validation_error() {
        match decode_body(b"{nope").unwrap_err() {
            RecordError::Validation(errors) => {
                assert_eq!(errors.len(), 1);
                assert_eq!(errors[0].field, "");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn empty_shapes() {
        for body in [None, Some(json!(null)), Some(json!({})), Some(json!([]))] {
            assert_eq!(require_object(body), Err(RecordError::EmptyBody));
        }
        assert!(matches!(
            require_object(Some(json!([1]))),
            Err(RecordError::Validation(_))
        ));
        assert!(matches!(
            require_object(Some(json!("x"))),
            Err(RecordError::Validation(_))
        ));
        assert!(require_object(Some(json!({"a": 1}))).is_ok());
    }

    #[test]
    fn path_ids() {
        assert_eq!(parse_id::<AgentId>(Resource::Agent, "7"), Ok(AgentId(7)));
        for raw in ["0", "-1", "abc", "1.5", ""] {
            assert_eq!(
                parse_id::<AgentId>(Resource::Agent, raw),
                Err(RecordError::not_found(Resource::Agent, raw))
            );
        }
    }
}
