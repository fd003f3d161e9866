//! # Record Errors
//!
//! Every failure an orchestrator can report, and the single place where each one is
//! turned into an HTTP response. The body is always `{"message": ...}`; validation
//! failures add the `errors` list.

use crate::schema::FieldError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use record_actor::{ConstraintViolation, FrameworkError};
use std::fmt::Display;
use thiserror::Error;

/// The two record kinds, named the way messages name them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Agent,
    Case,
}

impl Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resource::Agent => write!(f, "Agente"),
            Resource::Case => write!(f, "Caso"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    /// Create or update with no body, `{}` or `[]`. HTTP 400.
    #[error("Corpo da requisição não pode ser vazio.")]
    EmptyBody,

    /// Update body carries `id`. HTTP 400.
    #[error("Não é permitido alterar o campo id.")]
    ImmutableField,

    /// Body broke one or more schema rules. HTTP 400.
    #[error("Payload inválido.")]
    Validation(Vec<FieldError>),

    /// Target row does not exist. HTTP 404.
    #[error("{resource} não encontrado.")]
    NotFound { resource: Resource, id: String },

    /// A Case names an Agent that does not exist. HTTP 404.
    #[error("Agente com id {0} não encontrado.")]
    ReferencedAgentNotFound(u64),

    /// Unique constraint rejected the write. HTTP 400.
    #[error("Valor duplicado não permitido.")]
    Duplicate,

    /// Foreign key rejected the write after the pre-check passed. HTTP 400.
    #[error("Referência inválida no banco de dados.")]
    InvalidReference,

    /// Anything else. HTTP 500. The detail is logged, never returned.
    #[error("Erro interno do servidor.")]
    Internal(String),
}

impl RecordError {
    pub fn not_found(resource: Resource, id: impl Display) -> Self {
        RecordError::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            RecordError::EmptyBody
            | RecordError::ImmutableField
            | RecordError::Validation(_)
            | RecordError::Duplicate
            | RecordError::InvalidReference => StatusCode::BAD_REQUEST,
            RecordError::NotFound { .. } | RecordError::ReferencedAgentNotFound(_) => {
                StatusCode::NOT_FOUND
            }
            RecordError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<FrameworkError> for RecordError {
    fn from(err: FrameworkError) -> Self {
        match err {
            FrameworkError::Constraint(ConstraintViolation::ForeignKey { .. }) => {
                RecordError::InvalidReference
            }
            FrameworkError::Constraint(ConstraintViolation::Unique { .. }) => {
                RecordError::Duplicate
            }
            other => RecordError::Internal(other.to_string()),
        }
    }
}

impl IntoResponse for RecordError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = match &self {
            RecordError::Validation(errors) => serde_json::json!({
                "message": self.to_string(),
                "errors": errors,
            }),
            RecordError::Internal(detail) => {
                tracing::error!(error = %detail, "Internal failure");
                serde_json::json!({ "message": self.to_string() })
            }
            _ => serde_json::json!({ "message": self.to_string() }),
        };
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_code_mapping() {
        assert_eq!(RecordError::EmptyBody.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(RecordError::ImmutableField.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(RecordError::Validation(vec![]).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RecordError::not_found(Resource::Case, 9).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            RecordError::ReferencedAgentNotFound(9).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(RecordError::Duplicate.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(RecordError::InvalidReference.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            RecordError::Internal("x".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn messages() {
        assert_eq!(
            RecordError::not_found(Resource::Agent, "abc").to_string(),
            "Agente não encontrado."
        );
        assert_eq!(
            RecordError::not_found(Resource::Case, 1).to_string(),
            "Caso não encontrado."
        );
        assert_eq!(
            RecordError::ReferencedAgentNotFound(999).to_string(),
            "Agente com id 999 não encontrado."
        );
        assert_eq!(
            RecordError::Internal("db gone".into()).to_string(),
            "Erro interno do servidor."
        );
    }

    #[test]
    fn store_errors_are_tagged() {
        let fk = FrameworkError::Constraint(ConstraintViolation::ForeignKey {
            column: "agente_id",
            value: "3".into(),
        });
        let unique = FrameworkError::Constraint(ConstraintViolation::Unique {
            column: "nome",
            value: "Ana".into(),
        });

        assert_eq!(RecordError::from(fk), RecordError::InvalidReference);
        assert_eq!(RecordError::from(unique), RecordError::Duplicate);
        assert!(matches!(
            RecordError::from(FrameworkError::ActorClosed),
            RecordError::Internal(_)
        ));
    }

    #[tokio::test]
    async fn validation_response_carries_errors() {
        let err = RecordError::Validation(vec![FieldError::new(&["nome"], "ruim")]);
        let resp = err.into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["message"], "Payload inválido.");
        assert_eq!(body["errors"][0]["field"], "nome");
        assert_eq!(body["errors"][0]["message"], "ruim");
    }

    #[tokio::test]
    async fn internal_detail_stays_out_of_the_body() {
        let resp = RecordError::Internal("mailbox closed for Agent".into()).into_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"message": "Erro interno do servidor."}));
        assert!(!String::from_utf8_lossy(&bytes).contains("mailbox"));
    }

    #[tokio::test]
    async fn other_responses_have_no_errors_key() {
        let resp = RecordError::EmptyBody.into_response();
        let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body, serde_json::json!({"message": "Corpo da requisição não pode ser vazio."}));
    }
}
