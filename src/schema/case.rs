use super::rules::{non_empty_text, one_of, positive_integer};
use super::{FieldError, Fields, Mode};
use crate::model::{AgentId, CaseDraft, CasePatch};
use serde_json::{Map, Value};

const FIELDS: &[&str] = &["titulo", "descricao", "status", "agente_id"];
const STATUS_MESSAGE: &str = "O campo 'status' deve ser 'aberto' ou 'solucionado'.";
const AGENTE_ID_MESSAGE: &str = "O 'agente_id' deve ser um número inteiro positivo.";

/// Full and partial validation of Case payloads.
#[derive(Default)]
pub struct CaseSchema;

impl CaseSchema {
    pub fn new() -> Self {
        Self
    }

    pub fn validate_full(&self, body: &Map<String, Value>) -> Result<CaseDraft, Vec<FieldError>> {
        match self.parse(body, Mode::Full)? {
            CasePatch {
                titulo: Some(titulo),
                descricao: Some(descricao),
                status: Some(status),
                agente_id: Some(agente_id),
            } => Ok(CaseDraft {
                titulo,
                descricao,
                status,
                agente_id,
            }),
            _ => Err(vec![FieldError::new(&[], "Payload incompleto.")]),
        }
    }

    pub fn validate_partial(&self, body: &Map<String, Value>) -> Result<CasePatch, Vec<FieldError>> {
        self.parse(body, Mode::Partial)
    }

    fn parse(&self, body: &Map<String, Value>, mode: Mode) -> Result<CasePatch, Vec<FieldError>> {
        let mut fields = Fields::new(body, mode, FIELDS);

        let patch = CasePatch {
            titulo: fields.take("titulo", |v| non_empty_text("titulo", v)),
            descricao: fields.take("descricao", |v| non_empty_text("descricao", v)),
            status: fields.take("status", |v| one_of(v, STATUS_MESSAGE)),
            agente_id: fields
                .take("agente_id", |v| positive_integer(v, AGENTE_ID_MESSAGE))
                .map(AgentId),
        };

        let errors = fields.into_errors();
        if errors.is_empty() {
            Ok(patch)
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CaseStatus;
    use serde_json::json;

    fn object(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn full_normalizes_agente_id() {
        let draft = CaseSchema::new()
            .validate_full(&object(json!({
                "titulo": "Furto",
                "descricao": "Loja",
                "status": "aberto",
                "agente_id": "1"
            })))
            .unwrap();

        assert_eq!(draft.agente_id, AgentId(1));
        assert_eq!(draft.status, CaseStatus::Aberto);
    }

    #[test]
    fn errors_follow_declaration_order() {
        let errors = CaseSchema::new()
            .validate_full(&object(json!({
                "zzz": 0,
                "agente_id": -4,
                "titulo": "",
                "status": "fechado"
            })))
            .unwrap_err();

        assert_eq!(
            errors,
            vec![
                FieldError::new(&["titulo"], "O campo 'titulo' não pode ser vazio."),
                FieldError::new(&["descricao"], "O campo 'descricao' é obrigatório."),
                FieldError::new(&["status"], STATUS_MESSAGE),
                FieldError::new(&["agente_id"], AGENTE_ID_MESSAGE),
                FieldError::new(&["zzz"], "Campo não reconhecido: 'zzz'."),
            ]
        );
    }

    #[test]
    fn partial_validates_only_present_fields() {
        let patch = CaseSchema::new()
            .validate_partial(&object(json!({"status": "solucionado"})))
            .unwrap();
        assert_eq!(patch.status, Some(CaseStatus::Solucionado));
        assert_eq!(patch.agente_id, None);

        assert!(CaseSchema::new()
            .validate_partial(&object(json!({"descricao": 5})))
            .is_err());
    }
}
